//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::data::{GalleryData, MomentsData, TracksData};
use crate::features::ThemeMode;
use crate::i18n::Language;

/// Page sections reachable from the header and footer navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tracks,
    Moments,
    Featured,
    Gallery,
}

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    /// Scroll the page to a section
    ScrollToSection(Section),
    /// Page scrolled (y offset in pixels)
    PageScrolled(f32),

    // ============ Fixture data ============
    /// Tracks fixture loaded
    TracksLoaded(TracksData),
    /// Moments fixture loaded
    MomentsLoaded(MomentsData),
    /// Gallery fixture loaded
    GalleryLoaded(GalleryData),
    /// A fixture failed to load or parse
    FixtureFailed(String),

    // ============ Theme / effects ============
    /// Toggle the theme menu popup
    ToggleThemeMenu,
    /// Select a theme mode
    SetThemeMode(ThemeMode),
    /// Select the interface language
    SetLanguage(Language),
    /// Toggle the ember layer
    SetEmbersEnabled(bool),

    // ============ Ember effect ============
    /// Frame tick for the ember layer
    EffectTick,
    /// Window resized (reseeds the ember population)
    WindowResized(iced::Size),
    /// Window gained or lost visibility
    WindowVisibilityChanged(bool),

    // ============ Track previews ============
    /// Play or pause the preview for a track rank
    TogglePreview(u32),
    /// Poll tick while a preview is playing (detects clip end)
    PreviewTick,

    // ============ Highlights modal ============
    /// Open the highlights slideshow
    OpenHighlights,
    /// Close the highlights slideshow
    CloseHighlights,
    /// Auto-advance tick for the slideshow
    HighlightsTick,
    /// Manual slideshow navigation (+1 next, -1 previous)
    HighlightsNavigate(i32),

    // ============ Moments ============
    /// Open the detail modal for a moment index
    OpenMoment(usize),
    /// Close the moment detail modal
    CloseMoment,

    // ============ Message dialog ============
    /// Open the message dialog on the featured card
    OpenMessageDialog,
    /// Close the message dialog
    CloseMessageDialog,
    /// Message text edited
    MessageChanged(String),
    /// Copy the message to the clipboard
    CopyMessage,
    /// Revert the "copied" button label
    ResetCopied,

    // ============ Gallery lightbox ============
    /// Open the lightbox at a gallery index
    OpenLightbox(usize),
    /// Close the lightbox
    CloseLightbox,
    /// Cycle the lightbox (+1 next, -1 previous, wrapping)
    LightboxNavigate(i32),
    /// Jump to a gallery index from the indicator dots
    LightboxSelect(usize),

    // ============ Hover ============
    /// Hover over a track row
    HoverTrack(Option<u32>),
    /// Hover over a gallery tile
    HoverTile(Option<usize>),
    /// Animation tick for hover/reveal transitions
    AnimationTick,

    // ============ Toast ============
    /// Show a toast notification
    ShowToast(String),
    /// Show an error toast notification
    ShowErrorToast(String),
    /// Hide the toast notification
    HideToast,

    // ============ Keyboard ============
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),
}

// Manual Debug implementation keeps high-frequency tick messages and large
// fixture payloads from flooding debug output
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // High-frequency messages - keep minimal
            Self::EffectTick => write!(f, "EffectTick"),
            Self::AnimationTick => write!(f, "AnimationTick"),
            Self::PreviewTick => write!(f, "PreviewTick"),
            Self::HighlightsTick => write!(f, "HighlightsTick"),
            Self::Noop => write!(f, "Noop"),

            // Fixture payloads - only show counts
            Self::TracksLoaded(d) => write!(f, "TracksLoaded({} tracks)", d.top_tracks.len()),
            Self::MomentsLoaded(d) => write!(f, "MomentsLoaded({} moments)", d.moments.len()),
            Self::GalleryLoaded(d) => write!(f, "GalleryLoaded({} items)", d.items.len()),
            Self::FixtureFailed(e) => write!(f, "FixtureFailed({})", e),

            // Navigation
            Self::ScrollToSection(s) => write!(f, "ScrollToSection({:?})", s),
            Self::PageScrolled(y) => write!(f, "PageScrolled({:.0})", y),

            // Theme / effects
            Self::ToggleThemeMenu => write!(f, "ToggleThemeMenu"),
            Self::SetThemeMode(m) => write!(f, "SetThemeMode({:?})", m),
            Self::SetLanguage(l) => write!(f, "SetLanguage({:?})", l),
            Self::SetEmbersEnabled(b) => write!(f, "SetEmbersEnabled({})", b),
            Self::WindowResized(size) => {
                write!(f, "WindowResized({}x{})", size.width, size.height)
            }
            Self::WindowVisibilityChanged(v) => write!(f, "WindowVisibilityChanged({})", v),

            // Previews
            Self::TogglePreview(rank) => write!(f, "TogglePreview({})", rank),

            // Highlights
            Self::OpenHighlights => write!(f, "OpenHighlights"),
            Self::CloseHighlights => write!(f, "CloseHighlights"),
            Self::HighlightsNavigate(d) => write!(f, "HighlightsNavigate({})", d),

            // Moments
            Self::OpenMoment(i) => write!(f, "OpenMoment({})", i),
            Self::CloseMoment => write!(f, "CloseMoment"),

            // Message dialog
            Self::OpenMessageDialog => write!(f, "OpenMessageDialog"),
            Self::CloseMessageDialog => write!(f, "CloseMessageDialog"),
            Self::MessageChanged(_) => write!(f, "MessageChanged"),
            Self::CopyMessage => write!(f, "CopyMessage"),
            Self::ResetCopied => write!(f, "ResetCopied"),

            // Lightbox
            Self::OpenLightbox(i) => write!(f, "OpenLightbox({})", i),
            Self::CloseLightbox => write!(f, "CloseLightbox"),
            Self::LightboxNavigate(d) => write!(f, "LightboxNavigate({})", d),
            Self::LightboxSelect(i) => write!(f, "LightboxSelect({})", i),

            // Hover
            Self::HoverTrack(r) => write!(f, "HoverTrack({:?})", r),
            Self::HoverTile(i) => write!(f, "HoverTile({:?})", i),

            // Toast
            Self::ShowToast(_) => write!(f, "ShowToast"),
            Self::ShowErrorToast(_) => write!(f, "ShowErrorToast"),
            Self::HideToast => write!(f, "HideToast"),

            // Keyboard
            Self::KeyPressed(_, _) => write!(f, "KeyPressed"),
        }
    }
}
