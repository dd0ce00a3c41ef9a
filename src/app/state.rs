//! Application state definitions

use std::time::Instant;

use crate::app::message::Section;
use crate::audio::PreviewPlayer;
use crate::data::{GalleryData, MomentsData, TracksData};
use crate::features::Settings;
use crate::i18n::Locale;
use crate::ui::animation::{HoverFades, Reveal};
use crate::ui::effects::{EmberCounts, EmberField, Environment};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale, audio, environment)
    pub core: CoreState,
    /// Fixture content (tracks, moments, gallery)
    pub content: ContentState,
    /// UI state (modals, animations, ember field)
    pub ui: UiState,
}

/// Core infrastructure and services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Preview player; `None` when no audio device is available
    pub preview: Option<PreviewPlayer>,
    /// Sampled environment signals for the ember gate
    pub environment: Environment,
    /// System theme resolved once at startup (used by `ThemeMode::System`)
    pub system_dark: bool,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let preview = match PreviewPlayer::new() {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::warn!("No preview playback available: {}", e);
                None
            }
        };

        let environment = Environment {
            reduced_motion: settings.effects.reduce_motion,
            data_saver: settings.effects.data_saver,
            ..Environment::default()
        };

        Self {
            settings,
            locale,
            preview,
            environment,
            system_dark: true,
        }
    }

    /// Whether the ember layer may animate right now
    pub fn embers_allowed(&self) -> bool {
        self.environment
            .allows_animation(self.settings.effects.embers_enabled)
    }
}

/// Fixture content, loaded once at startup
#[derive(Default)]
pub struct ContentState {
    pub tracks: Option<TracksData>,
    pub moments: Option<MomentsData>,
    pub gallery: Option<GalleryData>,
}

impl ContentState {
    /// The gift giver's name, blank until the tracks fixture loads
    pub fn user(&self) -> &str {
        self.tracks.as_ref().map(|t| t.user.as_str()).unwrap_or("")
    }

    /// The partner's name, blank until the tracks fixture loads
    pub fn partner(&self) -> &str {
        self.tracks
            .as_ref()
            .map(|t| t.partner.as_str())
            .unwrap_or("")
    }
}

/// Highlights slideshow modal state
#[derive(Default)]
pub struct HighlightsState {
    pub open: bool,
    pub index: usize,
    pub reveal: Reveal,
}

/// Moment detail modal state
///
/// `selected` stays set while the close fade plays out; the animation tick
/// clears it once the reveal has fully faded so the invisible overlay
/// cannot keep swallowing clicks.
#[derive(Default)]
pub struct MomentModalState {
    pub selected: Option<usize>,
    pub closing: bool,
    pub reveal: Reveal,
}

/// Featured-card message dialog state
#[derive(Default)]
pub struct MessageDialogState {
    pub open: bool,
    pub text: String,
    /// Whether the copy button currently shows its "copied" label
    pub copied: bool,
    pub reveal: Reveal,
}

/// Gallery lightbox state
///
/// Three states: closed (`selected == None`), open, and navigating;
/// navigation wraps around in both directions.
#[derive(Default)]
pub struct LightboxState {
    pub selected: Option<usize>,
    pub closing: bool,
    pub reveal: Reveal,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Cycle by `delta` (+1 or -1) within `len` items, wrapping
    pub fn navigate(&mut self, delta: i32, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(index) = self.selected {
            let len = len as i32;
            let next = (index as i32 + delta).rem_euclid(len);
            self.selected = Some(next as usize);
        }
    }
}

/// UI view state
pub struct UiState {
    pub active_section: Section,

    // Ember layer
    pub ember_field: EmberField,
    pub ember_counts: EmberCounts,
    /// Instant of the previous effect tick, for frame-delta integration
    pub last_effect_tick: Option<Instant>,

    // Chrome
    pub theme_menu_open: bool,
    pub toast: Option<Toast>,

    // Preview playback (mirrors the player for the view layer)
    pub playing_rank: Option<u32>,
    pub preview_error_rank: Option<u32>,

    // Hover transitions
    pub track_hover: HoverFades<u32>,
    pub tile_hover: HoverFades<usize>,

    // Modals
    pub highlights: HighlightsState,
    pub moment_modal: MomentModalState,
    pub message_dialog: MessageDialogState,
    pub lightbox: LightboxState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_section: Section::Tracks,
            ember_field: EmberField::new(),
            ember_counts: EmberCounts::default(),
            last_effect_tick: None,
            theme_menu_open: false,
            toast: None,
            playing_rank: None,
            preview_error_rank: None,
            track_hover: HoverFades::new(),
            tile_hover: HoverFades::new(),
            highlights: HighlightsState::default(),
            moment_modal: MomentModalState::default(),
            message_dialog: MessageDialogState::default(),
            lightbox: LightboxState::default(),
        }
    }

    /// Check if any hover or reveal transition is currently in flight
    pub fn has_active_animations(&self) -> bool {
        self.track_hover.is_animating()
            || self.tile_hover.is_animating()
            || self.highlights.reveal.is_animating()
            || self.moment_modal.reveal.is_animating()
            || self.message_dialog.reveal.is_animating()
            || self.lightbox.reveal.is_animating()
    }

    /// Drop finished fade-outs; called on animation ticks
    pub fn cleanup_animations(&mut self) {
        self.track_hover.cleanup_completed();
        self.tile_hover.cleanup_completed();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_navigation_wraps_both_ways() {
        let mut lightbox = LightboxState {
            selected: Some(0),
            ..Default::default()
        };

        lightbox.navigate(-1, 6);
        assert_eq!(lightbox.selected, Some(5));

        lightbox.navigate(1, 6);
        assert_eq!(lightbox.selected, Some(0));

        lightbox.navigate(1, 6);
        assert_eq!(lightbox.selected, Some(1));
    }

    #[test]
    fn lightbox_navigation_ignores_empty_galleries() {
        let mut lightbox = LightboxState {
            selected: Some(2),
            ..Default::default()
        };
        lightbox.navigate(1, 0);
        assert_eq!(lightbox.selected, Some(2));
    }

    #[test]
    fn closed_lightbox_stays_closed_on_navigation() {
        let mut lightbox = LightboxState::default();
        lightbox.navigate(1, 6);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn content_names_are_blank_before_fixtures_arrive() {
        let content = ContentState::default();
        assert_eq!(content.user(), "");
        assert_eq!(content.partner(), "");
    }
}
