//! Theme system for the gift presentation
//! Supports both dark and light modes with one warm color palette

use iced::color;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x181311);
    pub const SURFACE: Color = color!(0x241d19);
    pub const SURFACE_ELEVATED: Color = color!(0x2e2520);
    pub const BORDER: Color = color!(0x3c322b);
    pub const TEXT_PRIMARY: Color = color!(0xfff7ee);
    pub const TEXT_SECONDARY: Color = color!(0xd8cabb);
    pub const TEXT_MUTED: Color = color!(0x9a8b7d);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfff7ee);
    pub const SURFACE: Color = color!(0xfffdf9);
    pub const SURFACE_ELEVATED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe9ddcf);
    pub const TEXT_PRIMARY: Color = color!(0x382f2a);
    pub const TEXT_SECONDARY: Color = color!(0x5f534b);
    pub const TEXT_MUTED: Color = color!(0x8a7c70);
}

/// Warm terracotta accent (same for both modes)
pub const TERRACOTTA: Color = color!(0xc77b5b);

/// Muted teal counterpart accent
pub const TEAL: Color = color!(0x6ea8a6);

/// Soft amber glow used by the ember layer and highlights
pub const AMBER_GLOW: Color = color!(0xffd6a5);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get card surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get elevated surface color (dialogs, toasts) based on theme
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Hover fill for otherwise transparent interactive rows
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.06)
    } else {
        Color::from_rgba(0.22, 0.18, 0.16, 0.06)
    }
}

/// Shadow color for floating surfaces
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.12)
    }
}

/// Base/glow hue pair for the ember layer
///
/// Dark mode draws amber embers with a terracotta halo; light mode swaps
/// the pair so the glow stays visible against the cream background.
pub fn ember_palette(dark: bool) -> (Color, Color) {
    if dark {
        (AMBER_GLOW, TERRACOTTA)
    } else {
        (TERRACOTTA, AMBER_GLOW)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Rounded content card with a soft shadow
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

/// Sticky header bar with a hairline bottom border
pub fn header_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Footer strip, inverted to deep cocoa in both modes
pub fn footer(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x120e0c)
    } else {
        light::TEXT_PRIMARY
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(light::BACKGROUND),
        ..Default::default()
    }
}

/// Small rounded tag pill with a translucent tint
pub fn tag_pill(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(Color { a: 0.18, ..tint })),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Media placeholder block (missing photo, video poster)
pub fn media_placeholder(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.05)
    } else {
        Color::from_rgba(0.22, 0.18, 0.16, 0.08)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Filled terracotta call-to-action button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => color!(0xb36a4c),
        _ => TERRACOTTA,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined secondary button
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 999.0.into(),
            width: 1.5,
            color: TERRACOTTA,
        },
        ..Default::default()
    }
}

/// Borderless text button for navigation links
pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => TERRACOTTA,
        _ => text_secondary(theme),
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Round icon button on a subtle surface
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Icon button drawn over dark modal overlays
pub fn overlay_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgba(1.0, 1.0, 1.0, 0.2)
        }
        _ => Color::from_rgba(1.0, 1.0, 1.0, 0.1),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless tile button for gallery thumbnails
pub fn tile_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::WHITE,
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Page scrollbar: thin, borderless, theme-toned
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Multi-line-looking message input
pub fn message_input(theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color {
            a: 0.35,
            ..TERRACOTTA
        },
    }
}
