//! Sticky header bar with the couple's names and section navigation

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

pub const HEADER_HEIGHT: f32 = 56.0;

/// Build the header bar
pub fn view<'a>(
    user: &'a str,
    partner: &'a str,
    active: Section,
    dark: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let names = if user.is_empty() {
        locale.get(Key::AppName).to_string()
    } else {
        format!("{} + {}", user, partner)
    };

    let brand = row![
        text("♥").size(20).color(theme::TERRACOTTA),
        text(names).size(16).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let nav = row![
        nav_link(locale.get(Key::NavTracks), Section::Tracks, active),
        nav_link(locale.get(Key::NavMoments), Section::Moments, active),
        nav_link(locale.get(Key::NavFeatured), Section::Featured, active),
        nav_link(locale.get(Key::NavGallery), Section::Gallery, active),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    // Sun in light mode, moon in dark mode
    let theme_button = button(text(if dark { "☾" } else { "☀" }).size(16))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(theme::icon_button)
        .on_press(Message::ToggleThemeMenu);

    let bar = row![
        brand,
        Space::new().width(Fill),
        nav,
        Space::new().width(16),
        theme_button,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(8.0).left(24.0).right(24.0));

    container(bar)
        .width(Fill)
        .height(HEADER_HEIGHT)
        .style(theme::header_bar)
        .into()
}

fn nav_link<'a>(label: &'static str, section: Section, active: Section) -> Element<'a, Message> {
    let is_active = section == active;

    button(text(label).size(14))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(move |theme, status| {
            let mut style = theme::link_button(theme, status);
            if is_active {
                style.text_color = theme::TERRACOTTA;
            }
            style
        })
        .on_press(Message::ScrollToSection(section))
        .into()
}
