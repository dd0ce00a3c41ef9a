//! Footer strip with names, anniversary line and section links

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the footer
pub fn view<'a>(
    user: &'a str,
    partner: &'a str,
    relationship: &'a str,
    locale: Locale,
) -> Element<'a, Message> {
    let cream = Color::from_rgb(1.0, 0.97, 0.93);

    let names = text(format!("{} + {}", user, partner)).size(19).color(cream);

    let counting = text(format!(
        "{} {}",
        relationship,
        locale.get(Key::FooterCounting)
    ))
    .size(14)
    .color(Color { a: 0.6, ..cream });

    let link = |label: &'static str, section: Section| {
        button(text(label).size(13))
            .padding(Padding::new(4.0).left(8.0).right(8.0))
            .style(|_theme, status| {
                let color = match status {
                    iced::widget::button::Status::Hovered => theme::AMBER_GLOW,
                    _ => Color::from_rgba(1.0, 0.97, 0.93, 0.6),
                };
                iced::widget::button::Style {
                    background: None,
                    text_color: color,
                    ..Default::default()
                }
            })
            .on_press(Message::ScrollToSection(section))
    };

    let links = row![
        link(locale.get(Key::NavTracks), Section::Tracks),
        link(locale.get(Key::NavMoments), Section::Moments),
        link(locale.get(Key::NavFeatured), Section::Featured),
        link(locale.get(Key::NavGallery), Section::Gallery),
    ]
    .spacing(14)
    .align_y(Alignment::Center);

    let year = chrono::Local::now().format("%Y");
    let made_with = text(format!("{} - {}", locale.get(Key::FooterMadeWith), year))
        .size(12)
        .color(Color { a: 0.4, ..cream });

    let subnote = text(locale.get(Key::FooterSubnote))
        .size(11)
        .color(Color { a: 0.3, ..cream });

    let content = column![
        text("♥").size(32).color(theme::TERRACOTTA),
        Space::new().height(10),
        names,
        counting,
        Space::new().height(18),
        links,
        Space::new().height(22),
        made_with,
        subnote,
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .center_x(Fill)
        .padding(Padding::new(48.0))
        .style(theme::footer)
        .into()
}
