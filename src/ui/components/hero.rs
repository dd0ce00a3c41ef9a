//! Hero section: the big "N months of us" opener

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the hero section
pub fn view<'a>(
    user: &'a str,
    partner: &'a str,
    months: u32,
    locale: Locale,
) -> Element<'a, Message> {
    // Heart emblem in a warm ring
    let emblem = container(text("♥").size(44).color(theme::TERRACOTTA))
        .padding(28)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::surface(theme))),
            border: iced::Border {
                radius: 999.0.into(),
                width: 3.0,
                color: theme::AMBER_GLOW,
            },
            ..Default::default()
        });

    let title = text(format!("{} {}", months, locale.get(Key::HeroMonthsOfUs)))
        .size(52)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let couple = text(format!("{} ♥ {}", user, partner))
        .size(26)
        .color(theme::TERRACOTTA);

    let tagline = text(locale.get(Key::HeroTagline))
        .size(17)
        .align_x(Alignment::Center)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let see_wrapped = button(text(locale.get(Key::HeroSeeWrapped)).size(15))
        .padding(Padding::new(12.0).left(28.0).right(28.0))
        .style(theme::primary_button)
        .on_press(Message::ScrollToSection(Section::Tracks));

    let play_highlights = button(text(locale.get(Key::HeroPlayHighlights)).size(15))
        .padding(Padding::new(12.0).left(28.0).right(28.0))
        .style(theme::secondary_button)
        .on_press(Message::OpenHighlights);

    let buttons = row![see_wrapped, play_highlights]
        .spacing(16)
        .align_y(Alignment::Center);

    let content = column![
        emblem,
        title,
        couple,
        container(tagline).width(460),
        buttons,
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .center_x(Fill)
        .padding(Padding::new(72.0).top(88.0))
        .into()
}
