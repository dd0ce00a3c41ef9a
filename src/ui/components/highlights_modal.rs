//! Highlights modal: an auto-advancing slideshow of the gallery photos

use iced::mouse::Interaction;
use iced::widget::{
    Space, button, column, container, image, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::data::{GalleryItem, fixtures};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

const SLIDE_WIDTH: f32 = 760.0;
const SLIDE_HEIGHT: f32 = 460.0;

/// Build the highlights slideshow overlay
pub fn view<'a>(
    items: &'a [GalleryItem],
    index: usize,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let title = text(locale.get(Key::HighlightsTitle))
        .size(17)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let close_button = button(text("✕").size(15))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(theme::icon_button)
        .on_press(Message::CloseHighlights);

    let header = row![title, Space::new().width(Fill), close_button]
        .align_y(Alignment::Center)
        .padding(14);

    let slide: Element<'a, Message> = match items.get(index) {
        Some(item) => stack![
            container(Space::new().width(Fill).height(SLIDE_HEIGHT))
                .style(theme::media_placeholder),
            image(image::Handle::from_path(fixtures::media_path(&item.media)))
                .width(Fill)
                .height(SLIDE_HEIGHT)
                .content_fit(iced::ContentFit::Contain),
        ]
        .into(),
        None => container(Space::new().width(Fill).height(SLIDE_HEIGHT))
            .style(theme::media_placeholder)
            .into(),
    };

    let prev_button = button(text("‹").size(22))
        .padding(Padding::new(6.0).left(12.0).right(12.0))
        .style(theme::icon_button)
        .on_press(Message::HighlightsNavigate(-1));

    let next_button = button(text("›").size(22))
        .padding(Padding::new(6.0).left(12.0).right(12.0))
        .style(theme::icon_button)
        .on_press(Message::HighlightsNavigate(1));

    let counter = text(format!("{} / {}", index + 1, items.len().max(1)))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let controls = row![
        prev_button,
        Space::new().width(Fill),
        counter,
        Space::new().width(Fill),
        next_button,
    ]
    .align_y(Alignment::Center)
    .padding(14);

    let dialog = container(column![header, slide, controls].width(SLIDE_WIDTH))
        .style(move |theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity,
                ..theme::surface_elevated(theme)
            })),
            border: iced::Border {
                radius: 16.0.into(),
                width: 1.0,
                color: Color {
                    a: 0.4 * opacity,
                    ..theme::border_color(theme)
                },
            },
            ..Default::default()
        });

    let dialog = mouse_area(dialog).on_press(Message::Noop);

    let hint = text(locale.get(Key::HighlightsCloseHint))
        .size(12)
        .color(Color::from_rgba(1.0, 1.0, 1.0, 0.6 * opacity));

    let backdrop = container(
        column![
            container(dialog).width(Fill).center_x(Fill),
            Space::new().height(14),
            container(hint).width(Fill).center_x(Fill),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .height(Fill)
    .center_x(Fill)
    .center_y(Fill)
    .style(move |_theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            0.9 * opacity,
        ))),
        ..Default::default()
    });

    let blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseHighlights);

    opaque(blocker).into()
}
