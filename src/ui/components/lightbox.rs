//! Gallery lightbox: fullscreen viewer with wrapping navigation

use iced::mouse::Interaction;
use iced::widget::{
    Space, button, column, container, image, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::data::{GalleryItem, MediaKind, fixtures};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the lightbox overlay for the selected gallery index
pub fn view<'a>(
    items: &'a [GalleryItem],
    index: usize,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let Some(item) = items.get(index) else {
        return Space::new().width(0).height(0).into();
    };

    // Header: index readout and close button
    let counter = text(format!("{} / {}", index + 1, items.len()))
        .size(14)
        .color(Color::WHITE);

    let close_button = button(text("✕").size(16))
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(theme::overlay_icon_button)
        .on_press(Message::CloseLightbox);

    let header = row![counter, Space::new().width(Fill), close_button]
        .align_y(Alignment::Center)
        .padding(16);

    // Main media area with prev/next controls
    let media: Element<'a, Message> = if item.kind == MediaKind::Video {
        container(
            text(locale.get(Key::MomentsVideoUnavailable))
                .size(16)
                .color(Color::from_rgba(1.0, 1.0, 1.0, 0.7)),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
    } else {
        container(
            image(image::Handle::from_path(fixtures::media_path(&item.media)))
                .content_fit(iced::ContentFit::Contain),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .padding(Padding::new(0.0).left(64.0).right(64.0))
        .into()
    };

    let prev_button = button(text("‹").size(26))
        .padding(Padding::new(8.0).left(14.0).right(14.0))
        .style(theme::overlay_icon_button)
        .on_press(Message::LightboxNavigate(-1));

    let next_button = button(text("›").size(26))
        .padding(Padding::new(8.0).left(14.0).right(14.0))
        .style(theme::overlay_icon_button)
        .on_press(Message::LightboxNavigate(1));

    let controls = row![
        container(prev_button).height(Fill).center_y(Fill),
        Space::new().width(Fill),
        container(next_button).height(Fill).center_y(Fill),
    ]
    .width(Fill)
    .height(Fill)
    .padding(Padding::new(0.0).left(12.0).right(12.0));

    let viewer = stack![media, controls].width(Fill).height(Fill);

    // Footer: caption and indicator dots
    let caption = text(&item.caption)
        .size(14)
        .color(Color::from_rgba(1.0, 1.0, 1.0, 0.8));

    let mut dots = row![].spacing(6).align_y(Alignment::Center);
    for dot_index in 0..items.len() {
        dots = dots.push(dot(dot_index, index));
    }

    let footer = column![
        container(caption).width(Fill).center_x(Fill),
        Space::new().height(12),
        container(dots).width(Fill).center_x(Fill),
    ]
    .padding(16);

    let overlay = container(column![header, viewer, footer].width(Fill).height(Fill))
        .width(Fill)
        .height(Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.95 * opacity,
            ))),
            ..Default::default()
        });

    let blocker = mouse_area(overlay).interaction(Interaction::Idle);

    opaque(blocker).into()
}

fn dot<'a>(dot_index: usize, active_index: usize) -> Element<'a, Message> {
    let is_active = dot_index == active_index;
    let width = if is_active { 16.0 } else { 8.0 };

    button(Space::new().width(width).height(8))
        .padding(0)
        .style(move |_theme, status| {
            let alpha = if is_active {
                1.0
            } else if matches!(status, iced::widget::button::Status::Hovered) {
                0.5
            } else {
                0.3
            };
            iced::widget::button::Style {
                background: Some(iced::Background::Color(Color::from_rgba(
                    1.0, 1.0, 1.0, alpha,
                ))),
                border: iced::Border {
                    radius: 999.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(Message::LightboxSelect(dot_index))
        .into()
}
