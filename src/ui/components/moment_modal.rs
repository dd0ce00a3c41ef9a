//! Moment detail modal

use iced::widget::{Space, button, column, container, image, mouse_area, opaque, stack, text};
use iced::mouse::Interaction;
use iced::{Color, Element, Fill, Padding};

use crate::app::Message;
use crate::data::{Moment, fixtures};
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::utils::format_date;

const MEDIA_HEIGHT: f32 = 320.0;

/// Build the moment detail overlay
///
/// `opacity` comes from the reveal animation so the dialog fades with its
/// backdrop.
pub fn view<'a>(moment: &'a Moment, opacity: f32, locale: Locale) -> Element<'a, Message> {
    let media: Element<'a, Message> = if moment.is_video() {
        // No video decode in the gift; show the unavailable notice instead
        container(
            text(locale.get(Key::MomentsVideoUnavailable))
                .size(15)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .width(Fill)
        .height(MEDIA_HEIGHT)
        .center_x(Fill)
        .center_y(MEDIA_HEIGHT)
        .style(theme::media_placeholder)
        .into()
    } else {
        stack![
            container(Space::new().width(Fill).height(MEDIA_HEIGHT))
                .style(theme::media_placeholder),
            image(image::Handle::from_path(fixtures::media_path(&moment.media)))
                .width(Fill)
                .height(MEDIA_HEIGHT)
                .content_fit(iced::ContentFit::Contain),
        ]
        .into()
    };

    let close_button = button(text("✕").size(15))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(theme::icon_button)
        .on_press(Message::CloseMoment);

    let body = column![
        text(format_date(&moment.date)).size(13).color(theme::TEAL),
        text(&moment.title).size(24).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
        Space::new().height(8),
        text(&moment.desc).size(15).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
    ]
    .spacing(6)
    .padding(24);

    let header = container(close_button)
        .width(Fill)
        .align_x(iced::Alignment::End)
        .padding(10);

    let dialog = container(column![header, media, body])
        .max_width(620)
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

    // Dialog clicks must not bubble into the backdrop close handler
    let dialog = mouse_area(dialog).on_press(Message::Noop);

    let backdrop = container(dialog)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.8 * opacity,
            ))),
            ..Default::default()
        });

    let blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseMoment);

    opaque(blocker).into()
}
