//! Message dialog on the featured card
//!
//! An editable message with a sweet default, copyable to the clipboard.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text, text_input};
use iced::{Color, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// The default message, composed from the couple's names
pub fn default_message(partner: &str, user: &str) -> String {
    format!(
        "{partner}, você é a artista do mês, do ano e da minha vida! Obrigado por cada \
         momento, cada risada e cada \"bom dia amor\". Te amo muito! - {user}"
    )
}

/// Build the message dialog overlay
pub fn view<'a>(
    partner: &'a str,
    draft: &'a str,
    placeholder: &str,
    copied: bool,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let title = text(format!(
        "{} {}",
        locale.get(Key::MessageDialogTitle),
        partner
    ))
    .size(19)
    .style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let close_button = button(text("✕").size(15))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(theme::icon_button)
        .on_press(Message::CloseMessageDialog);

    let header = row![title, Space::new().width(Fill), close_button]
        .align_y(iced::Alignment::Center);

    let input = text_input(placeholder, draft)
        .on_input(Message::MessageChanged)
        .padding(14)
        .size(14)
        .style(theme::message_input);

    let copy_label = if copied {
        locale.get(Key::MessageCopied)
    } else {
        locale.get(Key::MessageCopy)
    };
    let copy_button = button(text(copy_label).size(14))
        .padding(Padding::new(10.0).left(22.0).right(22.0))
        .style(theme::secondary_button)
        .on_press(Message::CopyMessage);

    let dialog_content = column![
        header,
        Space::new().height(16),
        text(locale.get(Key::MessageInputLabel))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().height(6),
        input,
        Space::new().height(16),
        container(copy_button).width(Fill).center_x(Fill),
    ]
    .width(460)
    .padding(24);

    let dialog = container(dialog_content).style(move |theme| iced::widget::container::Style {
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
                0.6 * opacity,
            ))),
            ..Default::default()
        });

    let blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseMessageDialog);

    opaque(blocker).into()
}
