//! Section header: bold title with a muted subtitle underneath

use iced::widget::{column, text};
use iced::{Alignment, Element};

use crate::ui::theme;

/// Build a section header
///
/// `centered` matches the original layout: the moments and gallery
/// sections center their headers, the tracks card keeps them left-aligned.
pub fn section_header<'a, Message: 'a>(
    title: &'a str,
    subtitle: &'a str,
    centered: bool,
) -> Element<'a, Message> {
    let title = text(title).size(28).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let subtitle = text(subtitle).size(15).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let mut header = column![title, subtitle].spacing(6);
    if centered {
        header = header.align_x(Alignment::Center);
    }

    header.into()
}
