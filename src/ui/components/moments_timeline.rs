//! Moments timeline: alternating cards along a center spine

use iced::widget::{Space, button, column, container, image, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::data::{Moment, fixtures};
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::section_header;
use crate::utils::{format_date, format_short_date};

const CARD_MEDIA_HEIGHT: f32 = 190.0;

/// Build the moments timeline section
pub fn view<'a>(moments: &'a [Moment], locale: Locale) -> Element<'a, Message> {
    let header = container(section_header(
        locale.get(Key::MomentsTitle),
        locale.get(Key::MomentsSubtitle),
        true,
    ))
    .width(Fill)
    .center_x(Fill);

    let mut timeline = column![].spacing(36);
    for (index, moment) in moments.iter().enumerate() {
        timeline = timeline.push(timeline_entry(index, moment, locale));
    }

    column![header, Space::new().height(40), timeline]
        .width(Fill)
        .into()
}

/// One entry: card on the left or right of the spine, alternating
fn timeline_entry<'a>(index: usize, moment: &'a Moment, locale: Locale) -> Element<'a, Message> {
    let card = moment_card(index, moment, locale);

    let spine_dot = container(Space::new().width(14).height(14)).style(|theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::TERRACOTTA)),
            border: iced::Border {
                radius: 999.0.into(),
                width: 3.0,
                color: theme::background(theme),
            },
            ..Default::default()
        }
    });

    // Short date marker on the side the card leaves empty
    let marker = text(format_short_date(&moment.date))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let entry = if index % 2 == 0 {
        row![
            container(card).width(Fill).align_x(Alignment::End),
            container(spine_dot)
                .padding(Padding::new(0.0).left(18.0).right(18.0))
                .align_y(Alignment::Start),
            container(marker).width(Fill).align_x(Alignment::Start),
        ]
    } else {
        row![
            container(marker).width(Fill).align_x(Alignment::End),
            container(spine_dot)
                .padding(Padding::new(0.0).left(18.0).right(18.0))
                .align_y(Alignment::Start),
            container(card).width(Fill).align_x(Alignment::Start),
        ]
    };

    entry.align_y(Alignment::Start).width(Fill).into()
}

fn moment_card<'a>(index: usize, moment: &'a Moment, locale: Locale) -> Element<'a, Message> {
    let media: Element<'a, Message> = if moment.is_video() {
        // Videos render as a poster block with a play badge
        container(
            container(text("▶").size(26).color(iced::Color::WHITE))
                .padding(18)
                .style(|_theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(iced::Color {
                        a: 0.8,
                        ..theme::TERRACOTTA
                    })),
                    border: iced::Border {
                        radius: 999.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        )
        .width(Fill)
        .height(CARD_MEDIA_HEIGHT)
        .center_x(Fill)
        .center_y(CARD_MEDIA_HEIGHT)
        .style(theme::media_placeholder)
        .into()
    } else {
        let photo = image(image::Handle::from_path(fixtures::media_path(&moment.media)))
            .width(Fill)
            .height(CARD_MEDIA_HEIGHT)
            .content_fit(iced::ContentFit::Cover);
        stack![
            container(Space::new().width(Fill).height(CARD_MEDIA_HEIGHT))
                .style(theme::media_placeholder),
            photo,
        ]
        .into()
    };

    let date = text(format_date(&moment.date)).size(13).color(theme::TEAL);

    let title = text(&moment.title).size(17).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let desc = text(&moment.desc).size(13).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let see_more = row![
        text(locale.get(Key::MomentsSeeMore))
            .size(13)
            .color(theme::TERRACOTTA),
        text("›").size(15).color(theme::TERRACOTTA),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let body = column![date, title, desc, Space::new().height(6), see_more]
        .spacing(5)
        .padding(18);

    let card = container(column![media, body])
        .max_width(400)
        .style(theme::card);

    button(card)
        .padding(0)
        .style(|_theme, _status| iced::widget::button::Style::default())
        .on_press(Message::OpenMoment(index))
        .into()
}
