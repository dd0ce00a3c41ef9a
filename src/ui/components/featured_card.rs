//! Featured partner card ("Artista do Mês")

use iced::widget::{Space, button, column, container, image, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::data::fixtures;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Portrait shipped with the gift data
const PORTRAIT_MEDIA: &str = "photos/partner.jpg";

const PORTRAIT_SIZE: f32 = 180.0;

/// Build the featured partner card
pub fn view<'a>(partner: &'a str, locale: Locale) -> Element<'a, Message> {
    let portrait = stack![
        container(Space::new().width(PORTRAIT_SIZE).height(PORTRAIT_SIZE)).style(|theme| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(theme::hover_bg(theme))),
                border: iced::Border {
                    radius: 999.0.into(),
                    width: 3.0,
                    color: theme::AMBER_GLOW,
                },
                ..Default::default()
            }
        }),
        image(image::Handle::from_path(fixtures::media_path(
            PORTRAIT_MEDIA
        )))
        .width(PORTRAIT_SIZE)
        .height(PORTRAIT_SIZE)
        .content_fit(iced::ContentFit::Cover),
    ];

    let badge = container(
        text(locale.get(Key::FeaturedBadge))
            .size(12)
            .color(iced::Color::WHITE),
    )
    .padding(Padding::new(5.0).left(14.0).right(14.0))
    .style(|_theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(theme::TERRACOTTA)),
        border: iced::Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let portrait_with_badge = column![portrait, badge]
        .spacing(8)
        .align_x(Alignment::End);

    let tags = row![
        tag(locale.get(Key::FeaturedTagLaughs), theme::AMBER_GLOW),
        tag(locale.get(Key::FeaturedTagCare), theme::TEAL),
        tag(locale.get(Key::FeaturedTagCompany), theme::TERRACOTTA),
    ]
    .spacing(10);

    let message_button = button(
        text(format!(
            "{} {}",
            locale.get(Key::FeaturedMessageButton),
            partner
        ))
        .size(15),
    )
    .padding(Padding::new(12.0).left(26.0).right(26.0))
    .style(theme::primary_button)
    .on_press(Message::OpenMessageDialog);

    let details = column![
        text(locale.get(Key::FeaturedKicker))
            .size(14)
            .color(theme::TEAL),
        text(partner).size(36).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
        Space::new().height(10),
        container(
            text(locale.get(Key::FeaturedBlurb))
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
        )
        .max_width(420),
        Space::new().height(16),
        tags,
        Space::new().height(20),
        message_button,
    ]
    .spacing(4);

    let body = row![portrait_with_badge, Space::new().width(36), details]
        .align_y(Alignment::Center)
        .padding(30);

    // Gradient rim around the card, the original's signature detail
    let inner = container(body).width(Fill).style(theme::card);
    container(inner)
        .width(Fill)
        .padding(2)
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_4))
                    .add_stop(0.0, theme::TERRACOTTA)
                    .add_stop(1.0, theme::TEAL),
            ))),
            border: iced::Border {
                radius: 18.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn tag<'a>(label: &'static str, tint: iced::Color) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding(Padding::new(5.0).left(12.0).right(12.0))
        .style(theme::tag_pill(tint))
        .into()
}
