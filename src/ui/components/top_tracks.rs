//! Top tracks card: ranked list with preview playback and play-count bars

use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::data::{Track, TracksData};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverFades;
use crate::ui::widgets::section_header;
use crate::ui::{components::plays_chart, theme};

const BAR_WIDTH: f32 = 80.0;

/// Build the top tracks card
pub fn view<'a>(
    tracks: &'a TracksData,
    playing_rank: Option<u32>,
    preview_error_rank: Option<u32>,
    hover: &HoverFades<u32>,
    locale: Locale,
) -> Element<'a, Message> {
    let header = section_header(
        locale.get(Key::TracksTitle),
        locale.get(Key::TracksSubtitle),
        false,
    );

    let max_plays = tracks.max_plays();

    let mut list = column![].spacing(10);
    for track in &tracks.top_tracks {
        list = list.push(track_row(track, max_plays, playing_rank, hover, locale));
    }

    if preview_error_rank.is_some() {
        list = list.push(
            container(
                text(locale.get(Key::TracksPreviewUnavailable))
                    .size(13)
                    .color(theme::TERRACOTTA),
            )
            .width(Fill)
            .center_x(Fill),
        );
    }

    let body = row![
        plays_chart::view(tracks, locale),
        Space::new().width(24),
        container(list).width(Fill),
    ]
    .align_y(Alignment::Center);

    let content = column![header, Space::new().height(20), body].width(Fill);

    container(content)
        .width(Fill)
        .padding(28)
        .style(theme::card)
        .into()
}

fn track_row<'a>(
    track: &'a Track,
    max_plays: u32,
    playing_rank: Option<u32>,
    hover: &HoverFades<u32>,
    locale: Locale,
) -> Element<'a, Message> {
    let rank = track.rank;
    let is_playing = playing_rank == Some(rank);
    let hover_progress = hover.progress(&rank);

    let rank_label = text(format!("{}", rank))
        .size(22)
        .color(theme::TERRACOTTA)
        .width(32);

    let titles = column![
        text(&track.title).size(15).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
        text(&track.artist).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
    ]
    .spacing(2)
    .width(Fill);

    // Play-count bar relative to the most-played track
    let fraction = track.plays as f32 / max_plays as f32;
    let bar_fill = container(Space::new().width(BAR_WIDTH * fraction).height(6)).style(|_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Gradient(iced::Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2))
                    .add_stop(0.0, theme::TERRACOTTA)
                    .add_stop(1.0, theme::TEAL),
            ))),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });
    let bar_track = container(bar_fill)
        .width(BAR_WIDTH)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::hover_bg(theme))),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });
    let plays = column![
        bar_track,
        text(format!(
            "{} {}",
            track.plays,
            locale.get(Key::TracksPlays)
        ))
        .size(11)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(4)
    .align_x(Alignment::End);

    let play_button = button(text(if is_playing { "⏸" } else { "▶" }).size(14))
        .padding(Padding::new(8.0).left(11.0).right(11.0))
        .style(move |theme, status| {
            if is_playing {
                theme::primary_button(theme, status)
            } else {
                theme::icon_button(theme, status)
            }
        })
        .on_press(Message::TogglePreview(rank));

    let content = row![
        rank_label,
        Space::new().width(12),
        titles,
        plays,
        Space::new().width(14),
        play_button,
    ]
    .align_y(Alignment::Center)
    .padding(10);

    let styled = container(content)
        .width(Fill)
        .style(move |theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(iced::Color {
                a: 0.4 + 0.5 * hover_progress,
                ..theme::surface_elevated(theme)
            })),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    mouse_area(styled)
        .on_enter(Message::HoverTrack(Some(rank)))
        .on_exit(Message::HoverTrack(None))
        .into()
}
