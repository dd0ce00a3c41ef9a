//! Radial play-count chart
//!
//! One spoke per track, length proportional to its play count, with the
//! rank label just past the spoke tip and a heart hub in the middle.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::{Canvas, column, container, text};
use iced::{Alignment, Color, Element, Pixels, Point, Rectangle, Renderer, Theme, mouse};

use crate::app::Message;
use crate::data::TracksData;
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::utils::format_plays;

const CHART_SIZE: f32 = 240.0;
const MAX_RADIUS: f32 = 80.0;
const LABEL_RADIUS: f32 = MAX_RADIUS + 20.0;
const HUB_RADIUS: f32 = 20.0;

struct ChartDrawer<'a> {
    tracks: &'a TracksData,
}

impl<'a> canvas::Program<Message> for ChartDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        iced_theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        let grid_color = Color {
            a: 0.12,
            ..theme::text_primary(iced_theme)
        };

        // Reference rings
        for scale in [0.25, 0.5, 0.75, 1.0] {
            let ring = Path::circle(center, MAX_RADIUS * scale);
            frame.stroke(
                &ring,
                Stroke::default().with_color(grid_color).with_width(1.0),
            );
        }

        let max_plays = self.tracks.max_plays() as f32;
        let count = self.tracks.top_tracks.len().max(1);

        for (index, track) in self.tracks.top_tracks.iter().enumerate() {
            let angle = (index as f32 / count as f32) * TAU - FRAC_PI_2;
            let radius = (track.plays as f32 / max_plays) * MAX_RADIUS;
            let tip = Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );

            // Spoke
            let spoke = Path::line(center, tip);
            frame.stroke(
                &spoke,
                Stroke::default()
                    .with_color(Color {
                        a: 0.8,
                        ..theme::TERRACOTTA
                    })
                    .with_width(8.0),
            );

            // Tip dot
            let dot = Path::circle(tip, 6.0);
            frame.fill(&dot, theme::TERRACOTTA);

            // Rank label past the tip
            let label = Text {
                content: format!("#{}", track.rank),
                position: Point::new(
                    center.x + angle.cos() * LABEL_RADIUS,
                    center.y + angle.sin() * LABEL_RADIUS,
                ),
                color: theme::text_secondary(iced_theme),
                size: Pixels(11.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            };
            frame.fill_text(label);
        }

        // Heart hub over the spokes
        let hub = Path::circle(center, HUB_RADIUS);
        frame.fill(&hub, theme::surface(iced_theme));
        frame.stroke(
            &hub,
            Stroke::default()
                .with_color(theme::TERRACOTTA)
                .with_width(2.0),
        );
        let heart = Text {
            content: "♥".to_string(),
            position: center,
            color: theme::TERRACOTTA,
            size: Pixels(16.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        };
        frame.fill_text(heart);

        vec![frame.into_geometry()]
    }
}

/// Build the chart with the total-plays figure underneath
pub fn view<'a>(tracks: &'a TracksData, locale: Locale) -> Element<'a, Message> {
    let chart = Canvas::new(ChartDrawer { tracks })
        .width(CHART_SIZE)
        .height(CHART_SIZE);

    let total_label = text(locale.get(Key::TracksTotalPlays))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let total_value = text(format_plays(tracks.total_plays()))
        .size(30)
        .color(theme::TERRACOTTA);

    let content = column![chart, total_label, total_value]
        .spacing(8)
        .align_x(Alignment::Center);

    container(content).center_x(CHART_SIZE + 60.0).into()
}
