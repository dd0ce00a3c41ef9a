//! Gallery grid: thumbnail tiles opening the lightbox

use iced::widget::{Space, button, column, container, image, mouse_area, row, stack, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::data::{GalleryItem, MediaKind, fixtures};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverFades;
use crate::ui::theme;
use crate::ui::widgets::section_header;

const TILE_SIZE: f32 = 118.0;
const TILES_PER_ROW: usize = 6;

/// Build the gallery card
pub fn view<'a>(
    items: &'a [GalleryItem],
    hover: &HoverFades<usize>,
    locale: Locale,
) -> Element<'a, Message> {
    let header = section_header(
        locale.get(Key::GalleryTitle),
        locale.get(Key::GallerySubtitle),
        false,
    );

    let mut grid = column![].spacing(10);
    for (row_index, chunk) in items.chunks(TILES_PER_ROW).enumerate() {
        let mut tiles = row![].spacing(10);
        for (col_index, item) in chunk.iter().enumerate() {
            let index = row_index * TILES_PER_ROW + col_index;
            tiles = tiles.push(tile(index, item, hover.progress(&index)));
        }
        grid = grid.push(tiles);
    }

    let content = column![header, Space::new().height(20), grid].width(Fill);

    container(content)
        .width(Fill)
        .padding(28)
        .style(theme::card)
        .into()
}

fn tile<'a>(index: usize, item: &'a GalleryItem, hover_progress: f32) -> Element<'a, Message> {
    let photo = image(image::Handle::from_path(fixtures::media_path(&item.media)))
        .width(TILE_SIZE)
        .height(TILE_SIZE)
        .content_fit(iced::ContentFit::Cover);

    let mut layers = stack![
        container(Space::new().width(TILE_SIZE).height(TILE_SIZE))
            .style(theme::media_placeholder),
        photo,
    ];

    if item.kind == MediaKind::Video {
        layers = layers.push(
            container(text("▶").size(22).color(iced::Color::WHITE))
                .width(TILE_SIZE)
                .height(TILE_SIZE)
                .center_x(TILE_SIZE)
                .center_y(TILE_SIZE)
                .style(|_theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(iced::Color::from_rgba(
                        0.0, 0.0, 0.0, 0.3,
                    ))),
                    ..Default::default()
                }),
        );
    }

    // Hover dims the tile towards black, like the original's gradient wash
    layers = layers.push(
        container(Space::new().width(TILE_SIZE).height(TILE_SIZE)).style(move |_theme| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(iced::Color::from_rgba(
                    0.0,
                    0.0,
                    0.0,
                    0.25 * hover_progress,
                ))),
                ..Default::default()
            }
        }),
    );

    let tile_button = button(layers)
        .padding(0)
        .style(theme::tile_button)
        .on_press(Message::OpenLightbox(index));

    mouse_area(tile_button)
        .on_enter(Message::HoverTile(Some(index)))
        .on_exit(Message::HoverTile(None))
        .into()
}
