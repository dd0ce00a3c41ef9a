//! The single scrollable gift page
//!
//! Hero, tracks, moments, featured card and gallery stacked vertically;
//! sections simply stay empty until their fixture arrives.

use iced::widget::{Space, column, container, scrollable};
use iced::{Element, Fill, Padding};

use crate::app::{App, Message};
use crate::ui::{components, theme};

/// Scrollable id used by the section navigation to drive scroll tasks
pub const SCROLL_ID: &str = "page_scroll";

const CONTENT_WIDTH: f32 = 860.0;
const GALLERY_WIDTH: f32 = 900.0;
const SECTION_GAP: f32 = 72.0;

/// Build the page content (header excluded; the app view stacks it on top)
pub fn view(app: &App) -> Element<'_, Message> {
    let locale = app.core.locale;
    let mut page = column![];

    // Hero
    if let Some(tracks) = &app.content.tracks {
        page = page.push(components::hero::view(
            &tracks.user,
            &tracks.partner,
            tracks.months,
            locale,
        ));
    } else {
        page = page.push(Space::new().height(320));
    }

    // Top tracks
    if let Some(tracks) = &app.content.tracks {
        page = page.push(section(
            components::top_tracks::view(
                tracks,
                app.ui.playing_rank,
                app.ui.preview_error_rank,
                &app.ui.track_hover,
                locale,
            ),
            CONTENT_WIDTH,
        ));
    }

    // Moments timeline
    if let Some(moments) = &app.content.moments {
        page = page.push(section(
            components::moments_timeline::view(&moments.moments, locale),
            CONTENT_WIDTH,
        ));
    }

    // Featured partner card
    if let Some(tracks) = &app.content.tracks {
        page = page.push(section(
            components::featured_card::view(&tracks.partner, locale),
            CONTENT_WIDTH,
        ));
    }

    // Gallery
    if let Some(gallery) = &app.content.gallery {
        page = page.push(section(
            components::gallery_grid::view(&gallery.items, &app.ui.tile_hover, locale),
            GALLERY_WIDTH,
        ));
    }

    // Footer
    let relationship = app
        .content
        .moments
        .as_ref()
        .map(|m| m.relationship.as_str())
        .unwrap_or("");
    page = page.push(Space::new().height(SECTION_GAP));
    page = page.push(components::footer::view(
        app.content.user(),
        app.content.partner(),
        relationship,
        locale,
    ));

    scrollable(page.width(Fill))
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new(SCROLL_ID))
        .on_scroll(|viewport| {
            let offset = viewport.absolute_offset();
            Message::PageScrolled(offset.y)
        })
        .style(theme::page_scrollable)
        .into()
}

fn section(content: Element<'_, Message>, width: f32) -> Element<'_, Message> {
    container(container(content).max_width(width))
        .width(Fill)
        .center_x(Fill)
        .padding(Padding::new(0.0).bottom(SECTION_GAP))
        .into()
}
