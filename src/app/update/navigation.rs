//! Navigation message handlers

use iced::Task;

use crate::app::message::{Message, Section};
use crate::app::state::App;
use crate::features::analytics;
use crate::ui::pages::SCROLL_ID;

/// Approximate scroll offsets of each section on the assembled page
///
/// The layout is static apart from fixture counts, so fixed anchors are
/// enough for navigation and scroll tracking.
const SECTION_POSITIONS: [(Section, f32); 4] = [
    (Section::Tracks, 560.0),
    (Section::Moments, 1090.0),
    (Section::Featured, 2280.0),
    (Section::Gallery, 2660.0),
];

/// Get the scroll offset a section's anchor sits at
fn section_scroll_position(section: Section) -> f32 {
    SECTION_POSITIONS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, position)| *position)
        .unwrap_or(0.0)
}

/// Get the section a scroll offset falls into
fn section_from_scroll_position(y_offset: f32) -> Section {
    // Flip to a section slightly before its anchor scrolls past the top
    let search_offset = y_offset + 50.0;

    let mut current = Section::Tracks;
    for (section, position) in SECTION_POSITIONS.iter() {
        if search_offset >= *position {
            current = *section;
        } else {
            break;
        }
    }
    current
}

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::ScrollToSection(section) => {
                self.ui.active_section = *section;
                analytics::track_section_view(&format!("{:?}", section));
                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new(SCROLL_ID),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(section_scroll_position(*section)),
                    },
                ))
            }

            Message::PageScrolled(y_offset) => {
                self.ui.active_section = section_from_scroll_position(*y_offset);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip_to_their_sections() {
        for (section, position) in SECTION_POSITIONS {
            assert_eq!(section_from_scroll_position(position), section);
        }
    }

    #[test]
    fn top_of_page_maps_to_tracks() {
        assert_eq!(section_from_scroll_position(0.0), Section::Tracks);
    }

    #[test]
    fn offsets_between_anchors_map_to_the_previous_section() {
        assert_eq!(section_from_scroll_position(800.0), Section::Tracks);
        assert_eq!(section_from_scroll_position(2000.0), Section::Moments);
        assert_eq!(section_from_scroll_position(9999.0), Section::Gallery);
    }

    #[test]
    fn sections_flip_slightly_before_their_anchor() {
        let (section, position) = SECTION_POSITIONS[1];
        assert_eq!(section_from_scroll_position(position - 40.0), section);
    }
}
