//! Highlights slideshow handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::analytics;

impl App {
    /// Handle highlights slideshow messages
    pub fn handle_highlights(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenHighlights => {
                self.ui.highlights.open = true;
                self.ui.highlights.index = 0;
                self.ui.highlights.reveal.open();
                analytics::track_interaction("hero", "play_highlights");
                Some(Task::none())
            }

            Message::CloseHighlights => {
                self.ui.highlights.open = false;
                self.ui.highlights.reveal.close();
                Some(Task::none())
            }

            Message::HighlightsTick => {
                self.advance_highlights(1);
                Some(Task::none())
            }

            Message::HighlightsNavigate(delta) => {
                self.advance_highlights(*delta);
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn advance_highlights(&mut self, delta: i32) {
        let len = self
            .content
            .gallery
            .as_ref()
            .map(|g| g.items.len())
            .unwrap_or(0);
        if len == 0 {
            return;
        }
        let index = self.ui.highlights.index as i32 + delta;
        self.ui.highlights.index = index.rem_euclid(len as i32) as usize;
    }
}
