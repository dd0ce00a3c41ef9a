//! Gallery lightbox and moment modal handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::analytics;

impl App {
    /// Handle lightbox and moment modal messages
    pub fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenLightbox(index) => {
                let len = self.gallery_len();
                if *index < len {
                    self.ui.lightbox.selected = Some(*index);
                    self.ui.lightbox.closing = false;
                    self.ui.lightbox.reveal.open();
                    analytics::track_interaction("gallery", "open_lightbox");
                }
                Some(Task::none())
            }

            Message::CloseLightbox => {
                self.ui.lightbox.closing = true;
                self.ui.lightbox.reveal.close();
                Some(Task::none())
            }

            Message::LightboxNavigate(delta) => {
                let len = self.gallery_len();
                self.ui.lightbox.navigate(*delta, len);
                Some(Task::none())
            }

            Message::LightboxSelect(index) => {
                if self.ui.lightbox.is_open() && *index < self.gallery_len() {
                    self.ui.lightbox.selected = Some(*index);
                }
                Some(Task::none())
            }

            Message::OpenMoment(index) => {
                let len = self
                    .content
                    .moments
                    .as_ref()
                    .map(|m| m.moments.len())
                    .unwrap_or(0);
                if *index < len {
                    self.ui.moment_modal.selected = Some(*index);
                    self.ui.moment_modal.closing = false;
                    self.ui.moment_modal.reveal.open();
                    analytics::track_interaction("moments", "open_detail");
                }
                Some(Task::none())
            }

            Message::CloseMoment => {
                self.ui.moment_modal.closing = true;
                self.ui.moment_modal.reveal.close();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn gallery_len(&self) -> usize {
        self.content
            .gallery
            .as_ref()
            .map(|g| g.items.len())
            .unwrap_or(0)
    }
}
