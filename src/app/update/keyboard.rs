//! Keyboard handlers: modal dismissal and arrow navigation

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        let Message::KeyPressed(key, _modifiers) = message else {
            return None;
        };

        match key {
            Key::Named(Named::Escape) => Some(self.close_topmost()),

            Key::Named(Named::ArrowRight) => Some(self.arrow_navigate(1)),
            Key::Named(Named::ArrowLeft) => Some(self.arrow_navigate(-1)),

            _ => Some(Task::none()),
        }
    }

    /// Escape closes the topmost open overlay only
    fn close_topmost(&mut self) -> Task<Message> {
        if self.ui.lightbox.is_open() && !self.ui.lightbox.closing {
            return Task::done(Message::CloseLightbox);
        }
        if self.ui.moment_modal.selected.is_some() && !self.ui.moment_modal.closing {
            return Task::done(Message::CloseMoment);
        }
        if self.ui.message_dialog.open {
            return Task::done(Message::CloseMessageDialog);
        }
        if self.ui.highlights.open {
            return Task::done(Message::CloseHighlights);
        }
        if self.ui.theme_menu_open {
            return Task::done(Message::ToggleThemeMenu);
        }
        Task::none()
    }

    /// Arrows drive whichever cycling overlay is open
    fn arrow_navigate(&mut self, delta: i32) -> Task<Message> {
        if self.ui.lightbox.is_open() && !self.ui.lightbox.closing {
            return Task::done(Message::LightboxNavigate(delta));
        }
        if self.ui.highlights.open {
            return Task::done(Message::HighlightsNavigate(delta));
        }
        Task::none()
    }
}
