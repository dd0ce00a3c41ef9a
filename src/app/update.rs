//! Message update handlers - thin dispatcher delegating to submodules

mod data;
mod effects;
mod gallery;
mod highlights;
mod keyboard;
mod message_card;
mod navigation;
mod preview;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_data(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_effects(&message) {
            return task;
        }
        if let Some(task) = self.handle_preview(&message) {
            return task;
        }
        if let Some(task) = self.handle_highlights(&message) {
            return task;
        }
        if let Some(task) = self.handle_gallery(&message) {
            return task;
        }
        if let Some(task) = self.handle_message_card(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
