//! Featured-card message dialog handlers

use iced::Task;
use iced::time::Duration;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::analytics;
use crate::i18n::Key;
use crate::ui::components::message_dialog;

/// How long the copy button shows its "copied" label
const COPIED_RESET: Duration = Duration::from_secs(2);

impl App {
    /// Handle message dialog messages
    pub fn handle_message_card(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenMessageDialog => {
                self.ui.message_dialog.open = true;
                self.ui.message_dialog.copied = false;
                self.ui.message_dialog.reveal.open();
                analytics::track_interaction("featured_card", "open_message");
                Some(Task::none())
            }

            Message::CloseMessageDialog => {
                self.ui.message_dialog.open = false;
                self.ui.message_dialog.reveal.close();
                Some(Task::none())
            }

            Message::MessageChanged(text) => {
                self.ui.message_dialog.text = text.clone();
                self.ui.message_dialog.copied = false;
                Some(Task::none())
            }

            Message::CopyMessage => {
                // An untouched draft copies the default message
                let text = if self.ui.message_dialog.text.is_empty() {
                    message_dialog::default_message(self.content.partner(), self.content.user())
                } else {
                    self.ui.message_dialog.text.clone()
                };

                self.ui.message_dialog.copied = true;
                analytics::track_interaction("featured_card", "copy_message");

                Some(Task::batch([
                    iced::clipboard::write(text),
                    Task::done(Message::ShowToast(
                        self.core.locale.get(Key::ToastCopied).to_string(),
                    )),
                    Task::perform(tokio::time::sleep(COPIED_RESET), |_| Message::ResetCopied),
                ]))
            }

            Message::ResetCopied => {
                self.ui.message_dialog.copied = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
