//! Fixture data and toast message handlers

use iced::Task;
use iced::time::Duration;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

impl App {
    /// Handle fixture results and toast notifications
    pub fn handle_data(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TracksLoaded(tracks) => {
                tracing::info!("Tracks fixture loaded: {} tracks", tracks.top_tracks.len());
                self.content.tracks = Some(tracks.clone());
                Some(Task::none())
            }

            Message::MomentsLoaded(moments) => {
                tracing::info!("Moments fixture loaded: {} moments", moments.moments.len());
                self.content.moments = Some(moments.clone());
                Some(Task::none())
            }

            Message::GalleryLoaded(gallery) => {
                tracing::info!("Gallery fixture loaded: {} items", gallery.items.len());
                self.content.gallery = Some(gallery.clone());
                Some(Task::none())
            }

            Message::FixtureFailed(error) => {
                tracing::error!("Fixture load failed: {}", error);
                Some(Task::done(Message::ShowErrorToast(
                    self.core.locale.get(Key::ToastDataError).to_string(),
                )))
            }

            Message::ShowToast(message) => {
                self.ui.toast = Some(Toast::success(message.clone()));
                Some(hide_toast_later())
            }

            Message::ShowErrorToast(message) => {
                self.ui.toast = Some(Toast::error(message.clone()));
                Some(hide_toast_later())
            }

            Message::HideToast => {
                self.ui.toast = None;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

fn hide_toast_later() -> Task<Message> {
    Task::perform(tokio::time::sleep(TOAST_DURATION), |_| Message::HideToast)
}
