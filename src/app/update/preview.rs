//! Track preview playback handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::data::fixtures;
use crate::features::analytics;
use crate::i18n::Key;

impl App {
    /// Handle preview playback messages
    pub fn handle_preview(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TogglePreview(rank) => Some(self.toggle_preview(*rank)),

            Message::PreviewTick => {
                // The sink drains silently at clip end; clear the indicator
                if let Some(player) = &mut self.core.preview
                    && player.finished()
                {
                    player.clear_finished();
                    self.ui.playing_rank = None;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn toggle_preview(&mut self, rank: u32) -> Task<Message> {
        // Pressing the playing track pauses it
        if self.ui.playing_rank == Some(rank) {
            if let Some(player) = &mut self.core.preview {
                player.stop();
            }
            self.ui.playing_rank = None;
            return Task::none();
        }

        let Some(track) = self
            .content
            .tracks
            .as_ref()
            .and_then(|t| t.top_tracks.iter().find(|track| track.rank == rank))
        else {
            return Task::none();
        };

        let path = fixtures::media_path(&track.preview);
        let volume = self.core.settings.playback.preview_volume;
        analytics::track_interaction("top_tracks", &format!("preview_{}", rank));

        let Some(player) = self.core.preview.as_mut() else {
            self.ui.preview_error_rank = Some(rank);
            return unavailable_toast(self);
        };

        match player.play(rank, &path, volume) {
            Ok(()) => {
                self.ui.playing_rank = Some(rank);
                self.ui.preview_error_rank = None;
                Task::none()
            }
            Err(e) => {
                tracing::warn!("Preview failed for track #{}: {}", rank, e);
                self.ui.playing_rank = None;
                self.ui.preview_error_rank = Some(rank);
                unavailable_toast(self)
            }
        }
    }
}

fn unavailable_toast(app: &App) -> Task<Message> {
    Task::done(Message::ShowErrorToast(
        app.core
            .locale
            .get(Key::ToastPreviewUnavailable)
            .to_string(),
    ))
}
