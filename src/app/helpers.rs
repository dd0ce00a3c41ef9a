//! Async startup helpers

use iced::Task;

use crate::app::message::Message;
use crate::data;

/// Kick off loading of all three fixtures concurrently
///
/// Each fixture reports independently so one broken file still leaves the
/// other sections intact.
pub fn load_fixtures() -> Task<Message> {
    Task::batch([
        Task::perform(data::load_tracks(), |result| match result {
            Ok(tracks) => Message::TracksLoaded(tracks),
            Err(e) => Message::FixtureFailed(format!("{:#}", e)),
        }),
        Task::perform(data::load_moments(), |result| match result {
            Ok(moments) => Message::MomentsLoaded(moments),
            Err(e) => Message::FixtureFailed(format!("{:#}", e)),
        }),
        Task::perform(data::load_gallery(), |result| match result {
            Ok(gallery) => Message::GalleryLoaded(gallery),
            Err(e) => Message::FixtureFailed(format!("{:#}", e)),
        }),
    ])
}
