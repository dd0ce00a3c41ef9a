//! Audio playback for track previews

pub mod preview;

pub use preview::{PreviewError, PreviewPlayer};
