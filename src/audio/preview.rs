//! Track preview player using rodio
//!
//! A deliberately small player: one output stream, one sink, one preview
//! clip at a time. Starting a preview always stops the previous one.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

/// Errors that can occur during preview playback
#[derive(Debug, Clone)]
pub enum PreviewError {
    /// No usable audio output device
    Device(String),
    /// The preview file could not be opened
    Io(String),
    /// The preview file could not be decoded
    Decode(String),
}

impl std::fmt::Display for PreviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewError::Device(e) => write!(f, "Audio device error: {}", e),
            PreviewError::Io(e) => write!(f, "Preview file error: {}", e),
            PreviewError::Decode(e) => write!(f, "Preview decode error: {}", e),
        }
    }
}

impl std::error::Error for PreviewError {}

/// One-at-a-time preview playback
///
/// The output stream must stay alive for as long as the sink plays, so it
/// is kept alongside the sink even though it is never touched again.
pub struct PreviewPlayer {
    _stream: OutputStream,
    sink: Sink,
    current: Option<u32>,
}

impl PreviewPlayer {
    /// Open the default output device
    pub fn new() -> Result<Self, PreviewError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PreviewError::Device(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            _stream: stream,
            sink,
            current: None,
        })
    }

    /// Start playing the preview for a track, replacing whatever is playing
    pub fn play(&mut self, rank: u32, path: &Path, volume: f32) -> Result<(), PreviewError> {
        self.sink.stop();
        self.current = None;

        let file = File::open(path).map_err(|e| PreviewError::Io(e.to_string()))?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|e| PreviewError::Decode(e.to_string()))?;

        self.sink.set_volume(volume.clamp(0.0, 1.0));
        self.sink.append(source);
        self.sink.play();
        self.current = Some(rank);

        tracing::debug!("Preview started for track #{}", rank);
        Ok(())
    }

    /// Stop playback
    pub fn stop(&mut self) {
        self.sink.stop();
        self.current = None;
    }

    /// Rank of the track currently playing, if any
    pub fn playing(&self) -> Option<u32> {
        self.current
    }

    /// Whether the current preview has run to its end
    ///
    /// The sink drains silently when a clip finishes; callers poll this on
    /// a timer tick to clear the play indicator.
    pub fn finished(&self) -> bool {
        self.current.is_some() && self.sink.empty()
    }

    /// Acknowledge a finished preview, clearing the current track
    pub fn clear_finished(&mut self) {
        if self.finished() {
            self.current = None;
        }
    }
}
