//! Audio engine boundary: the transport talks to the sound device through
//! the `AudioEngine` trait only.
//!
//! The real implementation (`RodioEngine`) lives in `engine::output`; tests
//! use the scripted engine in `engine::mock`.

use std::path::{Path, PathBuf};

use thiserror::Error;

mod output;

pub use output::RodioEngine;

#[cfg(test)]
pub(crate) mod mock;

/// Errors reported by an audio engine when it rejects a transport command.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no track loaded")]
    NothingLoaded,
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("{0}")]
    Backend(String),
}

/// The playback primitives the transport consumes.
///
/// Engines report no position and no completion callback; the only runtime
/// signal is the busy flag, which is true while audio is actively being
/// output (false when paused, stopped or finished).
pub trait AudioEngine {
    /// Prepare `path` for playback, replacing any previously loaded track.
    /// On failure the previously loaded track must remain playable.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Start playback of the loaded track from offset zero.
    fn play_from_start(&mut self) -> Result<(), EngineError>;

    /// Jump to the given offset (seconds), keeping the paused/playing state.
    fn seek(&mut self, seconds: f64) -> Result<(), EngineError>;

    /// Suspend audio output. No-op when nothing is playing.
    fn pause(&mut self);

    /// Resume audio output. No-op when nothing is loaded.
    fn resume(&mut self);

    /// Set the output volume, `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);

    /// True while the engine is actively outputting audio.
    fn is_busy(&self) -> bool;
}
