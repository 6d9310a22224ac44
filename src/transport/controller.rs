//! The transport state machine.
//!
//! The engine cannot report elapsed time on demand, so the controller keeps
//! its own bookkeeping: the position at the most recent action and the
//! wall-clock instant of the most recent transition into "playing". The
//! reported position is derived from those two values and clamped to
//! `[0, duration]`; the error is bounded by the engine's seek granularity.

use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::engine::{AudioEngine, EngineError};
use crate::metadata::{LoadError, MetadataReader, Track};

/// Either failure mode of the `load` + `play_from_start` pair.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Owns one loaded track's playback state and delegates audio production to
/// the injected engine.
///
/// States: unloaded, loaded-paused, loaded-playing. `load` lands in
/// loaded-paused at position zero from any state. "Track ended" has no
/// state here; observers infer it from `is_playing() && !is_busy()`.
pub struct TransportController<E: AudioEngine, M: MetadataReader> {
    engine: E,
    metadata: M,
    loaded: Option<Track>,
    paused: bool,
    /// Position (seconds) at the most recent play/pause/seek action.
    last_action_pos: f64,
    /// Wall-clock instant of the most recent transition into "playing".
    last_start: Instant,
}

impl<E: AudioEngine, M: MetadataReader> TransportController<E, M> {
    pub fn new(engine: E, metadata: M) -> Self {
        Self {
            engine,
            metadata,
            loaded: None,
            paused: true,
            last_action_pos: 0.0,
            last_start: Instant::now(),
        }
    }

    /// Resolve metadata for `path` and hand the file to the engine, landing
    /// in loaded-paused at position zero.
    ///
    /// On failure all session state is left untouched, so a bad load never
    /// corrupts a working session.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let track = self.metadata.read(path)?;
        self.engine.load(path).map_err(|e| LoadError::Rejected {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), duration = track.duration, "track loaded");
        self.loaded = Some(track);
        self.paused = true;
        self.last_action_pos = 0.0;
        Ok(())
    }

    /// Start playback of the loaded track from offset zero.
    pub fn play_from_start(&mut self) -> Result<(), EngineError> {
        if self.loaded.is_none() {
            return Err(EngineError::NothingLoaded);
        }
        self.engine.play_from_start()?;

        self.last_action_pos = 0.0;
        self.last_start = Instant::now();
        self.paused = false;
        Ok(())
    }

    /// Seek to `seconds`, clamped to `[0, duration]`. Out-of-range input is
    /// clamped rather than rejected; the paused/playing state is kept.
    pub fn set_pos(&mut self, seconds: f64) -> Result<(), EngineError> {
        if self.loaded.is_none() {
            return Err(EngineError::NothingLoaded);
        }
        let clamped = seconds.clamp(0.0, self.get_length());
        self.engine.seek(clamped)?;

        // Resetting the start instant keeps get_pos correct whichever state
        // holds: paused reads last_action_pos, playing adds elapsed to it.
        self.last_action_pos = clamped;
        self.last_start = Instant::now();
        Ok(())
    }

    /// Current position in seconds. Pure read, no side effect.
    pub fn get_pos(&self) -> f64 {
        let Some(track) = &self.loaded else {
            return 0.0;
        };

        let raw = if self.paused {
            self.last_action_pos
        } else {
            self.last_start.elapsed().as_secs_f64() + self.last_action_pos
        };
        raw.clamp(0.0, track.duration)
    }

    /// Snapshot the position and suspend output. Idempotent.
    pub fn pause(&mut self) {
        if self.paused || self.loaded.is_none() {
            return;
        }
        self.last_action_pos = self.get_pos();
        self.paused = true;
        self.engine.pause();
    }

    /// Resume output from the snapshotted position. Idempotent.
    pub fn unpause(&mut self) {
        if !self.paused || self.loaded.is_none() {
            return;
        }
        self.last_start = Instant::now();
        self.paused = false;
        self.engine.resume();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.loaded.is_some() && !self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Forwarded engine busy flag: true while audio is actively being
    /// output. Distinguishes "paused" (not busy, by user choice) from
    /// "finished" (not busy, not paused).
    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }

    /// Display text for the loaded track, empty when nothing is loaded.
    pub fn get_info(&self) -> String {
        self.loaded.as_ref().map(Track::info).unwrap_or_default()
    }

    /// Length of the loaded track in seconds, zero when nothing is loaded.
    pub fn get_length(&self) -> f64 {
        self.loaded.as_ref().map(|t| t.duration).unwrap_or(0.0)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.engine.set_volume(volume.clamp(0.0, 1.0));
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }
}
