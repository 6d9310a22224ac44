//! Playlist sequencing: an ordered list of track paths and a cursor.
//!
//! The playlist is populated once at startup and only the cursor moves
//! afterwards; ordering is playback order.

use std::path::PathBuf;

use crate::engine::AudioEngine;
use crate::metadata::MetadataReader;
use crate::transport::{TransportController, TransportError};

pub struct PlaylistSequencer {
    entries: Vec<PathBuf>,
    /// `None` until the first track has been started.
    current: Option<usize>,
}

impl PlaylistSequencer {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self {
            entries,
            current: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Load and start the next track. Returns `Ok(false)` at the end of the
    /// playlist, leaving everything unchanged; there is no wraparound.
    ///
    /// Increment happens before the load, but the cursor only moves once the
    /// track actually starts, so a broken entry is retried rather than
    /// silently skipped two entries at a time.
    pub fn advance<E: AudioEngine, M: MetadataReader>(
        &mut self,
        transport: &mut TransportController<E, M>,
    ) -> Result<bool, TransportError> {
        let next = self.current.map_or(0, |i| i + 1);
        let Some(path) = self.entries.get(next) else {
            return Ok(false);
        };

        transport.load(path)?;
        transport.play_from_start()?;
        tracing::info!(index = next, path = %path.display(), "advanced to next track");
        self.current = Some(next);
        Ok(true)
    }
}
