//! Periodic transport observation: position publishing and end-of-track
//! detection.
//!
//! The engine exposes no completion callback, so the poller watches the busy
//! flag at a bounded interval instead. The completion interval (~100 ms)
//! bounds the user-visible gap between tracks; the publish interval (~1 s)
//! is purely cosmetic. Both are tunables, not correctness constraints.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::engine::AudioEngine;
use crate::metadata::MetadataReader;
use crate::playlist::PlaylistSequencer;
use crate::transport::{TransportController, TransportError};

/// What the display layer gets to see, refreshed once per publish tick.
#[derive(Debug, Clone)]
pub struct PlaybackSnapshot {
    pub position: f64,
    pub length: f64,
    pub info: String,
}

/// Fire-and-forget sink for playback snapshots.
pub trait DisplaySink {
    fn publish(&mut self, snapshot: PlaybackSnapshot);
}

pub type SnapshotHandle = Arc<Mutex<Option<PlaybackSnapshot>>>;

/// Sink that stores the latest snapshot behind a shared handle the UI reads.
pub struct SharedSnapshot(SnapshotHandle);

impl SharedSnapshot {
    pub fn new(handle: SnapshotHandle) -> Self {
        Self(handle)
    }
}

impl DisplaySink for SharedSnapshot {
    fn publish(&mut self, snapshot: PlaybackSnapshot) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(snapshot);
        }
    }
}

pub struct ProgressPoller<S: DisplaySink> {
    sink: S,
    publish_every: Duration,
    completion_every: Duration,
    last_publish: Option<Instant>,
    last_completion: Option<Instant>,
}

impl<S: DisplaySink> ProgressPoller<S> {
    pub fn new(sink: S, publish_every: Duration, completion_every: Duration) -> Self {
        Self {
            sink,
            publish_every,
            completion_every,
            last_publish: None,
            last_completion: None,
        }
    }

    /// Run whichever ticks are due. Ordering between the two is immaterial:
    /// the publish tick only reads state.
    pub fn poll<E: AudioEngine, M: MetadataReader>(
        &mut self,
        transport: &mut TransportController<E, M>,
        sequencer: &mut PlaylistSequencer,
    ) -> Result<(), TransportError> {
        let now = Instant::now();
        let result = if due(&mut self.last_completion, self.completion_every, now) {
            self.check_completion(transport, sequencer)
        } else {
            Ok(())
        };

        if due(&mut self.last_publish, self.publish_every, now) {
            self.publish_position(transport);
        }

        result
    }

    /// Completion-detect tick. `loaded && !paused && !busy` is the single
    /// authoritative definition of "track finished naturally": it cannot
    /// hold while the user has paused, and it cannot hold before anything
    /// was loaded.
    pub fn check_completion<E: AudioEngine, M: MetadataReader>(
        &mut self,
        transport: &mut TransportController<E, M>,
        sequencer: &mut PlaylistSequencer,
    ) -> Result<(), TransportError> {
        if !(transport.is_loaded() && !transport.is_paused() && !transport.is_busy()) {
            return Ok(());
        }

        tracing::debug!("track finished, advancing");
        match sequencer.advance(transport) {
            Ok(true) => Ok(()),
            Ok(false) => {
                // End of playlist: freeze the position instead of re-firing
                // on every tick.
                tracing::info!("playlist exhausted, playback stops");
                transport.pause();
                Ok(())
            }
            Err(e) => {
                // A broken next track must not be retried at tick rate; the
                // cursor stays put so nothing is skipped.
                transport.pause();
                Err(e)
            }
        }
    }

    /// Position-publish tick. No-op while nothing is loaded.
    pub fn publish_position<E: AudioEngine, M: MetadataReader>(
        &mut self,
        transport: &TransportController<E, M>,
    ) {
        if !transport.is_loaded() {
            return;
        }
        self.sink.publish(PlaybackSnapshot {
            position: transport.get_pos(),
            length: transport.get_length(),
            info: transport.get_info(),
        });
    }
}

fn due(last: &mut Option<Instant>, every: Duration, now: Instant) -> bool {
    match last {
        Some(t) if now.duration_since(*t) < every => false,
        _ => {
            *last = Some(now);
            true
        }
    }
}
