//! Scripted engine for transport/playlist/poller tests.
//!
//! The busy flag is shared through a cloneable handle so tests can simulate
//! a track running out while the engine is owned by the transport.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{AudioEngine, EngineError};

#[derive(Clone, Default)]
pub(crate) struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub(crate) fn set(&self, busy: bool) {
        self.0.store(busy, Ordering::SeqCst);
    }

    pub(crate) fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub(crate) struct MockEngine {
    pub(crate) busy: BusyFlag,
    pub(crate) loaded: Option<PathBuf>,
    pub(crate) volume: f32,
    pub(crate) seeks: Vec<f64>,
    pub(crate) fail_next_load: bool,
    pub(crate) fail_next_play: bool,
}

impl MockEngine {
    pub(crate) fn new() -> Self {
        Self {
            busy: BusyFlag::default(),
            loaded: None,
            volume: 1.0,
            seeks: Vec::new(),
            fail_next_load: false,
            fail_next_play: false,
        }
    }
}

impl AudioEngine for MockEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        if self.fail_next_load {
            self.fail_next_load = false;
            return Err(EngineError::Backend("mock load failure".into()));
        }
        self.loaded = Some(path.to_path_buf());
        self.busy.set(false);
        Ok(())
    }

    fn play_from_start(&mut self) -> Result<(), EngineError> {
        if self.fail_next_play {
            self.fail_next_play = false;
            return Err(EngineError::Backend("mock play failure".into()));
        }
        if self.loaded.is_none() {
            return Err(EngineError::NothingLoaded);
        }
        self.busy.set(true);
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> Result<(), EngineError> {
        if self.loaded.is_none() {
            return Err(EngineError::NothingLoaded);
        }
        self.seeks.push(seconds);
        Ok(())
    }

    fn pause(&mut self) {
        self.busy.set(false);
    }

    fn resume(&mut self) {
        if self.loaded.is_some() {
            self.busy.set(true);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }
}
