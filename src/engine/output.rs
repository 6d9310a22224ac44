//! The `rodio`-backed engine.
//!
//! Seeking works by rebuilding the sink with `Source::skip_duration`; rodio
//! exposes no position query on a live sink, which is why the transport
//! keeps its own position bookkeeping.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::{AudioEngine, EngineError};

/// Audio output via the default rodio device.
///
/// Only one `RodioEngine` may exist per process: it owns the output-device
/// stream, and the device cannot host two simultaneous outputs. Construct it
/// once at startup and pass it into the transport.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    volume: f32,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::NoOutputDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            path: None,
            volume: 1.0,
        })
    }

    /// Build a paused sink for `path` starting at `start_at`.
    fn build_sink(&self, path: &Path, start_at: Duration) -> Result<Sink, EngineError> {
        let file = File::open(path).map_err(|e| EngineError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| EngineError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?
            // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
            .skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        Ok(sink)
    }

    fn swap_sink(&mut self, new_sink: Sink) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(new_sink);
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        // Build the replacement sink first so a bad file leaves the current
        // track playable.
        let sink = self.build_sink(path, Duration::ZERO)?;
        self.swap_sink(sink);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    fn play_from_start(&mut self) -> Result<(), EngineError> {
        let Some(path) = self.path.clone() else {
            return Err(EngineError::NothingLoaded);
        };

        let sink = self.build_sink(&path, Duration::ZERO)?;
        sink.play();
        self.swap_sink(sink);
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> Result<(), EngineError> {
        let Some(path) = self.path.clone() else {
            return Err(EngineError::NothingLoaded);
        };

        let was_paused = self.sink.as_ref().map(Sink::is_paused).unwrap_or(true);
        let sink = self.build_sink(&path, Duration::from_secs_f64(seconds.max(0.0)))?;
        if !was_paused {
            sink.play();
        }
        self.swap_sink(sink);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(s) = &self.sink {
            s.set_volume(self.volume);
        }
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.empty() && !s.is_paused())
            .unwrap_or(false)
    }
}
