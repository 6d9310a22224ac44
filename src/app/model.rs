//! Presentation model: `App` and `PlaybackState`.
//!
//! Everything here is display wiring over the transport core; the runtime
//! refreshes it once per loop iteration.

use crate::poller::SnapshotHandle;

/// The playback state as shown to the user.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

pub struct App {
    /// Playlist display labels, one per entry, in playback order.
    pub entries: Vec<String>,
    /// Index of the currently playing entry, if any.
    pub current_index: Option<usize>,
    pub playback: PlaybackState,
    /// Latest snapshot published by the progress poller.
    pub snapshot: SnapshotHandle,

    pub show_sidebar: bool,
    /// Transient user-facing message (load failures, end of playlist).
    pub notice: Option<String>,
}

impl App {
    pub fn new(entries: Vec<String>, snapshot: SnapshotHandle) -> Self {
        Self {
            entries,
            current_index: None,
            playback: PlaybackState::Stopped,
            snapshot,
            show_sidebar: false,
            notice: None,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    /// Replace the current notice; the newest message wins.
    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }
}
