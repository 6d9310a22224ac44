use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PlaybackState};
use crate::config;
use crate::playlist::PlaylistSequencer;
use crate::poller::{ProgressPoller, SharedSnapshot};
use crate::ui;

use super::Player;

/// Main terminal event loop: runs the two poller ticks, refreshes the
/// presentation model, draws the UI and handles input.
///
/// Everything runs on this one thread, so the transport has a single active
/// mutator and needs no locking; the only shared state is the snapshot
/// handle, which the poller writes and the draw call reads.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    transport: &mut Player,
    sequencer: &mut PlaylistSequencer,
    poller: &mut ProgressPoller<SharedSnapshot>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Both periodic ticks; the completion tick is the only mutator here.
        if let Err(e) = poller.poll(transport, sequencer) {
            tracing::warn!(error = %e, "auto-advance failed");
            app.set_notice(format!("cannot advance: {e}"));
        }

        sync_app(app, transport, sequencer);
        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, transport, sequencer, poller) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Refresh the presentation model from the transport and sequencer.
fn sync_app(app: &mut App, transport: &Player, sequencer: &PlaylistSequencer) {
    app.current_index = sequencer.current_index();
    app.playback = if !transport.is_loaded() {
        PlaybackState::Stopped
    } else if transport.is_paused() {
        PlaybackState::Paused
    } else {
        PlaybackState::Playing
    };
}

/// Handle one key press. Returns true when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    transport: &mut Player,
    sequencer: &mut PlaylistSequencer,
    poller: &mut ProgressPoller<SharedSnapshot>,
) -> bool {
    let skip = settings.controls.skip_seconds as f64;

    match key.code {
        KeyCode::Char('q') => {
            return true;
        }
        KeyCode::Char('b') => {
            app.toggle_sidebar();
        }
        KeyCode::Char('k') => {
            // Play/pause toggle on the loaded track.
            if transport.is_playing() {
                transport.pause();
            } else {
                transport.unpause();
            }
        }
        KeyCode::Char('j') => {
            seek_relative(app, transport, poller, -skip);
        }
        KeyCode::Char('l') => {
            seek_relative(app, transport, poller, skip);
        }
        KeyCode::Char('n') => {
            match sequencer.advance(transport) {
                Ok(true) => {
                    app.clear_notice();
                    poller.publish_position(transport);
                }
                Ok(false) => {
                    app.set_notice("end of playlist");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "manual skip failed");
                    app.set_notice(format!("cannot skip: {e}"));
                }
            }
        }
        _ => {}
    }

    false
}

/// Seek by `delta` seconds from the current position; the transport clamps
/// the target into the track. The display is refreshed right away rather
/// than waiting for the next publish tick.
fn seek_relative(
    app: &mut App,
    transport: &mut Player,
    poller: &mut ProgressPoller<SharedSnapshot>,
    delta: f64,
) {
    if !transport.is_loaded() {
        return;
    }

    let target = transport.get_pos() + delta;
    match transport.set_pos(target) {
        Ok(()) => poller.publish_position(transport),
        Err(e) => {
            tracing::warn!(error = %e, "seek failed");
            app.set_notice(format!("cannot seek: {e}"));
        }
    }
}
