use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::engine::RodioEngine;
use crate::metadata::LoftyReader;
use crate::playlist::PlaylistSequencer;
use crate::poller::{ProgressPoller, SharedSnapshot, SnapshotHandle};
use crate::transport::TransportController;

mod event_loop;
mod logging;
mod settings;
mod startup;

/// The concrete transport used by the running application.
pub type Player = TransportController<RodioEngine, LoftyReader>;

fn playlist_label(path: &PathBuf) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init();

    // The playlist is the ordered argument list; an empty list is valid and
    // simply means no autoplay.
    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    tracing::info!(entries = paths.len(), "starting up");

    // One engine per process: it holds the sole output-device stream and is
    // never reacquired.
    let engine = RodioEngine::new()?;
    let mut transport = Player::new(engine, LoftyReader);
    transport.set_volume(settings.audio.volume);

    let labels = paths.iter().map(playlist_label).collect();
    let mut sequencer = PlaylistSequencer::new(paths);

    let snapshot: SnapshotHandle = Arc::new(Mutex::new(None));
    let mut poller = ProgressPoller::new(
        SharedSnapshot::new(snapshot.clone()),
        Duration::from_millis(settings.poller.publish_interval_ms),
        Duration::from_millis(settings.poller.completion_interval_ms),
    );

    let mut app = App::new(labels, snapshot);
    app.show_sidebar = settings.ui.show_sidebar;

    startup::autoplay(&mut transport, &mut sequencer, &mut app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut transport,
        &mut sequencer,
        &mut poller,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
