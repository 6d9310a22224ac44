use crate::app::App;
use crate::playlist::PlaylistSequencer;

use super::Player;

/// Kick off playback of the first playlist entry, if there is one.
///
/// A failure here is not fatal: the app starts with a notice and the user
/// can retry with the next-track key.
pub fn autoplay(transport: &mut Player, sequencer: &mut PlaylistSequencer, app: &mut App) {
    if sequencer.is_empty() {
        return;
    }

    match sequencer.advance(transport) {
        Ok(true) => {}
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(error = %e, "cannot start playback");
            app.set_notice(format!("cannot start playback: {e}"));
        }
    }
}
