use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use super::TransportController;
use crate::engine::EngineError;
use crate::engine::mock::MockEngine;
use crate::metadata::mock::StubReader;

const TRACK_LEN: f64 = 300.0;

fn player() -> TransportController<MockEngine, StubReader> {
    TransportController::new(MockEngine::new(), StubReader::new(TRACK_LEN))
}

#[test]
fn load_lands_paused_at_zero() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();

    assert!(t.is_loaded());
    assert!(t.is_paused());
    assert!(!t.is_playing());
    assert_eq!(t.get_pos(), 0.0);
    assert_eq!(t.get_length(), TRACK_LEN);
    assert_eq!(t.get_info(), "one");
}

#[test]
fn unloaded_transport_reports_nothing() {
    let t = player();
    assert!(!t.is_loaded());
    assert_eq!(t.get_pos(), 0.0);
    assert_eq!(t.get_length(), 0.0);
    assert_eq!(t.get_info(), "");
}

#[test]
fn seek_is_exact_while_paused() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();

    t.set_pos(123.5).unwrap();
    assert_eq!(t.get_pos(), 123.5);

    // Paused position must not drift with wall-clock time.
    sleep(Duration::from_millis(30));
    assert_eq!(t.get_pos(), 123.5);
}

#[test]
fn seek_clamps_out_of_range_without_error() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();

    t.set_pos(-5.0).unwrap();
    assert_eq!(t.get_pos(), 0.0);

    t.set_pos(TRACK_LEN + 100.0).unwrap();
    assert_eq!(t.get_pos(), TRACK_LEN);

    // The engine saw the clamped offsets, not the raw input.
    assert_eq!(t.engine().seeks, vec![0.0, TRACK_LEN]);
}

#[test]
fn position_advances_monotonically_while_playing() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();
    t.play_from_start().unwrap();

    let p0 = t.get_pos();
    sleep(Duration::from_millis(40));
    let p1 = t.get_pos();
    sleep(Duration::from_millis(40));
    let p2 = t.get_pos();

    assert!(p1 >= p0);
    assert!(p2 >= p1);
    assert!(p1 >= 0.04, "expected ~40ms elapsed, got {p1}");
    assert!(p2 < 5.0, "runaway position {p2}");
}

#[test]
fn position_never_exceeds_duration() {
    let mut t = TransportController::new(MockEngine::new(), StubReader::new(0.05));
    t.load(Path::new("/music/short.mp3")).unwrap();
    t.play_from_start().unwrap();

    sleep(Duration::from_millis(100));
    assert_eq!(t.get_pos(), 0.05);
}

#[test]
fn pause_freezes_and_unpause_continues() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();
    t.play_from_start().unwrap();

    sleep(Duration::from_millis(30));
    t.pause();
    let frozen = t.get_pos();
    assert!(frozen > 0.0);

    // An arbitrarily long pause must not move the position.
    sleep(Duration::from_millis(60));
    assert_eq!(t.get_pos(), frozen);

    t.unpause();
    let resumed = t.get_pos();
    assert!(resumed >= frozen);
    assert!(resumed - frozen < 0.05, "position jumped across the pause");
}

#[test]
fn pause_and_unpause_are_idempotent() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();
    t.play_from_start().unwrap();

    t.pause();
    let frozen = t.get_pos();
    t.pause();
    assert_eq!(t.get_pos(), frozen);
    assert!(t.is_paused());

    t.unpause();
    t.unpause();
    assert!(t.is_playing());
}

#[test]
fn play_without_load_fails_and_changes_nothing() {
    let mut t = player();
    let err = t.play_from_start().unwrap_err();
    assert!(matches!(err, EngineError::NothingLoaded));
    assert!(t.is_paused());
    assert!(!t.is_loaded());
}

#[test]
fn seek_without_load_fails() {
    let mut t = player();
    assert!(t.set_pos(10.0).is_err());
}

#[test]
fn failed_load_keeps_previous_session() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();
    t.set_pos(42.0).unwrap();

    assert!(t.load(Path::new("/music/broken.mp3")).is_err());

    assert_eq!(t.get_info(), "one");
    assert_eq!(t.get_pos(), 42.0);
    assert!(t.is_paused());
}

#[test]
fn engine_rejection_at_load_surfaces_as_load_error() {
    // Metadata resolves but the engine rejects the file.
    let mut engine = MockEngine::new();
    engine.fail_next_load = true;
    let mut t = TransportController::new(engine, StubReader::new(TRACK_LEN));

    let err = t.load(Path::new("/music/one.mp3")).unwrap_err();
    assert!(matches!(err, crate::metadata::LoadError::Rejected { .. }));
    assert!(!t.is_loaded());
}

#[test]
fn seek_while_playing_continues_from_new_point() {
    let mut t = player();
    t.load(Path::new("/music/one.mp3")).unwrap();
    t.play_from_start().unwrap();

    t.set_pos(50.0).unwrap();
    let p = t.get_pos();
    assert!(p >= 50.0);
    assert!(p < 50.1);
    assert!(t.is_playing());
}

#[test]
fn finished_track_reads_playing_but_not_busy() {
    let engine = MockEngine::new();
    let busy = engine.busy.clone();
    let mut t = TransportController::new(engine, StubReader::new(TRACK_LEN));

    t.load(Path::new("/music/one.mp3")).unwrap();
    t.play_from_start().unwrap();
    assert!(t.is_busy());

    // Natural end: the engine runs dry without any pause() call.
    busy.set(false);
    assert!(t.is_playing());
    assert!(!t.is_busy());
}

#[test]
fn volume_is_forwarded_clamped() {
    let mut t = player();
    t.set_volume(1.5);
    assert_eq!(t.engine().volume, 1.0);
    t.set_volume(0.5);
    assert_eq!(t.engine().volume, 0.5);
}
