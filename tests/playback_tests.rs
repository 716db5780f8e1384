// Integration tests for the playback controller

use algoviz::playback::{PlaybackController, Speed};
use algoviz::step::{StepKind, StepRecorder, StepSequence};
use std::time::Instant;

fn sequence(n: usize) -> StepSequence {
    let mut rec = StepRecorder::new();
    for i in 0..n {
        rec.push_plain(StepKind::Visit, format!("step {}", i));
    }
    rec.finish()
}

#[test]
fn cursor_starts_cleared_and_walks_the_bounds() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(3));
    assert_eq!(pb.position(), None);
    assert!(!pb.step_backward());

    assert!(pb.step_forward());
    assert!(pb.step_forward());
    assert!(pb.step_forward());
    assert_eq!(pb.position(), Some(2));
    assert!(pb.at_end());
    assert!(!pb.step_forward());
    assert_eq!(pb.position(), Some(2));

    // Stepping back off step 0 clears the overlay rather than failing
    assert!(pb.step_backward());
    assert!(pb.step_backward());
    assert!(pb.step_backward());
    assert_eq!(pb.position(), None);
    assert!(pb.current_step().is_none());
}

#[test]
fn scrubbing_back_and_forth_is_idempotent() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(5));
    pb.step_forward();
    pb.step_forward();
    let before = pb.current_step().expect("step").description.clone();

    pb.step_backward();
    pb.step_forward();
    let after = pb.current_step().expect("step").description.clone();
    assert_eq!(before, after);
    assert_eq!(pb.position(), Some(1));
}

#[test]
fn loading_a_new_sequence_stops_playback_and_rewinds() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(4));
    pb.play();
    pb.step_forward();
    assert!(pb.is_playing());

    pb.load(sequence(2));
    assert!(!pb.is_playing());
    assert_eq!(pb.position(), None);
    assert_eq!(pb.len(), 2);
}

#[test]
fn play_advances_immediately_then_paces_by_the_period() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(3));
    pb.play();

    // The tick origin is backdated, so the first tick advances at once
    let now = Instant::now();
    assert!(pb.tick(now));
    assert_eq!(pb.position(), Some(0));

    // Within the same period nothing moves
    assert!(!pb.tick(now));
    assert!(!pb.tick(now + Speed::Normal.period() / 2));
    assert_eq!(pb.position(), Some(0));

    // A full period later the cursor moves again
    assert!(pb.tick(now + Speed::Normal.period()));
    assert_eq!(pb.position(), Some(1));
}

#[test]
fn reaching_the_last_step_stops_playback() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(2));
    pb.play();

    let now = Instant::now();
    assert!(pb.tick(now));
    assert!(pb.tick(now + Speed::Normal.period()));
    assert!(pb.at_end());
    assert!(!pb.is_playing());
}

#[test]
fn play_at_the_end_restarts_from_the_beginning() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(2));
    pb.step_forward();
    pb.step_forward();
    assert!(pb.at_end());

    pb.play();
    assert!(pb.tick(Instant::now()));
    assert_eq!(pb.position(), Some(0));
}

#[test]
fn speed_presets_saturate_and_change_the_period() {
    assert_eq!(Speed::Slow.faster(), Speed::Normal);
    assert_eq!(Speed::Normal.faster(), Speed::Fast);
    assert_eq!(Speed::Fast.faster(), Speed::Fast);
    assert_eq!(Speed::Slow.slower(), Speed::Slow);
    assert!(Speed::Fast.period() < Speed::Normal.period());
    assert!(Speed::Normal.period() < Speed::Slow.period());

    let mut pb = PlaybackController::new();
    pb.load(sequence(3));
    pb.set_speed(Speed::Fast);
    pb.play();

    let now = Instant::now();
    assert!(pb.tick(now));
    assert!(!pb.tick(now + Speed::Fast.period() / 2));
    assert!(pb.tick(now + Speed::Fast.period()));
}

#[test]
fn toggle_flips_between_playing_and_paused() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(3));
    pb.toggle();
    assert!(pb.is_playing());
    pb.toggle();
    assert!(!pb.is_playing());

    // Playing an empty controller is a no-op
    let mut empty = PlaybackController::new();
    empty.play();
    assert!(!empty.is_playing());
}

#[test]
fn reset_clears_the_cursor_but_keeps_the_sequence() {
    let mut pb = PlaybackController::new();
    pb.load(sequence(3));
    pb.play();
    pb.step_forward();
    pb.reset();
    assert!(!pb.is_playing());
    assert_eq!(pb.position(), None);
    assert_eq!(pb.len(), 3);
}
