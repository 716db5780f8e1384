//! Playback controller for recorded step sequences
//!
//! This module owns the cursor over a [`StepSequence`]:
//! - [`PlaybackController`]: play/pause, manual stepping, reset, seek state
//! - [`Speed`]: the three fixed playback speed presets
//!
//! There is exactly one tick source in the whole program: the UI's poll loop
//! calls [`PlaybackController::tick`] with the current instant.  Loading a new
//! sequence always stops playback first, so a stale sequence can never keep
//! animating after an operation replaces it.
//!
//! Seeking is read-only with respect to every structure store; scrubbing back
//! and forth never alters the recorded steps.

use crate::step::{Step, StepSequence};
use std::time::{Duration, Instant};

/// Fixed playback speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    /// Delay between automatic steps
    pub fn period(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1500),
            Speed::Normal => Duration::from_millis(1000),
            Speed::Fast => Duration::from_millis(600),
        }
    }

    /// Display label for the status bar
    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }

    /// Next slower preset (saturating)
    pub fn slower(self) -> Self {
        match self {
            Speed::Fast => Speed::Normal,
            _ => Speed::Slow,
        }
    }

    /// Next faster preset (saturating)
    pub fn faster(self) -> Self {
        match self {
            Speed::Slow => Speed::Normal,
            _ => Speed::Fast,
        }
    }
}

/// Drives a [`StepSequence`] over time or by manual seek.
///
/// `cursor == None` means no step is active: the structure is shown in its
/// final, fully-mutated state with no overlay.
#[derive(Debug)]
pub struct PlaybackController {
    steps: StepSequence,
    cursor: Option<usize>,
    playing: bool,
    speed: Speed,
    last_tick: Instant,
}

impl PlaybackController {
    pub fn new() -> Self {
        PlaybackController {
            steps: StepSequence::default(),
            cursor: None,
            playing: false,
            speed: Speed::Normal,
            last_tick: Instant::now(),
        }
    }

    /// Replace the sequence with a freshly recorded one.
    ///
    /// Stops any running playback and rewinds the cursor before the swap, so
    /// the previous sequence is fully discarded in one call.
    pub fn load(&mut self, steps: StepSequence) {
        self.playing = false;
        self.cursor = None;
        self.steps = steps;
    }

    /// Start timed playback.  Restarts from the beginning when already at the
    /// last step.
    pub fn play(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        if self.at_end() {
            self.cursor = None;
        }
        self.playing = true;
        // Backdate the tick origin so the first advance happens immediately
        self.last_tick = Instant::now()
            .checked_sub(self.speed.period())
            .unwrap_or_else(Instant::now);
    }

    /// Stop timed playback, keeping the cursor where it is
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle between playing and paused
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance by one step when playing and a full period has elapsed.
    ///
    /// Returns `true` if the cursor moved.  Reaching the last step stops
    /// playback.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        if now.duration_since(self.last_tick) < self.speed.period() {
            return false;
        }
        self.last_tick = now;
        if self.step_forward() {
            if self.at_end() {
                self.playing = false;
            }
            true
        } else {
            self.playing = false;
            false
        }
    }

    /// Move the cursor forward one step; `false` at the end
    pub fn step_forward(&mut self) -> bool {
        let next = match self.cursor {
            None => 0,
            Some(i) => i + 1,
        };
        if next < self.steps.len() {
            self.cursor = Some(next);
            true
        } else {
            false
        }
    }

    /// Move the cursor back one step; from step 0 this clears the overlay
    pub fn step_backward(&mut self) -> bool {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                true
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                true
            }
            None => false,
        }
    }

    /// Stop playback and clear the cursor
    pub fn reset(&mut self) {
        self.playing = false;
        self.cursor = None;
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The active step, `None` when the cursor is cleared
    pub fn current_step(&self) -> Option<&Step> {
        self.cursor.and_then(|i| self.steps.get(i))
    }

    /// Cursor position, `None` when no step is active
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of steps in the loaded sequence
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no sequence is loaded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the cursor sits on the last step
    pub fn at_end(&self) -> bool {
        !self.steps.is_empty() && self.cursor == Some(self.steps.len() - 1)
    }

    /// The loaded sequence (for the steps pane)
    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
