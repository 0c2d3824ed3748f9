//! Playhead tracks elapsed time and playback phase for a single driver.

use std::time::Duration;

/// Where a driver is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// Not started, cancelled, or reset.
    #[default]
    Idle,
    /// Advancing on every tick.
    Running,
    /// Started but not advancing.
    Paused,
    /// Reached the end of its duration.
    Finished,
}

/// Elapsed-time bookkeeping shared by every frame-driven driver.
///
/// The playhead owns no clock; the host advances it with explicit deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playhead {
    phase: PlaybackPhase,
    elapsed: Duration,
    duration: Duration,
}

impl Playhead {
    /// Idle playhead with the given duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Target duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Replace the target duration; elapsed time is kept.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Time advanced since the last start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Normalized progress (0.0 to 1.0). A zero duration is always complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Running or paused.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Running | PlaybackPhase::Paused)
    }

    /// Rewind and begin running.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.phase = PlaybackPhase::Running;
    }

    /// Stop advancing. Returns whether the phase changed.
    #[must_use]
    pub fn pause(&mut self) -> bool {
        if self.phase != PlaybackPhase::Running {
            return false;
        }
        self.phase = PlaybackPhase::Paused;
        true
    }

    /// Continue advancing after a pause. Returns whether the phase changed.
    #[must_use]
    pub fn resume(&mut self) -> bool {
        if self.phase != PlaybackPhase::Paused {
            return false;
        }
        self.phase = PlaybackPhase::Running;
        true
    }

    /// Jump to the end.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
        self.phase = PlaybackPhase::Finished;
    }

    /// Go idle, keeping elapsed time where it was.
    pub fn stop(&mut self) {
        self.phase = PlaybackPhase::Idle;
    }

    /// Go idle at time zero.
    pub fn rewind(&mut self) {
        self.elapsed = Duration::ZERO;
        self.phase = PlaybackPhase::Idle;
    }

    /// Advance by `delta` if running and return the new progress.
    pub fn advance(&mut self, delta: Duration) -> Option<f32> {
        if self.phase != PlaybackPhase::Running {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        Some(self.progress())
    }

    /// Elapsed time has reached the duration.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}
