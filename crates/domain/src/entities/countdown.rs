//! Countdown timer state machine
//!
//! Transitions: Idle -> Running -> Paused -> Running -> Finished -> Idle.
//! The machine is driven by explicit `tick` calls carrying elapsed time, so
//! callers own the clock and tests can advance simulated time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// State of a countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    /// Not started, remaining time equals the configured duration
    Idle,
    /// Counting down
    Running,
    /// Stopped without losing elapsed time
    Paused,
    /// Reached zero
    Finished,
}

/// A single countdown timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    state: CountdownState,
}

impl Countdown {
    /// Create an idle countdown for the given duration
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            state: CountdownState::Idle,
        }
    }

    /// Current state
    pub const fn state(&self) -> CountdownState {
        self.state
    }

    /// Remaining time; zero once finished
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Start counting down
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the timer is idle.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.state != CountdownState::Idle {
            return Err(DomainError::InvalidTransition(format!(
                "cannot start from {:?}",
                self.state
            )));
        }
        self.state = CountdownState::Running;
        Ok(())
    }

    /// Pause a running countdown, preserving remaining time
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the timer is running.
    pub fn pause(&mut self) -> Result<(), DomainError> {
        if self.state != CountdownState::Running {
            return Err(DomainError::InvalidTransition(format!(
                "cannot pause from {:?}",
                self.state
            )));
        }
        self.state = CountdownState::Paused;
        Ok(())
    }

    /// Resume a paused countdown
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the timer is paused.
    pub fn resume(&mut self) -> Result<(), DomainError> {
        if self.state != CountdownState::Paused {
            return Err(DomainError::InvalidTransition(format!(
                "cannot resume from {:?}",
                self.state
            )));
        }
        self.state = CountdownState::Running;
        Ok(())
    }

    /// Reset to idle with the full duration restored
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.state = CountdownState::Idle;
    }

    /// Advance the clock by `elapsed`. Only a running timer moves; remaining
    /// time saturates at zero. Returns `true` exactly once, on the tick that
    /// reaches zero and transitions to `Finished`.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.state = CountdownState::Finished;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn one_minute_finishes_exactly_once_after_sixty_ticks() {
        let mut timer = Countdown::new(Duration::from_secs(60));
        timer.start().unwrap();

        let mut finish_edges = 0;
        for _ in 0..60 {
            if timer.tick(SECOND) {
                finish_edges += 1;
            }
        }

        assert_eq!(finish_edges, 1);
        assert_eq!(timer.state(), CountdownState::Finished);
        assert_eq!(timer.remaining(), Duration::ZERO);

        // Extra ticks do nothing and never report another edge
        assert!(!timer.tick(SECOND));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn overshoot_clamps_at_zero() {
        let mut timer = Countdown::new(Duration::from_secs(5));
        timer.start().unwrap();
        assert!(timer.tick(Duration::from_secs(90)));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn pause_preserves_remaining_time() {
        let mut timer = Countdown::new(Duration::from_secs(10));
        timer.start().unwrap();
        timer.tick(Duration::from_secs(4));
        timer.pause().unwrap();

        // Ticks while paused are ignored
        assert!(!timer.tick(Duration::from_secs(100)));
        assert_eq!(timer.remaining(), Duration::from_secs(6));

        timer.resume().unwrap();
        assert!(!timer.tick(SECOND));
        assert_eq!(timer.remaining(), Duration::from_secs(5));
    }

    #[test]
    fn reset_returns_to_idle_with_full_duration() {
        let mut timer = Countdown::new(Duration::from_secs(30));
        timer.start().unwrap();
        timer.tick(Duration::from_secs(30));
        assert_eq!(timer.state(), CountdownState::Finished);

        timer.reset();
        assert_eq!(timer.state(), CountdownState::Idle);
        assert_eq!(timer.remaining(), Duration::from_secs(30));
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut timer = Countdown::new(Duration::from_secs(10));
        assert!(timer.pause().is_err());
        assert!(timer.resume().is_err());

        timer.start().unwrap();
        assert!(timer.start().is_err());
        assert!(timer.resume().is_err());

        timer.pause().unwrap();
        assert!(timer.pause().is_err());
    }

    #[test]
    fn idle_timer_ignores_ticks() {
        let mut timer = Countdown::new(Duration::from_secs(10));
        assert!(!timer.tick(Duration::from_secs(5)));
        assert_eq!(timer.remaining(), Duration::from_secs(10));
        assert_eq!(timer.state(), CountdownState::Idle);
    }
}
