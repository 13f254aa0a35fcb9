//! Fixed-rate frame scheduling.
//!
//! The backend polls `due(now)`; when it returns true it runs one tick and
//! calls `advance(now)`. Deadlines advance by whole intervals so the rate
//! does not drift, and a clock that falls more than one interval behind
//! resynchronises instead of bursting.

use std::time::Duration;

use web_time::Instant;

use crate::constants::TARGET_TICK_HZ;

#[derive(Clone, Debug)]
pub struct FrameClock {
  interval: Duration,
  next_due: Option<Instant>,
  frame: u64,
}

impl FrameClock {
  /// Clock ticking at `hz`. Non-positive or non-finite rates fall back to
  /// the default 60 Hz.
  pub fn new(hz: f64) -> Self {
    let hz = if hz.is_finite() && hz > 0.0 { hz } else { TARGET_TICK_HZ };
    Self {
      interval: Duration::from_secs_f64(1.0 / hz),
      next_due: None,
      frame: 0,
    }
  }

  pub fn interval(&self) -> Duration {
    self.interval
  }

  /// Frames advanced so far. Drives prop animation.
  pub fn frame(&self) -> u64 {
    self.frame
  }

  pub fn due(&self, now: Instant) -> bool {
    self.next_due.map_or(true, |deadline| now >= deadline)
  }

  /// Time left until the next tick is due.
  pub fn time_until_due(&self, now: Instant) -> Duration {
    self.next_due.map_or(Duration::ZERO, |deadline| deadline.saturating_duration_since(now))
  }

  /// Record a tick at `now` and return the new frame count.
  pub fn advance(&mut self, now: Instant) -> u64 {
    self.frame += 1;
    let next = match self.next_due {
      Some(deadline) => deadline + self.interval,
      None => now + self.interval,
    };
    self.next_due = Some(if next + self.interval < now { now + self.interval } else { next });
    self.frame
  }
}

impl Default for FrameClock {
  fn default() -> Self {
    Self::new(TARGET_TICK_HZ)
  }
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;
