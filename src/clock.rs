use std::thread;
use std::time::{Duration, Instant};

use crate::config::{FRAME_DELAY_MS, TICKS_PER_SECOND};

/// Paces the loop: a fixed delay every frame, then a wait so frames start no
/// closer together than the target interval.
#[derive(Debug, Clone)]
pub struct FrameClock {
    delay: Duration,
    min_interval: Duration,
    last_frame: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new(delay: Duration, ticks_per_second: u32) -> Self {
        let min_interval = if ticks_per_second == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / ticks_per_second
        };

        Self {
            delay,
            min_interval,
            last_frame: None,
        }
    }

    /// The game's pacing: 50 ms delay, at most 10 ticks per second.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Duration::from_millis(FRAME_DELAY_MS), TICKS_PER_SECOND)
    }

    /// A clock that never sleeps.
    #[must_use]
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO, 0)
    }

    /// Blocks until the next frame may start.
    pub fn wait(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if let Some(last) = self.last_frame {
            let remaining = remaining_wait(last.elapsed(), self.min_interval);
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }

        self.last_frame = Some(Instant::now());
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

fn remaining_wait(elapsed: Duration, min_interval: Duration) -> Duration {
    min_interval.saturating_sub(elapsed)
}
