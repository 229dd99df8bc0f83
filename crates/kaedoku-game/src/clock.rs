//! Session wall-clock timing.

use std::time::{Duration, Instant};

/// Elapsed-time tracking for one game session.
///
/// There is no tick thread: while the clock runs, [`GameClock::elapsed`]
/// recomputes `now - start` on demand, so the front end can poll it on each
/// render. [`GameClock::stop`] freezes the elapsed duration; a stopped
/// clock keeps reporting the frozen value.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    started_at: Instant,
    frozen: Option<Duration>,
}

impl GameClock {
    /// Starts a clock at zero.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            frozen: None,
        }
    }

    /// Returns the elapsed time: live while running, frozen after stop.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Stops the clock and returns the frozen elapsed time.
    ///
    /// Stopping an already-stopped clock keeps the original frozen value.
    pub fn stop(&mut self) -> Duration {
        let elapsed = self.elapsed();
        *self.frozen.get_or_insert(elapsed)
    }

    /// Returns whether the clock is still running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.frozen.is_none()
    }
}

/// Formats a duration as `mm:ss`, rounding down to whole seconds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use kaedoku_game::format_mm_ss;
///
/// assert_eq!(format_mm_ss(Duration::ZERO), "00:00");
/// assert_eq!(format_mm_ss(Duration::from_millis(61_900)), "01:01");
/// ```
#[must_use]
pub fn format_mm_ss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
