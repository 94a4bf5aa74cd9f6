//! Process-relative time for log line rendering.
//!
//! Every rendered line carries the time elapsed since a single process-start
//! instant, captured once and never mutated. The instant is captured on
//! first use; call [`init`] early in `main` to pin it to actual program
//! start instead of the first log line.

use core::fmt;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static PROCESS_START: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Captures the process-start instant.
///
/// Idempotent; later calls have no effect.
pub fn init() {
    LazyLock::force(&PROCESS_START);
}

/// Returns the time elapsed since the recorded process start.
pub fn uptime() -> Uptime {
    Uptime(PROCESS_START.elapsed())
}

/// Elapsed process time, split into whole minutes and residual seconds.
///
/// Renders as `<minutes>m<seconds>s` with seconds truncated toward zero into
/// `[0, 60)`, the shape log lines embed:
///
/// ```rust
/// assert_eq!(uplog::time::uptime().to_string(), "0m0s");
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Uptime(Duration);

impl Uptime {
    /// Whole minutes elapsed.
    pub fn minutes(&self) -> u64 {
        self.0.as_secs() / 60
    }

    /// Seconds elapsed beyond the last whole minute.
    pub fn seconds(&self) -> u64 {
        self.0.as_secs() % 60
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m{}s", self.minutes(), self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::Uptime;

    #[test_case(0, "0m0s")]
    #[test_case(59, "0m59s")]
    #[test_case(60, "1m0s")]
    #[test_case(61, "1m1s")]
    #[test_case(125, "2m5s")]
    #[test_case(3600, "60m0s")]
    #[test_case(3725, "62m5s")]
    fn renders_minutes_and_seconds(elapsed_secs: u64, expected: &str) {
        assert_eq!(Uptime(Duration::from_secs(elapsed_secs)).to_string(), expected);
    }

    #[test]
    fn subsecond_precision_truncates() {
        assert_eq!(Uptime(Duration::from_millis(59_999)).to_string(), "0m59s");
        assert_eq!(Uptime(Duration::from_millis(60_001)).to_string(), "1m0s");
        assert_eq!(Uptime(Duration::from_millis(125_900)).to_string(), "2m5s");
    }

    #[test]
    fn seconds_stay_below_sixty() {
        for elapsed in 0..200 {
            assert!(Uptime(Duration::from_secs(elapsed)).seconds() < 60);
        }
    }
}
