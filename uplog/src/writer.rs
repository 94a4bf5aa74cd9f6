//! Timestamped, level-gated log writer.

use core::fmt;
use std::io;

use chrono::Utc;

use crate::logger::{Level, Log};
use crate::output::Output;
use crate::time;

/// Wall-clock format for rendered lines, e.g. `Jan 02 15:04:05.000`.
const TIMESTAMP_FORMAT: &str = "%b %d %H:%M:%S%.3f";

// Level tags are all six characters wide so columns align.
const DEBUG_TAG: &str = "DEBUG ";
const INFO_TAG: &str = "INFO  ";
const WARN_TAG: &str = "WARN  ";
const ERROR_TAG: &str = "ERROR ";

/// Logger that writes level-tagged, timestamped lines to borrowed
/// destinations.
///
/// Each enabled level renders lines of the shape
/// `<TAG><UTC timestamp> - <minutes>m<seconds>s <message>`, where the
/// elapsed component counts from the process-start instant (see
/// [`time::init`]). The wall-clock timestamp is always UTC, regardless of
/// the local timezone.
///
/// Which levels are enabled is decided at construction and never changes;
/// a disabled level returns without formatting or writing anything. Write
/// errors are swallowed, see [`Log`] for the contract.
///
/// # Examples
///
/// ```rust
/// use uplog::{Level, Log, TimeLogger};
///
/// let stderr = std::io::stderr();
/// let logger = TimeLogger::new(&stderr, Level::Info);
///
/// logger.info(format_args!("listening on {}\n", "0.0.0.0:4150"));
/// assert!(!logger.is_level(Level::Debug));
/// ```
#[derive(Clone, Debug)]
pub struct TimeLogger<'w> {
    debug: Option<&'w (dyn Output + Sync)>,
    info: Option<&'w (dyn Output + Sync)>,
    warn: Option<&'w (dyn Output + Sync)>,
    error: Option<&'w (dyn Output + Sync)>,
}

impl<'w> TimeLogger<'w> {
    /// Creates a logger writing every level at or above `min` to `output`.
    ///
    /// `Level::Quiet` is strictly greater than `Level::Error`, so passing it
    /// as the threshold disables all four levels.
    pub fn new(output: &'w (dyn Output + Sync), min: Level) -> Self {
        let enabled = |level: Level| (min <= level).then_some(output);

        Self {
            debug: enabled(Level::Debug),
            info: enabled(Level::Info),
            warn: enabled(Level::Warn),
            error: enabled(Level::Error),
        }
    }

    /// Creates a logger with an independent destination per level.
    ///
    /// `None` disables the level. The same destination may be shared across
    /// levels; [`TimeLogger::new`] is this constructor with one destination
    /// filled in for every level at or above a threshold.
    pub fn with_outputs(
        debug: Option<&'w (dyn Output + Sync)>,
        info: Option<&'w (dyn Output + Sync)>,
        warn: Option<&'w (dyn Output + Sync)>,
        error: Option<&'w (dyn Output + Sync)>,
    ) -> Self {
        Self {
            debug,
            info,
            warn,
            error,
        }
    }

    fn emit(output: &dyn Output, tag: &str, message: fmt::Arguments<'_>) -> io::Result<usize> {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT);
        let uptime = time::uptime();

        output.write(&format!("{tag}{timestamp} - {uptime} {message}"))
    }
}

impl Log for TimeLogger<'_> {
    fn debug(&self, message: fmt::Arguments<'_>) {
        if let Some(output) = self.debug {
            // this is a logger, ignore any errors writing
            let _ = Self::emit(output, DEBUG_TAG, message);
        }
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        if let Some(output) = self.info {
            // this is a logger, ignore any errors writing
            let _ = Self::emit(output, INFO_TAG, message);
        }
    }

    fn warning(&self, message: fmt::Arguments<'_>) {
        if let Some(output) = self.warn {
            // this is a logger, ignore any errors writing
            let _ = Self::emit(output, WARN_TAG, message);
        }
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        if let Some(output) = self.error {
            // this is a logger, ignore any errors writing
            let _ = Self::emit(output, ERROR_TAG, message);
        }
    }

    fn is_level(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.debug.is_some(),
            Level::Info => self.info.is_some(),
            Level::Warn => self.warn.is_some(),
            Level::Error => self.error.is_some(),
            Level::Quiet => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::TimeLogger;
    use crate::logger::{Level, Log};

    fn rendered(buffer: Mutex<Vec<u8>>) -> String {
        String::from_utf8(buffer.into_inner().unwrap()).unwrap()
    }

    #[test_case(Level::Debug, &[true, true, true, true])]
    #[test_case(Level::Info, &[false, true, true, true])]
    #[test_case(Level::Warn, &[false, false, true, true])]
    #[test_case(Level::Error, &[false, false, false, true])]
    #[test_case(Level::Quiet, &[false, false, false, false])]
    fn threshold_enables_levels_at_or_above(min: Level, expected: &[bool; 4]) {
        let buffer = Mutex::new(Vec::<u8>::new());
        let logger = TimeLogger::new(&buffer, min);

        let queried = [
            logger.is_level(Level::Debug),
            logger.is_level(Level::Info),
            logger.is_level(Level::Warn),
            logger.is_level(Level::Error),
        ];

        assert_eq!(&queried, expected);
        assert!(!logger.is_level(Level::Quiet));
    }

    #[test]
    fn disabled_level_writes_nothing() {
        let buffer = Mutex::new(Vec::<u8>::new());
        let logger = TimeLogger::new(&buffer, Level::Error);

        logger.debug(format_args!("dropped"));
        logger.info(format_args!("dropped"));
        logger.warning(format_args!("dropped"));

        assert_eq!(rendered(buffer), "");
    }

    #[test]
    fn enabled_level_renders_tag_and_message() {
        let buffer = Mutex::new(Vec::<u8>::new());
        let logger = TimeLogger::new(&buffer, Level::Debug);

        logger.debug(format_args!("queue depth {}\n", 17));

        let line = rendered(buffer);
        assert!(line.starts_with("DEBUG "), "unexpected line: {line:?}");
        assert!(line.ends_with(" queue depth 17\n"), "unexpected line: {line:?}");
    }

    #[test]
    fn per_level_routing_is_independent() {
        let warnings = Mutex::new(Vec::<u8>::new());
        let errors = Mutex::new(Vec::<u8>::new());
        let logger = TimeLogger::with_outputs(None, None, Some(&warnings), Some(&errors));

        assert!(!logger.is_level(Level::Debug));
        assert!(!logger.is_level(Level::Info));
        assert!(logger.is_level(Level::Warn));
        assert!(logger.is_level(Level::Error));

        logger.info(format_args!("dropped\n"));
        logger.warning(format_args!("routed to warnings\n"));
        logger.error(format_args!("routed to errors\n"));

        assert!(rendered(warnings).ends_with(" routed to warnings\n"));
        assert!(rendered(errors).ends_with(" routed to errors\n"));
    }

    #[test]
    fn write_errors_are_swallowed() {
        #[derive(Debug)]
        struct FailingOutput;

        impl crate::Output for FailingOutput {
            fn write(&self, _: &str) -> std::io::Result<usize> {
                Err(std::io::Error::other("destination rejected the write"))
            }
        }

        let logger = TimeLogger::new(&FailingOutput, Level::Debug);

        // Must not panic or surface the error in any way.
        logger.error(format_args!("lost"));
        assert!(logger.is_level(Level::Error));
    }
}
