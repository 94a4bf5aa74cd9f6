//! # `uplog`
//!
//! A minimal leveled-logging library: a common capability for emitting
//! debug/info/warning/error messages, with a no-op sink and a timestamped
//! writer that gates messages by a verbosity level fixed at construction.
//!
//! `uplog` is meant to be embedded in a larger program. It has no background
//! threads, no buffering, and no runtime reconfiguration; every call either
//! returns immediately (disabled level) or performs one synchronous
//! format-and-write.
//!
//! ## Output Format
//!
//! Enabled levels render lines of the shape
//!
//! ```text
//! INFO  Jan 02 15:04:05.000 - 3m17s connected to 10.0.0.7:4150
//! ```
//!
//! with a six-character level tag, a UTC wall-clock timestamp, and the
//! process uptime split into whole minutes and residual seconds. No trailing
//! newline is appended; put `\n` in the format template if you want one.
//!
//! ## Basic Usage
//!
//! ```rust
//! use uplog::{Level, Log, TimeLogger, debugf, warningf};
//!
//! let stderr = std::io::stderr();
//! let logger = TimeLogger::new(&stderr, Level::Warn);
//!
//! // Below the threshold, gated out without formatting.
//! debugf!(logger, "handshake payload: {:?}\n", [0u8; 4]);
//!
//! // At or above the threshold, written to the destination.
//! warningf!(logger, "retrying in {}ms\n", 250);
//!
//! assert!(logger.is_level(Level::Error));
//! assert!(!logger.is_level(Level::Info));
//! ```
//!
//! ## Disabling Logging
//!
//! [`NopLogger`] discards everything and reports every level as disabled,
//! so callers that want a "logging disabled" placeholder can share one
//! instance process-wide:
//!
//! ```rust
//! use uplog::{Level, Log, NopLogger, infof};
//!
//! let logger: &'static NopLogger = &NopLogger::DEFAULT;
//! infof!(logger, "never rendered");
//! assert!(!logger.is_level(Level::Error));
//! ```
//!
//! ## Best-Effort Contract
//!
//! The leveled write operations never fail outward: destination write errors
//! are swallowed, and a dropped line is simply lost. Logging must never be
//! the reason a caller's operation fails.

mod logger;
mod macros;
mod output;
pub mod time;
mod writer;

pub use logger::{Level, Log, NopLogger};
pub use output::Output;
pub use writer::TimeLogger;
