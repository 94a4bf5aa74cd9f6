//! The logging capability and its no-op implementation.

use core::fmt;

/// Verbosity of a single message and, as a threshold, of a whole logger.
///
/// The order is total and fixed: `Debug < Info < Warn < Error < Quiet`.
/// A [`TimeLogger`][crate::TimeLogger] constructed with threshold `T` enables
/// every level `L` with `T <= L`. `Quiet` is strictly greater than `Error`,
/// so as a threshold it enables nothing; it is a sentinel and never tags a
/// message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    /// The "debug" level.
    ///
    /// Designates lower priority information.
    Debug,
    /// The "info" level.
    ///
    /// Designates useful information.
    Info,
    /// The "warn" level.
    ///
    /// Designates hazardous situations.
    Warn,
    /// The "error" level.
    ///
    /// Designates very serious errors.
    Error,
    /// The threshold that enables no level at all.
    Quiet,
}

/// A simple leveled logging capability.
///
/// Implementations either render a message to their destination for that
/// level or do nothing. They never fail outward: there is no error return
/// and no panic, whatever happens to the underlying destination.
///
/// The leveled methods take pre-built [`fmt::Arguments`]; the
/// [`debugf!`][crate::debugf], [`infof!`][crate::infof],
/// [`warningf!`][crate::warningf] and [`errorf!`][crate::errorf] macros
/// construct them from a format template and arguments at the call site.
pub trait Log {
    /// Writes a debug-level message, or does nothing if the level is disabled.
    fn debug(&self, message: fmt::Arguments<'_>);

    /// Writes an info-level message, or does nothing if the level is disabled.
    fn info(&self, message: fmt::Arguments<'_>);

    /// Writes a warning-level message, or does nothing if the level is disabled.
    fn warning(&self, message: fmt::Arguments<'_>);

    /// Writes an error-level message, or does nothing if the level is disabled.
    fn error(&self, message: fmt::Arguments<'_>);

    /// Returns whether `level` is enabled for this instance.
    ///
    /// Pure and side-effect-free, and consistent with what the leveled write
    /// methods would do; callers use it to avoid building expensive message
    /// arguments that would only be discarded.
    fn is_level(&self, level: Level) -> bool;
}

/// Logger that discards all input and reports every level as disabled.
#[derive(Debug, Default)]
pub struct NopLogger(());

impl NopLogger {
    /// A `const` version of `NopLogger::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = NopLogger(());
}

impl Log for NopLogger {
    fn debug(&self, _: fmt::Arguments<'_>) {}

    fn info(&self, _: fmt::Arguments<'_>) {}

    fn warning(&self, _: fmt::Arguments<'_>) {}

    fn error(&self, _: fmt::Arguments<'_>) {}

    fn is_level(&self, _: Level) -> bool {
        false
    }
}
