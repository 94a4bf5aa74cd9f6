//! Printf-style front-ends for the [`Log`][crate::Log] capability.
//!
//! Each macro takes a logger expression, a format template, and the values
//! to interpolate, and forwards them as pre-built [`core::fmt::Arguments`]
//! to the matching leveled method. Template/argument mismatches are
//! compile-time errors, so a malformed call site can never garble output or
//! crash at runtime.

/// Writes a debug-level message through `$logger`.
///
/// # Examples
///
/// ```rust
/// use uplog::{Level, TimeLogger, debugf};
///
/// let stderr = std::io::stderr();
/// let logger = TimeLogger::new(&stderr, Level::Debug);
/// debugf!(logger, "resolved {} in {}ms\n", "example.com", 12);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Log as _;
        ($logger).debug(::core::format_args!($($arg)*))
    }};
}

/// Writes an info-level message through `$logger`.
///
/// # Examples
///
/// ```rust
/// use uplog::{Level, TimeLogger, infof};
///
/// let stderr = std::io::stderr();
/// let logger = TimeLogger::new(&stderr, Level::Info);
/// infof!(logger, "listening on {}\n", "0.0.0.0:4150");
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Log as _;
        ($logger).info(::core::format_args!($($arg)*))
    }};
}

/// Writes a warning-level message through `$logger`.
///
/// # Examples
///
/// ```rust
/// use uplog::{Level, TimeLogger, warningf};
///
/// let stderr = std::io::stderr();
/// let logger = TimeLogger::new(&stderr, Level::Warn);
/// warningf!(logger, "slow response from {}: {}ms\n", "upstream", 350);
/// ```
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Log as _;
        ($logger).warning(::core::format_args!($($arg)*))
    }};
}

/// Writes an error-level message through `$logger`.
///
/// # Examples
///
/// ```rust
/// use uplog::{Level, TimeLogger, errorf};
///
/// let stderr = std::io::stderr();
/// let logger = TimeLogger::new(&stderr, Level::Error);
/// errorf!(logger, "lookup failed: {}\n", "timed out");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Log as _;
        ($logger).error(::core::format_args!($($arg)*))
    }};
}
