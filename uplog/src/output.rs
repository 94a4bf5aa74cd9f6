//! Destinations for rendered log lines.

use core::fmt::Debug;
use std::fs::File;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// A writable destination for rendered log lines.
///
/// Destinations are externally owned: a logger borrows one, writes through
/// it, and never opens, closes, or flushes it. Writes go through a shared
/// reference so one destination can back several levels (and several
/// threads) at once; the logger performs no locking of its own, so
/// concurrent writes are only as safe as the destination's own contract.
///
/// # Examples
///
/// ```rust
/// use uplog::Output;
///
/// let buffer = std::sync::Mutex::new(Vec::<u8>::new());
/// buffer.write("WARN  Jan 02 15:04:05.000 - 0m0s disk almost full\n").unwrap();
/// assert_eq!(buffer.into_inner().unwrap().len(), 50);
/// ```
pub trait Output: Debug {
    /// Writes one rendered line, returning the number of bytes written.
    fn write(&self, line: &str) -> io::Result<usize>;
}

/// Writes through the stream's own lock.
impl Output for Stderr {
    fn write(&self, line: &str) -> io::Result<usize> {
        self.lock().write_all(line.as_bytes())?;
        Ok(line.len())
    }
}

/// Writes through the stream's own lock.
impl Output for Stdout {
    fn write(&self, line: &str) -> io::Result<usize> {
        self.lock().write_all(line.as_bytes())?;
        Ok(line.len())
    }
}

impl Output for File {
    fn write(&self, line: &str) -> io::Result<usize> {
        let mut file = self;
        file.write_all(line.as_bytes())?;
        Ok(line.len())
    }
}

/// Adapter for any [`io::Write`], serializing writes through the mutex.
///
/// A poisoned lock is recovered rather than propagated; a log destination
/// must not fail its callers.
impl<W> Output for Mutex<W>
where
    W: Write + Debug,
{
    fn write(&self, line: &str) -> io::Result<usize> {
        let mut writer = self.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        Ok(line.len())
    }
}
