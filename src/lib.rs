// sysdlog/src/lib.rs
//! Severity-level prefix decorator for line-oriented loggers.
//!
//! [`LevelLogger`] wraps a [`LineLogger`] and renders a severity level
//! into its line prefix using the `<N>` scheme system service managers
//! parse (`<0>` Emergency through `<7>` Debug). It does not filter,
//! buffer, or fan out; every line still goes synchronously through the
//! wrapped logger.
//!
//! ```
//! use sysdlog::{Level, LevelLogger, LineLogger};
//!
//! let mut log = LevelLogger::new(LineLogger::new(Vec::new()));
//! log.set_level(Level::Err);
//! log.print("disk failure").unwrap();
//! assert_eq!(log.into_inner().into_inner(), b"<3>disk failure\n");
//! ```

mod level;
mod line;

pub use level::{InvalidLevel, Level};
pub use line::LineLogger;

use std::io::{self, Write};

/// Decorates a [`LineLogger`] with a severity-level prefix.
///
/// The active level is not stored here; it lives only in the wrapped
/// logger's prefix string. Code that needs to query it must track it
/// itself (or inspect [`LineLogger::prefix`]).
pub struct LevelLogger<W: Write> {
    inner: LineLogger<W>,
    show_name: bool,
}

impl<W: Write> LevelLogger<W> {
    /// Wraps `inner`, leaving its current prefix untouched until the
    /// first [`set_level`](Self::set_level) call.
    pub fn new(inner: LineLogger<W>) -> Self {
        Self { inner, show_name: false }
    }

    /// Toggles whether `set_level` embeds the human-readable level name
    /// in the prefix. Takes effect on the next `set_level` call, not on
    /// the prefix already installed.
    pub fn show_name(&mut self, show: bool) {
        self.show_name = show;
    }

    /// Sets the severity level by installing `<N>` (or `<N>NAME ` when
    /// names are shown) as the wrapped logger's entire prefix. The
    /// prefix persists until the next call.
    pub fn set_level(&mut self, level: Level) {
        let prefix = if self.show_name {
            format!("<{}>{} ", level.code(), level.as_str())
        } else {
            format!("<{}>", level.code())
        };
        self.inner.set_prefix(prefix);
    }

    /// Writes a line through the wrapped logger.
    pub fn print(&mut self, msg: &str) -> io::Result<()> {
        self.inner.print(msg)
    }

    pub fn inner(&self) -> &LineLogger<W> {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut LineLogger<W> {
        &mut self.inner
    }

    pub fn into_inner(self) -> LineLogger<W> {
        self.inner
    }
}
