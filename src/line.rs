// src/line.rs
use std::io::{self, Write};

/// A minimal line-writing logger: every line it emits is the current
/// prefix, the message, then a newline.
///
/// No internal locking. `&mut self` already rules out races within safe
/// Rust; if a `LineLogger` is shared across threads behind a `Mutex`,
/// that lock is what makes a prefix swap atomic with respect to
/// concurrent writes. This type adds no guarantee on top.
pub struct LineLogger<W: Write> {
    out: W,
    prefix: String,
}

impl<W: Write> LineLogger<W> {
    /// Wraps `out` with an empty prefix.
    pub fn new(out: W) -> Self {
        Self { out, prefix: String::new() }
    }

    /// Wraps `out` with an initial prefix.
    pub fn with_prefix(out: W, prefix: impl Into<String>) -> Self {
        Self { out, prefix: prefix.into() }
    }

    /// The prefix currently prepended to every line.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces the entire prefix. Takes effect from the next `print`.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Writes `prefix + msg + '\n'` and flushes.
    pub fn print(&mut self, msg: &str) -> io::Result<()> {
        self.out.write_all(self.prefix.as_bytes())?;
        self.out.write_all(msg.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
