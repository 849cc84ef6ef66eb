// src/level.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log line, following the eight-level scheme system
/// service managers use. Lower ordinal = more urgent.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// system is unusable
    Emerg = 0,
    /// action must be taken immediately
    Alert = 1,
    /// critical conditions
    Crit = 2,
    /// error conditions
    Err = 3,
    /// warning conditions
    Warning = 4,
    /// normal but significant condition
    Notice = 5,
    /// informational
    Info = 6,
    /// debug-level messages
    Debug = 7,
}

/// A numeric severity outside 0..=7, or a name that is not one of the
/// eight display names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid severity level: {0}")]
pub struct InvalidLevel(pub String);

impl Level {
    /// All eight levels in ordinal order.
    pub const ALL: [Level; 8] = [
        Level::Emerg,
        Level::Alert,
        Level::Crit,
        Level::Err,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Uppercase display name, as rendered into the log prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Emerg => "EMERG",
            Level::Alert => "ALERT",
            Level::Crit => "CRIT",
            Level::Err => "ERR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Numeric severity code, 0..=7.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, InvalidLevel> {
        match value {
            0 => Ok(Level::Emerg),
            1 => Ok(Level::Alert),
            2 => Ok(Level::Crit),
            3 => Ok(Level::Err),
            4 => Ok(Level::Warning),
            5 => Ok(Level::Notice),
            6 => Ok(Level::Info),
            7 => Ok(Level::Debug),
            other => Err(InvalidLevel(other.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, InvalidLevel> {
        match s.to_ascii_uppercase().as_str() {
            "EMERG" => Ok(Level::Emerg),
            "ALERT" => Ok(Level::Alert),
            "CRIT" => Ok(Level::Crit),
            "ERR" => Ok(Level::Err),
            "WARNING" => Ok(Level::Warning),
            "NOTICE" => Ok(Level::Notice),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(InvalidLevel(s.to_string())),
        }
    }
}
