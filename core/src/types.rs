//! Defines core data types shared across the refspec library.
use crate::error::RefspecError;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::{
    fmt,
    fmt::{Display, Formatter},
    result::Result as stdResult,
};

/// A specialized `Result` type for refspec operations.
pub type Result<A> = stdResult<A, RefspecError>;

/// A position in a configuration document, attached to parse failures so the
/// host tool can point at the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Location {
    /// Path of the configuration document, as the caller names it.
    pub path: String,
    /// 1-based line number within that document.
    pub line: u32,
}

impl Location {
    pub fn new(path: impl Into<String>, line: u32) -> Location {
        Location {
            path: path.into(),
            line,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

// --- Tests ---
