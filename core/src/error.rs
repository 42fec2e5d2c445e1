//! Defines the error types used throughout the RefMirror library.
use crate::types::Location;
use thiserror::Error;

/// Represents errors raised while constructing or applying a refspec.
///
/// The display strings are user-facing diagnostics; downstream tooling
/// matches on them verbatim, so they must not be reworded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefspecError {
    /// The 'git' executable could not be located. Carries the attempted
    /// path (`<dir>/git` when the override variable is set, the bare binary
    /// name when the search path was exhausted).
    #[error("Cannot find git binary at '{0}'")]
    GitBinaryNotFound(String),

    /// The refspec text is malformed: it contains whitespace, or one of its
    /// sides contains more than one wildcard marker.
    #[error("Invalid refspec: {0}")]
    InvalidRefspec(String),

    /// The refspec text contains more than one ':' separator.
    #[error("Multiple ':' found")]
    MultipleColons,

    /// Exactly one side of the refspec uses a wildcard. The message keeps
    /// its historical spelling; consumers grep for it.
    #[error("Wilcard only used in one part of the refspec")]
    WildcardOnOneSide,

    /// `convert` was called with a reference that does not match the
    /// origin pattern. Fatal to that call only, never to construction.
    #[error("Ref '{reference}' does not match '{pattern}'")]
    PatternMismatch { reference: String, pattern: String },
}

impl RefspecError {
    /// Attaches an optional source location, producing the
    /// configuration-validation error surfaced to callers of `parse`.
    pub fn at(self, location: Option<Location>) -> ValidationError {
        match location {
            Some(location) => ValidationError::At {
                location,
                source: self,
            },
            None => ValidationError::Bare(self),
        }
    }
}

/// A construction-time failure, annotated with the source location of the
/// offending configuration text when the caller supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Failure with a known source position, rendered as `path:line: message`.
    #[error("{location}: {source}")]
    At {
        location: Location,
        #[source]
        source: RefspecError,
    },

    /// Failure without positional information.
    #[error(transparent)]
    Bare(#[from] RefspecError),
}

impl ValidationError {
    /// The source location of the failing text, if one was supplied.
    pub fn location(&self) -> Option<&Location> {
        match self {
            ValidationError::At { location, .. } => Some(location),
            ValidationError::Bare(_) => None,
        }
    }

    /// The underlying refspec error, with any location stripped.
    pub fn kind(&self) -> &RefspecError {
        match self {
            ValidationError::At { source, .. } => source,
            ValidationError::Bare(source) => source,
        }
    }
}
