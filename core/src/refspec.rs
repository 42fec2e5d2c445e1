//! Parsing and the immutable `Refspec` value type.

use crate::env::{GitLocator, SystemGit};
use crate::error::{RefspecError, ValidationError};
use crate::pattern::Pattern;
use crate::types::{Location, Result};
use once_cell::sync::Lazy;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;
use std::{
    fmt,
    fmt::{Display, Formatter},
    result::Result as stdResult,
};

// Refspec text never contains whitespace of any kind.
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s").expect("Invalid static whitespace regex"));

/// A rule describing how a reference name in an origin repository corresponds
/// to a reference name in a destination repository, optionally permitting
/// non-fast-forward updates (a leading `+` in the textual form).
///
/// `Refspec` is immutable after construction: the derived operations
/// ([`invert`](Refspec::invert) and friends) build new values and never touch
/// the receiver, so refspecs can be shared freely across threads.
///
/// Both sides are guaranteed to agree on wildcard-ness; the parser rejects
/// mixed refspecs before a value can exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Refspec {
    origin: Pattern,
    destination: Pattern,
    allow_no_fast_forward: bool,
}

impl Refspec {
    /// Parses and validates a refspec, e.g. `+refs/heads/*:refs/heads/*`.
    ///
    /// The git executable is resolved first (via `GIT_EXEC_PATH` or the
    /// `PATH` of the supplied environment map) so a broken environment is
    /// diagnosed before any repository work begins; git itself is never run.
    ///
    /// # Arguments
    /// * `env` - Environment variables visible to the mirroring run.
    /// * `work_dir` - Directory relative lookups are anchored at.
    /// * `text` - The refspec in its compact textual notation.
    /// * `location` - Position of `text` in the originating configuration
    ///   document, attached to any failure.
    ///
    /// # Errors
    /// Returns `ValidationError` for an unresolvable git binary, whitespace
    /// in `text`, more than one `:`, more than one `*` in a side, or a
    /// wildcard on only one side.
    pub fn parse(
        env: &HashMap<String, String>,
        work_dir: &Path,
        text: &str,
        location: Option<Location>,
    ) -> stdResult<Refspec, ValidationError> {
        Self::parse_with(&SystemGit, env, work_dir, text, location)
    }

    /// Like [`parse`](Refspec::parse), with an explicit [`GitLocator`].
    pub fn parse_with<L: GitLocator>(
        locator: &L,
        env: &HashMap<String, String>,
        work_dir: &Path,
        text: &str,
        location: Option<Location>,
    ) -> stdResult<Refspec, ValidationError> {
        locator
            .locate(env, work_dir)
            .map_err(|e| e.at(location.clone()))?;
        Self::parse_text(text).map_err(|e| e.at(location))
    }

    /// Builds the trivial refspec mapping `reference` onto itself, skipping
    /// the textual grammar checks. Used for references the tool itself
    /// produces rather than user configuration.
    ///
    /// # Errors
    /// Returns `ValidationError` only when the git binary cannot be resolved.
    pub fn from_literal_ref(
        env: &HashMap<String, String>,
        work_dir: &Path,
        reference: &str,
    ) -> stdResult<Refspec, ValidationError> {
        Self::from_literal_ref_with(&SystemGit, env, work_dir, reference)
    }

    /// Like [`from_literal_ref`](Refspec::from_literal_ref), with an
    /// explicit [`GitLocator`].
    pub fn from_literal_ref_with<L: GitLocator>(
        locator: &L,
        env: &HashMap<String, String>,
        work_dir: &Path,
        reference: &str,
    ) -> stdResult<Refspec, ValidationError> {
        locator.locate(env, work_dir).map_err(|e| e.at(None))?;
        Ok(Refspec {
            origin: Pattern::Exact(reference.to_string()),
            destination: Pattern::Exact(reference.to_string()),
            allow_no_fast_forward: false,
        })
    }

    /// The purely textual validation pass. First failing rule wins, and the
    /// diagnostics quote the original text including any leading `+`.
    fn parse_text(text: &str) -> Result<Refspec> {
        if WHITESPACE.is_match(text) {
            return Err(RefspecError::InvalidRefspec(text.to_string()));
        }

        let (allow_no_fast_forward, body) = match text.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut parts = body.splitn(3, ':');
        let first = parts.next().unwrap_or(body);
        let (origin_text, destination_text) = match (parts.next(), parts.next()) {
            (Some(_), Some(_)) => return Err(RefspecError::MultipleColons),
            (Some(second), None) => (first, second),
            // No separator: the same side is read from and written to.
            (None, _) => (first, first),
        };

        let origin_stars = origin_text.matches('*').count();
        let destination_stars = destination_text.matches('*').count();
        if origin_stars > 1 || destination_stars > 1 {
            return Err(RefspecError::InvalidRefspec(text.to_string()));
        }
        if origin_stars != destination_stars {
            return Err(RefspecError::WildcardOnOneSide);
        }

        Ok(Refspec {
            origin: Pattern::new(origin_text),
            destination: Pattern::new(destination_text),
            allow_no_fast_forward,
        })
    }

    /// The origin side in its textual form (`prefix*suffix` for wildcards).
    pub fn origin(&self) -> String {
        self.origin.to_string()
    }

    /// The destination side in its textual form.
    pub fn destination(&self) -> String {
        self.destination.to_string()
    }

    /// The parsed origin pattern.
    pub fn origin_pattern(&self) -> &Pattern {
        &self.origin
    }

    /// The parsed destination pattern.
    pub fn destination_pattern(&self) -> &Pattern {
        &self.destination
    }

    /// Whether non-fast-forward updates are permitted (leading `+`).
    pub fn allow_no_fast_forward(&self) -> bool {
        self.allow_no_fast_forward
    }

    /// A new refspec with origin and destination swapped; the force flag is
    /// preserved.
    pub fn invert(&self) -> Refspec {
        Refspec {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            allow_no_fast_forward: self.allow_no_fast_forward,
        }
    }

    /// A new refspec mapping the origin side onto itself.
    pub fn origin_to_origin(&self) -> Refspec {
        Refspec {
            origin: self.origin.clone(),
            destination: self.origin.clone(),
            allow_no_fast_forward: self.allow_no_fast_forward,
        }
    }

    /// A new refspec mapping the destination side onto itself.
    pub fn destination_to_destination(&self) -> Refspec {
        Refspec {
            origin: self.destination.clone(),
            destination: self.destination.clone(),
            allow_no_fast_forward: self.allow_no_fast_forward,
        }
    }

    /// Tests a concrete reference name against the origin pattern.
    pub fn matches_origin(&self, reference: &str) -> bool {
        self.origin.matches(reference)
    }

    /// Rewrites a reference from the origin side to the destination side.
    ///
    /// For an exact origin the result is the destination literal; the
    /// mapping is 1-to-1 and fixed, so `reference` is not re-checked. For a
    /// wildcard origin the captured substring is re-inserted into the
    /// destination pattern.
    ///
    /// # Errors
    /// Returns `RefspecError::PatternMismatch` when the origin is a wildcard
    /// and `reference` does not match it.
    pub fn convert(&self, reference: &str) -> Result<String> {
        match &self.origin {
            Pattern::Exact(_) => Ok(self.destination.fill("")),
            origin @ Pattern::Wildcard { .. } => {
                let captured =
                    origin
                        .capture(reference)
                        .ok_or_else(|| RefspecError::PatternMismatch {
                            reference: reference.to_string(),
                            pattern: origin.to_string(),
                        })?;
                Ok(self.destination.fill(captured))
            }
        }
    }
}

impl Display for Refspec {
    /// Reconstructs the compact textual notation, always with an explicit
    /// destination side.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.allow_no_fast_forward {
            write!(f, "+")?;
        }
        write!(f, "{}:{}", self.origin, self.destination)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Refspec {
    /// Serializes the refspec as its textual form.
    fn serialize<S>(&self, serializer: S) -> stdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// --- Tests ---
