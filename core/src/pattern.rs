//! The parsed form of one side of a refspec and its matching primitives.
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};
use std::{
    fmt,
    fmt::{Display, Formatter},
};

/// One side of a refspec: either an exact reference name or a single
/// wildcard with the literal text around it.
///
/// Wildcard placement is decided once at parse time so that matching and
/// conversion never re-scan raw refspec text, and so that "both sides agree
/// on wildcard-ness" is a property of [`crate::Refspec`] rather than a check
/// repeated at every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches exactly one reference name.
    Exact(String),
    /// Matches any reference of the form `prefix<anything>suffix`, where the
    /// captured middle may be empty.
    Wildcard { prefix: String, suffix: String },
}

impl Pattern {
    /// Parses one side of a refspec.
    ///
    /// The caller (the refspec parser) has already verified that `side`
    /// contains at most one `*`; any further `*` would end up inside the
    /// suffix verbatim and never match a real reference.
    pub(crate) fn new(side: &str) -> Pattern {
        match side.split_once('*') {
            Some((prefix, suffix)) => Pattern::Wildcard {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            },
            None => Pattern::Exact(side.to_string()),
        }
    }

    /// Tests whether a concrete reference name matches this pattern.
    pub fn matches(&self, reference: &str) -> bool {
        self.capture(reference).is_some()
    }

    /// Returns the substring captured by the wildcard when `reference`
    /// matches, or `None` when it does not.
    ///
    /// An `Exact` pattern captures the empty string; a `Wildcard` pattern
    /// may also capture an empty middle (e.g. `refs/heads/*` against
    /// `refs/heads/`).
    pub fn capture<'a>(&self, reference: &'a str) -> Option<&'a str> {
        match self {
            Pattern::Exact(value) => (reference == value).then_some(""),
            Pattern::Wildcard { prefix, suffix } => {
                if reference.len() >= prefix.len() + suffix.len()
                    && reference.starts_with(prefix.as_str())
                    && reference.ends_with(suffix.as_str())
                {
                    Some(&reference[prefix.len()..reference.len() - suffix.len()])
                } else {
                    None
                }
            }
        }
    }

    /// Re-inserts a captured substring into this pattern, producing a
    /// concrete reference name. For `Exact` patterns the capture is ignored
    /// since the mapping is 1-to-1 and fixed.
    pub(crate) fn fill(&self, captured: &str) -> String {
        match self {
            Pattern::Exact(value) => value.clone(),
            Pattern::Wildcard { prefix, suffix } => format!("{}{}{}", prefix, captured, suffix),
        }
    }

    /// Whether this side carries a wildcard marker.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard { .. })
    }
}

impl Display for Pattern {
    /// Reconstructs the textual form, including the `*` marker.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Exact(value) => write!(f, "{}", value),
            Pattern::Wildcard { prefix, suffix } => write!(f, "{}*{}", prefix, suffix),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Pattern {
    /// Serializes the pattern as its textual refspec-side form.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches_only_itself() {
        let p = Pattern::new("refs/heads/master");
        assert!(p.matches("refs/heads/master"));
        assert!(!p.matches("refs/heads/main"));
        assert!(!p.matches("refs/heads/master2"));
        assert_eq!(p.capture("refs/heads/master"), Some(""));
    }

    #[test]
    fn test_wildcard_suffix_position() {
        let p = Pattern::new("refs/heads/*");
        assert!(p.matches("refs/heads/master"));
        assert!(!p.matches("refs/tails/master"));
        assert_eq!(p.capture("refs/heads/master"), Some("master"));
    }

    #[test]
    fn test_wildcard_middle_position() {
        let p = Pattern::new("refs/*/master");
        assert!(p.matches("refs/heads/master"));
        assert!(!p.matches("refs/heads/mistress"));
        assert_eq!(p.capture("refs/heads/master"), Some("heads"));
    }

    #[test]
    fn test_wildcard_leading_position() {
        let p = Pattern::new("*/heads/master");
        assert!(p.matches("refs/heads/master"));
        assert_eq!(p.capture("refs/heads/master"), Some("refs"));
    }

    #[test]
    fn test_wildcard_empty_capture_is_valid() {
        let p = Pattern::new("refs/heads/*");
        assert!(p.matches("refs/heads/"));
        assert_eq!(p.capture("refs/heads/"), Some(""));
        // Shorter than prefix + suffix must not match even though the
        // reference both starts and ends inside the overlap.
        let overlap = Pattern::new("refs/ab*bc");
        assert!(!overlap.matches("refs/abc"));
    }

    #[test]
    fn test_fill_reinserts_capture() {
        let p = Pattern::new("refs/origin/*/master");
        assert_eq!(p.fill("heads"), "refs/origin/heads/master");
        let exact = Pattern::new("refs/heads/main");
        assert_eq!(exact.fill("ignored"), "refs/heads/main");
    }

    #[test]
    fn test_display_round_trip() {
        for side in ["refs/heads/master", "refs/heads/*", "*/heads/x", "refs/*"] {
            assert_eq!(Pattern::new(side).to_string(), *side);
        }
    }

    #[test]
    fn test_is_wildcard() {
        assert!(!Pattern::new("refs/heads/master").is_wildcard());
        assert!(Pattern::new("refs/heads/*").is_wildcard());
    }
}
