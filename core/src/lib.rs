//! A Rust library implementing Git refspecs for repository mirroring: parsing
//! and validation of the textual refspec notation, wildcard matching, and the
//! derived transformations (invert, restrict, convert) used when moving
//! references between an origin and a destination repository.
//!
//! Pattern logic is pure string processing; the `git` executable is never run
//! by this library. It is only resolved at refspec construction time so that
//! a misconfigured environment is reported before any real repository work
//! starts.
//!

pub mod env;
pub mod error;
pub mod pattern;
pub mod refspec;
pub mod types;

// Re-export key types
pub use crate::error::{RefspecError, ValidationError};
pub use crate::pattern::Pattern;
pub use crate::refspec::Refspec;
pub use crate::types::{Location, Result};

// Re-export all modules
pub mod prelude {
    //! Convenient import for common RefMirror types and traits.
    pub use crate::env::{resolve_git_binary, GitLocator, SystemGit};
    pub use crate::error::{RefspecError, ValidationError};
    pub use crate::pattern::Pattern;
    pub use crate::refspec::Refspec;
    pub use crate::types::{Location, Result};
}
