//! Resolution of the `git` executable from a caller-supplied environment.
//!
//! Refspec construction only needs to know that git is reachable; the
//! binary is never run for pattern logic. Resolution is abstracted behind
//! [`GitLocator`] so refspec parsing can be tested without touching the
//! filesystem.

use crate::error::RefspecError;
use crate::types::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory that contains the git binary,
/// overriding the search path when set.
pub const GIT_EXEC_PATH: &str = "GIT_EXEC_PATH";

/// Name of the version-control executable on the search path.
const GIT_BINARY: &str = "git";

/// Locates the version-control executable for a given environment.
///
/// Implemented by [`SystemGit`] for production use; tests substitute a fake
/// so parsing stays deterministic.
pub trait GitLocator {
    /// Resolves the git binary, or fails identifying the attempted path.
    fn locate(&self, env: &HashMap<String, String>, work_dir: &Path) -> Result<PathBuf>;
}

/// The production locator: honors `GIT_EXEC_PATH`, otherwise searches the
/// `PATH` entries of the supplied environment map.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitLocator for SystemGit {
    fn locate(&self, env: &HashMap<String, String>, work_dir: &Path) -> Result<PathBuf> {
        if let Some(exec_path) = env.get(GIT_EXEC_PATH) {
            // The diagnostic quotes the attempted path exactly as the user
            // configured it, so it is built from the raw override string.
            return which::which_in(GIT_BINARY, Some(exec_path), work_dir)
                .map_err(|_| RefspecError::GitBinaryNotFound(format!("{}/{}", exec_path, GIT_BINARY)));
        }

        which::which_in(GIT_BINARY, env.get("PATH"), work_dir)
            .map_err(|_| RefspecError::GitBinaryNotFound(GIT_BINARY.to_string()))
    }
}

/// Resolves the git binary with the production [`SystemGit`] locator.
///
/// # Errors
/// Returns `RefspecError::GitBinaryNotFound` naming the attempted path when
/// no executable is present there.
pub fn resolve_git_binary(env: &HashMap<String, String>, work_dir: &Path) -> Result<PathBuf> {
    SystemGit.locate(env, work_dir)
}

// --- Tests ---
