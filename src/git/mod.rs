//! git command execution layer
//!
//! This module runs git, parses its output into [`CommitRecord`]s and exposes
//! the [`LogSource`] capability the comparison pipeline depends on.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

use crate::model::CommitRecord;

/// Errors that can occur when retrieving branch history
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Error with retrieving log for branch \"{branch}\": {source}")]
    LogRetrieval {
        branch: String,
        #[source]
        source: Box<GitError>,
    },

    #[error("No current branch found (detached HEAD?)")]
    NoCurrentBranch,

    #[error("Malformed git log record: {0:?}")]
    MalformedRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("git {version} is not supported (minimum: {minimum})")]
    UnsupportedVersion { version: String, minimum: String },
}

/// Source of branch histories
pub trait LogSource {
    /// Commits of `branch`, newest first
    fn branch_log(&self, branch: &str) -> Result<Vec<CommitRecord>, GitError>;

    /// Name of the checked-out branch
    fn current_branch(&self) -> Result<String, GitError>;
}
