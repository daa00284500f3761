//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::constants::{self, commands, errors, flags, special};
use super::parser::Parser;
use super::template::Templates;
use super::{GitError, LogSource};
use crate::model::CommitRecord;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically adds `--no-pager` so output is never held by a pager.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_PAGER);
        cmd.args(args);

        log::debug!("running git {:?} (repo: {:?})", args, self.repo_path);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Get the git version
    pub fn version(&self) -> Result<String, GitError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "git version 2.43.0" (may carry a vendor suffix)
        let trimmed = output.trim();
        let version = trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed);
        Ok(version
            .split_whitespace()
            .next()
            .unwrap_or(version)
            .to_string())
    }

    /// Check if git version is supported
    pub fn check_version(&self) -> Result<(), GitError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_GIT_VERSION) {
            return Err(GitError::UnsupportedVersion {
                version,
                minimum: constants::MIN_GIT_VERSION.to_string(),
            });
        }
        Ok(())
    }

    /// Run `git log` for a branch
    pub fn log_raw(&self, branch: &str) -> Result<String, GitError> {
        self.run(&log_args(branch))
    }

    /// Run `git branch --show-current`
    pub fn current_branch_raw(&self) -> Result<String, GitError> {
        self.run(&[commands::BRANCH, flags::SHOW_CURRENT])
    }
}

impl LogSource for GitExecutor {
    fn branch_log(&self, branch: &str) -> Result<Vec<CommitRecord>, GitError> {
        let commits = self
            .log_raw(branch)
            .and_then(|output| Parser::parse_log(&output))
            .map_err(|e| GitError::LogRetrieval {
                branch: branch.to_string(),
                source: Box::new(e),
            })?;
        log::debug!("retrieved {} commits for {branch}", commits.len());
        Ok(commits)
    }

    fn current_branch(&self) -> Result<String, GitError> {
        let output = self.current_branch_raw()?;
        // Detached HEAD prints nothing and still exits 0
        Parser::parse_current_branch(&output).ok_or(GitError::NoCurrentBranch)
    }
}

/// Arguments for `git log` on `branch`; a leading `-` never turns it into an option
fn log_args(branch: &str) -> [&str; 5] {
    [
        commands::LOG,
        Templates::log(),
        flags::END_OF_OPTIONS,
        branch,
        flags::END_OF_REVISIONS,
    ]
}

/// Compare version strings (simple semver comparison)
///
/// Handles platform suffixes like "2.41.0.windows.1" by ignoring extra parts.
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        let parts: Vec<&str> = v.split('.').collect();
        if parts.len() >= 2 {
            let major = parts[0].parse().ok()?;
            let minor = parts[1].parse().ok()?;
            // Strip prerelease suffix (e.g., "0-rc1" -> "0")
            let patch = parts
                .get(2)
                .and_then(|p| p.split('-').next().and_then(|n| n.parse().ok()))
                .unwrap_or(0);
            Some((major, minor, patch))
        } else {
            None
        }
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
