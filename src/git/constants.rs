//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Minimum supported git version (`--end-of-options` needs 2.24)
pub const MIN_GIT_VERSION: &str = "2.24.0";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const BRANCH: &str = "branch";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given path (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Never spawn a pager (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Print the checked-out branch (git branch only)
    pub const SHOW_CURRENT: &str = "--show-current";
    /// Everything after this is a revision, even if it starts with `-`
    pub const END_OF_OPTIONS: &str = "--end-of-options";
    /// Separates revisions from paths
    pub const END_OF_REVISIONS: &str = "--";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Special git values
pub mod special {
    /// Version output prefix (e.g., "git version 2.43.0")
    pub const VERSION_PREFIX: &str = "git version ";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
