//! git output parser
//!
//! Parses the output from git commands into structured data.


use regex::Regex;
use std::sync::LazyLock;

use super::GitError;
use super::template::FIELD_SEPARATOR;
use crate::model::CommitRecord;

/// Regex for one `git log --pretty=format:%h%x09%s` line
///
/// Groups:
/// 1. abbreviated hash (hex, at least 4 chars as with `core.abbrev`)
/// 2. subject (everything after the first tab; may be empty)
static LOG_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^([0-9a-f]{{4,64}}){FIELD_SEPARATOR}(.*)$"))
        .expect("Invalid log line regex")
});

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse `git log` output into commit records, newest first
    ///
    /// Every non-empty line must hold a hash and a subject separated by a tab;
    /// anything else is rejected rather than guessed at.
    pub fn parse_log(output: &str) -> Result<Vec<CommitRecord>, GitError> {
        output
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(Self::parse_log_line)
            .collect()
    }

    /// Parse a single `<hash>\t<subject>` line
    pub fn parse_log_line(line: &str) -> Result<CommitRecord, GitError> {
        let captures = LOG_LINE_REGEX
            .captures(line)
            .ok_or_else(|| GitError::MalformedRecord(line.to_string()))?;

        Ok(CommitRecord::new(&captures[1], &captures[2]))
    }

    /// Parse `git branch --show-current` output
    ///
    /// Returns `None` when no branch is checked out (empty output).
    pub fn parse_current_branch(output: &str) -> Option<String> {
        let branch = output.trim();
        if branch.is_empty() {
            None
        } else {
            Some(branch.to_string())
        }
    }
}
