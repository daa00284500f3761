//! git log format definitions for stable output parsing
//!
//! The format ensures consistent, parseable output regardless of user
//! configuration (`format.pretty`, `log.abbrevCommit`, ...).

/// Separator used between fields in formatted output (tab character)
pub const FIELD_SEPARATOR: char = '\t';

/// Formats for git commands
pub struct Templates;

impl Templates {
    /// Format argument for `git log`
    ///
    /// Fields (separated by tab):
    /// 1. abbreviated commit hash
    /// 2. subject (first line of the message)
    ///
    /// `%x09` is git's escape for a tab, so the argument itself stays printable.
    pub fn log() -> &'static str {
        "--pretty=format:%h%x09%s"
    }
}
