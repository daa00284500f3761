//! Message trimming for fixed-width columns

use super::constants::{ELLIPSIS, KEPT_MESSAGE_CHARS, MAX_MESSAGE_CHARS};
use crate::model::{BranchLog, CommitRecord};

/// Shorten a message to at most [`MAX_MESSAGE_CHARS`] characters.
///
/// Longer messages keep their first [`KEPT_MESSAGE_CHARS`] characters
/// followed by [`ELLIPSIS`]. Counts `char`s, so multi-byte text is never split.
pub fn trim_message(message: &str) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message.to_string();
    }
    let mut trimmed: String = message.chars().take(KEPT_MESSAGE_CHARS).collect();
    trimmed.push_str(ELLIPSIS);
    trimmed
}

/// Trim every commit message of a log; the header passes through untouched
pub fn trim_log(log: BranchLog) -> BranchLog {
    log.map_commits(|commit| CommitRecord {
        message: trim_message(&commit.message),
        ..commit
    })
}
