//! Comparison constants
//!
//! Centralized limits used by the trimming stages.

/// Longest message (in characters) shown without truncation
pub const MAX_MESSAGE_CHARS: usize = 31;

/// Characters kept from a message that exceeds [`MAX_MESSAGE_CHARS`]
pub const KEPT_MESSAGE_CHARS: usize = 28;

/// Marker appended to truncated messages
pub const ELLIPSIS: &str = "...";

/// Offset from the last differing row to the convergence cutoff.
///
/// Covers the header row plus one row of shared context.
pub const CONTEXT_ROWS: usize = 2;
