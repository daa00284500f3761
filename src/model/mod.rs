//! Data models for sidelog
//!
//! This module contains UI-independent data structures representing commits,
//! branch logs and their classification.

mod branch_log;
mod category;
mod commit;

pub use branch_log::BranchLog;
pub use category::{Category, ColorMap};
pub use commit::CommitRecord;
