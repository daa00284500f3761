//! sidelog - side-by-side git branch history
//!
//! Renders the logs of two branches in two columns and colors every commit by
//! whether the other branch has it (same hash), has an equivalent (same
//! message) or lacks it. Shared history past the point where both branches
//! converge is cut off.
//!
//! This library provides:
//! - [`app`]: Interactive viewer state and logic
//! - [`cli`]: Command-line arguments
//! - [`compare`]: Trimming, classification and convergence
//! - [`git`]: git command execution and parsing
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: Rendering, theme and views

pub mod app;
pub mod cli;
pub mod compare;
pub mod git;
pub mod keys;
pub mod model;
pub mod ui;
