//! View components
//!
//! Each view represents a screen in the interactive viewer.

mod compare;

pub use compare::{CompareAction, CompareView};
