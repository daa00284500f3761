//! UI layer
//!
//! Contains two-column rendering, views and theme definitions.

pub mod render;
pub mod theme;
pub mod views;
