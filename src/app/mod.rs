//! Interactive application module
//!
//! Contains the interactive viewer state and logic, split into:
//! - `state`: App struct
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::App;
