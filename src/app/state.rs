//! Application state

use crate::ui::views::CompareView;

/// The interactive viewer state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Comparison being displayed
    pub compare_view: CompareView,
}

impl App {
    /// Create an app showing `compare_view`
    pub fn new(compare_view: CompareView) -> Self {
        Self {
            running: true,
            compare_view,
        }
    }

    /// Stop the event loop after the current iteration
    pub fn quit(&mut self) {
        self.running = false;
    }
}
