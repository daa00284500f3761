//! Rendering for the application

use ratatui::Frame;

use super::state::App;

impl App {
    /// Render the current frame
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.compare_view.render(frame, area);
    }
}
