//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::App;
use crate::keys;
use crate::ui::views::CompareAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        match self.compare_view.handle_key(key) {
            CompareAction::Quit => self.quit(),
            CompareAction::None => {}
        }
    }
}
