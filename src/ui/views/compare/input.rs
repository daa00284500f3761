//! Input handling for CompareView

use crossterm::event::KeyEvent;

use super::{CompareAction, CompareView};
use crate::keys;

impl CompareView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> CompareAction {
        match key.code {
            k if keys::is_move_down(k) => self.scroll_down(1),
            k if keys::is_move_up(k) => self.scroll_up(1),
            k if keys::is_page_down(k) => self.scroll_down(self.page_size()),
            k if keys::is_page_up(k) => self.scroll_up(self.page_size()),
            keys::GO_TOP => self.scroll_to_top(),
            keys::GO_BOTTOM => self.scroll_to_bottom(),
            keys::QUIT | keys::ESC => return CompareAction::Quit,
            _ => {}
        }
        CompareAction::None
    }
}
