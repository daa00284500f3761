//! Keybinding definitions for the interactive view
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (always quits)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Scroll up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Scroll up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Scroll one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Scroll one page down (pager style)
pub const PAGE_DOWN_SPACE: KeyCode = KeyCode::Char(' ');

/// Scroll one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key is page down (PgDn or Space)
pub fn is_page_down(code: KeyCode) -> bool {
    matches!(code, PAGE_DOWN | PAGE_DOWN_SPACE)
}

/// Check if key is page up
pub fn is_page_up(code: KeyCode) -> bool {
    code == PAGE_UP
}
