//! Color theme definitions
//!
//! Centralized color constants for consistent appearance in both the printed
//! output and the interactive view.

use crossterm::style::Color as AnsiColor;
use ratatui::style::{Color, Style};

use crate::model::Category;

/// Colors for commit categories (interactive view)
pub mod category {
    use super::*;

    /// Branch name header
    pub const HEADER: Color = Color::LightCyan;
    /// Commit shared by both branches
    pub const IDENTITY_MATCH: Color = Color::LightGreen;
    /// Same message, different commit
    pub const MESSAGE_MATCH: Color = Color::LightYellow;
    /// Commit unique to one branch
    pub const UNMATCHED: Color = Color::LightRed;
}

/// Colors for commit categories (printed output, bright ANSI colors)
pub mod ansi {
    use super::*;

    pub const HEADER: AnsiColor = AnsiColor::Cyan;
    pub const IDENTITY_MATCH: AnsiColor = AnsiColor::Green;
    pub const MESSAGE_MATCH: AnsiColor = AnsiColor::Yellow;
    pub const UNMATCHED: AnsiColor = AnsiColor::Red;
}

/// Colors for the interactive view chrome
pub mod compare_view {
    use super::*;

    /// Border color
    pub const BORDER: Color = Color::DarkGray;
}

/// Foreground color of a category in the interactive view
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Header => category::HEADER,
        Category::IdentityMatch => category::IDENTITY_MATCH,
        Category::MessageMatch => category::MESSAGE_MATCH,
        Category::Unmatched => category::UNMATCHED,
    }
}

/// Foreground color of a category in printed output
pub fn category_ansi_color(category: Category) -> AnsiColor {
    match category {
        Category::Header => ansi::HEADER,
        Category::IdentityMatch => ansi::IDENTITY_MATCH,
        Category::MessageMatch => ansi::MESSAGE_MATCH,
        Category::Unmatched => ansi::UNMATCHED,
    }
}

/// Style of a category in the interactive view
pub fn category_style(category: Category) -> Style {
    Style::default().fg(category_color(category))
}
