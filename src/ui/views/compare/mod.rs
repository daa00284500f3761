//! Compare View - scrollable two-column comparison

mod input;
mod render;

use ratatui::text::{Line, Span};

use crate::compare::Comparison;
use crate::model::Category;
use crate::ui::render::Renderer;
use crate::ui::theme;

/// Actions returned by Compare View key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareAction {
    /// No action needed
    None,
    /// Close the view
    Quit,
}

/// Full-screen view of a rendered comparison
#[derive(Debug, Clone)]
pub struct CompareView {
    title: Line<'static>,
    lines: Vec<Line<'static>>,
    /// Index of the first visible line
    scroll_offset: usize,
    /// Content height of the last render (0 before the first render)
    page_height: usize,
}

impl CompareView {
    /// Build the view from a finished comparison
    pub fn new(comparison: &Comparison, renderer: &Renderer) -> Self {
        let header = theme::category_style(Category::Header);
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(comparison.left.log.name().to_string(), header),
            Span::raw(" vs "),
            Span::styled(comparison.right.log.name().to_string(), header),
            Span::raw(" "),
        ]);

        Self {
            title,
            lines: renderer.render_lines(comparison),
            scroll_offset: 0,
            page_height: 0,
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Largest offset that still fills the page
    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.page_height.max(1))
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Rows moved by a page key
    fn page_size(&self) -> usize {
        self.page_height.max(1)
    }
}
