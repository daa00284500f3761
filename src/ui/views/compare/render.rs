//! Rendering for CompareView

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::CompareView;
use crate::model::Category;
use crate::ui::theme;

impl CompareView {
    /// Render the view into `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(self.title.clone())
            .title_bottom(legend())
            .border_style(Style::default().fg(theme::compare_view::BORDER));

        // Remember the page size for scrolling and re-clamp after a resize
        self.page_height = area.height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());

        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll_offset)
            .take(self.page_height)
            .cloned()
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

/// Category legend shown in the bottom border
fn legend() -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for category in [
        Category::IdentityMatch,
        Category::MessageMatch,
        Category::Unmatched,
    ] {
        spans.push(Span::styled(
            category.label(),
            theme::category_style(category),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
