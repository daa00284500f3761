//! Two-column rendering of a comparison
//!
//! Rows are composed once into [`Row`]s and then serialized either to
//! ratatui [`Line`]s (interactive view) or to strings (printed output, with or
//! without ANSI escapes). Column alignment is always measured on the unstyled
//! text.

use crossterm::style::Stylize;
use ratatui::text::{Line, Span};

use crate::compare::{Column, Comparison};
use crate::model::{Category, CommitRecord};
use crate::ui::theme;

/// Default width of the left column, in display cells
pub const DEFAULT_COLUMN_WIDTH: usize = 55;

/// One classified entry of a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub category: Category,
}

impl Cell {
    fn new(record: &CommitRecord, category: Category) -> Self {
        let text = match category {
            Category::Header => record.identity.clone(),
            _ => record.display_text(),
        };
        Self { text, category }
    }

    /// Display width of the unstyled text
    pub fn width(&self) -> usize {
        Span::raw(self.text.as_str()).width()
    }
}

/// One output line: a left cell, a right cell, or both
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub left: Option<Cell>,
    pub right: Option<Cell>,
}

fn cells(column: &Column) -> impl Iterator<Item = Cell> + '_ {
    column
        .rows()
        .map(|(record, category)| Cell::new(record, category))
}

/// Pair up both columns row by row until the longer one is exhausted
pub fn compose(comparison: &Comparison) -> Vec<Row> {
    let mut left = cells(&comparison.left);
    let mut right = cells(&comparison.right);
    let mut rows = Vec::new();

    loop {
        match (left.next(), right.next()) {
            (None, None) => break,
            (left, right) => rows.push(Row { left, right }),
        }
    }

    rows
}

/// Serializes composed rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    column_width: usize,
    styled: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMN_WIDTH)
    }
}

impl Renderer {
    /// Create a renderer with the given left column width and ANSI styling on
    pub fn new(column_width: usize) -> Self {
        Self {
            column_width,
            styled: true,
        }
    }

    /// Enable or disable ANSI escapes in [`Renderer::to_text`]
    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Blank cells inserted between the left text and the right column
    fn padding(&self, row: &Row) -> usize {
        match (&row.left, &row.right) {
            (Some(left), Some(_)) => self.column_width.saturating_sub(left.width()),
            (None, Some(_)) => self.column_width,
            // Nothing follows a lone left cell
            (_, None) => 0,
        }
    }

    /// Row as a styled ratatui line
    pub fn to_line(&self, row: &Row) -> Line<'static> {
        let mut spans = Vec::with_capacity(3);
        if let Some(left) = &row.left {
            spans.push(Span::styled(
                left.text.clone(),
                theme::category_style(left.category),
            ));
        }
        let padding = self.padding(row);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }
        if let Some(right) = &row.right {
            spans.push(Span::styled(
                right.text.clone(),
                theme::category_style(right.category),
            ));
        }
        Line::from(spans)
    }

    /// Row as a printable string
    pub fn to_text(&self, row: &Row) -> String {
        let mut text = String::new();
        if let Some(left) = &row.left {
            text.push_str(&self.cell_text(left));
        }
        text.push_str(&" ".repeat(self.padding(row)));
        if let Some(right) = &row.right {
            text.push_str(&self.cell_text(right));
        }
        text
    }

    fn cell_text(&self, cell: &Cell) -> String {
        if self.styled {
            cell.text
                .as_str()
                .with(theme::category_ansi_color(cell.category))
                .to_string()
        } else {
            cell.text.clone()
        }
    }

    /// Printable lines for a comparison, newest first
    pub fn render(&self, comparison: &Comparison) -> Vec<String> {
        compose(comparison)
            .iter()
            .map(|row| self.to_text(row))
            .collect()
    }

    /// Styled lines for a comparison, newest first
    pub fn render_lines(&self, comparison: &Comparison) -> Vec<Line<'static>> {
        compose(comparison)
            .iter()
            .map(|row| self.to_line(row))
            .collect()
    }
}
