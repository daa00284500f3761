//! Commit classification model

/// How a commit relates to the other branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Synthetic header row (branch name)
    Header,
    /// Same commit identity exists on the other branch
    IdentityMatch,
    /// A different commit with the same message exists on the other branch
    MessageMatch,
    /// No counterpart on the other branch
    Unmatched,
}

impl Category {
    /// Whether this row marks a difference between the branches
    pub fn is_difference(self) -> bool {
        matches!(self, Category::MessageMatch | Category::Unmatched)
    }

    /// Short label used in legends
    pub fn label(self) -> &'static str {
        match self {
            Category::Header => "branch",
            Category::IdentityMatch => "shared",
            Category::MessageMatch => "renamed",
            Category::Unmatched => "unique",
        }
    }
}

/// Per-row categories of one [`BranchLog`](super::BranchLog), index-aligned with it.
///
/// Slot 0 is always [`Category::Header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    categories: Vec<Category>,
}

impl ColorMap {
    /// Build a map from the categories of the commit rows (header excluded)
    pub fn new(commit_categories: impl IntoIterator<Item = Category>) -> Self {
        let categories: Vec<Category> = std::iter::once(Category::Header)
            .chain(commit_categories)
            .collect();
        debug_assert!(
            categories[1..].iter().all(|c| *c != Category::Header),
            "header category is reserved for row 0"
        );
        Self { categories }
    }

    /// Category of row `index`
    pub fn get(&self, index: usize) -> Option<Category> {
        self.categories.get(index).copied()
    }

    /// All categories, header included
    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of rows holding `category`
    pub fn count(&self, category: Category) -> usize {
        self.categories.iter().filter(|c| **c == category).count()
    }

    /// Highest row index holding a difference, if any
    pub fn last_difference(&self) -> Option<usize> {
        self.categories.iter().rposition(|c| c.is_difference())
    }

    /// Keep only the first `rows` rows (header always kept)
    pub fn truncate(&mut self, rows: usize) {
        self.categories.truncate(rows.max(1));
    }
}
