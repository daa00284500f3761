//! Branch comparison pipeline
//!
//! raw logs -> message trimming -> classification -> convergence trimming.
//! Rendering lives in [`crate::ui`].

mod classify;
pub mod constants;
mod converge;
mod trim;

pub use classify::classify;
pub use converge::{converge, convergence_cutoff};
pub use trim::{trim_log, trim_message};

use thiserror::Error;

use crate::git::{GitError, LogSource};
use crate::model::{BranchLog, Category, ColorMap, CommitRecord};

/// Errors in the branch arguments given by the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Too few branches: expected one or two branch names")]
    TooFewBranches,

    #[error("Too many branches: expected one or two branch names, got {count}")]
    TooManyBranches { count: usize },
}

/// Which branches to compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchSelection {
    /// Compare the checked-out branch (left) against this one (right)
    AgainstCurrent(String),
    /// Compare two named branches
    Explicit { left: String, right: String },
}

impl BranchSelection {
    /// Interpret the positional branch arguments
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        match args {
            [] => Err(UsageError::TooFewBranches),
            [branch] => Ok(Self::AgainstCurrent(branch.as_ref().to_string())),
            [left, right] => Ok(Self::Explicit {
                left: left.as_ref().to_string(),
                right: right.as_ref().to_string(),
            }),
            _ => Err(UsageError::TooManyBranches { count: args.len() }),
        }
    }

    /// Retrieve both logs from `source`, resolving the current branch if needed
    pub fn load<S: LogSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<(BranchLog, BranchLog), GitError> {
        let (left, right) = match self {
            Self::AgainstCurrent(branch) => (source.current_branch()?, branch.clone()),
            Self::Explicit { left, right } => (left.clone(), right.clone()),
        };
        let left_log = BranchLog::new(left.as_str(), source.branch_log(&left)?);
        let right_log = BranchLog::new(right.as_str(), source.branch_log(&right)?);
        Ok((left_log, right_log))
    }
}

/// One side of a comparison: a log and its index-aligned categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub log: BranchLog,
    pub colors: ColorMap,
}

impl Column {
    /// Keep only the first `rows` rows of both the log and its categories
    pub fn truncate(&mut self, rows: usize) {
        self.log.truncate(rows);
        self.colors.truncate(rows);
    }

    /// Rows paired with their categories
    pub fn rows(&self) -> impl Iterator<Item = (&CommitRecord, Category)> + '_ {
        self.log
            .records()
            .iter()
            .zip(self.colors.as_slice().iter().copied())
    }
}

/// Options for [`compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Drop shared history past the convergence point
    pub converge: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { converge: true }
    }
}

/// Result of comparing two branches, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: Column,
    pub right: Column,
}

/// Run the full comparison pipeline on two raw logs
pub fn compare(left: BranchLog, right: BranchLog, options: CompareOptions) -> Comparison {
    let left = trim_log(left);
    let right = trim_log(right);
    let (left_colors, right_colors) = classify(&left, &right);

    log::debug!(
        "classified {} vs {}: left {} shared / {} renamed / {} unique, right {} shared / {} renamed / {} unique",
        left.name(),
        right.name(),
        left_colors.count(Category::IdentityMatch),
        left_colors.count(Category::MessageMatch),
        left_colors.count(Category::Unmatched),
        right_colors.count(Category::IdentityMatch),
        right_colors.count(Category::MessageMatch),
        right_colors.count(Category::Unmatched),
    );

    let mut left = Column {
        log: left,
        colors: left_colors,
    };
    let mut right = Column {
        log: right,
        colors: right_colors,
    };

    if options.converge {
        let cutoff = converge(&mut left, &mut right);
        log::debug!("convergence cutoff at row {cutoff}");
    }

    Comparison { left, right }
}
