//! Branch log data model

use super::CommitRecord;

/// Ordered history of one branch, as displayed in one column.
///
/// Index 0 is always a synthetic header record carrying the branch name;
/// indices `1..` are commits, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchLog {
    records: Vec<CommitRecord>,
}

impl BranchLog {
    /// Build a log from a branch name and its commits (newest first)
    pub fn new(name: impl Into<String>, commits: Vec<CommitRecord>) -> Self {
        let mut records = Vec::with_capacity(commits.len() + 1);
        records.push(CommitRecord::new(name, ""));
        records.extend(commits);
        Self { records }
    }

    /// Branch name shown in the header row
    pub fn name(&self) -> &str {
        &self.records[0].identity
    }

    /// The synthetic header record
    pub fn header(&self) -> &CommitRecord {
        &self.records[0]
    }

    /// All rows, header included
    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    /// Commit rows only (header excluded)
    pub fn commits(&self) -> &[CommitRecord] {
        &self.records[1..]
    }

    /// Number of rows, header included (always >= 1)
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Number of commits, header excluded
    pub fn commit_count(&self) -> usize {
        self.records.len() - 1
    }

    /// Rebuild the log with every commit passed through `f`.
    ///
    /// The header is never handed to `f`.
    pub fn map_commits(self, f: impl FnMut(CommitRecord) -> CommitRecord) -> Self {
        let mut records = self.records.into_iter();
        let header = records.next();
        Self {
            records: header.into_iter().chain(records.map(f)).collect(),
        }
    }

    /// Keep only the first `rows` rows.
    ///
    /// Out-of-range values keep the whole log; the header always survives.
    pub fn truncate(&mut self, rows: usize) {
        self.records.truncate(rows.max(1));
    }
}
