//! Commit record data model

/// A single commit as shown in one column: short hash plus subject line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRecord {
    /// Abbreviated commit hash (unique within a branch).
    ///
    /// For the header record this holds the branch name.
    pub identity: String,

    /// First line of the commit message
    pub message: String,
}

impl CommitRecord {
    /// Create a record from its identity token and message
    pub fn new(identity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            message: message.into(),
        }
    }

    /// Text shown for this record: `"<identity> <message>"`
    pub fn display_text(&self) -> String {
        format!("{} {}", self.identity, self.message)
    }
}
