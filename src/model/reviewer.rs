use serde::{Deserialize, Serialize};

/// A reviewer. One-to-many with [`Review`](super::Review).
///
/// Uniqueness is defined over the concatenation of trimmed last-name +
/// first-name, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Reviewer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Normalized uniqueness key: trimmed last-name + first-name, case-folded
    pub fn unique_key(&self) -> String {
        format!("{}{}", self.last_name.trim(), self.first_name.trim()).to_lowercase()
    }
}
