use serde::{Deserialize, Serialize};

/// A country. One-to-many with [`Owner`](super::Owner): a country has many
/// owners, an owner belongs to exactly one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}
