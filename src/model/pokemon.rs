use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Pokemon. Many-to-many with categories and owners, one-to-many with
/// reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Pokemon {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name: name.into(),
            birth_date,
        }
    }
}
