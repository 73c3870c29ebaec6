use serde::{Deserialize, Serialize};

/// A review of a Pokemon, written by a reviewer.
///
/// Both references are optional at the schema level; the create endpoint
/// resolves and attaches them before the row reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub reviewer_id: Option<i32>,
    pub pokemon_id: Option<i32>,
}

impl Review {
    pub fn new(title: impl Into<String>, description: impl Into<String>, rating: i32) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            rating,
            reviewer_id: None,
            pokemon_id: None,
        }
    }
}
