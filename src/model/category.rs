use serde::{Deserialize, Serialize};

/// A Pokemon category (e.g. "Electric", "Water").
///
/// Many-to-many with [`Pokemon`](super::Pokemon) via
/// [`PokemonCategory`](super::PokemonCategory) join rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Construct a category with no id; the store assigns one on insert
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}
