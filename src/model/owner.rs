use serde::{Deserialize, Serialize};

/// A Pokemon owner, attached to exactly one country.
///
/// Many-to-many with [`Pokemon`](super::Pokemon) via
/// [`PokemonOwner`](super::PokemonOwner) join rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i32,
    pub name: String,
    pub gym: String,
    pub country_id: i32,
}

impl Owner {
    pub fn new(name: impl Into<String>, gym: impl Into<String>, country_id: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            gym: gym.into(),
            country_id,
        }
    }
}
