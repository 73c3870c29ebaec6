use serde::{Deserialize, Serialize};

/// Join row linking a Pokemon to a Category.
///
/// Composite key (pokemon_id, category_id); cascade-deletes with either
/// parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonCategory {
    pub pokemon_id: i32,
    pub category_id: i32,
}

/// Join row linking a Pokemon to an Owner.
///
/// Composite key (pokemon_id, owner_id); cascade-deletes with either
/// parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonOwner {
    pub pokemon_id: i32,
    pub owner_id: i32,
}
