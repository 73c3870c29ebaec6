//! Persisted entity shapes
//!
//! All entities are integer-identified; the store assigns ids on insert.
//! The entity graph is cyclic (Pokemon ↔ Category ↔ Owner via join rows,
//! Review → Pokemon/Reviewer), so relationships are held as separate join
//! records or foreign-key fields rather than embedded object references.

mod category;
mod country;
mod joins;
mod owner;
mod pokemon;
mod review;
mod reviewer;

pub use category::Category;
pub use country::Country;
pub use joins::{PokemonCategory, PokemonOwner};
pub use owner::Owner;
pub use pokemon::Pokemon;
pub use review::Review;
pub use reviewer::Reviewer;
