//! Repository layer
//!
//! One capability trait per entity type, uniform across entities:
//! `list`, `get_by_id`, `exists`, relation queries, and `create`/`update`/
//! `delete` reporting success as "rows affected > 0". A `false` result is
//! an application-level failure distinct from a raised [`StoreError`],
//! which propagates to the caller.
//!
//! `delete` takes the previously-fetched entity rather than an id; the
//! store removes the supplied row.

mod category;
mod country;
mod owner;
mod pokemon;
mod review;
mod reviewer;

pub use category::{CategoryRepo, MemCategoryRepo};
pub use country::{CountryRepo, MemCountryRepo};
pub use owner::{MemOwnerRepo, OwnerRepo};
pub use pokemon::{MemPokemonRepo, PokemonRepo};
pub use review::{MemReviewRepo, ReviewRepo};
pub use reviewer::{MemReviewerRepo, ReviewerRepo};
