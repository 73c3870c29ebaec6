//! Wire DTOs and entity mapping
//!
//! DTOs are the HTTP-facing shapes of the persisted entities: camelCase
//! field names, schema validation rules attached via `validator`, and
//! pure field-by-field mapping in both directions. Nested relations are
//! mapped shallowly and only where the DTO exposes the field (the owner
//! DTO carries its country; the pokemon DTO does not carry its reviews).

mod category;
mod country;
mod owner;
mod pokemon;
mod review;
mod reviewer;

pub use category::CategoryDto;
pub use country::CountryDto;
pub use owner::OwnerDto;
pub use pokemon::PokemonDto;
pub use review::ReviewDto;
pub use reviewer::ReviewerDto;
