use serde::{Deserialize, Serialize};
use validator::Validate;

use super::CountryDto;
use crate::model::Owner;

/// Owner wire shape. Carries a shallow nested country on reads; the
/// country is ignored on writes, where the owning reference comes from
/// the `countryId` query parameter instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub gym: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryDto>,
}

impl OwnerDto {
    /// Map an owner together with its resolved country
    pub fn from_parts(entity: Owner, country: Option<CountryDto>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            gym: entity.gym,
            country,
        }
    }

    /// Map back to the persisted shape, attaching the owning country id
    pub fn into_entity(self, country_id: i32) -> Owner {
        Owner {
            id: self.id,
            name: self.name,
            gym: self.gym,
            country_id,
        }
    }
}
