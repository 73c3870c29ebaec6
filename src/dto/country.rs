use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::Country;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

impl From<Country> for CountryDto {
    fn from(entity: Country) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<CountryDto> for Country {
    fn from(dto: CountryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
