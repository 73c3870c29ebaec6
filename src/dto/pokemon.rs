use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::Pokemon;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Pokemon> for PokemonDto {
    fn from(entity: Pokemon) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_date: entity.birth_date,
        }
    }
}

impl From<PokemonDto> for Pokemon {
    fn from(dto: PokemonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            birth_date: dto.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let entity = Pokemon {
            id: 5,
            name: "Pikachu".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        };
        let dto = PokemonDto::from(entity.clone());
        assert_eq!(Pokemon::from(dto), entity);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let dto = PokemonDto {
            id: 5,
            name: "Pikachu".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["birthDate"], "2000-01-01");
    }
}
