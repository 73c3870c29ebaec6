use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::Reviewer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
}

impl From<Reviewer> for ReviewerDto {
    fn from(entity: Reviewer) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }
}

impl From<ReviewerDto> for Reviewer {
    fn from(dto: ReviewerDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let entity = Reviewer {
            id: 2,
            first_name: "Ash".to_string(),
            last_name: "Ketchum".to_string(),
        };
        let dto = ReviewerDto::from(entity.clone());
        assert_eq!(Reviewer::from(dto), entity);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::json!({"firstName": "Ash", "lastName": "Ketchum"});
        let dto: ReviewerDto = serde_json::from_value(json).unwrap();
        assert_eq!(dto.id, 0);
        assert_eq!(dto.first_name, "Ash");
    }
}
