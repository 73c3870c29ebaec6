use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::Review;

/// Review wire shape. The reviewer and pokemon references are resolved
/// from query parameters at creation time and never travel in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    pub rating: i32,
}

impl From<Review> for ReviewDto {
    fn from(entity: Review) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            rating: entity.rating,
        }
    }
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            rating: dto.rating,
            reviewer_id: None,
            pokemon_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_scalar_fields() {
        let entity = Review {
            id: 4,
            title: "Pikachu".to_string(),
            description: "The best pokemon".to_string(),
            rating: 5,
            reviewer_id: None,
            pokemon_id: None,
        };
        let dto = ReviewDto::from(entity.clone());
        assert_eq!(Review::from(dto), entity);
    }

    #[test]
    fn test_description_over_1000_chars_fails_validation() {
        let dto = ReviewDto {
            id: 0,
            title: "t".to_string(),
            description: "d".repeat(1001),
            rating: 3,
        };
        assert!(dto.validate().is_err());
    }
}
