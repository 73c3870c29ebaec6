use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(entity: Category) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let entity = Category {
            id: 3,
            name: "Electric".to_string(),
        };
        let dto = CategoryDto::from(entity.clone());
        assert_eq!(Category::from(dto), entity);
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let dto = CategoryDto {
            id: 0,
            name: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_name_over_200_chars_fails_validation() {
        let dto = CategoryDto {
            id: 0,
            name: "x".repeat(201),
        };
        assert!(dto.validate().is_err());
    }
}
