use async_trait::async_trait;

use crate::model::Pokemon;
use crate::store::{Database, StoreError};

#[async_trait]
pub trait PokemonRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Pokemon>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Pokemon>, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    /// Arithmetic mean of this pokemon's review ratings; 0.0 with no
    /// reviews
    async fn rating(&self, pokemon_id: i32) -> Result<f64, StoreError>;

    /// Create the pokemon plus the join rows linking it to one owner and
    /// one category, all in the same commit
    async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        pokemon: Pokemon,
    ) -> Result<bool, StoreError>;

    async fn update(&self, pokemon: Pokemon) -> Result<bool, StoreError>;

    async fn delete(&self, pokemon: Pokemon) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct MemPokemonRepo {
    db: Database,
}

impl MemPokemonRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PokemonRepo for MemPokemonRepo {
    async fn list(&self) -> Result<Vec<Pokemon>, StoreError> {
        self.db.list_pokemons()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Pokemon>, StoreError> {
        self.db.get_pokemon(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.db.pokemon_exists(id)
    }

    async fn rating(&self, pokemon_id: i32) -> Result<f64, StoreError> {
        let reviews = self.db.reviews_of_pokemon(pokemon_id)?;
        if reviews.is_empty() {
            return Ok(0.0);
        }
        let total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
        Ok(total as f64 / reviews.len() as f64)
    }

    async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        pokemon: Pokemon,
    ) -> Result<bool, StoreError> {
        let (_, rows) = self.db.insert_pokemon(owner_id, category_id, pokemon)?;
        Ok(rows > 0)
    }

    async fn update(&self, pokemon: Pokemon) -> Result<bool, StoreError> {
        Ok(self.db.update_pokemon(pokemon)? > 0)
    }

    async fn delete(&self, pokemon: Pokemon) -> Result<bool, StoreError> {
        Ok(self.db.delete_pokemon(&pokemon)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Country, Owner, Review};
    use chrono::NaiveDate;

    async fn pokemon_with_ratings(ratings: &[i32]) -> (MemPokemonRepo, i32) {
        let db = Database::new();
        let (country_id, _) = db.insert_country(Country::new("Kanto")).unwrap();
        let (owner_id, _) = db
            .insert_owner(country_id, Owner::new("Jack", "Brocks Gym", 0))
            .unwrap();
        let (category_id, _) = db.insert_category(Category::new("Electric")).unwrap();
        let (pokemon_id, _) = db
            .insert_pokemon(
                owner_id,
                category_id,
                Pokemon::new("Pikachu", NaiveDate::from_ymd_opt(2002, 12, 27).unwrap()),
            )
            .unwrap();
        for (i, rating) in ratings.iter().enumerate() {
            let mut review = Review::new(format!("review {}", i), "text", *rating);
            review.pokemon_id = Some(pokemon_id);
            db.insert_review(review).unwrap();
        }
        (MemPokemonRepo::new(db), pokemon_id)
    }

    #[tokio::test]
    async fn test_rating_is_mean_of_reviews() {
        let (repo, pokemon_id) = pokemon_with_ratings(&[5, 3, 4]).await;
        assert_eq!(repo.rating(pokemon_id).await.unwrap(), 4.0);
    }

    #[tokio::test]
    async fn test_rating_with_no_reviews_is_zero() {
        let (repo, pokemon_id) = pokemon_with_ratings(&[]).await;
        assert_eq!(repo.rating(pokemon_id).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_rating_averages_fractionally() {
        let (repo, pokemon_id) = pokemon_with_ratings(&[1, 2]).await;
        assert_eq!(repo.rating(pokemon_id).await.unwrap(), 1.5);
    }
}
