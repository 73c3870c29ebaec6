use async_trait::async_trait;

use crate::model::Review;
use crate::store::{Database, StoreError};

#[async_trait]
pub trait ReviewRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Review>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Review>, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    async fn reviews_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError>;

    /// The review arrives with its reviewer and pokemon references
    /// already attached by the caller
    async fn create(&self, review: Review) -> Result<bool, StoreError>;

    async fn update(&self, review: Review) -> Result<bool, StoreError>;

    async fn delete(&self, review: Review) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct MemReviewRepo {
    db: Database,
}

impl MemReviewRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepo for MemReviewRepo {
    async fn list(&self) -> Result<Vec<Review>, StoreError> {
        self.db.list_reviews()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Review>, StoreError> {
        self.db.get_review(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.db.review_exists(id)
    }

    async fn reviews_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError> {
        self.db.reviews_of_pokemon(pokemon_id)
    }

    async fn create(&self, review: Review) -> Result<bool, StoreError> {
        let (_, rows) = self.db.insert_review(review)?;
        Ok(rows > 0)
    }

    async fn update(&self, review: Review) -> Result<bool, StoreError> {
        Ok(self.db.update_review(review)? > 0)
    }

    async fn delete(&self, review: Review) -> Result<bool, StoreError> {
        Ok(self.db.delete_review(&review)? > 0)
    }
}
