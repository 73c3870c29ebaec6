use async_trait::async_trait;

use crate::model::{Review, Reviewer};
use crate::store::{Database, StoreError};

#[async_trait]
pub trait ReviewerRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Reviewer>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Reviewer>, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    async fn reviews_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<Review>, StoreError>;

    async fn create(&self, reviewer: Reviewer) -> Result<bool, StoreError>;

    async fn update(&self, reviewer: Reviewer) -> Result<bool, StoreError>;

    async fn delete(&self, reviewer: Reviewer) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct MemReviewerRepo {
    db: Database,
}

impl MemReviewerRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewerRepo for MemReviewerRepo {
    async fn list(&self) -> Result<Vec<Reviewer>, StoreError> {
        self.db.list_reviewers()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Reviewer>, StoreError> {
        self.db.get_reviewer(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.db.reviewer_exists(id)
    }

    async fn reviews_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<Review>, StoreError> {
        self.db.reviews_by_reviewer(reviewer_id)
    }

    async fn create(&self, reviewer: Reviewer) -> Result<bool, StoreError> {
        let (_, rows) = self.db.insert_reviewer(reviewer)?;
        Ok(rows > 0)
    }

    async fn update(&self, reviewer: Reviewer) -> Result<bool, StoreError> {
        Ok(self.db.update_reviewer(reviewer)? > 0)
    }

    async fn delete(&self, reviewer: Reviewer) -> Result<bool, StoreError> {
        Ok(self.db.delete_reviewer(&reviewer)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reviews_by_reviewer_filters_on_reference() {
        let db = Database::new();
        let repo = MemReviewerRepo::new(db.clone());
        let (teddy, _) = db.insert_reviewer(Reviewer::new("Teddy", "Smith")).unwrap();
        let (taylor, _) = db.insert_reviewer(Reviewer::new("Taylor", "Jones")).unwrap();

        let mut review = Review::new("Pikachu", "Great", 5);
        review.reviewer_id = Some(teddy);
        db.insert_review(review).unwrap();

        assert_eq!(repo.reviews_by_reviewer(teddy).await.unwrap().len(), 1);
        assert!(repo.reviews_by_reviewer(taylor).await.unwrap().is_empty());
    }
}
