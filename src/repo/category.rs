use async_trait::async_trait;

use crate::model::{Category, Pokemon};
use crate::store::{Database, StoreError};

#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    /// Pokemon linked to this category through the join table
    async fn pokemons_by_category(&self, category_id: i32) -> Result<Vec<Pokemon>, StoreError>;

    async fn create(&self, category: Category) -> Result<bool, StoreError>;

    async fn update(&self, category: Category) -> Result<bool, StoreError>;

    async fn delete(&self, category: Category) -> Result<bool, StoreError>;
}

/// Memory-backed implementation over the shared [`Database`]
#[derive(Clone)]
pub struct MemCategoryRepo {
    db: Database,
}

impl MemCategoryRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepo for MemCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        self.db.list_categories()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, StoreError> {
        self.db.get_category(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.db.category_exists(id)
    }

    async fn pokemons_by_category(&self, category_id: i32) -> Result<Vec<Pokemon>, StoreError> {
        self.db.pokemons_in_category(category_id)
    }

    async fn create(&self, category: Category) -> Result<bool, StoreError> {
        let (_, rows) = self.db.insert_category(category)?;
        Ok(rows > 0)
    }

    async fn update(&self, category: Category) -> Result<bool, StoreError> {
        Ok(self.db.update_category(category)? > 0)
    }

    async fn delete(&self, category: Category) -> Result<bool, StoreError> {
        Ok(self.db.delete_category(&category)? > 0)
    }
}
