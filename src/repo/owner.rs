use async_trait::async_trait;

use crate::model::{Owner, Pokemon};
use crate::store::{Database, StoreError};

#[async_trait]
pub trait OwnerRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Owner>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Owner>, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    async fn pokemons_by_owner(&self, owner_id: i32) -> Result<Vec<Pokemon>, StoreError>;

    async fn owners_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<Owner>, StoreError>;

    /// Resolve the country by id and attach it to the new owner before
    /// committing
    async fn create(&self, country_id: i32, owner: Owner) -> Result<bool, StoreError>;

    async fn update(&self, owner: Owner) -> Result<bool, StoreError>;

    async fn delete(&self, owner: Owner) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct MemOwnerRepo {
    db: Database,
}

impl MemOwnerRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepo for MemOwnerRepo {
    async fn list(&self) -> Result<Vec<Owner>, StoreError> {
        self.db.list_owners()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Owner>, StoreError> {
        self.db.get_owner(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.db.owner_exists(id)
    }

    async fn pokemons_by_owner(&self, owner_id: i32) -> Result<Vec<Pokemon>, StoreError> {
        self.db.pokemons_of_owner(owner_id)
    }

    async fn owners_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<Owner>, StoreError> {
        self.db.owners_of_pokemon(pokemon_id)
    }

    async fn create(&self, country_id: i32, owner: Owner) -> Result<bool, StoreError> {
        let (_, rows) = self.db.insert_owner(country_id, owner)?;
        Ok(rows > 0)
    }

    async fn update(&self, owner: Owner) -> Result<bool, StoreError> {
        Ok(self.db.update_owner(owner)? > 0)
    }

    async fn delete(&self, owner: Owner) -> Result<bool, StoreError> {
        Ok(self.db.delete_owner(&owner)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;

    #[tokio::test]
    async fn test_create_attaches_country() {
        let db = Database::new();
        let repo = MemOwnerRepo::new(db.clone());
        let (country_id, _) = db.insert_country(Country::new("Kanto")).unwrap();

        assert!(
            repo.create(country_id, Owner::new("Jack", "Brocks Gym", 0))
                .await
                .unwrap()
        );
        let stored = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.country_id, country_id);
    }

    #[tokio::test]
    async fn test_create_with_unknown_country_raises() {
        let repo = MemOwnerRepo::new(Database::new());

        let err = repo
            .create(5, Owner::new("Jack", "Brocks Gym", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey { .. }));
    }
}
