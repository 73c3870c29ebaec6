use async_trait::async_trait;

use crate::model::{Country, Owner};
use crate::store::{Database, StoreError};

#[async_trait]
pub trait CountryRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Country>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    /// The country an owner belongs to, via the owner's foreign key
    async fn country_by_owner(&self, owner_id: i32) -> Result<Option<Country>, StoreError>;

    async fn owners_by_country(&self, country_id: i32) -> Result<Vec<Owner>, StoreError>;

    async fn create(&self, country: Country) -> Result<bool, StoreError>;

    async fn update(&self, country: Country) -> Result<bool, StoreError>;

    async fn delete(&self, country: Country) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct MemCountryRepo {
    db: Database,
}

impl MemCountryRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepo for MemCountryRepo {
    async fn list(&self) -> Result<Vec<Country>, StoreError> {
        self.db.list_countries()
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Country>, StoreError> {
        self.db.get_country(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.db.country_exists(id)
    }

    async fn country_by_owner(&self, owner_id: i32) -> Result<Option<Country>, StoreError> {
        self.db.country_of_owner(owner_id)
    }

    async fn owners_by_country(&self, country_id: i32) -> Result<Vec<Owner>, StoreError> {
        self.db.owners_in_country(country_id)
    }

    async fn create(&self, country: Country) -> Result<bool, StoreError> {
        let (_, rows) = self.db.insert_country(country)?;
        Ok(rows > 0)
    }

    async fn update(&self, country: Country) -> Result<bool, StoreError> {
        Ok(self.db.update_country(country)? > 0)
    }

    async fn delete(&self, country: Country) -> Result<bool, StoreError> {
        Ok(self.db.delete_country(&country)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_country_by_owner_walks_foreign_key() {
        let db = Database::new();
        let repo = MemCountryRepo::new(db.clone());

        let (country_id, _) = db.insert_country(Country::new("Kanto")).unwrap();
        let (owner_id, _) = db
            .insert_owner(country_id, Owner::new("Jack", "Brocks Gym", 0))
            .unwrap();

        let country = repo.country_by_owner(owner_id).await.unwrap().unwrap();
        assert_eq!(country.name, "Kanto");
        assert!(repo.country_by_owner(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_owners_by_country_filters_on_foreign_key() {
        let db = Database::new();
        let repo = MemCountryRepo::new(db.clone());

        let (kanto, _) = db.insert_country(Country::new("Kanto")).unwrap();
        let (johto, _) = db.insert_country(Country::new("Johto")).unwrap();
        db.insert_owner(kanto, Owner::new("Jack", "Brocks Gym", 0))
            .unwrap();
        db.insert_owner(kanto, Owner::new("Misty", "Cerulean Gym", 0))
            .unwrap();
        db.insert_owner(johto, Owner::new("Falkner", "Violet Gym", 0))
            .unwrap();

        let owners = repo.owners_by_country(kanto).await.unwrap();
        assert_eq!(owners.len(), 2);
        assert!(repo.owners_by_country(99).await.unwrap().is_empty());
    }
}
