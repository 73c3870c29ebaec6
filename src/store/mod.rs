//! In-memory relational store
//!
//! Arena-style storage keyed by integer id, one table per entity type plus
//! two join tables held as separate records. Uses RwLock for thread-safe
//! access; every write happens under a single write lock so composite
//! units of work (a Pokemon plus its two join rows) commit atomically.
//!
//! Write operations report the number of rows affected rather than
//! failing on a no-op; callers treat a zero count as an application-level
//! failure distinct from a raised [`StoreError`].

use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::model::{
    Category, Country, Owner, Pokemon, PokemonCategory, PokemonOwner, Review, Reviewer,
};

/// Errors raised by the store itself, as opposed to zero-rows-affected
/// results
#[derive(Debug, Error)]
pub enum StoreError {
    /// A table lock was poisoned by a panicking writer
    #[error("Failed to acquire store lock: {0}")]
    Lock(String),

    /// An insert referenced a row that does not exist
    #[error("Foreign key violation on {table}: {message}")]
    ForeignKey {
        table: &'static str,
        message: String,
    },
}

/// Single entity table: insertion-ordered rows plus an id sequence
struct Table<T> {
    rows: IndexMap<i32, T>,
    seq: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: IndexMap::new(),
            seq: 0,
        }
    }

    fn next_id(&mut self) -> i32 {
        self.seq += 1;
        self.seq
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }

    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Full-row replace; 0 rows affected when the id is unknown
    fn put(&mut self, id: i32, row: T) -> usize {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                1
            }
            None => 0,
        }
    }

    fn remove(&mut self, id: i32) -> usize {
        // shift_remove keeps the remaining rows in insertion order
        match self.rows.shift_remove(&id) {
            Some(_) => 1,
            None => 0,
        }
    }
}

struct Tables {
    categories: Table<Category>,
    countries: Table<Country>,
    owners: Table<Owner>,
    pokemons: Table<Pokemon>,
    reviews: Table<Review>,
    reviewers: Table<Reviewer>,
    pokemon_categories: Vec<PokemonCategory>,
    pokemon_owners: Vec<PokemonOwner>,
}

impl Tables {
    fn new() -> Self {
        Self {
            categories: Table::new(),
            countries: Table::new(),
            owners: Table::new(),
            pokemons: Table::new(),
            reviews: Table::new(),
            reviewers: Table::new(),
            pokemon_categories: Vec::new(),
            pokemon_owners: Vec::new(),
        }
    }
}

/// Handle to the shared store. Cloning is cheap and all clones see the
/// same tables.
#[derive(Clone)]
pub struct Database {
    inner: Arc<RwLock<Tables>>,
}

impl Database {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Tables::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner.read().map_err(|e| StoreError::Lock(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// True when no relationship rows exist yet; used to keep seeding
    /// idempotent
    pub fn is_unseeded(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.pokemon_owners.is_empty())
    }

    // === Category ===

    pub fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.list())
    }

    pub fn get_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        Ok(self.read()?.categories.get(id))
    }

    pub fn category_exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.read()?.categories.contains(id))
    }

    /// Insert with store-assigned id; returns (assigned id, rows affected)
    pub fn insert_category(&self, mut category: Category) -> Result<(i32, usize), StoreError> {
        let mut tables = self.write()?;
        let id = tables.categories.next_id();
        category.id = id;
        tables.categories.rows.insert(id, category);
        Ok((id, 1))
    }

    pub fn update_category(&self, category: Category) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.categories.put(category.id, category))
    }

    /// Remove the row and cascade its join rows
    pub fn delete_category(&self, category: &Category) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let mut rows = tables.categories.remove(category.id);
        if rows > 0 {
            rows += drain_join(&mut tables.pokemon_categories, |j| {
                j.category_id == category.id
            });
        }
        Ok(rows)
    }

    pub fn pokemons_in_category(&self, category_id: i32) -> Result<Vec<Pokemon>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .pokemon_categories
            .iter()
            .filter(|j| j.category_id == category_id)
            .filter_map(|j| tables.pokemons.get(j.pokemon_id))
            .collect())
    }

    // === Country ===

    pub fn list_countries(&self) -> Result<Vec<Country>, StoreError> {
        Ok(self.read()?.countries.list())
    }

    pub fn get_country(&self, id: i32) -> Result<Option<Country>, StoreError> {
        Ok(self.read()?.countries.get(id))
    }

    pub fn country_exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.read()?.countries.contains(id))
    }

    pub fn insert_country(&self, mut country: Country) -> Result<(i32, usize), StoreError> {
        let mut tables = self.write()?;
        let id = tables.countries.next_id();
        country.id = id;
        tables.countries.rows.insert(id, country);
        Ok((id, 1))
    }

    pub fn update_country(&self, country: Country) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.countries.put(country.id, country))
    }

    /// Remove the row and cascade its owners, which in turn cascade their
    /// join rows
    pub fn delete_country(&self, country: &Country) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let mut rows = tables.countries.remove(country.id);
        if rows > 0 {
            let orphaned: Vec<i32> = tables
                .owners
                .rows
                .values()
                .filter(|o| o.country_id == country.id)
                .map(|o| o.id)
                .collect();
            for owner_id in orphaned {
                rows += tables.owners.remove(owner_id);
                rows += drain_join(&mut tables.pokemon_owners, |j| j.owner_id == owner_id);
            }
        }
        Ok(rows)
    }

    pub fn country_of_owner(&self, owner_id: i32) -> Result<Option<Country>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .owners
            .get(owner_id)
            .and_then(|o| tables.countries.get(o.country_id)))
    }

    pub fn owners_in_country(&self, country_id: i32) -> Result<Vec<Owner>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .owners
            .rows
            .values()
            .filter(|o| o.country_id == country_id)
            .cloned()
            .collect())
    }

    // === Owner ===

    pub fn list_owners(&self) -> Result<Vec<Owner>, StoreError> {
        Ok(self.read()?.owners.list())
    }

    pub fn get_owner(&self, id: i32) -> Result<Option<Owner>, StoreError> {
        Ok(self.read()?.owners.get(id))
    }

    pub fn owner_exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.read()?.owners.contains(id))
    }

    /// Insert an owner attached to a country, resolved in the same commit
    pub fn insert_owner(
        &self,
        country_id: i32,
        mut owner: Owner,
    ) -> Result<(i32, usize), StoreError> {
        let mut tables = self.write()?;
        if !tables.countries.contains(country_id) {
            return Err(StoreError::ForeignKey {
                table: "Owner",
                message: format!("country {} does not exist", country_id),
            });
        }
        let id = tables.owners.next_id();
        owner.id = id;
        owner.country_id = country_id;
        tables.owners.rows.insert(id, owner);
        Ok((id, 1))
    }

    pub fn update_owner(&self, owner: Owner) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.owners.put(owner.id, owner))
    }

    pub fn delete_owner(&self, owner: &Owner) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let mut rows = tables.owners.remove(owner.id);
        if rows > 0 {
            rows += drain_join(&mut tables.pokemon_owners, |j| j.owner_id == owner.id);
        }
        Ok(rows)
    }

    pub fn pokemons_of_owner(&self, owner_id: i32) -> Result<Vec<Pokemon>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .pokemon_owners
            .iter()
            .filter(|j| j.owner_id == owner_id)
            .filter_map(|j| tables.pokemons.get(j.pokemon_id))
            .collect())
    }

    pub fn owners_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<Owner>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .pokemon_owners
            .iter()
            .filter(|j| j.pokemon_id == pokemon_id)
            .filter_map(|j| tables.owners.get(j.owner_id))
            .collect())
    }

    // === Pokemon ===

    pub fn list_pokemons(&self) -> Result<Vec<Pokemon>, StoreError> {
        Ok(self.read()?.pokemons.list())
    }

    pub fn get_pokemon(&self, id: i32) -> Result<Option<Pokemon>, StoreError> {
        Ok(self.read()?.pokemons.get(id))
    }

    pub fn pokemon_exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.read()?.pokemons.contains(id))
    }

    /// Insert a pokemon together with the join rows linking it to one
    /// owner and one category, in a single commit
    pub fn insert_pokemon(
        &self,
        owner_id: i32,
        category_id: i32,
        mut pokemon: Pokemon,
    ) -> Result<(i32, usize), StoreError> {
        let mut tables = self.write()?;
        if !tables.owners.contains(owner_id) {
            return Err(StoreError::ForeignKey {
                table: "PokemonOwner",
                message: format!("owner {} does not exist", owner_id),
            });
        }
        if !tables.categories.contains(category_id) {
            return Err(StoreError::ForeignKey {
                table: "PokemonCategory",
                message: format!("category {} does not exist", category_id),
            });
        }
        let id = tables.pokemons.next_id();
        pokemon.id = id;
        tables.pokemons.rows.insert(id, pokemon);
        tables.pokemon_owners.push(PokemonOwner {
            pokemon_id: id,
            owner_id,
        });
        tables.pokemon_categories.push(PokemonCategory {
            pokemon_id: id,
            category_id,
        });
        Ok((id, 3))
    }

    pub fn update_pokemon(&self, pokemon: Pokemon) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.pokemons.put(pokemon.id, pokemon))
    }

    /// Remove the row and cascade its join rows and reviews
    pub fn delete_pokemon(&self, pokemon: &Pokemon) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let mut rows = tables.pokemons.remove(pokemon.id);
        if rows > 0 {
            rows += drain_join(&mut tables.pokemon_owners, |j| j.pokemon_id == pokemon.id);
            rows += drain_join(&mut tables.pokemon_categories, |j| {
                j.pokemon_id == pokemon.id
            });
            let orphaned: Vec<i32> = tables
                .reviews
                .rows
                .values()
                .filter(|r| r.pokemon_id == Some(pokemon.id))
                .map(|r| r.id)
                .collect();
            for review_id in orphaned {
                rows += tables.reviews.remove(review_id);
            }
        }
        Ok(rows)
    }

    // === Review ===

    pub fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(self.read()?.reviews.list())
    }

    pub fn get_review(&self, id: i32) -> Result<Option<Review>, StoreError> {
        Ok(self.read()?.reviews.get(id))
    }

    pub fn review_exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.read()?.reviews.contains(id))
    }

    pub fn insert_review(&self, mut review: Review) -> Result<(i32, usize), StoreError> {
        let mut tables = self.write()?;
        if let Some(reviewer_id) = review.reviewer_id
            && !tables.reviewers.contains(reviewer_id)
        {
            return Err(StoreError::ForeignKey {
                table: "Review",
                message: format!("reviewer {} does not exist", reviewer_id),
            });
        }
        if let Some(pokemon_id) = review.pokemon_id
            && !tables.pokemons.contains(pokemon_id)
        {
            return Err(StoreError::ForeignKey {
                table: "Review",
                message: format!("pokemon {} does not exist", pokemon_id),
            });
        }
        let id = tables.reviews.next_id();
        review.id = id;
        tables.reviews.rows.insert(id, review);
        Ok((id, 1))
    }

    pub fn update_review(&self, review: Review) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.reviews.put(review.id, review))
    }

    pub fn delete_review(&self, review: &Review) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.reviews.remove(review.id))
    }

    pub fn reviews_of_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .reviews
            .rows
            .values()
            .filter(|r| r.pokemon_id == Some(pokemon_id))
            .cloned()
            .collect())
    }

    pub fn reviews_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<Review>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .reviews
            .rows
            .values()
            .filter(|r| r.reviewer_id == Some(reviewer_id))
            .cloned()
            .collect())
    }

    // === Reviewer ===

    pub fn list_reviewers(&self) -> Result<Vec<Reviewer>, StoreError> {
        Ok(self.read()?.reviewers.list())
    }

    pub fn get_reviewer(&self, id: i32) -> Result<Option<Reviewer>, StoreError> {
        Ok(self.read()?.reviewers.get(id))
    }

    pub fn reviewer_exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.read()?.reviewers.contains(id))
    }

    pub fn insert_reviewer(&self, mut reviewer: Reviewer) -> Result<(i32, usize), StoreError> {
        let mut tables = self.write()?;
        let id = tables.reviewers.next_id();
        reviewer.id = id;
        tables.reviewers.rows.insert(id, reviewer);
        Ok((id, 1))
    }

    pub fn update_reviewer(&self, reviewer: Reviewer) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.reviewers.put(reviewer.id, reviewer))
    }

    /// Remove the row and cascade the reviews written by this reviewer
    pub fn delete_reviewer(&self, reviewer: &Reviewer) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let mut rows = tables.reviewers.remove(reviewer.id);
        if rows > 0 {
            let orphaned: Vec<i32> = tables
                .reviews
                .rows
                .values()
                .filter(|r| r.reviewer_id == Some(reviewer.id))
                .map(|r| r.id)
                .collect();
            for review_id in orphaned {
                rows += tables.reviews.remove(review_id);
            }
        }
        Ok(rows)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove matching join rows, returning how many were removed
fn drain_join<T>(joins: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> usize {
    let before = joins.len();
    joins.retain(|j| !matches(j));
    before - joins.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    /// Country + owner + category, the minimum graph a pokemon insert needs
    fn seed_parents(db: &Database) -> (i32, i32) {
        let (country_id, _) = db.insert_country(Country::new("Kanto")).unwrap();
        let (owner_id, _) = db
            .insert_owner(country_id, Owner::new("Jack", "Brocks Gym", 0))
            .unwrap();
        let (category_id, _) = db.insert_category(Category::new("Electric")).unwrap();
        (owner_id, category_id)
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let db = Database::new();
        let (first, rows) = db.insert_category(Category::new("Electric")).unwrap();
        let (second, _) = db.insert_category(Category::new("Water")).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_update_missing_row_affects_zero_rows() {
        let db = Database::new();
        let rows = db
            .update_category(Category {
                id: 99,
                name: "Ghost".to_string(),
            })
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_insert_pokemon_writes_both_join_rows() {
        let db = Database::new();
        let (owner_id, category_id) = seed_parents(&db);

        let (pokemon_id, rows) = db
            .insert_pokemon(owner_id, category_id, Pokemon::new("Pikachu", birth_date()))
            .unwrap();

        assert_eq!(rows, 3);
        assert_eq!(db.pokemons_of_owner(owner_id).unwrap().len(), 1);
        assert_eq!(db.pokemons_in_category(category_id).unwrap().len(), 1);
        assert_eq!(db.owners_of_pokemon(pokemon_id).unwrap().len(), 1);
    }

    #[test]
    fn test_insert_pokemon_with_unknown_owner_is_foreign_key_error() {
        let db = Database::new();
        let (_, category_id) = seed_parents(&db);

        let err = db
            .insert_pokemon(42, category_id, Pokemon::new("Mew", birth_date()))
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey { .. }));
        // nothing was persisted
        assert!(db.list_pokemons().unwrap().is_empty());
    }

    #[test]
    fn test_delete_pokemon_cascades_joins_and_reviews() {
        let db = Database::new();
        let (owner_id, category_id) = seed_parents(&db);
        let (pokemon_id, _) = db
            .insert_pokemon(owner_id, category_id, Pokemon::new("Pikachu", birth_date()))
            .unwrap();
        let mut review = Review::new("Pikachu", "Shockingly good", 5);
        review.pokemon_id = Some(pokemon_id);
        db.insert_review(review).unwrap();

        let pokemon = db.get_pokemon(pokemon_id).unwrap().unwrap();
        let rows = db.delete_pokemon(&pokemon).unwrap();

        // pokemon + two join rows + one review
        assert_eq!(rows, 4);
        assert!(db.owners_of_pokemon(pokemon_id).unwrap().is_empty());
        assert!(db.reviews_of_pokemon(pokemon_id).unwrap().is_empty());
    }

    #[test]
    fn test_delete_category_cascades_join_rows_only() {
        let db = Database::new();
        let (owner_id, category_id) = seed_parents(&db);
        let (pokemon_id, _) = db
            .insert_pokemon(owner_id, category_id, Pokemon::new("Pikachu", birth_date()))
            .unwrap();

        let category = db.get_category(category_id).unwrap().unwrap();
        let rows = db.delete_category(&category).unwrap();

        assert_eq!(rows, 2);
        assert!(db.pokemon_exists(pokemon_id).unwrap());
        assert!(db.pokemons_in_category(category_id).unwrap().is_empty());
    }

    #[test]
    fn test_delete_country_cascades_owners_and_their_joins() {
        let db = Database::new();
        let (owner_id, category_id) = seed_parents(&db);
        db.insert_pokemon(owner_id, category_id, Pokemon::new("Pikachu", birth_date()))
            .unwrap();

        let country = db.get_country(1).unwrap().unwrap();
        let rows = db.delete_country(&country).unwrap();

        // country + owner + one join row
        assert_eq!(rows, 3);
        assert!(!db.owner_exists(owner_id).unwrap());
        assert!(db.pokemons_of_owner(owner_id).unwrap().is_empty());
    }

    #[test]
    fn test_delete_reviewer_cascades_reviews() {
        let db = Database::new();
        let (reviewer_id, _) = db.insert_reviewer(Reviewer::new("Teddy", "Smith")).unwrap();
        let mut review = Review::new("Pikachu", "Great", 5);
        review.reviewer_id = Some(reviewer_id);
        db.insert_review(review).unwrap();

        let reviewer = db.get_reviewer(reviewer_id).unwrap().unwrap();
        let rows = db.delete_reviewer(&reviewer).unwrap();

        assert_eq!(rows, 2);
        assert!(db.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn test_owner_insert_resolves_country() {
        let db = Database::new();
        let err = db
            .insert_owner(7, Owner::new("Ash", "Pallet Gym", 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey { .. }));

        let (country_id, _) = db.insert_country(Country::new("Kanto")).unwrap();
        let (owner_id, _) = db
            .insert_owner(country_id, Owner::new("Ash", "Pallet Gym", 0))
            .unwrap();
        let stored = db.get_owner(owner_id).unwrap().unwrap();
        assert_eq!(stored.country_id, country_id);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let db = Database::new();
        for name in ["Electric", "Water", "Leaf"] {
            db.insert_category(Category::new(name)).unwrap();
        }
        let names: Vec<String> = db
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Electric", "Water", "Leaf"]);
    }
}
