//! Demo data set
//!
//! Populates an empty store with three pokemon, their owners, countries,
//! categories, reviewers and reviews. A store that already holds
//! relationship rows is left untouched, so seeding is idempotent.

use chrono::NaiveDate;

use crate::model::{Category, Country, Owner, Pokemon, Review, Reviewer};
use crate::store::{Database, StoreError};

struct PokemonSeed {
    name: &'static str,
    birth_date: (i32, u32, u32),
    category: &'static str,
    owner: (&'static str, &'static str, &'static str),
    reviews: [(&'static str, &'static str, i32, (&'static str, &'static str)); 3],
}

const SEED: [PokemonSeed; 3] = [
    PokemonSeed {
        name: "Pikachu",
        birth_date: (2002, 12, 27),
        category: "Electric",
        owner: ("Jack London", "Brocks Gym", "Kanto"),
        reviews: [
            (
                "Pikachu",
                "Pikachu is the best pokemon, because it is electric",
                5,
                ("Teddy", "Smith"),
            ),
            (
                "Pikachu",
                "Pikachu is the best at killing rocks",
                5,
                ("Taylor", "Jones"),
            ),
            ("Pikachu", "Pikachu, pikachu, pikachu", 1, ("Jessica", "McGregor")),
        ],
    },
    PokemonSeed {
        name: "Squirtle",
        birth_date: (2001, 12, 27),
        category: "Water",
        owner: ("Harry Potter", "Mudboys Gym", "Saffron City"),
        reviews: [
            ("Squirtle", "Squirtle is the best water pokemon", 5, ("Teddy", "Smith")),
            ("Squirtle", "Squirtle soaks everything in sight", 4, ("Taylor", "Jones")),
            ("Squirtle", "Squirtle, squirtle, squirtle", 2, ("Jessica", "McGregor")),
        ],
    },
    PokemonSeed {
        name: "Venusaur",
        birth_date: (2000, 10, 3),
        category: "Leaf",
        owner: ("Ash Ketchum", "Pallet Gym", "Millet Town"),
        reviews: [
            ("Venusaur", "Venusaur is the best grass pokemon", 5, ("Teddy", "Smith")),
            ("Venusaur", "Venusaur smells like a flower bed", 3, ("Taylor", "Jones")),
            ("Venusaur", "Venusaur, venusaur, venusaur", 1, ("Jessica", "McGregor")),
        ],
    },
];

/// Load the demo data set into an empty store
pub fn seed_database(db: &Database) -> Result<(), StoreError> {
    if !db.is_unseeded()? {
        return Ok(());
    }

    for entry in &SEED {
        let (owner_name, gym, country_name) = entry.owner;

        let country_id = match find_country(db, country_name)? {
            Some(id) => id,
            None => db.insert_country(Country::new(country_name))?.0,
        };
        let (owner_id, _) = db.insert_owner(country_id, Owner::new(owner_name, gym, 0))?;
        let (category_id, _) = db.insert_category(Category::new(entry.category))?;

        let (year, month, day) = entry.birth_date;
        let birth_date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("seed birth dates are valid calendar dates");
        let (pokemon_id, _) =
            db.insert_pokemon(owner_id, category_id, Pokemon::new(entry.name, birth_date))?;

        for (title, description, rating, (first, last)) in entry.reviews {
            let reviewer_id = match find_reviewer(db, first, last)? {
                Some(id) => id,
                None => db.insert_reviewer(Reviewer::new(first, last))?.0,
            };
            let mut review = Review::new(title, description, rating);
            review.reviewer_id = Some(reviewer_id);
            review.pokemon_id = Some(pokemon_id);
            db.insert_review(review)?;
        }
    }

    tracing::info!("seeded demo data set");
    Ok(())
}

fn find_country(db: &Database, name: &str) -> Result<Option<i32>, StoreError> {
    Ok(db
        .list_countries()?
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.id))
}

fn find_reviewer(db: &Database, first: &str, last: &str) -> Result<Option<i32>, StoreError> {
    Ok(db
        .list_reviewers()?
        .into_iter()
        .find(|r| r.first_name == first && r.last_name == last)
        .map(|r| r.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_all_tables() {
        let db = Database::new();
        seed_database(&db).unwrap();

        assert_eq!(db.list_pokemons().unwrap().len(), 3);
        assert_eq!(db.list_categories().unwrap().len(), 3);
        assert_eq!(db.list_owners().unwrap().len(), 3);
        assert_eq!(db.list_countries().unwrap().len(), 3);
        assert_eq!(db.list_reviewers().unwrap().len(), 3);
        assert_eq!(db.list_reviews().unwrap().len(), 9);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = Database::new();
        seed_database(&db).unwrap();
        seed_database(&db).unwrap();

        assert_eq!(db.list_pokemons().unwrap().len(), 3);
        assert_eq!(db.list_reviews().unwrap().len(), 9);
    }

    #[test]
    fn test_seed_reuses_shared_reviewers() {
        let db = Database::new();
        seed_database(&db).unwrap();

        // Teddy Smith reviewed all three pokemon
        let teddy = db
            .list_reviewers()
            .unwrap()
            .into_iter()
            .find(|r| r.first_name == "Teddy")
            .unwrap();
        assert_eq!(db.reviews_by_reviewer(teddy.id).unwrap().len(), 3);
    }
}
