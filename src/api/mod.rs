//! HTTP handlers and routing
//!
//! Each entity gets a handler module implementing the ordered pipeline
//! for writes: payload shape (400) → schema validation (400) → foreign
//! existence (404) → uniqueness (422) → mutation (500 on failure). The
//! ordering matters; tests assert on which check fires first.
//!
//! Routing is composed explicitly here rather than through any ambient
//! registry: the [`AppState`] carries one repository handle per entity
//! and the router wires every endpoint against it.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

use axum::extract::rejection::JsonRejection;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use validator::Validate;

use crate::error::ApiError;
use crate::repo::{
    CategoryRepo, CountryRepo, MemCategoryRepo, MemCountryRepo, MemOwnerRepo, MemPokemonRepo,
    MemReviewRepo, MemReviewerRepo, OwnerRepo, PokemonRepo, ReviewRepo, ReviewerRepo,
};
use crate::store::Database;

/// Body of every successful create response
pub const CREATED_MSG: &str = "Successfully created";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepo>,
    pub countries: Arc<dyn CountryRepo>,
    pub owners: Arc<dyn OwnerRepo>,
    pub pokemons: Arc<dyn PokemonRepo>,
    pub reviews: Arc<dyn ReviewRepo>,
    pub reviewers: Arc<dyn ReviewerRepo>,
}

impl AppState {
    /// Wire every repository against the shared store
    pub fn new(db: Database) -> Self {
        Self {
            categories: Arc::new(MemCategoryRepo::new(db.clone())),
            countries: Arc::new(MemCountryRepo::new(db.clone())),
            owners: Arc::new(MemOwnerRepo::new(db.clone())),
            pokemons: Arc::new(MemPokemonRepo::new(db.clone())),
            reviews: Arc::new(MemReviewRepo::new(db.clone())),
            reviewers: Arc::new(MemReviewerRepo::new(db)),
        }
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/category",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/api/category/{id}",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/api/category/pokemon/{categoryId}",
            get(category::pokemons_by_category),
        )
        .route(
            "/api/country",
            get(country::list_countries).post(country::create_country),
        )
        .route(
            "/api/country/{id}",
            get(country::get_country)
                .put(country::update_country)
                .delete(country::delete_country),
        )
        .route(
            "/api/country/owners/{ownerId}",
            get(country::country_of_owner),
        )
        .route("/api/owner", get(owner::list_owners).post(owner::create_owner))
        .route(
            "/api/owner/{id}",
            get(owner::get_owner)
                .put(owner::update_owner)
                .delete(owner::delete_owner),
        )
        .route("/api/owner/{id}/pokemon", get(owner::pokemons_by_owner))
        .route(
            "/api/pokemon",
            get(pokemon::list_pokemons).post(pokemon::create_pokemon),
        )
        .route(
            "/api/pokemon/{id}",
            get(pokemon::get_pokemon)
                .put(pokemon::update_pokemon)
                .delete(pokemon::delete_pokemon),
        )
        .route("/api/pokemon/{id}/rating", get(pokemon::pokemon_rating))
        .route(
            "/api/review",
            get(review::list_reviews).post(review::create_review),
        )
        .route(
            "/api/review/{id}",
            get(review::get_review)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .route(
            "/api/review/pokemon/{pokemonId}",
            get(review::reviews_of_pokemon),
        )
        .route(
            "/api/reviewer",
            get(reviewer::list_reviewers).post(reviewer::create_reviewer),
        )
        .route(
            "/api/reviewer/{id}",
            get(reviewer::get_reviewer)
                .put(reviewer::update_reviewer)
                .delete(reviewer::delete_reviewer),
        )
        .route(
            "/api/reviewer/{id}/reviews",
            get(reviewer::reviews_of_reviewer),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Unwrap the request body, turning any extraction rejection into a 400
pub(crate) fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
    }
}

/// Schema validation failure maps to 400, mirroring model-state checks
pub(crate) fn check_valid<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

/// Normalized name for uniqueness probes: trimmed, case-folded
pub(crate) fn norm(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_trims_and_case_folds() {
        assert_eq!(norm("  Pikachu "), "pikachu");
        assert_eq!(norm("PIKACHU"), norm("pikachu"));
    }
}
