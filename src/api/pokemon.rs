//! Pokemon endpoints
//!
//! Creation atomically links the new pokemon to one owner and one
//! category supplied by id; both join rows land in the same commit.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::{AppState, CREATED_MSG, check_valid, norm, require_body};
use crate::dto::PokemonDto;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonParents {
    pub owner_id: i32,
    pub category_id: i32,
}

pub async fn list_pokemons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PokemonDto>>, ApiError> {
    let pokemons = state.pokemons.list().await?;
    Ok(Json(pokemons.into_iter().map(PokemonDto::from).collect()))
}

pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PokemonDto>, ApiError> {
    if !state.pokemons.exists(id).await? {
        return Err(ApiError::not_found("pokemon", id));
    }

    let pokemon = state
        .pokemons
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("pokemon", id))?;

    Ok(Json(pokemon.into()))
}

/// Review-derived rating: the mean of this pokemon's review ratings
pub async fn pokemon_rating(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<f64>, ApiError> {
    if !state.pokemons.exists(id).await? {
        return Err(ApiError::not_found("pokemon", id));
    }

    let rating = state.pokemons.rating(id).await?;

    Ok(Json(rating))
}

pub async fn create_pokemon(
    State(state): State<AppState>,
    Query(parents): Query<PokemonParents>,
    payload: Result<Json<PokemonDto>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let payload = require_body(payload)?;
    check_valid(&payload)?;

    if !state.owners.exists(parents.owner_id).await? {
        return Err(ApiError::not_found("owner", parents.owner_id));
    }
    if !state.categories.exists(parents.category_id).await? {
        return Err(ApiError::not_found("category", parents.category_id));
    }

    let pokemons = state.pokemons.list().await?;
    if pokemons.iter().any(|p| norm(&p.name) == norm(&payload.name)) {
        return Err(ApiError::already_exists("Pokemon"));
    }

    if !state
        .pokemons
        .create(parents.owner_id, parents.category_id, payload.into())
        .await?
    {
        return Err(ApiError::write_failed("saving"));
    }

    Ok(Json(CREATED_MSG))
}

pub async fn update_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(parents): Query<PokemonParents>,
    payload: Result<Json<PokemonDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = require_body(payload)?;
    if id != payload.id {
        return Err(ApiError::bad_request("path id does not match payload id"));
    }
    check_valid(&payload)?;

    if !state.pokemons.exists(id).await? {
        return Err(ApiError::not_found("pokemon", id));
    }
    if !state.owners.exists(parents.owner_id).await? {
        return Err(ApiError::not_found("owner", parents.owner_id));
    }
    if !state.categories.exists(parents.category_id).await? {
        return Err(ApiError::not_found("category", parents.category_id));
    }

    if !state.pokemons.update(payload.into()).await? {
        return Err(ApiError::write_failed("updating"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.pokemons.exists(id).await? {
        return Err(ApiError::not_found("pokemon", id));
    }

    let pokemon = state
        .pokemons
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("pokemon", id))?;

    if !state.pokemons.delete(pokemon).await? {
        return Err(ApiError::write_failed("deleting"));
    }

    Ok(StatusCode::NO_CONTENT)
}
