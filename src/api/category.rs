//! Category endpoints

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::{AppState, CREATED_MSG, check_valid, norm, require_body};
use crate::dto::{CategoryDto, PokemonDto};
use crate::error::ApiError;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let categories = state.categories.list().await?;
    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryDto>, ApiError> {
    if !state.categories.exists(id).await? {
        return Err(ApiError::not_found("category", id));
    }

    let category = state
        .categories
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", id))?;

    Ok(Json(category.into()))
}

pub async fn pokemons_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<PokemonDto>>, ApiError> {
    if !state.categories.exists(category_id).await? {
        return Err(ApiError::not_found("category", category_id));
    }

    let pokemons = state.categories.pokemons_by_category(category_id).await?;

    Ok(Json(pokemons.into_iter().map(PokemonDto::from).collect()))
}

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let payload = require_body(payload)?;
    check_valid(&payload)?;

    let categories = state.categories.list().await?;
    if categories.iter().any(|c| norm(&c.name) == norm(&payload.name)) {
        return Err(ApiError::already_exists("Category"));
    }

    if !state.categories.create(payload.into()).await? {
        return Err(ApiError::write_failed("saving"));
    }

    Ok(Json(CREATED_MSG))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = require_body(payload)?;
    if id != payload.id {
        return Err(ApiError::bad_request("path id does not match payload id"));
    }
    check_valid(&payload)?;

    if !state.categories.exists(id).await? {
        return Err(ApiError::not_found("category", id));
    }

    if !state.categories.update(payload.into()).await? {
        return Err(ApiError::write_failed("updating"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.categories.exists(id).await? {
        return Err(ApiError::not_found("category", id));
    }

    // the store's delete takes the tracked row, not an id
    let category = state
        .categories
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", id))?;

    if !state.categories.delete(category).await? {
        return Err(ApiError::write_failed("deleting"));
    }

    Ok(StatusCode::NO_CONTENT)
}
