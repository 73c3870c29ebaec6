//! Owner endpoints
//!
//! Owner creation takes the owning country by id as a query parameter;
//! the repository resolves and attaches it before committing.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::{AppState, CREATED_MSG, check_valid, norm, require_body};
use crate::dto::{CountryDto, OwnerDto, PokemonDto};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOwnerParams {
    pub country_id: i32,
}

pub async fn list_owners(State(state): State<AppState>) -> Result<Json<Vec<OwnerDto>>, ApiError> {
    let owners = state.owners.list().await?;

    let mut dtos = Vec::with_capacity(owners.len());
    for owner in owners {
        let country = state.countries.get_by_id(owner.country_id).await?;
        dtos.push(OwnerDto::from_parts(owner, country.map(CountryDto::from)));
    }

    Ok(Json(dtos))
}

pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OwnerDto>, ApiError> {
    if !state.owners.exists(id).await? {
        return Err(ApiError::not_found("owner", id));
    }

    let owner = state
        .owners
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("owner", id))?;
    let country = state.countries.get_by_id(owner.country_id).await?;

    Ok(Json(OwnerDto::from_parts(
        owner,
        country.map(CountryDto::from),
    )))
}

pub async fn pokemons_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<Json<Vec<PokemonDto>>, ApiError> {
    if !state.owners.exists(owner_id).await? {
        return Err(ApiError::not_found("owner", owner_id));
    }

    let pokemons = state.owners.pokemons_by_owner(owner_id).await?;

    Ok(Json(pokemons.into_iter().map(PokemonDto::from).collect()))
}

pub async fn create_owner(
    State(state): State<AppState>,
    Query(params): Query<NewOwnerParams>,
    payload: Result<Json<OwnerDto>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let payload = require_body(payload)?;
    check_valid(&payload)?;

    if !state.countries.exists(params.country_id).await? {
        return Err(ApiError::not_found("country", params.country_id));
    }

    let owners = state.owners.list().await?;
    if owners.iter().any(|o| norm(&o.name) == norm(&payload.name)) {
        return Err(ApiError::already_exists("Owner"));
    }

    let owner = payload.into_entity(params.country_id);
    if !state.owners.create(params.country_id, owner).await? {
        return Err(ApiError::write_failed("saving"));
    }

    Ok(Json(CREATED_MSG))
}

pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<OwnerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = require_body(payload)?;
    if id != payload.id {
        return Err(ApiError::bad_request("path id does not match payload id"));
    }
    check_valid(&payload)?;

    if !state.owners.exists(id).await? {
        return Err(ApiError::not_found("owner", id));
    }

    // full replace of the mapped fields; the owning country is untouched
    let current = state
        .owners
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("owner", id))?;
    let owner = payload.into_entity(current.country_id);

    if !state.owners.update(owner).await? {
        return Err(ApiError::write_failed("updating"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.owners.exists(id).await? {
        return Err(ApiError::not_found("owner", id));
    }

    let owner = state
        .owners
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("owner", id))?;

    if !state.owners.delete(owner).await? {
        return Err(ApiError::write_failed("deleting"));
    }

    Ok(StatusCode::NO_CONTENT)
}
