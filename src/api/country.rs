//! Country endpoints

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::{AppState, CREATED_MSG, check_valid, norm, require_body};
use crate::dto::CountryDto;
use crate::error::ApiError;

pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryDto>>, ApiError> {
    let countries = state.countries.list().await?;
    Ok(Json(countries.into_iter().map(CountryDto::from).collect()))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CountryDto>, ApiError> {
    if !state.countries.exists(id).await? {
        return Err(ApiError::not_found("country", id));
    }

    let country = state
        .countries
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("country", id))?;

    Ok(Json(country.into()))
}

/// The country a given owner belongs to
pub async fn country_of_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<Json<CountryDto>, ApiError> {
    if !state.owners.exists(owner_id).await? {
        return Err(ApiError::not_found("owner", owner_id));
    }

    let country = state
        .countries
        .country_by_owner(owner_id)
        .await?
        .ok_or_else(|| ApiError::not_found("country", owner_id))?;

    Ok(Json(country.into()))
}

pub async fn create_country(
    State(state): State<AppState>,
    payload: Result<Json<CountryDto>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let payload = require_body(payload)?;
    check_valid(&payload)?;

    let countries = state.countries.list().await?;
    if countries.iter().any(|c| norm(&c.name) == norm(&payload.name)) {
        return Err(ApiError::already_exists("Country"));
    }

    if !state.countries.create(payload.into()).await? {
        return Err(ApiError::write_failed("saving"));
    }

    Ok(Json(CREATED_MSG))
}

pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CountryDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = require_body(payload)?;
    if id != payload.id {
        return Err(ApiError::bad_request("path id does not match payload id"));
    }
    check_valid(&payload)?;

    if !state.countries.exists(id).await? {
        return Err(ApiError::not_found("country", id));
    }

    if !state.countries.update(payload.into()).await? {
        return Err(ApiError::write_failed("updating"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.countries.exists(id).await? {
        return Err(ApiError::not_found("country", id));
    }

    let country = state
        .countries
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("country", id))?;

    if !state.countries.delete(country).await? {
        return Err(ApiError::write_failed("deleting"));
    }

    Ok(StatusCode::NO_CONTENT)
}
