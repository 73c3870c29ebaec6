//! Review endpoints
//!
//! Creation resolves the reviewer and pokemon by id from query parameters
//! and attaches both references before the row reaches the store.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::{AppState, CREATED_MSG, check_valid, require_body};
use crate::dto::ReviewDto;
use crate::error::ApiError;
use crate::model::Review;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewParams {
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    let reviews = state.reviews.list().await?;
    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReviewDto>, ApiError> {
    if !state.reviews.exists(id).await? {
        return Err(ApiError::not_found("review", id));
    }

    let review = state
        .reviews
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("review", id))?;

    Ok(Json(review.into()))
}

/// All reviews written about a pokemon. The existence probe targets the
/// pokemon itself, not the review table.
pub async fn reviews_of_pokemon(
    State(state): State<AppState>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    if !state.pokemons.exists(pokemon_id).await? {
        return Err(ApiError::not_found("pokemon", pokemon_id));
    }

    let reviews = state.reviews.reviews_of_pokemon(pokemon_id).await?;

    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

pub async fn create_review(
    State(state): State<AppState>,
    Query(params): Query<NewReviewParams>,
    payload: Result<Json<ReviewDto>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let payload = require_body(payload)?;
    check_valid(&payload)?;

    if !state.reviewers.exists(params.reviewer_id).await? {
        return Err(ApiError::not_found("reviewer", params.reviewer_id));
    }
    if !state.pokemons.exists(params.pokemon_id).await? {
        return Err(ApiError::not_found("pokemon", params.pokemon_id));
    }

    let mut review: Review = payload.into();
    review.reviewer_id = Some(params.reviewer_id);
    review.pokemon_id = Some(params.pokemon_id);

    if !state.reviews.create(review).await? {
        return Err(ApiError::write_failed("saving"));
    }

    Ok(Json(CREATED_MSG))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<ReviewDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = require_body(payload)?;
    if id != payload.id {
        return Err(ApiError::bad_request("path id does not match payload id"));
    }
    check_valid(&payload)?;

    if !state.reviews.exists(id).await? {
        return Err(ApiError::not_found("review", id));
    }

    // full replace of the mapped fields; references stay as stored
    let current = state
        .reviews
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("review", id))?;
    let mut review: Review = payload.into();
    review.reviewer_id = current.reviewer_id;
    review.pokemon_id = current.pokemon_id;

    if !state.reviews.update(review).await? {
        return Err(ApiError::write_failed("updating"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.reviews.exists(id).await? {
        return Err(ApiError::not_found("review", id));
    }

    let review = state
        .reviews
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("review", id))?;

    if !state.reviews.delete(review).await? {
        return Err(ApiError::write_failed("deleting"));
    }

    Ok(StatusCode::NO_CONTENT)
}
