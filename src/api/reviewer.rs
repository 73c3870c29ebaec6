//! Reviewer endpoints
//!
//! Reviewer uniqueness is defined over the concatenation of trimmed
//! last-name + first-name, compared case-insensitively.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::{AppState, CREATED_MSG, check_valid, require_body};
use crate::dto::{ReviewDto, ReviewerDto};
use crate::error::ApiError;
use crate::model::Reviewer;

pub async fn list_reviewers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewerDto>>, ApiError> {
    let reviewers = state.reviewers.list().await?;
    Ok(Json(reviewers.into_iter().map(ReviewerDto::from).collect()))
}

pub async fn get_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReviewerDto>, ApiError> {
    if !state.reviewers.exists(id).await? {
        return Err(ApiError::not_found("reviewer", id));
    }

    let reviewer = state
        .reviewers
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("reviewer", id))?;

    Ok(Json(reviewer.into()))
}

pub async fn reviews_of_reviewer(
    State(state): State<AppState>,
    Path(reviewer_id): Path<i32>,
) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    if !state.reviewers.exists(reviewer_id).await? {
        return Err(ApiError::not_found("reviewer", reviewer_id));
    }

    let reviews = state.reviewers.reviews_by_reviewer(reviewer_id).await?;

    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

pub async fn create_reviewer(
    State(state): State<AppState>,
    payload: Result<Json<ReviewerDto>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let payload = require_body(payload)?;
    check_valid(&payload)?;

    let candidate: Reviewer = payload.into();
    let reviewers = state.reviewers.list().await?;
    if reviewers
        .iter()
        .any(|r| r.unique_key() == candidate.unique_key())
    {
        return Err(ApiError::already_exists("Reviewer"));
    }

    if !state.reviewers.create(candidate).await? {
        return Err(ApiError::write_failed("saving"));
    }

    Ok(Json(CREATED_MSG))
}

pub async fn update_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<ReviewerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = require_body(payload)?;
    if id != payload.id {
        return Err(ApiError::bad_request("path id does not match payload id"));
    }
    check_valid(&payload)?;

    if !state.reviewers.exists(id).await? {
        return Err(ApiError::not_found("reviewer", id));
    }

    if !state.reviewers.update(payload.into()).await? {
        return Err(ApiError::write_failed("updating"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_reviewer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if !state.reviewers.exists(id).await? {
        return Err(ApiError::not_found("reviewer", id));
    }

    let reviewer = state
        .reviewers
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("reviewer", id))?;

    if !state.reviewers.delete(reviewer).await? {
        return Err(ApiError::write_failed("deleting"));
    }

    Ok(StatusCode::NO_CONTENT)
}
