//! # pokereview
//!
//! A CRUD REST API over a Pokemon review domain: Pokemon, Categories,
//! Owners, Countries, Reviewers and Reviews, related through several
//! many-to-many and one-to-many associations.
//!
//! ## Architecture
//!
//! - **Store**: an in-memory relational store keyed by integer ids, with
//!   join rows held as separate records and commits reporting rows affected
//! - **Repositories**: one capability trait per entity type, wrapping the
//!   store with entity-specific queries (existence probes, join traversal,
//!   aggregate rating)
//! - **DTOs**: wire shapes with schema validation, mapped field-by-field
//!   from the persisted shapes
//! - **Handlers**: axum endpoints enforcing the ordered validation pipeline
//!   (shape → existence → uniqueness → mutation) before touching the store
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokereview::prelude::*;
//!
//! let db = Database::new();
//! pokereview::seed::seed_database(&db)?;
//! let app = build_router(AppState::new(db));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod model;
pub mod repo;
pub mod seed;
pub mod store;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::api::{AppState, build_router};
    pub use crate::config::Config;
    pub use crate::dto::{
        CategoryDto, CountryDto, OwnerDto, PokemonDto, ReviewDto, ReviewerDto,
    };
    pub use crate::error::{ApiError, ErrorResponse};
    pub use crate::model::{
        Category, Country, Owner, Pokemon, PokemonCategory, PokemonOwner, Review, Reviewer,
    };
    pub use crate::repo::{
        CategoryRepo, CountryRepo, OwnerRepo, PokemonRepo, ReviewRepo, ReviewerRepo,
    };
    pub use crate::store::{Database, StoreError};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
