//! Error types for the ghdata server.
//!
//! Errors are grouped by domain (configuration, lookups from the HTTP API) and wrapped in a
//! single [`Error`] enum together with database and I/O errors. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display` and
//! `Error` implementations.

pub mod config;
pub mod lookup;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, lookup::LookupError},
};

/// Main error type for the ghdata server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Lookup errors (unknown repository, user, or metric requested over HTTP)
/// - Connection errors raised while establishing the database connection
/// - Query errors, passed through from the database driver untranslated
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A repository, user, or metric requested over HTTP does not exist.
    #[error(transparent)]
    LookupError(#[from] LookupError),
    /// The database URL is malformed or the database is unreachable.
    #[error("Failed to connect to the GHTorrent database: {0}")]
    ConnectionError(#[source] sea_orm::DbErr),
    /// A query template references a parameter that was never bound.
    ///
    /// Indicates a bug in one of the metric templates.
    #[error("Query references parameter :{0} but no value was bound for it")]
    UnboundParameter(String),
    /// Database error (query failures, schema mismatches).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the HTTP listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Unknown metric name
/// - 404 Not Found - Unknown repository or user
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::LookupError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking query or schema details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
