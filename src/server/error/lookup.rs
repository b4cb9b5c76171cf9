use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Repository {owner}/{name} not found")]
    RepositoryNotFound { owner: String, name: String },
    #[error("User {0:?} not found")]
    UserNotFound(String),
    #[error("Unknown metric {0:?}")]
    UnknownMetric(String),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::RepositoryNotFound { .. } | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownMetric(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
