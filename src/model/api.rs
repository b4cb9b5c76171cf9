use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A repository resolved to its GHTorrent project ID
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RepositoryDto {
    pub owner: String,
    pub repo: String,
    pub repo_id: i64,
}

/// A GitHub login resolved to its GHTorrent user ID
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub login: String,
    pub user_id: i64,
}

/// Optional filters applied to a metric request
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MetricQuery {
    /// Limit contributions to a single GitHub login
    pub user: Option<String>,
}
