use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, RepositoryDto},
    server::{
        error::{lookup::LookupError, Error},
        model::app::AppState,
    },
};

pub static REPO_TAG: &str = "repo";

/// Resolve a GitHub repository to its GHTorrent project ID
#[utoipa::path(
    get,
    path = "/api/unstable/repos/{owner}/{repo}",
    tag = REPO_TAG,
    params(
        ("owner" = String, Path, description = "GitHub login of the repository owner"),
        ("repo" = String, Path, description = "Repository name"),
    ),
    responses(
        (status = 200, description = "Success when resolving the repository", body = RepositoryDto),
        (status = 404, description = "Repository not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_repository(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let Some(repo_id) = state.ghtorrent.repository_id(&owner, &repo).await? else {
        return Err(LookupError::RepositoryNotFound { owner, name: repo }.into());
    };

    Ok((
        StatusCode::OK,
        Json(RepositoryDto {
            owner,
            repo,
            repo_id,
        }),
    ))
}
