use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MetricQuery},
    server::{
        error::{lookup::LookupError, Error},
        model::{app::AppState, metric::Metric},
    },
};

pub static METRIC_TAG: &str = "metric";

/// Compute a metric for a GitHub repository
///
/// Returns the metric as an array of records, one object per row keyed by column name.
/// The `user` filter only applies to the `contributions` metric.
#[utoipa::path(
    get,
    path = "/api/unstable/repos/{owner}/{repo}/metrics/{metric}",
    tag = METRIC_TAG,
    params(
        ("owner" = String, Path, description = "GitHub login of the repository owner"),
        ("repo" = String, Path, description = "Repository name"),
        ("metric" = String, Path, description = "Metric name, e.g. `commits` or `bus_factor`"),
        MetricQuery,
    ),
    responses(
        (status = 200, description = "Success when computing the metric, as an array of records"),
        (status = 400, description = "Unknown metric", body = ErrorDto),
        (status = 404, description = "Repository or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_metric(
    State(state): State<AppState>,
    Path((owner, repo, metric)): Path<(String, String, String)>,
    Query(query): Query<MetricQuery>,
) -> Result<impl IntoResponse, Error> {
    let metric = metric.parse::<Metric>()?;

    let Some(repo_id) = state.ghtorrent.repository_id(&owner, &repo).await? else {
        return Err(LookupError::RepositoryNotFound { owner, name: repo }.into());
    };

    let user_id = match query.user {
        Some(login) => match state.ghtorrent.user_id(&login).await? {
            Some(user_id) => Some(user_id),
            None => return Err(LookupError::UserNotFound(login).into()),
        },
        None => None,
    };

    let table = state.ghtorrent.metric(metric, repo_id, user_id).await?;

    Ok((StatusCode::OK, Json(table)))
}
