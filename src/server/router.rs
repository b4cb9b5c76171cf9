//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification. The
//! collected document is served as JSON at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and the OpenAPI document.
///
/// # Registered Endpoints
/// - `GET /api/unstable/repos/{owner}/{repo}` - Resolve a repository to its project ID
/// - `GET /api/unstable/users/{login}` - Resolve a login to its user ID
/// - `GET /api/unstable/repos/{owner}/{repo}/metrics/{metric}` - Compute a metric
/// - `GET /api/docs/openapi.json` - OpenAPI specification of the endpoints above
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state and served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "ghdata", description = "GitHub health metrics API"), tags(
        (name = controller::repo::REPO_TAG, description = "Repository resolution"),
        (name = controller::user::USER_TAG, description = "User resolution"),
        (name = controller::metric::METRIC_TAG, description = "Repository metrics"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::repo::get_repository))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::metric::get_metric))
        .split_for_parts();

    routes.route(
        "/api/docs/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
