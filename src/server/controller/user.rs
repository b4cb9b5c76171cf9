use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, UserDto},
    server::{
        error::{lookup::LookupError, Error},
        model::app::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Resolve a GitHub login to its GHTorrent user ID
#[utoipa::path(
    get,
    path = "/api/unstable/users/{login}",
    tag = USER_TAG,
    params(
        ("login" = String, Path, description = "GitHub login"),
    ),
    responses(
        (status = 200, description = "Success when resolving the user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = state.ghtorrent.user_id(&login).await? else {
        return Err(LookupError::UserNotFound(login).into());
    };

    Ok((StatusCode::OK, Json(UserDto { login, user_id })))
}
