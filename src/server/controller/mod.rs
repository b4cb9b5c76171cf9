//! HTTP controller endpoints for the ghdata web API.
//!
//! Handlers resolve the repository and user named in the request path to their GHTorrent IDs
//! and delegate to the [`GhTorrent`](crate::GhTorrent) facade held in the application state.
//! Every handler is documented for OpenAPI through utoipa.

pub mod metric;
pub mod repo;
pub mod user;
