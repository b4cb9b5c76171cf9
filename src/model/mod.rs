//! Models shared between the data layer and the HTTP API.

pub mod api;
pub mod table;
