//! Server application models.
//!
//! Shared HTTP application state and the enumeration of metrics served by the API.

pub mod app;
pub mod metric;
