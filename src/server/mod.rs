//! Server-side modules of ghdata.
//!
//! Contains the GHTorrent facade and the repositories it queries, configuration, error
//! handling, and the HTTP API exposing every metric.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod ghtorrent;
pub mod model;
pub mod router;
pub mod startup;
