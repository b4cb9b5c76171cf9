//! Data access layer repositories.
//!
//! This module contains the repositories that read the GHTorrent database. Metric
//! repositories compile SQL templates with bound `:repoid` / `:userid` parameters through
//! [`query::NamedQuery`] and pick backend-specific fragments from [`dialect::Dialect`];
//! identifier resolution goes through the SeaORM entities instead. Repositories borrow a
//! connection and return typed rows, which the [`GhTorrent`](crate::GhTorrent) facade lays
//! out as tables.

pub mod contribution;
pub mod dialect;
pub mod health;
pub mod issue;
pub mod project;
pub mod query;
pub mod timeseries;
