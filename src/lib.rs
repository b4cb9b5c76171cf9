//! GitHub health metrics computed from a GHTorrent database.
//!
//! The [`GhTorrent`] facade resolves repositories and users to their GHTorrent IDs and
//! computes metrics as [`Table`](model::table::Table)s. The `server` module serves the same
//! metrics over HTTP.

pub mod model;
pub mod server;

pub use server::ghtorrent::GhTorrent;
