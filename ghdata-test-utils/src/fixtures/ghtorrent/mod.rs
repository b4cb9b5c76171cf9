//! GHTorrent row fixtures.
//!
//! `data` inserts rows through [`GhTorrentFixtures`], `factory` builds the values they are
//! made of.

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn ghtorrent<'a>(&'a self) -> GhTorrentFixtures<'a> {
        GhTorrentFixtures { context: self }
    }
}

pub struct GhTorrentFixtures<'a> {
    pub context: &'a TestContext,
}
