//! Fixtures inserting GHTorrent rows during test execution.

pub mod ghtorrent;
