//! Identifiers shared by fixtures across tests.
//!
//! Most tests describe a single repository, `rails/rails`, owned by the user with
//! [`TEST_OWNER_ID`]. Using the same IDs everywhere keeps assertions readable.

/// User ID of the repository owner.
pub static TEST_OWNER_ID: i64 = 1;

/// GitHub login of the repository owner.
pub static TEST_OWNER_LOGIN: &str = "rails";

/// Project ID of the test repository.
pub static TEST_REPO_ID: i64 = 1;

/// Name of the test repository.
pub static TEST_REPO_NAME: &str = "rails";
