//! Tests for ContributionRepository::committer_locations method.

use super::*;

/// Tests that commit authors are listed with their location, most commits first.
///
/// Authors with no location or a single character location are left out.
///
/// Expected: Ok(rows) for alice then the owner
#[tokio::test]
async fn lists_authors_with_location() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures
        .insert_user_with_location(TEST_OWNER_ID, TEST_OWNER_LOGIN, Some("Berlin"))
        .await?;
    fixtures.insert_user_with_location(2, "alice", Some("Paris")).await?;
    fixtures.insert_user_with_location(3, "bob", Some("X")).await?;
    fixtures.insert_user(4, "carol").await?;

    fixtures.insert_commit(1, TEST_REPO_ID, Some(TEST_OWNER_ID), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(2, TEST_REPO_ID, Some(2), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(3, TEST_REPO_ID, Some(2), "2016-01-05 09:00:00").await?;
    fixtures.insert_commit(4, TEST_REPO_ID, Some(3), "2016-01-05 09:00:00").await?;
    fixtures.insert_commit(5, TEST_REPO_ID, Some(4), "2016-01-05 09:00:00").await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let result = contribution_repo.committer_locations(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].login, "alice");
    assert_eq!(rows[0].location, "Paris");
    assert_eq!(rows[0].commits, 2);
    assert_eq!(rows[1].login, TEST_OWNER_LOGIN);
    assert_eq!(rows[1].location, "Berlin");
    assert_eq!(rows[1].commits, 1);

    Ok(())
}
