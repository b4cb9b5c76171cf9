//! Tests for HealthRepository::contributor_breadth method.

use super::*;

/// Tests that only commits by authors outside the project members are counted.
///
/// Expected: Ok(rows) counting the non-member commits
#[tokio::test]
async fn counts_commits_by_non_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_user(2, "alice")
        .with_user(3, "bob")
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_project_member(TEST_REPO_ID, TEST_OWNER_ID).await?;
    fixtures.insert_commit(1, TEST_REPO_ID, Some(TEST_OWNER_ID), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(2, TEST_REPO_ID, Some(TEST_OWNER_ID), "2016-01-04 10:00:00").await?;
    fixtures.insert_commit(3, TEST_REPO_ID, Some(2), "2016-01-05 09:00:00").await?;
    fixtures.insert_commit(4, TEST_REPO_ID, Some(3), "2016-01-05 10:00:00").await?;
    fixtures.insert_commit(5, TEST_REPO_ID, Some(3), "2016-01-06 10:00:00").await?;

    let health_repo = HealthRepository::new(&test.db);
    let result = health_repo.contributor_breadth(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].num_commits, 3);
    assert_eq!(rows[0].project_name, TEST_REPO_NAME);

    Ok(())
}
