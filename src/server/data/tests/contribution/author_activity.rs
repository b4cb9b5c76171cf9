//! Tests for ContributionRepository::author_activity method.

use super::*;

/// Tests commits per author, most active author first.
///
/// Expected: Ok(rows) with one row per author including unknown authors
#[tokio::test]
async fn counts_commits_per_author() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_user(2, "alice")
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_commit(1, TEST_REPO_ID, Some(TEST_OWNER_ID), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(2, TEST_REPO_ID, Some(2), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(3, TEST_REPO_ID, Some(2), "2016-01-05 09:00:00").await?;
    fixtures.insert_commit(4, TEST_REPO_ID, Some(2), "2016-01-06 09:00:00").await?;
    fixtures.insert_commit(5, TEST_REPO_ID, None, "2016-01-06 09:00:00").await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let result = contribution_repo.author_activity(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].project_id, TEST_REPO_ID);
    assert_eq!(rows[0].author_id, Some(2));
    assert_eq!(rows[0].num_commits, 3);
    assert!(rows[1..].iter().all(|row| row.num_commits == 1));
    assert!(rows.iter().any(|row| row.author_id.is_none()));

    Ok(())
}
