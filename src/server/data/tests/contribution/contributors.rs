//! Tests for ContributionRepository::contributors method.

use super::*;

/// Tests per-user activity counts ordered by commits.
///
/// Users without activity are left out and missing activity kinds are null.
///
/// Expected: Ok(rows) for active users, most commits first
#[tokio::test]
async fn counts_activity_per_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_user(2, "alice")
        .with_user(3, "bob")
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_commit(1, TEST_REPO_ID, Some(2), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(2, TEST_REPO_ID, Some(2), "2016-01-05 09:00:00").await?;
    fixtures.insert_commit(3, TEST_REPO_ID, Some(TEST_OWNER_ID), "2016-01-05 10:00:00").await?;
    fixtures.insert_issue(1, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-04 09:00:00").await?;
    fixtures.insert_issue_comment(1, 1, 2, "2016-01-04 10:00:00").await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let result = contribution_repo.contributors(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2);

    let alice = &rows[0];
    assert_eq!(alice.user_id, 2);
    assert_eq!(alice.login, "alice");
    assert_eq!(alice.commits, Some(2));
    assert_eq!(alice.issues, None);
    assert_eq!(alice.issue_comments, Some(1));
    assert_eq!(alice.pull_requests, None);
    assert_eq!(alice.total, 3);

    let owner = &rows[1];
    assert_eq!(owner.user_id, TEST_OWNER_ID);
    assert_eq!(owner.commits, Some(1));
    assert_eq!(owner.issues, Some(1));
    assert_eq!(owner.issue_comments, None);
    assert_eq!(owner.total, 2);

    Ok(())
}

/// Tests that commits count towards the user who committed them, not their author.
///
/// Expected: Ok(rows) with the committer only
#[tokio::test]
async fn counts_commits_by_committer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_user(2, "alice")
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures
        .insert_commit_with_committer(1, TEST_REPO_ID, Some(2), Some(TEST_OWNER_ID), "2016-01-04 09:00:00")
        .await?;
    fixtures
        .insert_commit_with_committer(2, TEST_REPO_ID, Some(2), Some(TEST_OWNER_ID), "2016-01-05 09:00:00")
        .await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let rows = contribution_repo.contributors(TEST_REPO_ID).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, TEST_OWNER_ID);
    assert_eq!(rows[0].commits, Some(2));
    assert_eq!(rows[0].total, 2);

    Ok(())
}

/// Tests that a user with only merged pull requests and review comments is included.
///
/// Expected: Ok(rows) with a null commit count
#[tokio::test]
async fn includes_users_without_commits() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_pull_request(1, None, TEST_REPO_ID).await?;
    fixtures
        .insert_pull_request_history(1, 1, Some(TEST_OWNER_ID), "merged", "2016-01-04 09:00:00")
        .await?;
    fixtures
        .insert_pull_request_comment(1, 1, TEST_OWNER_ID, "2016-01-04 08:00:00")
        .await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let rows = contribution_repo.contributors(TEST_REPO_ID).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].commits, None);
    assert_eq!(rows[0].pull_requests, Some(1));
    assert_eq!(rows[0].pull_request_comments, Some(1));
    assert_eq!(rows[0].total, 2);

    Ok(())
}
