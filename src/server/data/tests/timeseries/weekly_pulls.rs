//! Tests for TimeseriesRepository::weekly_pulls method.

use super::*;

/// Tests that merged pull requests are counted per week with their review comments.
///
/// Expected: Ok(rows) with merged pull requests only
#[tokio::test]
async fn counts_merged_pulls_and_comments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_user(2, "alice")
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_pull_request(1, Some(TEST_REPO_ID), TEST_REPO_ID).await?;
    fixtures.insert_pull_request(2, Some(TEST_REPO_ID), TEST_REPO_ID).await?;
    fixtures.insert_pull_request(3, Some(TEST_REPO_ID), TEST_REPO_ID).await?;

    fixtures.insert_pull_request_history(1, 1, Some(2), "opened", "2016-01-04 09:00:00").await?;
    fixtures.insert_pull_request_history(2, 1, Some(1), "merged", "2016-01-05 09:00:00").await?;
    fixtures.insert_pull_request_history(3, 2, Some(1), "merged", "2016-01-13 09:00:00").await?;
    // Opened but never merged
    fixtures.insert_pull_request_history(4, 3, Some(2), "opened", "2016-01-13 09:00:00").await?;

    fixtures.insert_pull_request_comment(1, 1, 1, "2016-01-04 10:00:00").await?;
    fixtures.insert_pull_request_comment(2, 1, 2, "2016-01-04 11:00:00").await?;
    fixtures.insert_pull_request_comment(3, 3, 1, "2016-01-13 10:00:00").await?;

    let timeseries_repo = TimeseriesRepository::new(&test.db);
    let result = timeseries_repo.weekly_pulls(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, factory::date("2016-01-05"));
    assert_eq!(rows[0].pull_requests, 1);
    assert_eq!(rows[0].comments, 2);
    assert_eq!(rows[1].date, factory::date("2016-01-13"));
    assert_eq!(rows[1].pull_requests, 1);
    assert_eq!(rows[1].comments, 0);

    Ok(())
}

/// Tests that pull requests are attributed by their head repository.
///
/// Expected: Ok(empty) for the base repository of a pull request opened from a fork
#[tokio::test]
async fn filters_by_head_repository() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .with_project(2, TEST_OWNER_ID, "fork")
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_pull_request(1, Some(2), TEST_REPO_ID).await?;
    fixtures.insert_pull_request_history(1, 1, Some(1), "merged", "2016-01-05 09:00:00").await?;

    let timeseries_repo = TimeseriesRepository::new(&test.db);

    assert!(timeseries_repo.weekly_pulls(TEST_REPO_ID).await.unwrap().is_empty());
    assert_eq!(timeseries_repo.weekly_pulls(2).await.unwrap().len(), 1);

    Ok(())
}
