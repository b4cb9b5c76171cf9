//! Tests for TimeseriesRepository::monthly_reopened_issues method.

use super::*;

/// Tests that reopen events are counted per month and other events ignored.
///
/// Expected: Ok(rows) with one row per month
#[tokio::test]
async fn counts_reopen_events_per_month() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .with_project(2, TEST_OWNER_ID, "other")
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_issue(1, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-02 09:00:00").await?;
    fixtures.insert_issue(2, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-02 09:00:00").await?;
    fixtures.insert_issue(3, 2, TEST_OWNER_ID, "2016-01-02 09:00:00").await?;

    fixtures.insert_issue_event(1, 1, TEST_OWNER_ID, "reopened", "2016-01-20 09:00:00").await?;
    fixtures.insert_issue_event(2, 2, TEST_OWNER_ID, "reopened", "2016-01-10 09:00:00").await?;
    fixtures.insert_issue_event(3, 1, TEST_OWNER_ID, "reopened", "2016-02-03 09:00:00").await?;
    fixtures.insert_issue_event(4, 1, TEST_OWNER_ID, "closed", "2016-01-15 09:00:00").await?;
    fixtures.insert_issue_event(5, 3, TEST_OWNER_ID, "reopened", "2016-01-10 09:00:00").await?;

    let timeseries_repo = TimeseriesRepository::new(&test.db);
    let result = timeseries_repo.monthly_reopened_issues(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, factory::date("2016-01-10"));
    assert_eq!(rows[0].reopened_issues, 2);
    assert_eq!(rows[1].date, factory::date("2016-02-03"));
    assert_eq!(rows[1].reopened_issues, 1);

    Ok(())
}
