//! Tests for IssueRepository::close_times method.

use super::*;

/// Tests whole days between opening and closing an issue.
///
/// Open issues are left out.
///
/// Expected: Ok(rows) with one row for the closed issue
#[tokio::test]
async fn computes_days_to_close() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_issue(1, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-04 12:00:00").await?;
    fixtures.insert_issue(2, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-05 12:00:00").await?;
    fixtures
        .insert_issue_event(1, 1, TEST_OWNER_ID, "closed", "2016-01-09 08:00:00")
        .await?;
    fixtures
        .insert_issue_event(2, 2, TEST_OWNER_ID, "subscribed", "2016-01-06 08:00:00")
        .await?;

    let issue_repo = IssueRepository::new(&test.db);
    let result = issue_repo.close_times(TEST_REPO_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].date, factory::timestamp("2016-01-04 12:00:00"));
    assert_eq!(rows[0].days_to_close, 5);

    Ok(())
}

/// Tests an issue closed twice after being reopened.
///
/// Expected: Ok(rows) with one row per close event, in close order
#[tokio::test]
async fn lists_every_close_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_issue(1, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-04 12:00:00").await?;
    fixtures
        .insert_issue_event(1, 1, TEST_OWNER_ID, "closed", "2016-01-04 13:00:00")
        .await?;
    fixtures
        .insert_issue_event(2, 1, TEST_OWNER_ID, "reopened", "2016-01-06 08:00:00")
        .await?;
    fixtures
        .insert_issue_event(3, 1, TEST_OWNER_ID, "closed", "2016-01-14 08:00:00")
        .await?;

    let issue_repo = IssueRepository::new(&test.db);
    let rows = issue_repo.close_times(TEST_REPO_ID).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].days_to_close, 0);
    assert_eq!(rows[1].days_to_close, 10);

    Ok(())
}
