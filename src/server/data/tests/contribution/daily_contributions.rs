//! Tests for ContributionRepository::daily_contributions method.

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_ghtorrent_tables()
        .with_user(TEST_OWNER_ID, TEST_OWNER_LOGIN)
        .with_user(2, "alice")
        .with_project(TEST_REPO_ID, TEST_OWNER_ID, TEST_REPO_NAME)
        .build()
        .await?;
    let fixtures = test.ghtorrent();
    fixtures.insert_commit(1, TEST_REPO_ID, Some(TEST_OWNER_ID), "2016-01-04 09:00:00").await?;
    fixtures.insert_commit(2, TEST_REPO_ID, Some(2), "2016-01-04 10:00:00").await?;
    fixtures.insert_commit(3, TEST_REPO_ID, Some(2), "2016-01-05 10:00:00").await?;
    fixtures.insert_issue(1, TEST_REPO_ID, TEST_OWNER_ID, "2016-01-04 11:00:00").await?;
    // No commits on this day
    fixtures.insert_issue(2, TEST_REPO_ID, 2, "2016-01-06 11:00:00").await?;

    Ok(test)
}

/// Tests contributions of every user, one row per day with commits.
///
/// Expected: Ok(rows) for 2016-01-04 and 2016-01-05
#[tokio::test]
async fn counts_all_users() -> Result<(), TestError> {
    let test = setup().await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let result = contribution_repo
        .daily_contributions(TEST_REPO_ID, ContributionFilter::All)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = result.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, factory::date("2016-01-04"));
    assert_eq!(rows[0].commits, 2);
    assert_eq!(rows[0].issues, Some(1));
    assert_eq!(rows[0].total, 3);
    assert_eq!(rows[1].date, factory::date("2016-01-05"));
    assert_eq!(rows[1].commits, 1);
    assert_eq!(rows[1].issues, None);
    assert_eq!(rows[1].total, 1);

    Ok(())
}

/// Tests restricting contributions to a single user.
///
/// Expected: Ok(rows) only for days on which the user committed
#[tokio::test]
async fn filters_by_user() -> Result<(), TestError> {
    let test = setup().await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let rows = contribution_repo
        .daily_contributions(TEST_REPO_ID, ContributionFilter::User(TEST_OWNER_ID))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, factory::date("2016-01-04"));
    assert_eq!(rows[0].commits, 1);
    assert_eq!(rows[0].issues, Some(1));
    assert_eq!(rows[0].total, 2);

    Ok(())
}

/// Tests that filtered counts never exceed the unfiltered counts of the same day.
///
/// Expected: Ok(rows) with each filtered total at most the unfiltered total
#[tokio::test]
async fn filtered_counts_are_bounded() -> Result<(), TestError> {
    let test = setup().await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let all = contribution_repo
        .daily_contributions(TEST_REPO_ID, ContributionFilter::All)
        .await
        .unwrap();
    let alice = contribution_repo
        .daily_contributions(TEST_REPO_ID, ContributionFilter::from(Some(2)))
        .await
        .unwrap();

    assert_eq!(alice.len(), 2);
    for row in &alice {
        let unfiltered = all.iter().find(|r| r.date == row.date).unwrap();
        assert!(row.commits <= unfiltered.commits);
        assert!(row.total <= unfiltered.total);
    }

    Ok(())
}

/// Tests that the user filter matches commit authors rather than committers.
///
/// Expected: Ok(rows) counting the commits alice authored but did not commit
#[tokio::test]
async fn filters_commits_by_author() -> Result<(), TestError> {
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
        .insert_commit_with_committer(2, TEST_REPO_ID, Some(2), Some(TEST_OWNER_ID), "2016-01-04 10:00:00")
        .await?;

    let contribution_repo = ContributionRepository::new(&test.db);
    let authored = contribution_repo
        .daily_contributions(TEST_REPO_ID, ContributionFilter::User(2))
        .await
        .unwrap();
    let committed = contribution_repo
        .daily_contributions(TEST_REPO_ID, ContributionFilter::User(TEST_OWNER_ID))
        .await
        .unwrap();

    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0].date, factory::date("2016-01-04"));
    assert_eq!(authored[0].commits, 2);
    assert!(committed.is_empty());

    Ok(())
}
