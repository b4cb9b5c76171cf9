//! Time series metrics bucketed by day, week, or month.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, FromQueryResult};

use crate::{
    model::table::{Cell, TableRow},
    server::{
        data::{dialect::Dialect, query::NamedQuery},
        error::Error,
    },
};

/// Tables that can be counted per week against a repository column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklySource {
    /// `watchers.repo_id`
    Stargazers,
    /// `commits.project_id`
    Commits,
    /// `projects.forked_from`
    Forks,
    /// `issues.repo_id`
    Issues,
}

impl WeeklySource {
    fn table(self) -> &'static str {
        match self {
            WeeklySource::Stargazers => "watchers",
            WeeklySource::Commits => "commits",
            WeeklySource::Forks => "projects",
            WeeklySource::Issues => "issues",
        }
    }

    fn repo_column(self) -> &'static str {
        match self {
            WeeklySource::Stargazers => "repo_id",
            WeeklySource::Commits => "project_id",
            WeeklySource::Forks => "forked_from",
            WeeklySource::Issues => "repo_id",
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct WeeklyCount {
    /// Earliest day with activity in the week
    pub date: NaiveDate,
    pub count: i64,
}

impl TableRow for WeeklyCount {
    const COLUMNS: &'static [&'static str] = &["date", "count"];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.date.into(), self.count.into()]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct WeeklyPulls {
    pub date: NaiveDate,
    pub pull_requests: i64,
    pub comments: i64,
}

impl TableRow for WeeklyPulls {
    const COLUMNS: &'static [&'static str] = &["date", "pull_requests", "comments"];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.date.into(),
            self.pull_requests.into(),
            self.comments.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct AcceptanceRate {
    pub date: NaiveDate,
    pub rate: f64,
}

impl TableRow for AcceptanceRate {
    const COLUMNS: &'static [&'static str] = &["date", "rate"];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.date.into(), self.rate.into()]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct MonthlyReopened {
    pub date: NaiveDate,
    pub reopened_issues: i64,
}

impl TableRow for MonthlyReopened {
    const COLUMNS: &'static [&'static str] = &["date", "reopened_issues"];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.date.into(), self.reopened_issues.into()]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ContributionAcceptance {
    pub project_name: String,
    pub date: NaiveDate,
    pub approved_over_opened: f64,
}

impl TableRow for ContributionAcceptance {
    const COLUMNS: &'static [&'static str] = &["project_name", "date", "approved_over_opened"];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.project_name.into(),
            self.date.into(),
            self.approved_over_opened.into(),
        ]
    }
}

pub struct TimeseriesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeseriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn dialect(&self) -> Dialect {
        Dialect::from(self.db.get_database_backend())
    }

    /// Counts rows of `source` belonging to the repository, grouped by week
    pub async fn weekly_counts(
        &self,
        source: WeeklySource,
        repo_id: i64,
    ) -> Result<Vec<WeeklyCount>, Error> {
        let d = self.dialect();
        let sql = format!(
            "SELECT MIN({date}) AS date, COUNT(*) AS count
            FROM {table}
            WHERE {repo_col} = :repoid
            GROUP BY {week}
            ORDER BY 1",
            date = d.date("created_at"),
            week = d.week("created_at"),
            table = source.table(),
            repo_col = source.repo_column(),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Merged pull requests per week with the number of review comments they received
    pub async fn weekly_pulls(&self, repo_id: i64) -> Result<Vec<WeeklyPulls>, Error> {
        let d = self.dialect();
        let sql = format!(
            "SELECT MIN({date}) AS date,
                COUNT(pull_requests.id) AS pull_requests,
                {comments} AS comments
            FROM pull_request_history
            JOIN pull_requests
                ON pull_request_history.pull_request_id = pull_requests.id
            LEFT JOIN (SELECT pull_request_id, COUNT(*) AS n
                       FROM pull_request_comments
                       GROUP BY pull_request_id) prc
                ON prc.pull_request_id = pull_requests.id
            WHERE pull_requests.head_repo_id = :repoid
            AND pull_request_history.action = 'merged'
            GROUP BY {week}
            ORDER BY 1",
            date = d.date("pull_request_history.created_at"),
            week = d.week("pull_request_history.created_at"),
            comments = d.integer("COALESCE(SUM(prc.n), 0)"),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Distinct pull requests merged on a day over distinct pull requests opened that day
    pub async fn pull_acceptance_rate(&self, repo_id: i64) -> Result<Vec<AcceptanceRate>, Error> {
        let d = self.dialect();
        let sql = format!(
            "SELECT accepted.accepted_on AS date, {rate} AS rate
            FROM (SELECT COUNT(DISTINCT pull_request_history.pull_request_id) AS num_approved,
                         {date} AS accepted_on
                  FROM pull_request_history
                  JOIN pull_requests ON pull_request_history.pull_request_id = pull_requests.id
                  WHERE pull_request_history.action = 'merged'
                  AND pull_requests.base_repo_id = :repoid
                  GROUP BY {date}) accepted
            JOIN (SELECT COUNT(DISTINCT pull_request_history.pull_request_id) AS num_open,
                         {date} AS opened_on
                  FROM pull_request_history
                  JOIN pull_requests ON pull_request_history.pull_request_id = pull_requests.id
                  WHERE pull_request_history.action = 'opened'
                  AND pull_requests.base_repo_id = :repoid
                  GROUP BY {date}) opened
            ON opened.opened_on = accepted.accepted_on
            ORDER BY 1",
            date = d.date("pull_request_history.created_at"),
            rate = d.ratio("accepted.num_approved", "opened.num_open"),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Issue reopen events per month
    pub async fn monthly_reopened_issues(
        &self,
        repo_id: i64,
    ) -> Result<Vec<MonthlyReopened>, Error> {
        let d = self.dialect();
        let sql = format!(
            "SELECT MIN({date}) AS date, COUNT(*) AS reopened_issues
            FROM issue_events
            JOIN issues ON issues.id = issue_events.issue_id
            WHERE issue_events.action = 'reopened'
            AND issues.repo_id = :repoid
            GROUP BY {month}
            ORDER BY 1",
            date = d.date("issue_events.created_at"),
            month = d.month("issue_events.created_at"),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Per day, merged pull requests over pull requests active that day which were opened
    /// at some point, labelled with the project name
    pub async fn contribution_acceptance(
        &self,
        repo_id: i64,
    ) -> Result<Vec<ContributionAcceptance>, Error> {
        let d = self.dialect();
        let sql = format!(
            "SELECT projects.name AS project_name,
                accepted.accepted_on AS date,
                {rate} AS approved_over_opened
            FROM (SELECT COUNT(DISTINCT pull_request_history.pull_request_id) AS num_approved,
                         {date} AS accepted_on
                  FROM pull_request_history
                  JOIN pull_requests ON pull_request_history.pull_request_id = pull_requests.id
                  WHERE pull_request_history.action = 'merged'
                  AND pull_requests.base_repo_id = :repoid
                  GROUP BY {date}) accepted
            JOIN (SELECT COUNT(DISTINCT pull_request_history.pull_request_id) AS num_open,
                         {date} AS date_created
                  FROM pull_request_history
                  JOIN pull_requests ON pull_request_history.pull_request_id = pull_requests.id
                  WHERE pull_requests.base_repo_id = :repoid
                  AND pull_request_history.pull_request_id IN
                      (SELECT pull_request_id FROM pull_request_history WHERE action = 'opened')
                  GROUP BY {date}) opened
            ON opened.date_created = accepted.accepted_on
            JOIN projects ON projects.id = :repoid
            ORDER BY 2",
            date = d.date("pull_request_history.created_at"),
            rate = d.ratio("accepted.num_approved", "opened.num_open"),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }
}
