//! Per-user and per-day contribution metrics.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, FromQueryResult};

use crate::{
    model::table::{Cell, TableRow},
    server::{
        data::{dialect::Dialect, query::NamedQuery},
        error::Error,
    },
};

/// Whose activity [`ContributionRepository::daily_contributions`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContributionFilter {
    /// Activity of every user
    #[default]
    All,
    /// Activity authored by a single user ID
    User(i64),
}

impl ContributionFilter {
    /// Extra predicate restricting `column` to the filtered user.
    fn predicate(self, column: &str) -> String {
        match self {
            ContributionFilter::All => String::new(),
            ContributionFilter::User(_) => format!(" AND {} = :userid", column),
        }
    }

    fn bind(self, query: NamedQuery) -> NamedQuery {
        match self {
            ContributionFilter::All => query,
            ContributionFilter::User(user_id) => query.bind("userid", user_id),
        }
    }
}

impl From<Option<i64>> for ContributionFilter {
    fn from(user_id: Option<i64>) -> Self {
        user_id.map_or(ContributionFilter::All, ContributionFilter::User)
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct Contributor {
    pub user_id: i64,
    pub login: String,
    pub location: Option<String>,
    pub commits: Option<i64>,
    pub pull_requests: Option<i64>,
    pub issues: Option<i64>,
    pub commit_comments: Option<i64>,
    pub pull_request_comments: Option<i64>,
    pub issue_comments: Option<i64>,
    /// Sum of the activity counts present
    pub total: i64,
}

impl TableRow for Contributor {
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "login",
        "location",
        "commits",
        "pull_requests",
        "issues",
        "commit_comments",
        "pull_request_comments",
        "issue_comments",
        "total",
    ];
    const INDEX: Option<&'static str> = Some("user_id");

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.user_id.into(),
            self.login.into(),
            self.location.into(),
            self.commits.into(),
            self.pull_requests.into(),
            self.issues.into(),
            self.commit_comments.into(),
            self.pull_request_comments.into(),
            self.issue_comments.into(),
            self.total.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DailyContributions {
    pub date: NaiveDate,
    pub commits: i64,
    pub pull_requests: Option<i64>,
    pub issues: Option<i64>,
    pub commit_comments: Option<i64>,
    pub pull_request_comments: Option<i64>,
    pub issue_comments: Option<i64>,
    pub total: i64,
}

impl TableRow for DailyContributions {
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "commits",
        "pull_requests",
        "issues",
        "commit_comments",
        "pull_request_comments",
        "issue_comments",
        "total",
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.date.into(),
            self.commits.into(),
            self.pull_requests.into(),
            self.issues.into(),
            self.commit_comments.into(),
            self.pull_request_comments.into(),
            self.issue_comments.into(),
            self.total.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CommitterLocation {
    pub login: String,
    pub location: String,
    pub commits: i64,
}

impl TableRow for CommitterLocation {
    const COLUMNS: &'static [&'static str] = &["login", "location", "commits"];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.login.into(), self.location.into(), self.commits.into()]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct AuthorActivity {
    pub project_id: i64,
    pub author_id: Option<i64>,
    pub num_commits: i64,
}

impl TableRow for AuthorActivity {
    const COLUMNS: &'static [&'static str] = &["project_id", "author_id", "num_commits"];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.project_id.into(),
            self.author_id.into(),
            self.num_commits.into(),
        ]
    }
}

const TOTAL: &str = "COALESCE(com.n, 0) + COALESCE(pulls.n, 0) + COALESCE(iss.n, 0) \
    + COALESCE(comcoms.n, 0) + COALESCE(pullscoms.n, 0) + COALESCE(isscoms.n, 0)";

pub struct ContributionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContributionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every user with any activity on the repository and their counts by activity type,
    /// most commits first
    pub async fn contributors(&self, repo_id: i64) -> Result<Vec<Contributor>, Error> {
        let sql = format!(
            "SELECT * FROM
               (
               SELECT   users.id        AS user_id,
                        users.login     AS login,
                        users.location  AS location,
                        com.n           AS commits,
                        pulls.n         AS pull_requests,
                        iss.n           AS issues,
                        comcoms.n       AS commit_comments,
                        pullscoms.n     AS pull_request_comments,
                        isscoms.n       AS issue_comments,
                        {TOTAL} AS total
               FROM users
               LEFT JOIN (SELECT commits.committer_id AS id, COUNT(*) AS n FROM commits INNER JOIN project_commits ON project_commits.commit_id = commits.id WHERE project_commits.project_id = :repoid GROUP BY commits.committer_id) com
               ON com.id = users.id
               LEFT JOIN (SELECT pull_request_history.actor_id AS id, COUNT(*) AS n FROM pull_request_history JOIN pull_requests ON pull_requests.id = pull_request_history.pull_request_id WHERE pull_requests.base_repo_id = :repoid AND pull_request_history.action = 'merged' GROUP BY pull_request_history.actor_id) pulls
               ON pulls.id = users.id
               LEFT JOIN (SELECT issues.reporter_id AS id, COUNT(*) AS n FROM issues WHERE issues.repo_id = :repoid GROUP BY issues.reporter_id) iss
               ON iss.id = users.id
               LEFT JOIN (SELECT commit_comments.user_id AS id, COUNT(*) AS n FROM commit_comments JOIN project_commits ON project_commits.commit_id = commit_comments.commit_id WHERE project_commits.project_id = :repoid GROUP BY commit_comments.user_id) comcoms
               ON comcoms.id = users.id
               LEFT JOIN (SELECT pull_request_comments.user_id AS id, COUNT(*) AS n FROM pull_request_comments JOIN pull_requests ON pull_request_comments.pull_request_id = pull_requests.id WHERE pull_requests.base_repo_id = :repoid GROUP BY pull_request_comments.user_id) pullscoms
               ON pullscoms.id = users.id
               LEFT JOIN (SELECT issue_comments.user_id AS id, COUNT(*) AS n FROM issue_comments JOIN issues ON issue_comments.issue_id = issues.id WHERE issues.repo_id = :repoid GROUP BY issue_comments.user_id) isscoms
               ON isscoms.id = users.id
               ) user_activity
            WHERE commits IS NOT NULL
            OR    pull_requests IS NOT NULL
            OR    issues IS NOT NULL
            OR    commit_comments IS NOT NULL
            OR    pull_request_comments IS NOT NULL
            OR    issue_comments IS NOT NULL
            ORDER BY COALESCE(commits, 0) DESC, user_id"
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Contributions per day on which commits landed, optionally limited to one user
    pub async fn daily_contributions(
        &self,
        repo_id: i64,
        filter: ContributionFilter,
    ) -> Result<Vec<DailyContributions>, Error> {
        let d = Dialect::from(self.db.get_database_backend());
        let sql = format!(
            "SELECT  com.day         AS date,
                    com.n           AS commits,
                    pulls.n         AS pull_requests,
                    iss.n           AS issues,
                    comcoms.n       AS commit_comments,
                    pullscoms.n     AS pull_request_comments,
                    isscoms.n       AS issue_comments,
                    {TOTAL} AS total
            FROM (SELECT {commit_day} AS day, COUNT(*) AS n FROM commits INNER JOIN project_commits ON project_commits.commit_id = commits.id WHERE project_commits.project_id = :repoid{commit_filter} GROUP BY {commit_day}) com
            LEFT JOIN (SELECT {pull_day} AS day, COUNT(*) AS n FROM pull_request_history JOIN pull_requests ON pull_requests.id = pull_request_history.pull_request_id WHERE pull_requests.base_repo_id = :repoid AND pull_request_history.action = 'merged'{pull_filter} GROUP BY {pull_day}) pulls
            ON pulls.day = com.day
            LEFT JOIN (SELECT {issue_day} AS day, COUNT(*) AS n FROM issues WHERE issues.repo_id = :repoid{issue_filter} GROUP BY {issue_day}) iss
            ON iss.day = com.day
            LEFT JOIN (SELECT {commit_comment_day} AS day, COUNT(*) AS n FROM commit_comments JOIN project_commits ON project_commits.commit_id = commit_comments.commit_id WHERE project_commits.project_id = :repoid{commit_comment_filter} GROUP BY {commit_comment_day}) comcoms
            ON comcoms.day = com.day
            LEFT JOIN (SELECT {pull_comment_day} AS day, COUNT(*) AS n FROM pull_request_comments JOIN pull_requests ON pull_request_comments.pull_request_id = pull_requests.id WHERE pull_requests.base_repo_id = :repoid{pull_comment_filter} GROUP BY {pull_comment_day}) pullscoms
            ON pullscoms.day = com.day
            LEFT JOIN (SELECT {issue_comment_day} AS day, COUNT(*) AS n FROM issue_comments JOIN issues ON issue_comments.issue_id = issues.id WHERE issues.repo_id = :repoid{issue_comment_filter} GROUP BY {issue_comment_day}) isscoms
            ON isscoms.day = com.day
            ORDER BY com.day",
            commit_day = d.date("commits.created_at"),
            commit_filter = filter.predicate("commits.author_id"),
            pull_day = d.date("pull_request_history.created_at"),
            pull_filter = filter.predicate("pull_request_history.actor_id"),
            issue_day = d.date("issues.created_at"),
            issue_filter = filter.predicate("issues.reporter_id"),
            commit_comment_day = d.date("commit_comments.created_at"),
            commit_comment_filter = filter.predicate("commit_comments.user_id"),
            pull_comment_day = d.date("pull_request_comments.created_at"),
            pull_comment_filter = filter.predicate("pull_request_comments.user_id"),
            issue_comment_day = d.date("issue_comments.created_at"),
            issue_comment_filter = filter.predicate("issue_comments.user_id"),
        );

        filter
            .bind(NamedQuery::new(sql).bind("repoid", repo_id))
            .fetch_all(self.db)
            .await
    }

    /// Commit authors with a location set, most commits first
    pub async fn committer_locations(
        &self,
        repo_id: i64,
    ) -> Result<Vec<CommitterLocation>, Error> {
        let sql = "SELECT users.login AS login, users.location AS location, COUNT(*) AS commits
            FROM commits
            JOIN project_commits
            ON commits.id = project_commits.commit_id
            JOIN users
            ON users.id = commits.author_id
            WHERE project_commits.project_id = :repoid
            AND LENGTH(users.location) > 1
            GROUP BY users.id, users.login, users.location
            ORDER BY 3 DESC, 1";

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Commits per author, most commits first
    pub async fn author_activity(&self, repo_id: i64) -> Result<Vec<AuthorActivity>, Error> {
        let sql = "SELECT project_commits.project_id AS project_id,
                commits.author_id AS author_id,
                COUNT(project_commits.commit_id) AS num_commits
            FROM commits
            JOIN project_commits ON commits.id = project_commits.commit_id
            WHERE project_commits.project_id = :repoid
            GROUP BY project_commits.project_id, commits.author_id
            ORDER BY 3 DESC, 2";

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }
}
