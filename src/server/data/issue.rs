use chrono::NaiveDateTime;
use sea_orm::{ConnectionTrait, FromQueryResult};

use crate::{
    model::table::{Cell, TableRow},
    server::{
        data::{dialect::Dialect, query::NamedQuery},
        error::Error,
    },
};

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct IssueClose {
    pub id: i64,
    /// When the issue was opened
    pub date: NaiveDateTime,
    pub days_to_close: i64,
}

impl TableRow for IssueClose {
    const COLUMNS: &'static [&'static str] = &["id", "date", "days_to_close"];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.id.into(), self.date.into(), self.days_to_close.into()]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct IssueResponse {
    pub created_at: NaiveDateTime,
    pub responded_at: NaiveDateTime,
}

impl TableRow for IssueResponse {
    const COLUMNS: &'static [&'static str] = &["created_at", "responded_at"];

    fn into_cells(self) -> Vec<Cell> {
        vec![self.created_at.into(), self.responded_at.into()]
    }
}

pub struct IssueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IssueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Closed issues with the number of days between opening and each close event
    pub async fn close_times(&self, repo_id: i64) -> Result<Vec<IssueClose>, Error> {
        let d = Dialect::from(self.db.get_database_backend());
        let sql = format!(
            "SELECT issues.id AS id,
                   issues.created_at AS date,
                   {days} AS days_to_close
            FROM issues
            JOIN issue_events closed
            ON issues.id = closed.issue_id
            AND closed.action = 'closed'
            WHERE issues.repo_id = :repoid
            ORDER BY issues.id, closed.created_at",
            days = d.days_between("issues.created_at", "closed.created_at"),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Earliest comment on each issue from a user who has authored commits to the repository
    pub async fn response_times(&self, repo_id: i64) -> Result<Vec<IssueResponse>, Error> {
        let sql = "SELECT issues.created_at AS created_at,
                   MIN(issue_comments.created_at) AS responded_at
            FROM issues
            JOIN issue_comments
            ON issue_comments.issue_id = issues.id
            WHERE issue_comments.user_id IN
                (SELECT users.id
                FROM users
                JOIN commits
                ON commits.author_id = users.id
                WHERE commits.project_id = :repoid)
            AND issues.repo_id = :repoid
            GROUP BY issues.id, issues.created_at
            ORDER BY issues.created_at, issues.id";

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }
}
