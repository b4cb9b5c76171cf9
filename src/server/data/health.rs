//! Project-level health indicators.

use sea_orm::{ConnectionTrait, FromQueryResult};

use crate::{
    model::table::{Cell, TableRow},
    server::{
        data::{dialect::Dialect, query::NamedQuery},
        error::Error,
    },
};

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct WorkDistribution {
    pub project_name: String,
    pub url: Option<String>,
    pub authors: i64,
    pub commits: i64,
    pub average_commits_per_author: Option<f64>,
}

impl TableRow for WorkDistribution {
    const COLUMNS: &'static [&'static str] = &[
        "project_name",
        "url",
        "authors",
        "commits",
        "average_commits_per_author",
    ];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.project_name.into(),
            self.url.into(),
            self.authors.into(),
            self.commits.into(),
            self.average_commits_per_author.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ContributorBreadth {
    pub num_commits: i64,
    pub project_name: String,
    pub url: Option<String>,
}

impl TableRow for ContributorBreadth {
    const COLUMNS: &'static [&'static str] = &["num_commits", "project_name", "url"];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.num_commits.into(),
            self.project_name.into(),
            self.url.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ContributorDiversity {
    pub num_organizations: i64,
    pub project_name: String,
    pub url: Option<String>,
}

impl TableRow for ContributorDiversity {
    const COLUMNS: &'static [&'static str] = &["num_organizations", "project_name", "url"];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.num_organizations.into(),
            self.project_name.into(),
            self.url.into(),
        ]
    }
}

/// Smallest number of authors that together wrote more than half of the commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFactor {
    pub bus_factor: i64,
    pub authors: i64,
    pub commits: i64,
}

impl BusFactor {
    /// Computes the bus factor from per-author commit counts, in any order.
    ///
    /// Zero commits yields a bus factor of zero.
    pub fn from_commit_counts(counts: impl IntoIterator<Item = i64>) -> Self {
        let mut counts: Vec<i64> = counts.into_iter().filter(|count| *count > 0).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let commits: i64 = counts.iter().sum();
        let mut covered = 0;
        let mut bus_factor = 0;

        for count in &counts {
            if covered * 2 > commits {
                break;
            }
            covered += count;
            bus_factor += 1;
        }

        Self {
            bus_factor,
            authors: counts.len() as i64,
            commits,
        }
    }
}

impl TableRow for BusFactor {
    const COLUMNS: &'static [&'static str] = &["bus_factor", "authors", "commits"];

    fn into_cells(self) -> Vec<Cell> {
        vec![
            self.bus_factor.into(),
            self.authors.into(),
            self.commits.into(),
        ]
    }
}

pub struct HealthRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HealthRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// How commits are spread across distinct authors
    pub async fn work_distribution(&self, repo_id: i64) -> Result<Vec<WorkDistribution>, Error> {
        let d = Dialect::from(self.db.get_database_backend());
        let sql = format!(
            "SELECT projects.name AS project_name,
                projects.url AS url,
                COUNT(DISTINCT commits.author_id) AS authors,
                COUNT(commits.id) AS commits,
                {average} AS average_commits_per_author
            FROM projects
            JOIN project_commits ON project_commits.project_id = projects.id
            JOIN commits ON commits.id = project_commits.commit_id
            WHERE projects.id = :repoid
            GROUP BY projects.id, projects.name, projects.url",
            average = d.ratio("COUNT(commits.id)", "COUNT(DISTINCT commits.author_id)"),
        );

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Commits authored by users who are not members of the project
    pub async fn contributor_breadth(
        &self,
        repo_id: i64,
    ) -> Result<Vec<ContributorBreadth>, Error> {
        let sql = "SELECT COUNT(commits.id) AS num_commits,
                projects.name AS project_name,
                projects.url AS url
            FROM commits
            JOIN projects ON commits.project_id = projects.id
            JOIN users ON users.id = commits.author_id
            WHERE projects.id = :repoid
            AND NOT EXISTS
                (SELECT 1 FROM project_members
                 WHERE project_members.repo_id = projects.id
                 AND project_members.user_id = users.id)
            GROUP BY projects.id, projects.name, projects.url";

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }

    /// Distinct organizations among users who opened pull requests against the project
    pub async fn contributor_diversity(
        &self,
        repo_id: i64,
    ) -> Result<Vec<ContributorDiversity>, Error> {
        let sql = "SELECT COUNT(DISTINCT organization_members.org_id) AS num_organizations,
                projects.name AS project_name,
                projects.url AS url
            FROM organization_members
            JOIN users ON organization_members.user_id = users.id
            JOIN pull_request_history ON pull_request_history.actor_id = users.id
            JOIN pull_requests ON pull_request_history.pull_request_id = pull_requests.id
            JOIN projects ON pull_requests.base_repo_id = projects.id
            WHERE pull_request_history.action = 'opened'
            AND projects.id = :repoid
            GROUP BY projects.id, projects.name, projects.url";

        NamedQuery::new(sql)
            .bind("repoid", repo_id)
            .fetch_all(self.db)
            .await
    }
}
