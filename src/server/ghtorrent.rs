//! Facade over a GHTorrent database.
//!
//! [`GhTorrent`] owns the database connection and exposes one async method per metric. Every
//! metric takes a project ID resolved through [`GhTorrent::repository_id`] and returns a
//! freshly materialized [`Table`]. Unknown IDs are not an error: they yield `None` from the
//! resolvers and empty tables from the metrics.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    model::table::{Table, TableRow},
    server::{
        data::{
            contribution::{ContributionFilter, ContributionRepository},
            health::{BusFactor, HealthRepository},
            issue::IssueRepository,
            project::ProjectRepository,
            timeseries::{TimeseriesRepository, WeeklySource},
        },
        error::Error,
        model::metric::Metric,
    },
};

#[derive(Debug, Clone)]
pub struct GhTorrent {
    db: DatabaseConnection,
}

impl GhTorrent {
    /// Connects to the GHTorrent database at `database_url`
    ///
    /// # Arguments
    /// - `database_url` (`&str`): A MySQL, Postgres or SQLite connection URL
    ///
    /// # Returns
    /// - `Ok(GhTorrent)`: A facade owning the new connection
    /// - `Err(Error::ConnectionError)`: The URL is malformed or the database is unreachable
    pub async fn connect(database_url: &str) -> Result<Self, Error> {
        let mut opt = ConnectOptions::new(database_url);
        opt.sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(Error::ConnectionError)?;

        Ok(Self { db })
    }

    /// Wraps an existing connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Resolves `github.com/{owner}/{name}` to its project ID
    ///
    /// Owner and name are bound as query parameters, so any characters are safe.
    pub async fn repository_id(&self, owner: &str, name: &str) -> Result<Option<i64>, Error> {
        let repository = ProjectRepository::new(&self.db);

        Ok(repository.find_repository_id(owner, name).await?)
    }

    /// Resolves a GitHub login to its user ID
    pub async fn user_id(&self, login: &str) -> Result<Option<i64>, Error> {
        let repository = ProjectRepository::new(&self.db);

        Ok(repository.find_user_id(login).await?)
    }

    /// New stargazers per week
    pub async fn stargazers(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .weekly_counts(WeeklySource::Stargazers, repo_id)
            .await?;

        Ok(tabulate(Metric::Stargazers, repo_id, rows))
    }

    /// Commits per week
    pub async fn commits(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .weekly_counts(WeeklySource::Commits, repo_id)
            .await?;

        Ok(tabulate(Metric::Commits, repo_id, rows))
    }

    /// New forks per week, without the first week
    pub async fn forks(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .weekly_counts(WeeklySource::Forks, repo_id)
            .await?;

        Ok(tabulate(Metric::Forks, repo_id, rows).drop_first_row())
    }

    /// New issues per week
    pub async fn issues(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .weekly_counts(WeeklySource::Issues, repo_id)
            .await?;

        Ok(tabulate(Metric::Issues, repo_id, rows))
    }

    /// Days between opening and closing for each closed issue
    pub async fn issues_with_close(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = IssueRepository::new(&self.db).close_times(repo_id).await?;

        Ok(tabulate(Metric::IssuesWithClose, repo_id, rows))
    }

    /// Merged pull requests and their review comments per week
    pub async fn pulls(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .weekly_pulls(repo_id)
            .await?;

        Ok(tabulate(Metric::Pulls, repo_id, rows))
    }

    /// Activity counts of every contributor, indexed by `user_id`
    pub async fn contributors(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = ContributionRepository::new(&self.db)
            .contributors(repo_id)
            .await?;

        Ok(tabulate(Metric::Contributors, repo_id, rows))
    }

    /// Contributions per day, optionally limited to the activity of `user_id`
    pub async fn contributions(&self, repo_id: i64, user_id: Option<i64>) -> Result<Table, Error> {
        let rows = ContributionRepository::new(&self.db)
            .daily_contributions(repo_id, ContributionFilter::from(user_id))
            .await?;

        Ok(tabulate(Metric::Contributions, repo_id, rows))
    }

    /// Locations of commit authors with their commit counts
    pub async fn committer_locations(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = ContributionRepository::new(&self.db)
            .committer_locations(repo_id)
            .await?;

        Ok(tabulate(Metric::CommitterLocations, repo_id, rows))
    }

    /// When each issue was opened and first answered by a committer
    pub async fn issue_response_time(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = IssueRepository::new(&self.db)
            .response_times(repo_id)
            .await?;

        Ok(tabulate(Metric::IssueResponseTime, repo_id, rows))
    }

    /// Merged over opened pull requests per day
    pub async fn pull_acceptance_rate(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .pull_acceptance_rate(repo_id)
            .await?;

        Ok(tabulate(Metric::PullAcceptanceRate, repo_id, rows))
    }

    /// Authors, commits and commits per author
    pub async fn dist_work(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = HealthRepository::new(&self.db)
            .work_distribution(repo_id)
            .await?;

        Ok(tabulate(Metric::DistWork, repo_id, rows))
    }

    /// Issue reopen events per month
    pub async fn reopened_issues(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .monthly_reopened_issues(repo_id)
            .await?;

        Ok(tabulate(Metric::ReopenedIssues, repo_id, rows))
    }

    /// Commits per author, most active first
    pub async fn community_activity(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = ContributionRepository::new(&self.db)
            .author_activity(repo_id)
            .await?;

        Ok(tabulate(Metric::CommunityActivity, repo_id, rows))
    }

    /// Commits by authors outside the project's members
    pub async fn contributor_breadth(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = HealthRepository::new(&self.db)
            .contributor_breadth(repo_id)
            .await?;

        Ok(tabulate(Metric::ContributorBreadth, repo_id, rows))
    }

    /// Organizations represented among pull request authors
    pub async fn contributor_diversity(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = HealthRepository::new(&self.db)
            .contributor_diversity(repo_id)
            .await?;

        Ok(tabulate(Metric::ContributorDiversity, repo_id, rows))
    }

    pub async fn contribution_acceptance(&self, repo_id: i64) -> Result<Table, Error> {
        let rows = TimeseriesRepository::new(&self.db)
            .contribution_acceptance(repo_id)
            .await?;

        Ok(tabulate(Metric::ContributionAcceptance, repo_id, rows))
    }

    /// Smallest number of authors responsible for more than half of the commits
    ///
    /// Commits without a known author are not attributed to anyone.
    pub async fn bus_factor(&self, repo_id: i64) -> Result<Table, Error> {
        let activity = ContributionRepository::new(&self.db)
            .author_activity(repo_id)
            .await?;

        let counts = activity
            .into_iter()
            .filter(|row| row.author_id.is_some())
            .map(|row| row.num_commits);

        Ok(tabulate(
            Metric::BusFactor,
            repo_id,
            [BusFactor::from_commit_counts(counts)],
        ))
    }

    /// Computes `metric` for the repository
    ///
    /// `user_id` only applies to [`Metric::Contributions`] and is ignored otherwise.
    pub async fn metric(
        &self,
        metric: Metric,
        repo_id: i64,
        user_id: Option<i64>,
    ) -> Result<Table, Error> {
        match metric {
            Metric::Stargazers => self.stargazers(repo_id).await,
            Metric::Commits => self.commits(repo_id).await,
            Metric::Forks => self.forks(repo_id).await,
            Metric::Issues => self.issues(repo_id).await,
            Metric::IssuesWithClose => self.issues_with_close(repo_id).await,
            Metric::Pulls => self.pulls(repo_id).await,
            Metric::Contributors => self.contributors(repo_id).await,
            Metric::Contributions => self.contributions(repo_id, user_id).await,
            Metric::CommitterLocations => self.committer_locations(repo_id).await,
            Metric::IssueResponseTime => self.issue_response_time(repo_id).await,
            Metric::PullAcceptanceRate => self.pull_acceptance_rate(repo_id).await,
            Metric::DistWork => self.dist_work(repo_id).await,
            Metric::ReopenedIssues => self.reopened_issues(repo_id).await,
            Metric::CommunityActivity => self.community_activity(repo_id).await,
            Metric::ContributorBreadth => self.contributor_breadth(repo_id).await,
            Metric::ContributorDiversity => self.contributor_diversity(repo_id).await,
            Metric::ContributionAcceptance => self.contribution_acceptance(repo_id).await,
            Metric::BusFactor => self.bus_factor(repo_id).await,
        }
    }
}

fn tabulate<R: TableRow>(metric: Metric, repo_id: i64, rows: impl IntoIterator<Item = R>) -> Table {
    let table = Table::from_rows(rows);

    tracing::debug!(
        "Computed metric {} for repository {}: {} rows",
        metric,
        repo_id,
        table.len()
    );

    table
}
