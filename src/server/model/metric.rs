use std::{fmt, str::FromStr};

use crate::server::error::lookup::LookupError;

/// Every metric the facade can compute, addressed over HTTP by its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Stargazers,
    Commits,
    Forks,
    Issues,
    IssuesWithClose,
    Pulls,
    Contributors,
    Contributions,
    CommitterLocations,
    IssueResponseTime,
    PullAcceptanceRate,
    DistWork,
    ReopenedIssues,
    CommunityActivity,
    ContributorBreadth,
    ContributorDiversity,
    ContributionAcceptance,
    BusFactor,
}

impl Metric {
    pub const ALL: [Metric; 18] = [
        Metric::Stargazers,
        Metric::Commits,
        Metric::Forks,
        Metric::Issues,
        Metric::IssuesWithClose,
        Metric::Pulls,
        Metric::Contributors,
        Metric::Contributions,
        Metric::CommitterLocations,
        Metric::IssueResponseTime,
        Metric::PullAcceptanceRate,
        Metric::DistWork,
        Metric::ReopenedIssues,
        Metric::CommunityActivity,
        Metric::ContributorBreadth,
        Metric::ContributorDiversity,
        Metric::ContributionAcceptance,
        Metric::BusFactor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Stargazers => "stargazers",
            Metric::Commits => "commits",
            Metric::Forks => "forks",
            Metric::Issues => "issues",
            Metric::IssuesWithClose => "issues_with_close",
            Metric::Pulls => "pulls",
            Metric::Contributors => "contributors",
            Metric::Contributions => "contributions",
            Metric::CommitterLocations => "committer_locations",
            Metric::IssueResponseTime => "issue_response_time",
            Metric::PullAcceptanceRate => "pull_acceptance_rate",
            Metric::DistWork => "dist_work",
            Metric::ReopenedIssues => "reopened_issues",
            Metric::CommunityActivity => "community_activity",
            Metric::ContributorBreadth => "contributor_breadth",
            Metric::ContributorDiversity => "contributor_diversity",
            Metric::ContributionAcceptance => "contribution_acceptance",
            Metric::BusFactor => "bus_factor",
        }
    }
}

impl FromStr for Metric {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| LookupError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
