//! Type aliases for the GHTorrent entity models returned by fixtures.

pub type UserModel = entity::users::Model;
pub type ProjectModel = entity::projects::Model;
pub type CommitModel = entity::commits::Model;
pub type IssueModel = entity::issues::Model;
pub type PullRequestModel = entity::pull_requests::Model;
