use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::ghtorrent::{
        factory::{project_url, timestamp, DEFAULT_CREATED_AT},
        GhTorrentFixtures,
    },
    model::{CommitModel, IssueModel, ProjectModel, PullRequestModel, UserModel},
};

impl<'a> GhTorrentFixtures<'a> {
    pub async fn insert_user(&self, user_id: i64, login: &str) -> Result<UserModel, TestError> {
        self.insert_user_with_location(user_id, login, None).await
    }

    pub async fn insert_user_with_location(
        &self,
        user_id: i64,
        login: &str,
        location: Option<&str>,
    ) -> Result<UserModel, TestError> {
        Ok(entity::prelude::Users::insert(entity::users::ActiveModel {
            id: ActiveValue::Set(user_id),
            login: ActiveValue::Set(login.to_string()),
            company: ActiveValue::Set(None),
            location: ActiveValue::Set(location.map(str::to_string)),
            created_at: ActiveValue::Set(timestamp(DEFAULT_CREATED_AT)),
            fake: ActiveValue::Set(false),
            deleted: ActiveValue::Set(false),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_project(
        &self,
        project_id: i64,
        owner_id: i64,
        name: &str,
    ) -> Result<ProjectModel, TestError> {
        self.insert_fork(project_id, owner_id, name, None, DEFAULT_CREATED_AT)
            .await
    }

    /// Insert a project forked from `forked_from`, created at `created_at`
    pub async fn insert_fork(
        &self,
        project_id: i64,
        owner_id: i64,
        name: &str,
        forked_from: Option<i64>,
        created_at: &str,
    ) -> Result<ProjectModel, TestError> {
        Ok(entity::prelude::Projects::insert(entity::projects::ActiveModel {
            id: ActiveValue::Set(project_id),
            url: ActiveValue::Set(Some(project_url(owner_id, name))),
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            language: ActiveValue::Set(Some("Ruby".to_string())),
            created_at: ActiveValue::Set(timestamp(created_at)),
            forked_from: ActiveValue::Set(forked_from),
            deleted: ActiveValue::Set(false),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a commit and link it to `project_id` through `project_commits`
    ///
    /// The author also committed the change.
    pub async fn insert_commit(
        &self,
        commit_id: i64,
        project_id: i64,
        author_id: Option<i64>,
        created_at: &str,
    ) -> Result<CommitModel, TestError> {
        self.insert_commit_with_committer(commit_id, project_id, author_id, author_id, created_at)
            .await
    }

    /// Insert a commit whose committer differs from its author
    pub async fn insert_commit_with_committer(
        &self,
        commit_id: i64,
        project_id: i64,
        author_id: Option<i64>,
        committer_id: Option<i64>,
        created_at: &str,
    ) -> Result<CommitModel, TestError> {
        let commit = entity::prelude::Commits::insert(entity::commits::ActiveModel {
            id: ActiveValue::Set(commit_id),
            sha: ActiveValue::Set(format!("{:040x}", commit_id)),
            author_id: ActiveValue::Set(author_id),
            committer_id: ActiveValue::Set(committer_id),
            project_id: ActiveValue::Set(Some(project_id)),
            created_at: ActiveValue::Set(timestamp(created_at)),
        })
        .exec_with_returning(&self.context.db)
        .await?;

        entity::prelude::ProjectCommits::insert(entity::project_commits::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            commit_id: ActiveValue::Set(commit_id),
        })
        .exec_with_returning(&self.context.db)
        .await?;

        Ok(commit)
    }

    pub async fn insert_commit_comment(
        &self,
        comment_id: i64,
        commit_id: i64,
        user_id: i64,
        created_at: &str,
    ) -> Result<entity::commit_comments::Model, TestError> {
        Ok(
            entity::prelude::CommitComments::insert(entity::commit_comments::ActiveModel {
                id: ActiveValue::Set(comment_id),
                commit_id: ActiveValue::Set(commit_id),
                user_id: ActiveValue::Set(user_id),
                body: ActiveValue::Set(Some("LGTM".to_string())),
                line: ActiveValue::Set(None),
                position: ActiveValue::Set(None),
                comment_id: ActiveValue::Set(comment_id),
                created_at: ActiveValue::Set(timestamp(created_at)),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_watcher(
        &self,
        repo_id: i64,
        user_id: i64,
        created_at: &str,
    ) -> Result<entity::watchers::Model, TestError> {
        Ok(
            entity::prelude::Watchers::insert(entity::watchers::ActiveModel {
                repo_id: ActiveValue::Set(repo_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(timestamp(created_at)),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_issue(
        &self,
        issue_id: i64,
        repo_id: i64,
        reporter_id: i64,
        created_at: &str,
    ) -> Result<IssueModel, TestError> {
        Ok(entity::prelude::Issues::insert(entity::issues::ActiveModel {
            id: ActiveValue::Set(issue_id),
            repo_id: ActiveValue::Set(Some(repo_id)),
            reporter_id: ActiveValue::Set(Some(reporter_id)),
            assignee_id: ActiveValue::Set(None),
            pull_request: ActiveValue::Set(false),
            pull_request_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(timestamp(created_at)),
            issue_id: ActiveValue::Set(issue_id),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert an issue event such as `closed` or `reopened`
    pub async fn insert_issue_event(
        &self,
        event_id: i64,
        issue_id: i64,
        actor_id: i64,
        action: &str,
        created_at: &str,
    ) -> Result<entity::issue_events::Model, TestError> {
        Ok(
            entity::prelude::IssueEvents::insert(entity::issue_events::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                issue_id: ActiveValue::Set(issue_id),
                actor_id: ActiveValue::Set(actor_id),
                action: ActiveValue::Set(action.to_string()),
                action_specific: ActiveValue::Set(None),
                created_at: ActiveValue::Set(timestamp(created_at)),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_issue_comment(
        &self,
        comment_id: i64,
        issue_id: i64,
        user_id: i64,
        created_at: &str,
    ) -> Result<entity::issue_comments::Model, TestError> {
        Ok(
            entity::prelude::IssueComments::insert(entity::issue_comments::ActiveModel {
                comment_id: ActiveValue::Set(comment_id),
                issue_id: ActiveValue::Set(issue_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(timestamp(created_at)),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a pull request against `base_repo_id`, opened from `head_repo_id`
    pub async fn insert_pull_request(
        &self,
        pull_request_id: i64,
        head_repo_id: Option<i64>,
        base_repo_id: i64,
    ) -> Result<PullRequestModel, TestError> {
        Ok(
            entity::prelude::PullRequests::insert(entity::pull_requests::ActiveModel {
                id: ActiveValue::Set(pull_request_id),
                head_repo_id: ActiveValue::Set(head_repo_id),
                base_repo_id: ActiveValue::Set(base_repo_id),
                head_commit_id: ActiveValue::Set(None),
                base_commit_id: ActiveValue::Set(None),
                pullreq_id: ActiveValue::Set(pull_request_id),
                intra_branch: ActiveValue::Set(head_repo_id == Some(base_repo_id)),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a pull request history entry such as `opened` or `merged`
    pub async fn insert_pull_request_history(
        &self,
        history_id: i64,
        pull_request_id: i64,
        actor_id: Option<i64>,
        action: &str,
        created_at: &str,
    ) -> Result<entity::pull_request_history::Model, TestError> {
        Ok(entity::prelude::PullRequestHistory::insert(
            entity::pull_request_history::ActiveModel {
                id: ActiveValue::Set(history_id),
                pull_request_id: ActiveValue::Set(pull_request_id),
                created_at: ActiveValue::Set(timestamp(created_at)),
                action: ActiveValue::Set(action.to_string()),
                actor_id: ActiveValue::Set(actor_id),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_pull_request_comment(
        &self,
        comment_id: i64,
        pull_request_id: i64,
        user_id: i64,
        created_at: &str,
    ) -> Result<entity::pull_request_comments::Model, TestError> {
        Ok(entity::prelude::PullRequestComments::insert(
            entity::pull_request_comments::ActiveModel {
                comment_id: ActiveValue::Set(comment_id),
                pull_request_id: ActiveValue::Set(pull_request_id),
                user_id: ActiveValue::Set(user_id),
                position: ActiveValue::Set(None),
                body: ActiveValue::Set(Some("Looks good".to_string())),
                commit_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(timestamp(created_at)),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_project_member(
        &self,
        repo_id: i64,
        user_id: i64,
    ) -> Result<entity::project_members::Model, TestError> {
        Ok(
            entity::prelude::ProjectMembers::insert(entity::project_members::ActiveModel {
                repo_id: ActiveValue::Set(repo_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(timestamp(DEFAULT_CREATED_AT)),
                ext_ref_id: ActiveValue::Set(format!("{:024x}", user_id)),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_organization_member(
        &self,
        org_id: i64,
        user_id: i64,
    ) -> Result<entity::organization_members::Model, TestError> {
        Ok(entity::prelude::OrganizationMembers::insert(
            entity::organization_members::ActiveModel {
                org_id: ActiveValue::Set(org_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(timestamp(DEFAULT_CREATED_AT)),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
