//! Declarative test builder.
//!
//! `TestBuilder` queues the tables and base fixtures a test needs; everything is created
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_ghtorrent_tables: bool,

    // (user_id, login)
    users: Vec<(i64, String)>,
    // (project_id, owner_id, name)
    projects: Vec<(i64, i64, String)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ghtorrent_tables: false,
            users: Vec::new(),
            projects: Vec::new(),
        }
    }

    /// Add every GHTorrent table read by the metrics to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ghtorrent_tables(mut self) -> Self {
        self.include_ghtorrent_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ghdata_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), ghdata_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Users)
    ///     .with_table(Projects)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user into the database.
    ///
    /// Requires the `users` table.
    pub fn with_user(mut self, user_id: i64, login: impl Into<String>) -> Self {
        self.users.push((user_id, login.into()));
        self
    }

    /// Insert a project into the database.
    ///
    /// Requires the `projects` table. The owner is not created implicitly, add it with
    /// [`TestBuilder::with_user`] if the test resolves the repository by name.
    pub fn with_project(mut self, project_id: i64, owner_id: i64, name: impl Into<String>) -> Self {
        self.projects.push((project_id, owner_id, name.into()));
        self
    }

    /// Build the test context.
    ///
    /// Creates the tables first, then inserts users, then projects.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_ghtorrent_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Users),
                schema.create_table_from_entity(entity::prelude::Projects),
                schema.create_table_from_entity(entity::prelude::Commits),
                schema.create_table_from_entity(entity::prelude::ProjectCommits),
                schema.create_table_from_entity(entity::prelude::CommitComments),
                schema.create_table_from_entity(entity::prelude::Watchers),
                schema.create_table_from_entity(entity::prelude::Issues),
                schema.create_table_from_entity(entity::prelude::IssueEvents),
                schema.create_table_from_entity(entity::prelude::IssueComments),
                schema.create_table_from_entity(entity::prelude::PullRequests),
                schema.create_table_from_entity(entity::prelude::PullRequestHistory),
                schema.create_table_from_entity(entity::prelude::PullRequestComments),
                schema.create_table_from_entity(entity::prelude::ProjectMembers),
                schema.create_table_from_entity(entity::prelude::OrganizationMembers),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for (user_id, login) in self.users {
            context.ghtorrent().insert_user(user_id, &login).await?;
        }

        for (project_id, owner_id, name) in self.projects {
            context
                .ghtorrent()
                .insert_project(project_id, owner_id, &name)
                .await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
