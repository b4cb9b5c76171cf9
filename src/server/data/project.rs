use sea_orm::{
    sea_query::Query, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Resolves GitHub owner/repository names and logins to GHTorrent IDs.
pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the project ID of `github.com/{owner}/{name}`
    ///
    /// When several projects match, the one with the highest ID is returned.
    pub async fn find_repository_id(&self, owner: &str, name: &str) -> Result<Option<i64>, DbErr> {
        let owners = Query::select()
            .column(entity::users::Column::Id)
            .from(entity::prelude::Users)
            .and_where(entity::users::Column::Login.eq(owner))
            .to_owned();

        entity::prelude::Projects::find()
            .select_only()
            .column(entity::projects::Column::Id)
            .filter(entity::projects::Column::Name.eq(name))
            .filter(entity::projects::Column::OwnerId.in_subquery(owners))
            .order_by_desc(entity::projects::Column::Id)
            .into_tuple::<i64>()
            .one(self.db)
            .await
    }

    /// Finds the user ID for a GitHub login
    pub async fn find_user_id(&self, login: &str) -> Result<Option<i64>, DbErr> {
        entity::prelude::Users::find()
            .select_only()
            .column(entity::users::Column::Id)
            .filter(entity::users::Column::Login.eq(login))
            .order_by_desc(entity::users::Column::Id)
            .into_tuple::<i64>()
            .one(self.db)
            .await
    }
}
