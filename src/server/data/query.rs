//! Named parameter binding for SQL templates.
//!
//! Metric templates reference their inputs as `:repoid` / `:userid`. [`NamedQuery`] compiles
//! a template into a backend [`Statement`]: the template is split with the sea-query SQL
//! tokenizer, and every placeholder is rendered through [`RawSqlQueryBuilder`] as the
//! backend's positional marker while the bound value is appended in order. Values never
//! enter the SQL text.

use sea_orm::{
    sea_query::{
        raw_sql::RawSqlQueryBuilder, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder,
        Token, Tokenizer,
    },
    ConnectionTrait, DbBackend, FromQueryResult, Statement, Value,
};

use crate::server::error::Error;

/// A SQL template together with the values bound to its named placeholders.
#[derive(Debug, Clone)]
pub struct NamedQuery {
    template: String,
    params: Vec<(&'static str, Value)>,
}

impl NamedQuery {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            params: Vec::new(),
        }
    }

    /// Binds `value` to every occurrence of `:name` in the template.
    pub fn bind(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.params.iter_mut().find(|(param, _)| *param == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Compiles the template for `backend`.
    ///
    /// Quoted strings and identifiers, comments, and `::` casts are copied untouched.
    /// Referencing a placeholder that was never bound fails with [`Error::UnboundParameter`].
    pub fn build(&self, backend: DbBackend) -> Result<Statement, Error> {
        let mut sql = match backend {
            DbBackend::Postgres => RawSqlQueryBuilder::new(PostgresQueryBuilder),
            DbBackend::Sqlite => RawSqlQueryBuilder::new(SqliteQueryBuilder),
            _ => RawSqlQueryBuilder::new(MysqlQueryBuilder),
        };
        let mut values = Vec::new();
        let mut tokens = Tokenizer::new(&self.template).iter().peekable();

        while let Some(token) = tokens.next() {
            match token {
                Token::Punctuation(":") => match tokens.peek() {
                    Some(Token::Punctuation(":")) => {
                        sql.push_fragment("::");
                        tokens.next();
                    }
                    Some(&Token::Unquoted(name)) if is_parameter_name(name) => {
                        let value = self
                            .params
                            .iter()
                            .find(|(param, _)| *param == name)
                            .map(|(_, value)| value.clone())
                            .ok_or_else(|| Error::UnboundParameter(name.to_string()))?;

                        sql.push_parameters(1);
                        values.push(value);
                        tokens.next();
                    }
                    _ => {
                        sql.push_fragment(":");
                    }
                },
                token => {
                    sql.push_fragment(token.as_str());
                }
            }
        }

        Ok(Statement::from_sql_and_values(backend, sql.finish(), values))
    }

    /// Compiles the query for the connection's backend and collects every row.
    pub async fn fetch_all<M, C>(&self, db: &C) -> Result<Vec<M>, Error>
    where
        M: FromQueryResult,
        C: ConnectionTrait,
    {
        let stmt = self.build(db.get_database_backend())?;

        Ok(M::find_by_statement(stmt).all(db).await?)
    }
}

fn is_parameter_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
}
