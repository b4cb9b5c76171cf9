//! Backend-specific SQL fragments.
//!
//! GHTorrent is distributed as a MySQL dump, mirrors also exist in Postgres, and the test
//! suite runs against SQLite. The metric templates are written in portable SQL and reach
//! for a [`Dialect`] wherever the backends disagree: date truncation, week and month
//! buckets, day differences, and casts.
//!
//! Fragments only ever wrap column expressions chosen by the repositories. Caller input
//! is bound through [`NamedQuery`](super::query::NamedQuery), never passed here.

use sea_orm::DbBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl From<DbBackend> for Dialect {
    fn from(backend: DbBackend) -> Self {
        match backend {
            DbBackend::Postgres => Dialect::Postgres,
            DbBackend::Sqlite => Dialect::Sqlite,
            _ => Dialect::MySql,
        }
    }
}

impl Dialect {
    /// Calendar date of a timestamp expression.
    pub fn date(self, expr: &str) -> String {
        match self {
            Dialect::Postgres => format!("CAST({} AS DATE)", expr),
            Dialect::MySql | Dialect::Sqlite => format!("DATE({})", expr),
        }
    }

    /// Grouping key for the week of a timestamp expression: the Monday the week starts on.
    ///
    /// Weeks never split at a year boundary.
    pub fn week(self, expr: &str) -> String {
        match self {
            Dialect::MySql => format!("DATE_SUB(DATE({0}), INTERVAL WEEKDAY({0}) DAY)", expr),
            Dialect::Postgres => format!("CAST(DATE_TRUNC('week', {}) AS DATE)", expr),
            Dialect::Sqlite => format!("DATE({}, 'weekday 0', '-6 days')", expr),
        }
    }

    /// Grouping key for the year and month of a timestamp expression.
    pub fn month(self, expr: &str) -> String {
        match self {
            Dialect::MySql => format!("DATE_FORMAT({}, '%Y-%m')", expr),
            Dialect::Postgres => format!("DATE_TRUNC('month', {})", expr),
            Dialect::Sqlite => format!("STRFTIME('%Y-%m', {})", expr),
        }
    }

    /// Whole days from `from` to `to`.
    pub fn days_between(self, from: &str, to: &str) -> String {
        let days = match self {
            Dialect::MySql => format!("DATEDIFF({}, {})", to, from),
            Dialect::Postgres => format!("(CAST({} AS DATE) - CAST({} AS DATE))", to, from),
            Dialect::Sqlite => format!("(JULIANDAY(DATE({})) - JULIANDAY(DATE({})))", to, from),
        };
        self.integer(&days)
    }

    /// Casts a numeric expression to a 64-bit integer.
    pub fn integer(self, expr: &str) -> String {
        match self {
            Dialect::MySql => format!("CAST({} AS SIGNED)", expr),
            Dialect::Postgres | Dialect::Sqlite => format!("CAST({} AS BIGINT)", expr),
        }
    }

    /// Floating point division; null when the denominator is zero.
    pub fn ratio(self, numerator: &str, denominator: &str) -> String {
        let numerator = match self {
            Dialect::MySql => format!("({} * 1.0E0)", numerator),
            Dialect::Postgres => format!("CAST({} AS DOUBLE PRECISION)", numerator),
            Dialect::Sqlite => format!("CAST({} AS REAL)", numerator),
        };
        format!("{} / NULLIF({}, 0)", numerator, denominator)
    }
}
