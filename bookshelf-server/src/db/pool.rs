//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Excess callers queue
//! inside the pool until `acquire_timeout`.

use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use crate::config::DbConfig;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Database unreachable, pool exhausted or closed
    #[error("database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Malformed statement, constraint violation or decode failure
    #[error("database query error: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            other => Self::Query(other),
        }
    }
}

impl DbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Positional statement parameter, bound as `$1`, `$2`, ...
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(Option<String>),
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.to_owned()))
    }
}

impl From<Option<String>> for SqlParam {
    fn from(value: Option<String>) -> Self {
        Self::Text(value)
    }
}

/// Pooled access to the books database.
///
/// Cheap to clone; all clones share one pool. Call [`Database::close`] on
/// shutdown to release the connections.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create the pool and open its first connection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if the database cannot be reached.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error connecting to the database");
                DbError::from(e)
            })?;

        tracing::info!(
            max_connections = config.max_connections,
            "Successful connection to the database"
        );
        Ok(Self { pool })
    }

    /// Create the pool without connecting; connections open on first use.
    pub fn connect_lazy(config: &DbConfig) -> Result<Self, DbError> {
        let pool = pool_options(config).connect_lazy(&config.url)?;
        Ok(Self { pool })
    }

    /// Wrap an already configured pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run `statement` with `params` bound positionally and return its rows.
    ///
    /// Statements without a result set (plain UPDATE, DDL) return an empty
    /// vector. Failures are logged here and returned, never retried.
    pub async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<Vec<PgRow>, DbError> {
        tracing::debug!(statement = statement.trim(), params = params.len(), "execute");
        bind_all(statement, params)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| failed(statement, e))
    }

    /// Like [`Database::execute`] but returns the number of affected rows.
    pub async fn execute_count(&self, statement: &str, params: &[SqlParam]) -> Result<u64, DbError> {
        tracing::debug!(statement = statement.trim(), params = params.len(), "execute_count");
        let result = bind_all(statement, params)
            .execute(&self.pool)
            .await
            .map_err(|e| failed(statement, e))?;
        Ok(result.rows_affected())
    }

    /// Close every pooled connection. Pending and later calls fail with
    /// [`DbError::Connection`].
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

fn bind_all<'q>(statement: &'q str, params: &[SqlParam]) -> Query<'q, Postgres, PgArguments> {
    params
        .iter()
        .fold(sqlx::query(statement), |query, param| match param {
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.clone()),
        })
}

fn failed(statement: &str, err: sqlx::Error) -> DbError {
    let err = DbError::from(err);
    tracing::warn!(statement = statement.trim(), error = %err, "statement failed");
    err
}
