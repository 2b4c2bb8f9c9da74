use std::sync::Arc;
use std::time::Duration;

use board_core::StorageError;
use chrono::Utc;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, FromQueryResult, Statement,
    TransactionTrait, Value,
};
use tokio::sync::RwLock;

use super::entity::post::{self, CountRow, format_timestamp};
use super::seed;

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub sql_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(10),
            sql_logging: false,
        }
    }

    /// A private in-memory store. Every gateway built from this gets its own
    /// empty database.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    id: i64,
}

#[derive(Debug, FromQueryResult)]
struct PingRow {
    ok: i64,
}

/// The only path to durable state.
///
/// Owns exactly one physical connection, so statements issued through a
/// gateway never interleave. The handle is passed explicitly to whoever needs
/// it; there is no process-wide instance.
///
/// # Example
/// ```ignore
/// let gateway = StorageGateway::connect(&DatabaseConfig::in_memory()).await?;
/// gateway.initialize().await?;
/// assert!(gateway.ping().await?);
/// gateway.shutdown().await;
/// ```
pub struct StorageGateway {
    conn: RwLock<Option<Arc<DbConn>>>,
}

impl StorageGateway {
    /// Open the store described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        tracing::info!("Connecting to post store...");

        // One connection: in-memory databases are per-connection, and
        // last_insert_rowid() is session scoped.
        let opts = ConnectOptions::new(&config.url)
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(config.connect_timeout)
            .sqlx_logging(config.sql_logging)
            .to_owned();

        let conn = Database::connect(opts)
            .await
            .map_err(|e| StorageError::Init(e.to_string()))?;
        tracing::info!("Post store connected");

        Ok(Self::from_connection(conn))
    }

    /// Wrap an already established connection.
    pub fn from_connection(conn: DbConn) -> Self {
        Self {
            conn: RwLock::new(Some(Arc::new(conn))),
        }
    }

    async fn conn(&self) -> Result<Arc<DbConn>, StorageError> {
        self.conn.read().await.clone().ok_or(StorageError::Closed)
    }

    /// Create the `posts` table if it is missing and seed it when empty.
    ///
    /// Safe to call on a populated store: only the existence check and the
    /// row count run.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        let conn = self.conn().await.map_err(|e| StorageError::Init(e.to_string()))?;
        let backend = conn.get_database_backend();

        conn.execute_unprepared(post::CREATE_TABLE_SQL)
            .await
            .map_err(init_err)?;

        let count = conn
            .query_one(Statement::from_string(backend, post::COUNT_SQL))
            .await
            .map_err(init_err)?
            .map(|row| CountRow::from_query_result(&row, ""))
            .transpose()
            .map_err(init_err)?
            .map_or(0, |row| row.count);

        if count > 0 {
            tracing::debug!(count, "Posts table already populated, skipping seed");
            return Ok(());
        }

        let rows = seed::seed_posts(Utc::now());
        let txn = conn.begin().await.map_err(init_err)?;
        for (input, created_at) in &rows {
            let stmt = Statement::from_sql_and_values(
                backend,
                post::INSERT_SQL,
                [
                    input.title.clone().into(),
                    input.content.clone().into(),
                    input.author.clone().into(),
                    format_timestamp(*created_at).into(),
                ],
            );
            txn.execute(stmt).await.map_err(init_err)?;
        }
        txn.commit().await.map_err(init_err)?;

        tracing::info!(rows = rows.len(), "Seeded posts table with sample rows");
        Ok(())
    }

    /// Run a mutating statement. Only completion is reported.
    pub async fn execute<I>(&self, sql: &str, params: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = Value>,
    {
        let conn = self.conn().await?;
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, params);

        conn.execute(stmt).await.map_err(query_err)?;
        Ok(())
    }

    /// Run a read statement expected to yield at most one row.
    pub async fn query_one<T, I>(&self, sql: &str, params: I) -> Result<Option<T>, StorageError>
    where
        T: FromQueryResult,
        I: IntoIterator<Item = Value>,
    {
        let conn = self.conn().await?;
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, params);

        conn.query_one(stmt)
            .await
            .map_err(query_err)?
            .map(|row| T::from_query_result(&row, ""))
            .transpose()
            .map_err(decode_err)
    }

    /// Run a read statement yielding any number of rows.
    pub async fn query_many<T, I>(&self, sql: &str, params: I) -> Result<Vec<T>, StorageError>
    where
        T: FromQueryResult,
        I: IntoIterator<Item = Value>,
    {
        let conn = self.conn().await?;
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, params);

        conn.query_all(stmt)
            .await
            .map_err(query_err)?
            .iter()
            .map(|row| T::from_query_result(row, ""))
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_err)
    }

    /// Run an insert and return the id it generated.
    ///
    /// The insert and the id lookup share one transaction, so the id cannot
    /// belong to another writer's row.
    pub async fn insert_returning_id<I>(&self, sql: &str, params: I) -> Result<i64, StorageError>
    where
        I: IntoIterator<Item = Value>,
    {
        let conn = self.conn().await?;
        let backend = conn.get_database_backend();

        let txn = conn.begin().await.map_err(query_err)?;
        txn.execute(Statement::from_sql_and_values(backend, sql, params))
            .await
            .map_err(query_err)?;

        let row = txn
            .query_one(Statement::from_string(
                backend,
                "SELECT last_insert_rowid() AS id",
            ))
            .await
            .map_err(query_err)?
            .ok_or_else(|| StorageError::Query("insert produced no row id".to_string()))?;
        let id = IdRow::from_query_result(&row, "").map_err(decode_err)?.id;

        txn.commit().await.map_err(query_err)?;
        Ok(id)
    }

    /// Round-trip a trivial statement. `true` when the store answered as expected.
    pub async fn ping(&self) -> Result<bool, StorageError> {
        let row: Option<PingRow> = self.query_one("SELECT 1 AS ok", []).await?;
        Ok(row.is_some_and(|row| row.ok == 1))
    }

    /// Release the connection. Repeated calls are no-ops and close errors
    /// are only logged.
    pub async fn shutdown(&self) {
        let Some(conn) = self.conn.write().await.take() else {
            return;
        };

        // A statement still in flight holds its own handle; the connection
        // is then released when that handle drops.
        let Ok(conn) = Arc::try_unwrap(conn) else {
            tracing::warn!("Post store still in use at shutdown, closing on last release");
            return;
        };

        match conn.close().await {
            Ok(()) => tracing::info!("Post store connection closed"),
            Err(e) => tracing::warn!(error = %e, "Error while closing post store"),
        }
    }
}

fn init_err(e: DbErr) -> StorageError {
    StorageError::Init(e.to_string())
}

fn query_err(e: DbErr) -> StorageError {
    StorageError::Query(e.to_string())
}

fn decode_err(e: DbErr) -> StorageError {
    StorageError::Decode(e.to_string())
}
