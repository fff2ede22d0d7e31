//! Schema catalog for the upstream database server.
//!
//! Opens a dedicated connection per listing request, enumerates the visible
//! databases, and collects the tables of every non-system database. The
//! connection is owned by one snapshot for its whole duration and released
//! on every exit path.

use std::time::Duration;

use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use common::models::schema::{is_system_database, DatabaseSchema, ServerListing};
use sqlx::mysql::MySqlConnection;
use sqlx::{Connection, Row};

const LIST_DATABASES_SQL: &str = "SHOW DATABASES";
const LIST_TABLES_SQL: &str = "SHOW TABLES";

/// Enumerates databases and tables on the configured server.
///
/// Holds no connection state between requests; every [`snapshot`] opens and
/// closes its own connection.
///
/// [`snapshot`]: SchemaCatalog::snapshot
pub struct SchemaCatalog {
    config: AppConfig,
}

impl SchemaCatalog {
    /// Creates a new catalog for the configured database server.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Takes a full listing snapshot: connect, enumerate, release.
    ///
    /// Database order and table order are the server's. A database that
    /// cannot be selected or enumerated (e.g. dropped between enumeration
    /// and selection) is logged and skipped; the rest of the listing still
    /// renders.
    pub async fn snapshot(&self) -> AppResult<ServerListing> {
        let mut conn = self.connect().await?;

        // Enumerate all visible database names, in server-reported order.
        //
        // The per-query logic below is inlined rather than split into
        // `&mut MySqlConnection`-taking helpers: sqlx only implements
        // `Executor<'c>` for `&'c mut MySqlConnection`, and threading that
        // reborrow through a generic `async fn` boundary asks the compiler to
        // prove `for<'a> &'a mut MySqlConnection: Executor<'a>` holds under
        // `Send`, which it cannot (rustc "implementation of Send is not
        // general enough"). Holding the borrow at this single concrete region
        // keeps the snapshot future `Send` without changing behaviour.
        let name_rows = sqlx::query(LIST_DATABASES_SQL)
            .fetch_all(&mut conn)
            .await
            .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;
        let names = name_rows
            .iter()
            .map(|row| {
                row.try_get::<String, _>(0)
                    .map_err(|e| AppError::DatabaseQuery(e.to_string()))
            })
            .collect::<AppResult<Vec<String>>>()?;

        let mut databases = Vec::new();
        for name in names {
            if is_system_database(&name) {
                continue;
            }

            // Select `name`, then enumerate its tables on the same connection.
            // A database that cannot be selected or enumerated is logged and
            // skipped; the rest of the listing still renders.

            // USE takes an identifier, not a bind parameter, and cannot be
            // prepared; it has to go through the text protocol.
            let stmt = format!("USE {}", quote_identifier(&name));
            if let Err(e) = sqlx::raw_sql(&stmt)
                .execute(&mut conn)
                .await
                .map_err(|e| AppError::DatabaseSelection(format!("{}: {}", name, e)))
            {
                tracing::warn!(database = %name, error = %e, "database skipped during listing");
                continue;
            }

            // Enumerate the tables of the active database, in server-reported
            // order.
            let rows = match sqlx::query(LIST_TABLES_SQL).fetch_all(&mut conn).await {
                Ok(rows) => rows,
                Err(e) => {
                    let e = AppError::DatabaseQuery(e.to_string());
                    tracing::warn!(database = %name, error = %e, "database skipped during listing");
                    continue;
                }
            };
            let tables = rows
                .iter()
                .map(|row| {
                    row.try_get::<String, _>(0)
                        .map_err(|e| AppError::DatabaseQuery(e.to_string()))
                })
                .collect::<AppResult<Vec<String>>>();

            match tables {
                Ok(tables) => databases.push(DatabaseSchema { name, tables }),
                Err(e) => {
                    tracing::warn!(database = %name, error = %e, "database skipped during listing");
                }
            }
        }

        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "connection close failed");
        }

        Ok(ServerListing { databases })
    }

    /// Opens a dedicated connection, bounded by the configured timeout.
    async fn connect(&self) -> AppResult<MySqlConnection> {
        let timeout = Duration::from_secs(self.config.connect_timeout_secs);
        let url = self.config.database.url();

        match tokio::time::timeout(timeout, MySqlConnection::connect(&url)).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(AppError::DatabaseConnection(e.to_string())),
            Err(_) => Err(AppError::DatabaseConnection(format!(
                "connect timed out after {}s",
                self.config.connect_timeout_secs
            ))),
        }
    }

}

#[allow(dead_code)]
fn _assert_send(c: &SchemaCatalog) -> impl std::future::Future<Output = ()> + Send + '_ {
    async move {
        let mut conn = c.connect().await.unwrap();
        let _a = sqlx::query(LIST_DATABASES_SQL).fetch_all(&mut conn).await.unwrap();
        let _b = sqlx::query(LIST_TABLES_SQL).fetch_all(&mut conn).await.unwrap();
    }
}

/// Quotes a schema identifier for interpolation into a statement.
fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
