//! # Database Configuration and Connection
//!
//! Connection setup for the SQLite store.
//!
//! ## Single-Connection Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Bodega is a single-user console app: one process, one          │
//! │  operator, strictly sequential operations.                      │
//! │                                                                 │
//! │  CLI startup                                                    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  DbConfig::new(path) ← explicit path, no global default         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Inventory::open(config) ← pool of exactly 1 connection,        │
//! │       │                    migrations, full mirror reload       │
//! │       ▼                                                         │
//! │  connection held for the repository's whole lifetime,           │
//! │  released once by close()                                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! WAL journaling is kept even with a single connection for its better
//! crash recovery characteristics.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// The path is always passed explicitly by the caller; there is no
/// module-level default location.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("./bodega.db")
///     .connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file. Created if it doesn't exist.
    pub database_path: PathBuf,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to run migrations on open.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on open.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let inventory = Inventory::open(DbConfig::in_memory()).await?;
    /// // Store is isolated and vanishes with the connection
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Connection
// =============================================================================

/// Opens the SQLite store described by `config`.
///
/// ## What This Does
/// 1. Creates the database file if it doesn't exist
/// 2. Configures SQLite:
///    - WAL mode for crash recovery
///    - NORMAL synchronous (balance of safety/speed)
///    - Foreign keys enabled
/// 3. Builds a pool pinned to exactly one connection
///
/// The single connection is not a tuning knob: the system has exactly one
/// writer/reader, and an in-memory database would not even survive a second
/// connection.
pub(crate) async fn connect(config: &DbConfig) -> DbResult<SqlitePool> {
    info!(
        path = %config.database_path.display(),
        "Opening database connection"
    );

    // sqlite://path with mode=rwc creates the file if missing
    let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

    let connect_options = SqliteConnectOptions::from_str(&connect_url)
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .create_if_missing(true);

    debug!("Connection options configured");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(config.connect_timeout)
        .connect_with(connect_options)
        .await
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

    info!("Database connection established");

    Ok(pool)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_connect() {
        let config = DbConfig::in_memory();
        let pool = connect(&config).await.unwrap();

        let ok = sqlx::query("SELECT 1").execute(&pool).await.is_ok();
        assert!(ok);
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .connect_timeout(Duration::from_secs(5))
            .run_migrations(false);

        assert_eq!(config.database_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert!(!config.run_migrations);
    }
}
