//! # GestorPro Dashboard Library
//!
//! Application layer of the GestorPro dashboard: wires configuration, the
//! database and the view-state store together and exposes the commands the
//! dashboard pages call.
//!
//! ## Module Organization
//! ```text
//! gestor_dashboard/
//! ├── lib.rs          ◄─── You are here (startup & tracing)
//! ├── state/
//! │   ├── db.rs       ◄─── Database handle
//! │   ├── store.rs    ◄─── View-state store behind Arc<Mutex>
//! │   └── config.rs   ◄─── AppConfig (defaults → TOML → env)
//! ├── commands/       ◄─── customer, product, sale, employee, finance, report, search
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ── tracing-subscriber, RUST_LOG overrides        │
//! │                                                                         │
//! │  2. Load AppConfig ────── defaults, gestor.toml, GESTOR_* variables     │
//! │                                                                         │
//! │  3. Connect to Database ─ SQLite (WAL), run pending migrations          │
//! │                                                                         │
//! │  4. Load Customers ────── clientes table ──► Store (Customer::Loaded)   │
//! │                                                                         │
//! │  5. Hand App { db, store, config } to the caller                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gestor_core::store::CustomerAction;
use gestor_core::Action;
use gestor_db::{Database, DbConfig, DbError};

pub use error::{ApiError, ErrorCode};
pub use state::{AppConfig, ConfigError, ConfigState, DbState, StoreState};

/// Errors that stop the application from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Failed to load customers: {0}")]
    Load(ApiError),
}

/// Database reachability and customer counts, logged at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStatus {
    pub database_ok: bool,
    /// Rows in the `clientes` table.
    pub customers: i64,
    /// Customers mirrored in the store.
    pub mirrored_customers: usize,
}

/// Everything a command may need, built once at startup.
#[derive(Debug, Clone)]
pub struct App {
    pub db: DbState,
    pub store: StoreState,
    pub config: ConfigState,
}

impl App {
    /// Starts the application against the configured database file.
    pub async fn start(config: AppConfig) -> Result<Self, StartupError> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!(db_path = ?config.database_path, "Database path determined");
        let db_config = DbConfig::new(config.database_path.clone());
        Self::start_with(config, db_config).await
    }

    /// Starts the application with an explicit database configuration.
    ///
    /// Tests use this with `DbConfig::in_memory()`.
    pub async fn start_with(config: AppConfig, db_config: DbConfig) -> Result<Self, StartupError> {
        let db = Database::new(db_config).await?;
        info!("Database connected and migrations applied");

        let app = App {
            db: DbState::new(db),
            store: StoreState::new(),
            config: ConfigState::new(config),
        };

        let customers = app.db.customers().list().await?;
        let count = customers.len();
        app.store
            .dispatch(Action::Customer(CustomerAction::Loaded(customers)))
            .map_err(|e| StartupError::Load(e.into()))?;

        info!(
            business = %app.config.inner().business_name,
            customers = count,
            "State initialized"
        );
        Ok(app)
    }

    /// Checks the database and compares its customer count with the store.
    pub async fn status(&self) -> Result<AppStatus, ApiError> {
        let database_ok = self.db.inner().health_check().await;
        let customers = commands::customer::count_customers(&self.db).await?;
        let mirrored_customers = self.store.with_store(|s| s.customers().len());

        Ok(AppStatus {
            database_ok,
            customers,
            mirrored_customers,
        })
    }

    /// Closes the database pool.
    pub async fn shutdown(&self) {
        self.db.inner().close().await;
        info!("Application stopped");
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gestor=trace` - Show trace for gestor crates only
/// - Default: `info,gestor=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gestor=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestor_core::NewCustomer;

    #[tokio::test]
    async fn test_start_loads_existing_customers() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: dir.path().join("data").join("gestor.db"),
            ..AppConfig::default()
        };

        let app = App::start(config.clone()).await.unwrap();
        app.db
            .customers()
            .create(NewCustomer::new("Ana", "111"))
            .await
            .unwrap();
        app.shutdown().await;

        let reopened = App::start(config).await.unwrap();
        let names = reopened
            .store
            .with_store(|s| s.customers().iter().map(|c| c.name.clone()).collect::<Vec<_>>());
        assert_eq!(names, vec!["Ana".to_string()]);
        reopened.shutdown().await;
    }

    #[tokio::test]
    async fn test_status_counts_rows_and_mirror() {
        let app = App::start_with(AppConfig::default(), DbConfig::in_memory())
            .await
            .unwrap();
        commands::customer::create_customer(&app.db, &app.store, NewCustomer::new("Ana", "111"))
            .await
            .unwrap();

        let status = app.status().await.unwrap();
        assert_eq!(
            status,
            AppStatus {
                database_ok: true,
                customers: 1,
                mirrored_customers: 1,
            }
        );

        app.shutdown().await;
        let err = app.status().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn test_start_rejects_invalid_config() {
        let config = AppConfig {
            business_name: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            App::start(config).await,
            Err(StartupError::Config(ConfigError::Invalid(_)))
        ));
    }
}
