//! # GestorPro Dashboard Entry Point
//!
//! Starts the application and logs the current dashboard snapshot.
//!
//! ## Usage
//! ```text
//! gestor-dashboard [CONFIG_PATH]
//!
//! CONFIG_PATH  optional gestor.toml (default: platform config directory)
//! RUST_LOG     log filter (default: info,gestor=debug,sqlx=warn)
//! GESTOR_*     configuration overrides
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (falls back to defaults on error)
//! 3. Connect to database, run migrations, load customers
//! 4. Log database health and customer counts
//! 5. Build the dashboard snapshot for today and log it as JSON
//! 6. Close the database pool

use std::path::PathBuf;

use gestor_dashboard::commands::report;
use gestor_dashboard::{init_tracing, App, AppConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting GestorPro dashboard");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load_or_default(config_path);

    let app = match App::start(config).await {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Failed to start application");
            return Err(e.into());
        }
    };

    let status = app.status().await?;
    if !status.database_ok {
        warn!("Database health check failed");
    }
    info!(
        customers = status.customers,
        mirrored = status.mirrored_customers,
        "Customer records"
    );

    let today = chrono::Local::now().date_naive();
    let snapshot = report::dashboard_snapshot(&app.store, &app.config, today);
    let json = serde_json::to_string_pretty(&snapshot)?;
    info!(reference = %today, "Dashboard snapshot\n{}", json);

    app.shutdown().await;
    Ok(())
}
