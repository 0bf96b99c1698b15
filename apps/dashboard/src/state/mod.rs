//! # State Module
//!
//! Application state shared by the dashboard commands.
//!
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own state type and every command asks only for the
//! ones it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   DbState    │  │  StoreState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Database    │  │  Arc<Mutex<  │  │  business name   │              │
//! │  │  (SQLite     │  │    Store     │  │  currency        │              │
//! │  │   pool)      │  │  >>          │  │  report window   │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • StoreState: Protected by Arc<Mutex<T>> for exclusive access         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod store;

pub use config::{AppConfig, ConfigError, ConfigState};
pub use db::DbState;
pub use store::StoreState;
