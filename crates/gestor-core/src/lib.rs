//! # gestor-core: Pure Business Logic for GestorPro
//!
//! This crate is the **heart** of GestorPro. It contains the entity types,
//! the view-state store and every dashboard calculation as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GestorPro Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard Frontend                           │   │
//! │  │  Dashboard · Financeiro · Estoque · Vendas · Clientes · ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 gestor-dashboard (commands)                     │   │
//! │  │    create_customer, record_sale, dashboard_metrics, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gestor-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  types  │ │  money  │ │  store  │ │validation│ │metrics │  │   │
//! │  │   │Customer │ │  Money  │ │ Actions │ │  rules   │ │reports │  │   │
//! │  │   │  Sale   │ │ (BRL)   │ │ Search  │ │  checks  │ │ series │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO CLOCK                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 gestor-db (Database Layer)                      │   │
//! │  │              clientes table, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity records (Product, Sale, Customer, Employee, bills)
//! - [`money`] - Money type with integer centavos (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`store`] - Explicit view-state container with typed actions
//! - [`metrics`] - Dashboard aggregates and period reports
//!
//! ## Example Usage
//!
//! ```rust
//! use gestor_core::money::Money;
//!
//! let price = Money::from_cents(1099); // R$ 10,99
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.cents(), 3297);
//! assert_eq!(line.to_string(), "R$ 32,97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod metrics;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{Action, Outcome, Store};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product on one sale line.
///
/// Guards against typing 10000 instead of 10 on the sale form.
pub const MAX_SALE_QUANTITY: i64 = 9_999;

/// Maximum length of a search query.
pub const MAX_QUERY_LENGTH: usize = 100;

/// Default number of months shown in the monthly revenue chart.
pub const DEFAULT_REPORT_MONTHS: u32 = 7;

/// Default stock level at or below which a product counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;
