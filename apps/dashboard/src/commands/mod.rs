//! # Commands Module
//!
//! Every operation the dashboard pages call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── customer.rs  ◄─── Clientes: persisted through the repository
//! ├── product.rs   ◄─── Estoque
//! ├── sale.rs      ◄─── Vendas (stock decrement + purchase credit)
//! ├── employee.rs  ◄─── Funcionários, payroll
//! ├── finance.rs   ◄─── Contas a pagar / a receber
//! ├── report.rs    ◄─── Dashboard cards, period reports, revenue chart
//! └── search.rs    ◄─── Header search box
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Store only
//! fn list_products(store: &StoreState)
//!
//! // Database and store
//! async fn create_customer(db: &DbState, store: &StoreState, input: NewCustomer)
//!
//! // Store and config
//! fn dashboard_metrics(store: &StoreState, config: &ConfigState, today: NaiveDate)
//! ```
//!
//! Every command returns `Result<T, ApiError>` so a failure always reaches
//! the view with a message it can show.

pub mod customer;
pub mod employee;
pub mod finance;
pub mod product;
pub mod report;
pub mod sale;
pub mod search;

use gestor_core::Outcome;

use crate::error::ApiError;

/// Error for a dispatch that produced the wrong kind of outcome.
pub(crate) fn unexpected(outcome: Outcome) -> ApiError {
    ApiError::internal(format!("Unexpected store outcome: {:?}", outcome))
}
