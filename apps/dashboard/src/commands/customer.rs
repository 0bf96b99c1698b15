//! # Customer Commands
//!
//! The Clientes page. Customers are the one entity persisted in SQLite, so
//! every command here goes through the repository first and then mirrors
//! the stored record into the store.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Customer Save Flow                                   │
//! │                                                                         │
//! │  Form submit { nome, email, telefone }                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalized() ── trim, blank email → None                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate() ──── fails? ──► ApiError VALIDATION_ERROR                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CustomerRepository::create / update ── fails? ──► ApiError             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store ◄── Customer::Saved(record returned by the database)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gestor_core::store::CustomerAction;
use gestor_core::validation::validate_uuid;
use gestor_core::{Action, Customer, CustomerPatch, NewCustomer, Outcome};
use tracing::{debug, info};

use super::unexpected;
use crate::error::ApiError;
use crate::state::{DbState, StoreState};

fn mirror(store: &StoreState, customer: Customer) -> Result<Customer, ApiError> {
    match store.dispatch(Action::Customer(CustomerAction::Saved(customer)))? {
        Outcome::Customer(saved) => Ok(saved),
        other => Err(unexpected(other)),
    }
}

/// Reloads every customer from the database, newest first.
pub async fn list_customers(db: &DbState, store: &StoreState) -> Result<Vec<Customer>, ApiError> {
    let customers = db.customers().list().await?;
    debug!(count = customers.len(), "Customers refreshed");

    store.dispatch(Action::Customer(CustomerAction::Loaded(customers.clone())))?;
    Ok(customers)
}

/// Creates a customer with a zero purchase total.
pub async fn create_customer(
    db: &DbState,
    store: &StoreState,
    input: NewCustomer,
) -> Result<Customer, ApiError> {
    let input = input.normalized();
    input.validate()?;

    let created = db.customers().create(input).await?;
    info!(id = %created.id, "Customer registered");

    mirror(store, created)
}

/// Applies a partial edit of name, email and phone.
pub async fn update_customer(
    db: &DbState,
    store: &StoreState,
    id: &str,
    patch: CustomerPatch,
) -> Result<Customer, ApiError> {
    validate_uuid(id)?;
    let patch = patch.normalized();
    patch.validate()?;

    let updated = db.customers().update(id, patch).await?;
    mirror(store, updated)
}

/// Deletes a customer. An id with no row is not an error.
pub async fn delete_customer(db: &DbState, store: &StoreState, id: &str) -> Result<(), ApiError> {
    validate_uuid(id)?;

    db.customers().delete(id).await?;
    store.dispatch(Action::Customer(CustomerAction::Removed { id: id.to_string() }))?;
    Ok(())
}

/// Number of customer rows in the database.
pub async fn count_customers(db: &DbState) -> Result<i64, ApiError> {
    Ok(db.customers().count().await?)
}

/// Fetches one customer straight from the database.
pub async fn get_customer(db: &DbState, id: &str) -> Result<Customer, ApiError> {
    validate_uuid(id)?;
    Ok(db.customers().get_by_id(id).await?)
}
