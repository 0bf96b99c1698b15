//! # Sale Commands
//!
//! The Vendas page.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    record_sale                                          │
//! │                                                                         │
//! │  NewSale { date, items, customer_id?, payment_method }                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store: Sale::Record ── invalid / no stock? ──► ApiError (no change)    │
//! │       │   • unit prices snapshotted                                     │
//! │       │   • stock decremented                                           │
//! │       │   • customer total credited (view copy)                         │
//! │       ▼                                                                 │
//! │  customer_id?  ── no ──► done                                           │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  CustomerRepository::record_purchase(id, total)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store: Customer::Saved(row from the database)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store update and the database credit are not one transaction. When
//! the credit fails the sale stays recorded in the view and the error is
//! returned so the page can tell the user.

use gestor_core::store::{CustomerAction, SaleAction};
use gestor_core::{Action, NewSale, Outcome, Sale};
use tracing::{info, warn};

use super::unexpected;
use crate::error::ApiError;
use crate::state::{DbState, StoreState};

/// Returns every recorded sale in insertion order.
pub fn list_sales(store: &StoreState) -> Vec<Sale> {
    store.with_store(|s| s.sales().to_vec())
}

/// Records a sale and persists the customer's purchase credit.
pub async fn record_sale(
    db: &DbState,
    store: &StoreState,
    input: NewSale,
) -> Result<Sale, ApiError> {
    let (sale, customer) = match store.dispatch(Action::Sale(SaleAction::Record(input)))? {
        Outcome::SaleRecorded { sale, customer } => (sale, customer),
        other => return Err(unexpected(other)),
    };

    info!(
        id = %sale.id,
        total = %sale.total,
        items = sale.items.len(),
        payment = %sale.payment_method,
        "Sale recorded"
    );

    if let Some(customer) = customer {
        let persisted = match db.customers().record_purchase(&customer.id, sale.total).await {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!(
                    sale_id = %sale.id,
                    customer_id = %customer.id,
                    error = %e,
                    "Sale recorded but purchase credit was not persisted"
                );
                return Err(e.into());
            }
        };
        store.dispatch(Action::Customer(CustomerAction::Saved(persisted)))?;
    }

    Ok(sale)
}

/// Deletes a sale record. Stock and customer totals are not restored.
pub fn remove_sale(store: &StoreState, id: &str) -> Result<(), ApiError> {
    store.dispatch(Action::Sale(SaleAction::Remove { id: id.to_string() }))?;
    info!(id = %id, "Sale removed");
    Ok(())
}
