//! # Search Command
//!
//! The header search box. Matches products by name or category and
//! customers by name, phone or email, ignoring case.

use gestor_core::store::SearchResults;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;

/// Searches the store. A blank query returns everything.
pub fn search(store: &StoreState, query: &str) -> Result<SearchResults, ApiError> {
    let results = store.with_store(|s| s.search(query))?;
    debug!(
        query = %query.trim(),
        products = results.products.len(),
        customers = results.customers.len(),
        "Search complete"
    );
    Ok(results)
}
