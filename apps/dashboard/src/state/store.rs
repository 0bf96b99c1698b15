//! # Store State
//!
//! Holds the view-state `Store` shared by every command.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because several commands read
//! and mutate it and only one may mutate at a time. The lock is a plain
//! `std::sync::Mutex` and is never held across an `.await`: commands take
//! it inside a closure, finish the synchronous work and release it before
//! touching the database.
//!
//! ```text
//! record_sale
//!    │
//!    ├─► with_store_mut(dispatch Sale::Record)   lock ─ unlock
//!    │
//!    ├─► db.customers().record_purchase().await   (no lock held)
//!    │
//!    └─► with_store_mut(dispatch Customer::Saved) lock ─ unlock
//! ```

use std::sync::{Arc, Mutex};

use gestor_core::{Action, CoreResult, Outcome, Store};

/// Shared handle to the view-state store.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Creates a state with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store_state.with_store(|s| s.products().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }

    /// Dispatches one action under the lock.
    pub fn dispatch(&self, action: Action) -> CoreResult<Outcome> {
        self.with_store_mut(|store| store.dispatch(action))
    }
}
