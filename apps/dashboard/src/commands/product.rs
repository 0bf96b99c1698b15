//! # Product Commands
//!
//! The Estoque page: catalog entries with price, quantity on hand and
//! category. Products live only in the store.

use gestor_core::store::ProductAction;
use gestor_core::{Action, NewProduct, Outcome, Product};
use tracing::info;

use super::unexpected;
use crate::error::ApiError;
use crate::state::StoreState;

/// Returns every product in insertion order.
pub fn list_products(store: &StoreState) -> Vec<Product> {
    store.with_store(|s| s.products().to_vec())
}

/// Adds a product to the catalog.
pub fn add_product(store: &StoreState, input: NewProduct) -> Result<Product, ApiError> {
    match store.dispatch(Action::Product(ProductAction::Add(input)))? {
        Outcome::Product(product) => {
            info!(id = %product.id, name = %product.name, "Product added");
            Ok(product)
        }
        other => Err(unexpected(other)),
    }
}

/// Replaces every field of a product except its id.
pub fn edit_product(store: &StoreState, id: &str, input: NewProduct) -> Result<Product, ApiError> {
    let action = ProductAction::Edit {
        id: id.to_string(),
        product: input,
    };
    match store.dispatch(Action::Product(action))? {
        Outcome::Product(product) => Ok(product),
        other => Err(unexpected(other)),
    }
}

pub fn remove_product(store: &StoreState, id: &str) -> Result<(), ApiError> {
    store.dispatch(Action::Product(ProductAction::Remove { id: id.to_string() }))?;
    info!(id = %id, "Product removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use gestor_core::Money;

    fn coffee(quantity: i64) -> NewProduct {
        NewProduct {
            name: "Café 500g".to_string(),
            price: Money::from_cents(1890),
            quantity,
            category: "Mercearia".to_string(),
        }
    }

    #[test]
    fn test_add_edit_remove() {
        let store = StoreState::new();

        let added = add_product(&store, coffee(10)).unwrap();
        let edited = edit_product(&store, &added.id, coffee(4)).unwrap();
        assert_eq!(edited.id, added.id);
        assert_eq!(list_products(&store)[0].quantity, 4);

        remove_product(&store, &added.id).unwrap();
        assert!(list_products(&store).is_empty());
    }

    #[test]
    fn test_invalid_and_unknown() {
        let store = StoreState::new();

        let err = add_product(&store, coffee(-1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = edit_product(&store, "missing", coffee(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = remove_product(&store, "missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
