//! # View-State Store
//!
//! In-memory collections behind every dashboard page, mutated only through
//! typed actions.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Dispatch                                  │
//! │                                                                         │
//! │  Command                    Action                       Collection     │
//! │  ───────                    ──────                       ──────────     │
//! │                                                                         │
//! │  add_product ─────────► Product(Add) ───────────────► products.push    │
//! │  record_sale ─────────► Sale(Record) ──┬────────────► sales.push       │
//! │                                        ├────────────► product.qty -= n │
//! │                                        └────────────► customer.total += │
//! │  create_customer ─────► Customer(Saved) ────────────► customers upsert │
//! │  toggle_payable ──────► Payable(ToggleStatus) ──────► status flip      │
//! │                                                                         │
//! │  dispatch() validates first and mutates second: a failed action        │
//! │  leaves every collection exactly as it was.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Customers
//! Customers are persisted by the data layer. The store never creates them,
//! it only mirrors what the repository returns (`Loaded`, `Saved`,
//! `Removed`). Removing a customer id the store does not hold is a no-op, the
//! same way the repository treats deleting a missing row.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    Bill, Customer, Employee, EntityKind, NewBill, NewEmployee, NewProduct, NewSale, Payable,
    Product, Receivable, Sale, SaleLine,
};
use crate::validation::validate_search_query;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Actions
// =============================================================================

/// Product catalog actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    Add(NewProduct),
    Edit { id: String, product: NewProduct },
    Remove { id: String },
}

/// Sale actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleAction {
    /// Records a sale, decrementing stock and crediting the customer.
    Record(NewSale),
    /// Removes a sale record. Stock and customer totals are left as they are.
    Remove { id: String },
}

/// Mirrors of customer changes already applied by the data layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerAction {
    /// Replaces the whole collection (initial load or refresh).
    Loaded(Vec<Customer>),
    /// Inserts or replaces one record by id.
    Saved(Customer),
    Removed { id: String },
}

/// Employee actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeAction {
    Add(NewEmployee),
    Edit { id: String, employee: NewEmployee },
    Remove { id: String },
}

/// Actions shared by payables and receivables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillAction {
    Add(NewBill),
    /// Pending ⇄ paid (payables) or pending ⇄ received (receivables).
    ToggleStatus { id: String },
    Remove { id: String },
}

/// Every action the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Product(ProductAction),
    Sale(SaleAction),
    Customer(CustomerAction),
    Employee(EmployeeAction),
    Payable(BillAction),
    Receivable(BillAction),
}

/// What a successful dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Product(Product),
    /// The recorded sale and, when it had one, the credited customer.
    SaleRecorded {
        sale: Sale,
        customer: Option<Customer>,
    },
    Customer(Customer),
    CustomersLoaded {
        count: usize,
    },
    Employee(Employee),
    Payable(Payable),
    Receivable(Receivable),
    Removed {
        entity: EntityKind,
        id: String,
    },
}

/// Matches of a dashboard search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
}

enum BillChange<B> {
    Saved(B),
    Removed(String),
}

// =============================================================================
// Store
// =============================================================================

/// All view-state collections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
    sales: Vec<Sale>,
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    payables: Vec<Payable>,
    receivables: Vec<Receivable>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Customers in the order the data layer listed them (newest first).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn payables(&self) -> &[Payable] {
        &self.payables
    }

    pub fn receivables(&self) -> &[Receivable] {
        &self.receivables
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Applies an action.
    ///
    /// ## Errors
    /// - `Validation` when the input breaks a field rule
    /// - `NotFound` when editing, removing or toggling an unknown id
    /// - `EmptySale` / `InsufficientStock` / `AmountOverflow` when recording a sale
    ///
    /// On error nothing is changed.
    pub fn dispatch(&mut self, action: Action) -> CoreResult<Outcome> {
        match action {
            Action::Product(action) => self.apply_product(action),
            Action::Sale(action) => self.apply_sale(action),
            Action::Customer(action) => Ok(self.apply_customer(action)),
            Action::Employee(action) => self.apply_employee(action),
            Action::Payable(action) => Ok(match apply_bill(&mut self.payables, action)? {
                BillChange::Saved(bill) => Outcome::Payable(bill),
                BillChange::Removed(id) => Outcome::Removed {
                    entity: EntityKind::Payable,
                    id,
                },
            }),
            Action::Receivable(action) => {
                Ok(match apply_bill(&mut self.receivables, action)? {
                    BillChange::Saved(bill) => Outcome::Receivable(bill),
                    BillChange::Removed(id) => Outcome::Removed {
                        entity: EntityKind::Receivable,
                        id,
                    },
                })
            }
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    fn apply_product(&mut self, action: ProductAction) -> CoreResult<Outcome> {
        match action {
            ProductAction::Add(input) => {
                input.validate()?;
                let product = input.into_product(new_id());
                self.products.push(product.clone());
                Ok(Outcome::Product(product))
            }
            ProductAction::Edit { id, product } => {
                product.validate()?;
                let slot = self
                    .products
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| CoreError::not_found(EntityKind::Product, &id))?;
                *slot = product.into_product(id);
                Ok(Outcome::Product(slot.clone()))
            }
            ProductAction::Remove { id } => {
                remove_by(&mut self.products, |p| p.id == id, EntityKind::Product, &id)?;
                Ok(Outcome::Removed {
                    entity: EntityKind::Product,
                    id,
                })
            }
        }
    }

    // =========================================================================
    // Sales
    // =========================================================================

    fn apply_sale(&mut self, action: SaleAction) -> CoreResult<Outcome> {
        match action {
            SaleAction::Record(input) => {
                let (sale, customer) = self.record_sale(input)?;
                Ok(Outcome::SaleRecorded { sale, customer })
            }
            SaleAction::Remove { id } => {
                remove_by(&mut self.sales, |s| s.id == id, EntityKind::Sale, &id)?;
                Ok(Outcome::Removed {
                    entity: EntityKind::Sale,
                    id,
                })
            }
        }
    }

    /// Records a sale.
    ///
    /// ## Steps
    /// ```text
    /// 1. Shape check      items non-empty, quantities in 1..=9999
    /// 2. References       every product exists, customer exists if given
    /// 3. Stock            Σ requested per product ≤ quantity on hand
    /// 4. Totals           snapshot prices, total = Σ price × qty and the
    ///                     credited customer total, both without overflow
    ///         │
    ///         ▼  (nothing has changed up to here)
    /// 5. Decrement stock, credit customer total_compras
    /// ```
    fn record_sale(&mut self, input: NewSale) -> CoreResult<(Sale, Option<Customer>)> {
        input.validate()?;

        let mut requested: HashMap<&str, i64> = HashMap::new();
        for line in &input.items {
            if self.product(&line.product_id).is_none() {
                return Err(CoreError::not_found(EntityKind::Product, &line.product_id));
            }
            *requested.entry(line.product_id.as_str()).or_insert(0) += line.quantity;
        }

        for product in &self.products {
            if let Some(&qty) = requested.get(product.id.as_str()) {
                if qty > product.quantity {
                    return Err(CoreError::InsufficientStock {
                        product: product.name.clone(),
                        available: product.quantity,
                        requested: qty,
                    });
                }
            }
        }

        let customer_idx = match &input.customer_id {
            Some(id) => Some(
                self.customers
                    .iter()
                    .position(|c| &c.id == id)
                    .ok_or_else(|| CoreError::not_found(EntityKind::Customer, id))?,
            ),
            None => None,
        };

        // Snapshot prices and total before touching anything
        let mut items = Vec::with_capacity(input.items.len());
        let mut total = Money::zero();
        for line in input.items {
            let product = self
                .product(&line.product_id)
                .ok_or_else(|| CoreError::not_found(EntityKind::Product, &line.product_id))?;
            total = product
                .price
                .checked_multiply_quantity(line.quantity)
                .and_then(|line_total| total.checked_add(line_total))
                .ok_or_else(|| CoreError::AmountOverflow {
                    context: format!("sale total with {} × {}", line.quantity, product.name),
                })?;
            items.push(SaleLine {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: product.price,
            });
        }

        let credited = match customer_idx {
            Some(idx) => {
                let customer = &self.customers[idx];
                let new_total = customer.total_purchases.checked_add(total).ok_or_else(|| {
                    CoreError::AmountOverflow {
                        context: format!("purchase total of {}", customer.name),
                    }
                })?;
                Some((idx, new_total))
            }
            None => None,
        };

        // All checks passed
        for line in &items {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                product.quantity -= line.quantity;
            }
        }

        let customer = credited.map(|(idx, new_total)| {
            let customer = &mut self.customers[idx];
            customer.total_purchases = new_total;
            customer.clone()
        });

        let sale = Sale {
            id: new_id(),
            date: input.date,
            items,
            customer_id: input.customer_id,
            total,
            payment_method: input.payment_method,
        };
        self.sales.push(sale.clone());

        Ok((sale, customer))
    }

    // =========================================================================
    // Customers
    // =========================================================================

    fn apply_customer(&mut self, action: CustomerAction) -> Outcome {
        match action {
            CustomerAction::Loaded(customers) => {
                let count = customers.len();
                self.customers = customers;
                Outcome::CustomersLoaded { count }
            }
            CustomerAction::Saved(customer) => {
                match self.customers.iter_mut().find(|c| c.id == customer.id) {
                    Some(slot) => *slot = customer.clone(),
                    None => self.customers.insert(0, customer.clone()),
                }
                Outcome::Customer(customer)
            }
            CustomerAction::Removed { id } => {
                self.customers.retain(|c| c.id != id);
                Outcome::Removed {
                    entity: EntityKind::Customer,
                    id,
                }
            }
        }
    }

    // =========================================================================
    // Employees
    // =========================================================================

    fn apply_employee(&mut self, action: EmployeeAction) -> CoreResult<Outcome> {
        match action {
            EmployeeAction::Add(input) => {
                input.validate()?;
                let employee = input.into_employee(new_id());
                self.employees.push(employee.clone());
                Ok(Outcome::Employee(employee))
            }
            EmployeeAction::Edit { id, employee } => {
                employee.validate()?;
                let slot = self
                    .employees
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| CoreError::not_found(EntityKind::Employee, &id))?;
                *slot = employee.into_employee(id);
                Ok(Outcome::Employee(slot.clone()))
            }
            EmployeeAction::Remove { id } => {
                remove_by(&mut self.employees, |e| e.id == id, EntityKind::Employee, &id)?;
                Ok(Outcome::Removed {
                    entity: EntityKind::Employee,
                    id,
                })
            }
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Case-insensitive search over products and customers.
    ///
    /// Products match on name or category, customers on name, phone or
    /// email. An empty query returns everything.
    pub fn search(&self, query: &str) -> CoreResult<SearchResults> {
        let needle = validate_search_query(query)?.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&needle);

        let products = self
            .products
            .iter()
            .filter(|p| hit(&p.name) || hit(&p.category))
            .cloned()
            .collect();

        let customers = self
            .customers
            .iter()
            .filter(|c| hit(&c.name) || hit(&c.phone) || c.email.as_deref().is_some_and(|e| hit(e)))
            .cloned()
            .collect();

        Ok(SearchResults {
            products,
            customers,
        })
    }
}

fn remove_by<T>(
    items: &mut Vec<T>,
    matches: impl Fn(&T) -> bool,
    entity: EntityKind,
    id: &str,
) -> CoreResult<T> {
    let idx = items
        .iter()
        .position(matches)
        .ok_or_else(|| CoreError::not_found(entity, id))?;
    Ok(items.remove(idx))
}

fn apply_bill<B: Bill>(bills: &mut Vec<B>, action: BillAction) -> CoreResult<BillChange<B>> {
    match action {
        BillAction::Add(input) => {
            input.validate()?;
            let bill = B::from_new(new_id(), input);
            bills.push(bill.clone());
            Ok(BillChange::Saved(bill))
        }
        BillAction::ToggleStatus { id } => {
            let bill = bills
                .iter_mut()
                .find(|b| b.id() == id)
                .ok_or_else(|| CoreError::not_found(B::KIND, &id))?;
            bill.toggle_status();
            Ok(BillChange::Saved(bill.clone()))
        }
        BillAction::Remove { id } => {
            remove_by(bills, |b| b.id() == id, B::KIND, &id)?;
            Ok(BillChange::Removed(id))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewSaleLine, PayableStatus, PaymentMethod, ReceivableStatus};
    use chrono::{NaiveDate, Utc};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn new_product(name: &str, cents: i64, qty: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Money::from_cents(cents),
            quantity: qty,
            category: "Mercearia".to_string(),
        }
    }

    fn customer(id: &str, name: &str) -> Customer {
        let now = Utc::now();
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: "11 9999-0000".to_string(),
            total_purchases: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    fn add_product(store: &mut Store, name: &str, cents: i64, qty: i64) -> Product {
        match store
            .dispatch(Action::Product(ProductAction::Add(new_product(name, cents, qty))))
            .unwrap()
        {
            Outcome::Product(p) => p,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    fn sale(items: Vec<(&str, i64)>, customer_id: Option<&str>) -> Action {
        Action::Sale(SaleAction::Record(NewSale {
            date: date(),
            items: items
                .into_iter()
                .map(|(id, quantity)| NewSaleLine {
                    product_id: id.to_string(),
                    quantity,
                })
                .collect(),
            customer_id: customer_id.map(str::to_string),
            payment_method: PaymentMethod::InstantTransfer,
        }))
    }

    #[test]
    fn test_add_edit_remove_product() {
        let mut store = Store::new();
        let product = add_product(&mut store, "Café 500g", 1890, 10);
        assert!(Uuid::parse_str(&product.id).is_ok());
        assert_eq!(store.products().len(), 1);

        let edited = store
            .dispatch(Action::Product(ProductAction::Edit {
                id: product.id.clone(),
                product: new_product("Café 1kg", 3500, 4),
            }))
            .unwrap();
        match edited {
            Outcome::Product(p) => {
                assert_eq!(p.id, product.id);
                assert_eq!(p.name, "Café 1kg");
                assert_eq!(p.quantity, 4);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        store
            .dispatch(Action::Product(ProductAction::Remove {
                id: product.id.clone(),
            }))
            .unwrap();
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let mut store = Store::new();
        let err = store
            .dispatch(Action::Product(ProductAction::Edit {
                id: "missing".to_string(),
                product: new_product("X", 100, 1),
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotFound {
                entity: EntityKind::Product,
                ..
            }
        ));

        let err = store
            .dispatch(Action::Payable(BillAction::ToggleStatus {
                id: "missing".to_string(),
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotFound {
                entity: EntityKind::Payable,
                ..
            }
        ));

        let err = store
            .dispatch(Action::Employee(EmployeeAction::Remove {
                id: "missing".to_string(),
            }))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_input_leaves_store_untouched() {
        let mut store = Store::new();
        let err = store
            .dispatch(Action::Product(ProductAction::Add(new_product("  ", 100, 1))))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_record_sale_updates_stock_and_customer() {
        let mut store = Store::new();
        let coffee = add_product(&mut store, "Café 500g", 1890, 10);
        let sugar = add_product(&mut store, "Açúcar 1kg", 550, 3);
        store.dispatch(Action::Customer(CustomerAction::Loaded(vec![customer("c1", "Ana")])))
            .unwrap();

        let outcome = store
            .dispatch(sale(vec![(coffee.id.as_str(), 3), (sugar.id.as_str(), 2)], Some("c1")))
            .unwrap();

        let (sale, credited) = match outcome {
            Outcome::SaleRecorded { sale, customer } => (sale, customer),
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(sale.total.cents(), 3 * 1890 + 2 * 550);
        assert_eq!(sale.items_total(), sale.total);
        assert_eq!(credited.unwrap().total_purchases, sale.total);

        assert_eq!(store.product(&coffee.id).unwrap().quantity, 7);
        assert_eq!(store.product(&sugar.id).unwrap().quantity, 1);
        assert_eq!(store.customer("c1").unwrap().total_purchases, sale.total);
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_sale_price_is_snapshotted() {
        let mut store = Store::new();
        let coffee = add_product(&mut store, "Café 500g", 1890, 10);
        store.dispatch(sale(vec![(coffee.id.as_str(), 1)], None)).unwrap();

        store
            .dispatch(Action::Product(ProductAction::Edit {
                id: coffee.id.clone(),
                product: new_product("Café 500g", 2500, 9),
            }))
            .unwrap();

        assert_eq!(store.sales()[0].items[0].unit_price.cents(), 1890);
        assert_eq!(store.sales()[0].total.cents(), 1890);
    }

    #[test]
    fn test_cumulative_quantity_checked_against_stock() {
        let mut store = Store::new();
        let coffee = add_product(&mut store, "Café 500g", 1890, 5);

        let err = store
            .dispatch(sale(vec![(coffee.id.as_str(), 3), (coffee.id.as_str(), 3)], None))
            .unwrap_err();
        match err {
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 5);
                assert_eq!(requested, 6);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.product(&coffee.id).unwrap().quantity, 5);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_failed_sale_changes_nothing() {
        let mut store = Store::new();
        let coffee = add_product(&mut store, "Café 500g", 1890, 5);

        let err = store
            .dispatch(sale(vec![(coffee.id.as_str(), 1)], Some("ghost")))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotFound {
                entity: EntityKind::Customer,
                ..
            }
        ));
        assert_eq!(store.product(&coffee.id).unwrap().quantity, 5);

        let err = store
            .dispatch(sale(vec![(coffee.id.as_str(), 1), ("nope", 1)], None))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotFound {
                entity: EntityKind::Product,
                ..
            }
        ));
        assert_eq!(store.product(&coffee.id).unwrap().quantity, 5);

        assert!(matches!(
            store.dispatch(sale(vec![], None)).unwrap_err(),
            CoreError::EmptySale
        ));
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_overflowing_sale_total_changes_nothing() {
        let mut store = Store::new();
        let jewel = add_product(&mut store, "Joia", i64::MAX / 2 + 1, 10);
        let cheap = add_product(&mut store, "Bala", 10, 10);

        let err = store
            .dispatch(sale(vec![(cheap.id.as_str(), 1), (jewel.id.as_str(), 2)], None))
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));

        // Each line fits but the sum does not
        let err = store
            .dispatch(sale(vec![(jewel.id.as_str(), 1), (jewel.id.as_str(), 1)], None))
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));

        assert_eq!(store.product(&jewel.id).unwrap().quantity, 10);
        assert_eq!(store.product(&cheap.id).unwrap().quantity, 10);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_overflowing_customer_credit_changes_nothing() {
        let mut store = Store::new();
        let coffee = add_product(&mut store, "Café 500g", 1890, 5);
        let mut ana = customer("c1", "Ana");
        ana.total_purchases = Money::from_cents(i64::MAX - 100);
        store
            .dispatch(Action::Customer(CustomerAction::Loaded(vec![ana.clone()])))
            .unwrap();

        let err = store
            .dispatch(sale(vec![(coffee.id.as_str(), 1)], Some("c1")))
            .unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));

        assert_eq!(store.customer("c1"), Some(&ana));
        assert_eq!(store.product(&coffee.id).unwrap().quantity, 5);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_customer_mirroring() {
        let mut store = Store::new();
        store
            .dispatch(Action::Customer(CustomerAction::Loaded(vec![
                customer("c2", "Bia"),
                customer("c1", "Ana"),
            ])))
            .unwrap();

        // New record goes to the front, matching newest-first order
        store
            .dispatch(Action::Customer(CustomerAction::Saved(customer("c3", "Caio"))))
            .unwrap();
        let ids: Vec<&str> = store.customers().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c3", "c2", "c1"]);

        let mut renamed = customer("c1", "Ana Souza");
        renamed.total_purchases = Money::from_cents(100);
        store
            .dispatch(Action::Customer(CustomerAction::Saved(renamed)))
            .unwrap();
        assert_eq!(store.customers().len(), 3);
        assert_eq!(store.customer("c1").unwrap().name, "Ana Souza");

        store
            .dispatch(Action::Customer(CustomerAction::Removed {
                id: "c2".to_string(),
            }))
            .unwrap();
        // Unknown id mirrors the silent delete of the data layer
        store
            .dispatch(Action::Customer(CustomerAction::Removed {
                id: "c2".to_string(),
            }))
            .unwrap();
        assert_eq!(store.customers().len(), 2);
    }

    #[test]
    fn test_bill_lifecycle() {
        let mut store = Store::new();
        let input = NewBill {
            description: "Aluguel".to_string(),
            amount: Money::from_cents(150_000),
            due_date: date(),
        };

        let payable = match store.dispatch(Action::Payable(BillAction::Add(input.clone()))).unwrap() {
            Outcome::Payable(p) => p,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(payable.status, PayableStatus::Pending);

        let toggled = store
            .dispatch(Action::Payable(BillAction::ToggleStatus {
                id: payable.id.clone(),
            }))
            .unwrap();
        assert!(matches!(toggled, Outcome::Payable(ref p) if p.status == PayableStatus::Paid));

        let receivable = match store.dispatch(Action::Receivable(BillAction::Add(input))).unwrap() {
            Outcome::Receivable(r) => r,
            other => panic!("unexpected outcome: {:?}", other),
        };
        store
            .dispatch(Action::Receivable(BillAction::ToggleStatus {
                id: receivable.id.clone(),
            }))
            .unwrap();
        assert_eq!(store.receivables()[0].status, ReceivableStatus::Received);

        let removed = store
            .dispatch(Action::Payable(BillAction::Remove { id: payable.id }))
            .unwrap();
        assert!(matches!(
            removed,
            Outcome::Removed {
                entity: EntityKind::Payable,
                ..
            }
        ));
        assert!(store.payables().is_empty());
        assert_eq!(store.receivables().len(), 1);
    }

    #[test]
    fn test_search() {
        let mut store = Store::new();
        add_product(&mut store, "Café 500g", 1890, 10);
        add_product(&mut store, "Sabão", 700, 2);
        store
            .dispatch(Action::Customer(CustomerAction::Loaded(vec![
                customer("c1", "Ana"),
                customer("c2", "Bruno"),
            ])))
            .unwrap();

        let results = store.search("  CAFÉ ").unwrap();
        assert_eq!(results.products.len(), 1);
        assert!(results.customers.is_empty());

        let results = store.search("mercearia").unwrap();
        assert_eq!(results.products.len(), 2);

        let results = store.search("bruno@").unwrap();
        assert_eq!(results.customers.len(), 1);
        assert_eq!(results.customers[0].id, "c2");

        let results = store.search("9999").unwrap();
        assert_eq!(results.customers.len(), 2);

        let everything = store.search("").unwrap();
        assert_eq!(everything.products.len(), 2);
        assert_eq!(everything.customers.len(), 2);

        assert!(store.search(&"x".repeat(101)).is_err());
    }
}
