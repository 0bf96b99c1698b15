//! # Domain Types
//!
//! Entity records used throughout GestorPro.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  date           │   │  nome           │       │
//! │  │  price          │   │  items[]        │   │  email?         │       │
//! │  │  quantity       │   │  customer_id?   │   │  telefone       │       │
//! │  │  category       │   │  total          │   │  total_compras  │       │
//! │  └─────────────────┘   │  payment_method │   │  created/updated│       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Employee     │   │    Payable      │   │   Receivable    │       │
//! │  │  name, role     │   │  description    │   │  description    │       │
//! │  │  salary         │   │  amount, due    │   │  amount, due    │       │
//! │  │  admission_date │   │  pending/paid   │   │ pending/received│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input vs. Record
//! Every entity has a `New*` input type without the generated fields.
//! Inputs are validated and normalised before a record is built from them.
//!
//! `Customer` is the only record with a persistent table contract, so it
//! serialises with the table's column names (`nome`, `telefone`,
//! `total_compras`). The rest are view-state and use camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{
    validate_amount_cents, validate_email, validate_label, validate_name, validate_phone,
    validate_sale_quantity, validate_stock_quantity, ValidationResult,
};
use crate::CoreError;

/// Trims a string and maps blank values to `None`.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// Entity Kind
// =============================================================================

/// The kinds of records the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Product,
    Sale,
    Customer,
    Employee,
    Payable,
    Receivable,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Product => "Product",
            EntityKind::Sale => "Sale",
            EntityKind::Customer => "Customer",
            EntityKind::Employee => "Employee",
            EntityKind::Payable => "Payable",
            EntityKind::Receivable => "Receivable",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product kept in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity on hand.
    pub quantity: i64,
    pub category: String,
}

impl Product {
    /// Returns true when at least one unit is on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Stock value at unit price.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// Input for creating or fully replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    pub quantity: i64,
    pub category: String,
}

impl NewProduct {
    /// Checks every field rule.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("nome", &self.name)?;
        validate_amount_cents("preco", self.price.cents())?;
        validate_stock_quantity(self.quantity)?;
        validate_label("categoria", &self.category)?;
        Ok(())
    }

    /// Builds the record for `id`, trimming text fields.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            quantity: self.quantity,
            category: self.category.trim().to_string(),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Dinheiro.
    Cash,
    /// Cartão (credit or debit).
    Card,
    /// PIX instant transfer.
    InstantTransfer,
    /// Boleto.
    Invoice,
}

impl PaymentMethod {
    /// Every method, in the order the sale form lists them.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::InstantTransfer,
        PaymentMethod::Invoice,
    ];

    /// Label shown on the sale form.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Card => "Cartão",
            PaymentMethod::InstantTransfer => "PIX",
            PaymentMethod::Invoice => "Boleto",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    /// Accepts both the wire names and the form labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" | "dinheiro" => Ok(PaymentMethod::Cash),
            "card" | "cartao" | "cartão" => Ok(PaymentMethod::Card),
            "instant_transfer" | "pix" => Ok(PaymentMethod::InstantTransfer),
            "invoice" | "boleto" => Ok(PaymentMethod::Invoice),
            other => Err(CoreError::Validation(
                crate::ValidationError::InvalidFormat {
                    field: "formaPagamento".to_string(),
                    reason: format!("unknown payment method '{}'", other),
                },
            )),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
/// The unit price is a snapshot taken when the sale was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub product_id: String,
    pub quantity: i64,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
}

impl SaleLine {
    /// unit_price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// A recorded sale.
///
/// ## Invariant
/// `total` equals the sum of `line_total()` over `items`. The store is the
/// only place sales are built, and it computes the total from the lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub items: Vec<SaleLine>,
    pub customer_id: Option<String>,
    pub total: Money,
    pub payment_method: PaymentMethod,
}

impl Sale {
    /// Recomputes the total from the line items.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(SaleLine::line_total).sum()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

/// A requested sale line: which product and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSaleLine {
    pub product_id: String,
    pub quantity: i64,
}

/// Input for recording a sale. Prices come from the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub items: Vec<NewSaleLine>,
    pub customer_id: Option<String>,
    pub payment_method: PaymentMethod,
}

impl NewSale {
    /// Checks the shape of the request (not stock or references).
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.items.is_empty() {
            return Err(CoreError::EmptySale);
        }
        for line in &self.items {
            validate_sale_quantity(line.quantity)?;
        }
        Ok(())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer row from the `clientes` table.
///
/// ## Server-Populated Fields
/// `id`, `total_compras`, `created_at` and `updated_at` are assigned by the
/// data layer; callers never supply them on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    pub id: String,

    #[serde(rename = "nome")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "nome"))]
    pub name: String,

    pub email: Option<String>,

    #[serde(rename = "telefone")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "telefone"))]
    pub phone: String,

    /// Cumulative purchase total.
    #[serde(rename = "total_compras")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "total_compras"))]
    pub total_purchases: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a customer.
///
/// ## Normalisation
/// `normalized()` trims every field and maps a blank email to `None`, which
/// is stored as NULL. The data layer always normalises before inserting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCustomer {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: String,
}

impl NewCustomer {
    /// Creates an input without email.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        NewCustomer {
            name: name.into(),
            email: None,
            phone: phone.into(),
        }
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the trimmed input with a blank email mapped to `None`.
    pub fn normalized(self) -> Self {
        NewCustomer {
            name: self.name.trim().to_string(),
            email: normalize_optional(self.email),
            phone: self.phone.trim().to_string(),
        }
    }

    /// Checks every field rule.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("nome", &self.name)?;
        validate_email(self.email.as_deref())?;
        validate_phone(&self.phone)?;
        Ok(())
    }
}

/// Partial update of a customer.
///
/// Only name, email and phone can change through this path.
///
/// ## Field Semantics
/// ```text
/// name / phone:  None → unchanged       Some(v) → set to v
/// email:         None → unchanged       Some(None) → cleared (NULL)
///                                       Some(Some(v)) → set to v
/// ```
/// On the wire an absent `email` leaves it unchanged while `"email": null`
/// clears it. A blank email string is also treated as a clear, so a form
/// that submits an empty email field removes the stored address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerPatch {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(as = "Option<String>")]
    pub email: Option<Option<String>>,

    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A present field becomes `Some(..)` even when it is `null`; only an
/// absent field falls back to the `None` default.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl CustomerPatch {
    /// Sets a new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new email (blank clears it).
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Some(email.into()));
        self
    }

    /// Clears the stored email.
    pub fn clearing_email(mut self) -> Self {
        self.email = Some(None);
        self
    }

    /// Sets a new phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Trims present fields and turns a blank email into a clear.
    pub fn normalized(self) -> Self {
        CustomerPatch {
            name: self.name.map(|n| n.trim().to_string()),
            email: self.email.map(normalize_optional),
            phone: self.phone.map(|p| p.trim().to_string()),
        }
    }

    /// Checks the rules of the fields that are present.
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = &self.name {
            validate_name("nome", name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email.as_deref())?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        Ok(())
    }

    /// Applies the patch to an in-memory record.
    ///
    /// Used by the store when mirroring an edit that the data layer has
    /// already accepted. Does not touch timestamps.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = phone.clone();
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// An employee on the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Monthly salary.
    pub salary: Money,
    #[ts(as = "String")]
    pub admission_date: NaiveDate,
}

/// Input for creating or fully replacing an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub salary: Money,
    #[ts(as = "String")]
    pub admission_date: NaiveDate,
}

impl NewEmployee {
    /// Checks every field rule.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("nome", &self.name)?;
        validate_label("cargo", &self.role)?;
        validate_amount_cents("salario", self.salary.cents())?;
        Ok(())
    }

    /// Builds the record for `id`, trimming text fields.
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            salary: self.salary,
            admission_date: self.admission_date,
        }
    }
}

// =============================================================================
// Payables & Receivables
// =============================================================================

/// Status of a bill to pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PayableStatus {
    #[default]
    Pending,
    Paid,
}

/// Status of an amount to receive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    #[default]
    Pending,
    Received,
}

/// A bill to pay (conta a pagar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Payable {
    pub id: String,
    pub description: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub status: PayableStatus,
}

/// An amount to receive (conta a receber).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receivable {
    pub id: String,
    pub description: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub status: ReceivableStatus,
}

/// Input for a new payable or receivable. New bills start pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub description: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
}

impl NewBill {
    /// Checks every field rule.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_label("descricao", &self.description)?;
        validate_amount_cents("valor", self.amount.cents())?;
        Ok(())
    }
}

/// Behaviour shared by payables and receivables.
///
/// The store keeps both in separate collections but handles their actions
/// with the same generic code.
pub trait Bill: Clone {
    /// The kind reported in not-found errors.
    const KIND: EntityKind;

    /// Builds a pending bill from validated input.
    fn from_new(id: String, input: NewBill) -> Self;

    fn id(&self) -> &str;
    fn amount(&self) -> Money;
    fn due_date(&self) -> NaiveDate;

    /// True once paid (payables) or received (receivables).
    fn is_settled(&self) -> bool;

    /// Flips between pending and settled.
    fn toggle_status(&mut self);
}

impl Bill for Payable {
    const KIND: EntityKind = EntityKind::Payable;

    fn from_new(id: String, input: NewBill) -> Self {
        Payable {
            id,
            description: input.description.trim().to_string(),
            amount: input.amount,
            due_date: input.due_date,
            status: PayableStatus::Pending,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    fn is_settled(&self) -> bool {
        self.status == PayableStatus::Paid
    }

    fn toggle_status(&mut self) {
        self.status = match self.status {
            PayableStatus::Pending => PayableStatus::Paid,
            PayableStatus::Paid => PayableStatus::Pending,
        };
    }
}

impl Bill for Receivable {
    const KIND: EntityKind = EntityKind::Receivable;

    fn from_new(id: String, input: NewBill) -> Self {
        Receivable {
            id,
            description: input.description.trim().to_string(),
            amount: input.amount,
            due_date: input.due_date,
            status: ReceivableStatus::Pending,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn amount(&self) -> Money {
        self.amount
    }

    fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    fn is_settled(&self) -> bool {
        self.status == ReceivableStatus::Received
    }

    fn toggle_status(&mut self) {
        self.status = match self.status {
            ReceivableStatus::Pending => ReceivableStatus::Received,
            ReceivableStatus::Received => ReceivableStatus::Pending,
        };
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_customer_normalizes_blank_email() {
        let input = NewCustomer::new("  Ana ", " 111 ").with_email("   ");
        let normalized = input.normalized();
        assert_eq!(normalized.name, "Ana");
        assert_eq!(normalized.phone, "111");
        assert_eq!(normalized.email, None);

        let input = NewCustomer::new("Ana", "111").with_email(" ana@example.com ");
        assert_eq!(
            input.normalized().email.as_deref(),
            Some("ana@example.com")
        );
    }

    #[test]
    fn test_new_customer_deserializes_table_field_names() {
        let input: NewCustomer =
            serde_json::from_str(r#"{"nome": "Ana", "telefone": "111"}"#).unwrap();
        assert_eq!(input, NewCustomer::new("Ana", "111"));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_customer_serializes_with_column_names() {
        let now = Utc::now();
        let customer = Customer {
            id: "c1".to_string(),
            name: "Ana".to_string(),
            email: None,
            phone: "111".to_string(),
            total_purchases: Money::zero(),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["nome"], "Ana");
        assert_eq!(value["telefone"], "111");
        assert_eq!(value["total_compras"], 0);
        assert!(value["email"].is_null());
        assert!(value.get("created_at").is_some());
    }

    #[test]
    fn test_patch_normalization_and_apply() {
        let patch = CustomerPatch::default().with_email("  ").normalized();
        assert_eq!(patch.email, Some(None));
        assert!(patch.name.is_none());

        let now = Utc::now();
        let mut customer = Customer {
            id: "c1".to_string(),
            name: "Ana".to_string(),
            email: Some("old@example.com".to_string()),
            phone: "111".to_string(),
            total_purchases: Money::from_cents(500),
            created_at: now,
            updated_at: now,
        };
        patch.apply_to(&mut customer);
        assert_eq!(customer.email, None);
        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.phone, "111");
        assert_eq!(customer.total_purchases.cents(), 500);
    }

    #[test]
    fn test_patch_deserialization_missing_fields_mean_unchanged() {
        let patch: CustomerPatch = serde_json::from_str(r#"{"email": "b@example.com"}"#).unwrap();
        assert!(patch.name.is_none());
        assert!(patch.phone.is_none());
        assert_eq!(patch.email, Some(Some("b@example.com".to_string())));
        assert!(!patch.is_empty());
        assert!(CustomerPatch::default().is_empty());
    }

    #[test]
    fn test_patch_deserialization_null_email_clears() {
        let patch: CustomerPatch = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(patch.email, Some(None));
        assert!(!patch.is_empty());

        let patch: CustomerPatch = serde_json::from_str(r#"{"nome": "Bia"}"#).unwrap();
        assert_eq!(patch.email, None);

        let json = serde_json::to_value(CustomerPatch::default().clearing_email()).unwrap();
        assert!(json["email"].is_null());
        let back: CustomerPatch = serde_json::from_value(json).unwrap();
        assert_eq!(back.email, Some(None));
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("Dinheiro".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("Cartão".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("PIX".parse::<PaymentMethod>().unwrap(), PaymentMethod::InstantTransfer);
        assert_eq!("boleto".parse::<PaymentMethod>().unwrap(), PaymentMethod::Invoice);
        assert_eq!(
            "instant_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::InstantTransfer
        );
        assert!("cheque".parse::<PaymentMethod>().is_err());

        for method in PaymentMethod::ALL {
            assert_eq!(method.label().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_sale_totals() {
        let sale = Sale {
            id: "s1".to_string(),
            date: date(2025, 1, 10),
            items: vec![
                SaleLine {
                    product_id: "p1".to_string(),
                    quantity: 3,
                    unit_price: Money::from_cents(1890),
                },
                SaleLine {
                    product_id: "p2".to_string(),
                    quantity: 1,
                    unit_price: Money::from_cents(500),
                },
            ],
            customer_id: None,
            total: Money::from_cents(6170),
            payment_method: PaymentMethod::InstantTransfer,
        };
        assert_eq!(sale.items_total(), sale.total);
        assert_eq!(sale.unit_count(), 4);
    }

    #[test]
    fn test_new_sale_validation() {
        let empty = NewSale {
            date: date(2025, 1, 10),
            items: vec![],
            customer_id: None,
            payment_method: PaymentMethod::Cash,
        };
        assert!(matches!(empty.validate(), Err(CoreError::EmptySale)));

        let zero_qty = NewSale {
            items: vec![NewSaleLine {
                product_id: "p1".to_string(),
                quantity: 0,
            }],
            ..empty
        };
        assert!(matches!(zero_qty.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_bill_toggle() {
        let mut payable = Payable::from_new(
            "b1".to_string(),
            NewBill {
                description: " Aluguel ".to_string(),
                amount: Money::from_cents(150_000),
                due_date: date(2025, 1, 5),
            },
        );
        assert_eq!(payable.description, "Aluguel");
        assert!(!payable.is_settled());
        payable.toggle_status();
        assert_eq!(payable.status, PayableStatus::Paid);
        payable.toggle_status();
        assert_eq!(payable.status, PayableStatus::Pending);

        let mut receivable = Receivable::from_new(
            "r1".to_string(),
            NewBill {
                description: "Serviço".to_string(),
                amount: Money::from_cents(1000),
                due_date: date(2025, 1, 5),
            },
        );
        receivable.toggle_status();
        assert!(receivable.is_settled());
        assert_eq!(receivable.status, ReceivableStatus::Received);
    }

    #[test]
    fn test_new_product_validation() {
        let product = NewProduct {
            name: "Café 500g".to_string(),
            price: Money::from_cents(1890),
            quantity: 10,
            category: "Mercearia".to_string(),
        };
        assert!(product.validate().is_ok());

        let negative = NewProduct {
            quantity: -1,
            ..product.clone()
        };
        assert!(negative.validate().is_err());

        let built = product.into_product("p1".to_string());
        assert!(built.in_stock());
        assert_eq!(built.stock_value().cents(), 18_900);
    }
}
