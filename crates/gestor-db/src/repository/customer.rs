//! # Customer Repository
//!
//! Database operations for the `clientes` table.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Customer Operations                                  │
//! │                                                                         │
//! │  Operation          Statement                         Zero rows        │
//! │  ─────────          ─────────                         ─────────        │
//! │  list()             SELECT … ORDER BY created_at DESC  empty Vec        │
//! │  create(new)        INSERT … RETURNING                 n/a              │
//! │  update(id, patch)  UPDATE … RETURNING                 NotFound         │
//! │  delete(id)         DELETE                             Ok (silent)      │
//! │  get_by_id(id)      SELECT … WHERE id                  NotFound         │
//! │  record_purchase    UPDATE total = total + Δ           NotFound         │
//! │  count()            SELECT COUNT(*)                    0                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Server-Assigned Fields
//! `id` (UUID v4), `created_at` and `updated_at` are assigned here, never
//! by the caller. `total_compras` starts at zero and only moves through
//! `record_purchase`.

use chrono::Utc;
use gestor_core::{Customer, CustomerPatch, Money, NewCustomer};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "Customer";

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let ana = repo.create(NewCustomer::new("Ana", "111")).await?;
/// let same = repo.get_by_id(&ana.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists every customer, newest first.
    ///
    /// Rows created in the same instant come back in reverse insertion
    /// order (rowid tie-break).
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, nome, email, telefone, total_compras, created_at, updated_at
            FROM clientes
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Inserts a new customer and returns the stored record.
    ///
    /// ## What Gets Written
    /// ```text
    /// id            ← new UUID v4
    /// nome          ← trimmed name
    /// email         ← trimmed email, blank → NULL
    /// telefone      ← trimmed phone
    /// total_compras ← 0
    /// created_at    ← now
    /// updated_at    ← now
    /// ```
    pub async fn create(&self, customer: NewCustomer) -> DbResult<Customer> {
        let customer = customer.normalized();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!(id = %id, "Inserting customer");

        let created = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO clientes (id, nome, email, telefone, total_compras, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)
            RETURNING id, nome, email, telefone, total_compras, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        info!(id = %created.id, "Customer created");
        Ok(created)
    }

    /// Applies a partial update and returns the updated record.
    ///
    /// Only `nome`, `email` and `telefone` are ever written, plus the
    /// `updated_at` stamp. Fields absent from the patch keep their value.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no customer has this id
    pub async fn update(&self, id: &str, patch: CustomerPatch) -> DbResult<Customer> {
        let patch = patch.normalized();
        let now = Utc::now();

        debug!(id = %id, "Updating customer");

        // ?3 says whether the email column is touched at all, ?4 is the new
        // value (NULL clears it)
        let (set_email, email) = match patch.email {
            Some(email) => (true, email),
            None => (false, None),
        };

        let rows = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE clientes SET
                nome = COALESCE(?2, nome),
                email = CASE WHEN ?3 THEN ?4 ELSE email END,
                telefone = COALESCE(?5, telefone),
                updated_at = ?6
            WHERE id = ?1
            RETURNING id, nome, email, telefone, total_compras, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(set_email)
        .bind(&email)
        .bind(&patch.phone)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        let updated = exactly_one(rows, id)?;
        info!(id = %id, "Customer updated");
        Ok(updated)
    }

    /// Deletes a customer.
    ///
    /// Deleting an id that matches no row is not an error: the call
    /// succeeds and only a debug line records it.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id = %id, "Delete matched no customer");
        } else {
            info!(id = %id, "Customer deleted");
        }

        Ok(())
    }

    /// Gets exactly one customer by id.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - zero rows
    /// * `DbError::MultipleRows` - more than one row
    pub async fn get_by_id(&self, id: &str) -> DbResult<Customer> {
        let rows = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, nome, email, telefone, total_compras, created_at, updated_at
            FROM clientes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        exactly_one(rows, id)
    }

    /// Credits a purchase to the customer's running total.
    ///
    /// ## Delta Update
    /// ```text
    /// ❌ read total, add in Rust, write total   (loses concurrent credits)
    /// ✅ UPDATE clientes SET total_compras = total_compras + ?
    /// ```
    ///
    /// ## Errors
    /// * `DbError::ConstraintViolation` - negative amount
    /// * `DbError::NotFound` - no customer has this id
    pub async fn record_purchase(&self, id: &str, amount: Money) -> DbResult<Customer> {
        if amount.is_negative() {
            return Err(DbError::ConstraintViolation {
                message: format!("purchase amount must not be negative: {}", amount),
            });
        }

        debug!(id = %id, amount = amount.cents(), "Crediting purchase");

        let rows = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE clientes SET
                total_compras = total_compras + ?2,
                updated_at = ?3
            WHERE id = ?1
            RETURNING id, nome, email, telefone, total_compras, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .bind(Utc::now())
        .fetch_all(&self.pool)
        .await?;

        exactly_one(rows, id)
    }

    /// Counts customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Reduces a result set that must hold a single row.
fn exactly_one(mut rows: Vec<Customer>, id: &str) -> DbResult<Customer> {
    match rows.len() {
        0 => Err(DbError::not_found(ENTITY, id)),
        1 => Ok(rows.remove(0)),
        count => Err(DbError::MultipleRows {
            entity: ENTITY.to_string(),
            id: id.to_string(),
            count,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
