//! # Repository Module
//!
//! Database repository implementations for GestorPro.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Dashboard command                                                     │
//! │       │                                                                 │
//! │       │  db.customers().update(id, patch)                              │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── list()                                                            │
//! │  ├── create(new)                                                       │
//! │  ├── update(id, patch)                                                 │
//! │  ├── delete(id)                                                        │
//! │  ├── get_by_id(id)                                                     │
//! │  ├── record_purchase(id, amount)                                       │
//! │  └── count()                                                           │
//! │       │                                                                 │
//! │       │  one SQL statement per call                                    │
//! │       ▼                                                                 │
//! │  SQLite `clientes` table                                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - Customer CRUD and purchase totals

pub mod customer;
