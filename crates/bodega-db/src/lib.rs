//! # bodega-db: Database Layer for Bodega
//!
//! SQLite-backed persistence plus the [`Inventory`] repository that keeps an
//! in-memory mirror of the catalog in lockstep with the store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Bodega Data Flow                          │
//! │                                                                 │
//! │  Console menu (apps/cli)                                        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 bodega-db (THIS CRATE)                    │  │
//! │  │                                                           │  │
//! │  │   ┌──────────┐   ┌─────────────────┐   ┌──────────────┐   │  │
//! │  │   │ DbConfig │   │    Inventory    │   │  Migrations  │   │  │
//! │  │   │ (pool.rs)│──►│ (inventory.rs)  │   │  (embedded)  │   │  │
//! │  │   │          │   │ pool + mirror   │   │ 001_....sql  │   │  │
//! │  │   └──────────┘   └─────────────────┘   └──────────────┘   │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite file: productos(id, nombre, cantidad, precio)           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bodega_db::{DbConfig, Inventory};
//!
//! let mut inventory = Inventory::open(DbConfig::new("./bodega.db")).await?;
//! inventory.add(Product::new(101, "Harina 1kg", 20, 2.50)).await?;
//! let matches = inventory.find_by_name("harina");
//! inventory.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod migrations;
pub mod pool;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use inventory::Inventory;
pub use pool::DbConfig;
