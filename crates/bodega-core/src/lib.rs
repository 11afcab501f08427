//! # bodega-core: Pure Domain Types for Bodega
//!
//! This crate holds the domain vocabulary of the inventory system as pure
//! data and pure functions, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Bodega Architecture                        │
//! │                                                                 │
//! │  apps/cli          Console menu, input prompts                  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  bodega-db         Inventory repository: SQLite + mirror        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  bodega-core       ★ THIS CRATE ★                               │
//! │                    Product, validation, ValidationError         │
//! │                                                                 │
//! │  NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The `Product` entity
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use product::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// Guards against pasting arbitrary text into the name prompt; the store
/// itself only requires NOT NULL.
pub const MAX_NAME_LEN: usize = 200;
