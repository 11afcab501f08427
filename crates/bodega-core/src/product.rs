//! # Product Entity
//!
//! The single domain entity of the system: a catalog product.
//!
//! ## Identity
//! The `id` is caller-assigned (not auto-generated) and is the unique key
//! both in the store (`productos.id` PRIMARY KEY) and in the repository's
//! in-memory mirror. For repository purposes identity is by `id`; the
//! derived `PartialEq` compares all fields and exists for test assertions.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Pure data holder, field-for-field the `productos` row. Non-negativity of
/// `quantity` and `price` is enforced by the store's CHECK constraints, not
/// here; well-formedness of raw input is the presentation layer's job
/// (see `bodega_core::validation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the operator.
    pub id: i64,

    /// Display name. Non-empty by convention (validated at the prompt).
    #[cfg_attr(feature = "sqlx", sqlx(rename = "nombre"))]
    pub name: String,

    /// Units on hand. Always >= 0 once persisted.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "cantidad"))]
    pub quantity: i64,

    /// Unit price. Always >= 0 once persisted.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "precio"))]
    pub price: f64,
}

impl Product {
    /// Creates a product from its four fields.
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Product {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_all_fields() {
        let p = Product::new(101, "Harina 1kg", 20, 2.50);
        assert_eq!(p.id, 101);
        assert_eq!(p.name, "Harina 1kg");
        assert_eq!(p.quantity, 20);
        assert_eq!(p.price, 2.50);
    }

    #[test]
    fn test_equality_covers_every_field() {
        let a = Product::new(1, "Aceite 1L", 10, 3.20);
        let mut b = a.clone();
        assert_eq!(a, b);

        b.quantity = 11;
        assert_ne!(a, b);
    }
}
