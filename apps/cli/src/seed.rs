//! # First-Run Seeding
//!
//! Populates an empty inventory with a small example catalog so a fresh
//! install has something to browse.
//!
//! ## Contract
//! - Runs once at startup, after the inventory is loaded
//! - No-op if ANY record already exists
//! - Failure is fatal: a store that rejects the example rows is broken

use bodega_core::Product;
use bodega_db::{DbResult, Inventory};
use tracing::{debug, info};

/// Example catalog for a pizzeria storeroom: (id, name, quantity, price).
const EXAMPLE_PRODUCTS: &[(i64, &str, i64, f64)] = &[
    (101, "Harina 1kg", 20, 2.50),
    (102, "Queso Mozzarella 1kg", 15, 6.00),
    (103, "Salsa de Tomate 500g", 30, 1.80),
    (104, "Orégano 50g", 40, 0.50),
    (105, "Caja para Pizza (mediana)", 200, 0.30),
    (106, "Aceite 1L", 10, 3.20),
    (107, "Bebida 1.5L", 50, 1.50),
    (108, "Pepperoni 500g", 12, 4.00),
];

/// Loads the example catalog if the inventory is empty.
pub async fn load_example_products(inventory: &mut Inventory) -> DbResult<()> {
    if !inventory.is_empty() {
        debug!(count = inventory.len(), "Inventory not empty, skipping seed");
        return Ok(());
    }

    for &(id, name, quantity, price) in EXAMPLE_PRODUCTS {
        inventory.add(Product::new(id, name, quantity, price)).await?;
    }

    info!(count = EXAMPLE_PRODUCTS.len(), "Example catalog loaded");
    println!(
        "Loaded {} example products into the empty inventory.",
        EXAMPLE_PRODUCTS.len()
    );
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bodega_db::DbConfig;

    #[tokio::test]
    async fn test_seed_fills_empty_inventory_once() {
        let mut inv = Inventory::open(DbConfig::in_memory()).await.unwrap();

        load_example_products(&mut inv).await.unwrap();
        assert_eq!(inv.len(), EXAMPLE_PRODUCTS.len());

        // Second run is a no-op, not a duplicate-id failure
        load_example_products(&mut inv).await.unwrap();
        assert_eq!(inv.len(), EXAMPLE_PRODUCTS.len());
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_inventory() {
        let mut inv = Inventory::open(DbConfig::in_memory()).await.unwrap();
        inv.add(Product::new(1, "Levadura 500g", 5, 1.20))
            .await
            .unwrap();

        load_example_products(&mut inv).await.unwrap();

        // Only the pre-existing record remains
        assert_eq!(inv.len(), 1);
        assert!(inv.contains(1));
    }
}
