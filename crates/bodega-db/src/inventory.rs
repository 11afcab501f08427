//! # Inventory Repository
//!
//! The one component with real invariants: a durable `productos` table and
//! an in-memory mirror of it, kept in agreement through every mutation.
//!
//! ## Consistency Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Store-First Mutation Protocol                   │
//! │                                                                 │
//! │  add / remove / set_quantity / set_price                        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  1. Existence check against the MIRROR (never re-queried        │
//! │     from the store; the mirror is the source of truth for       │
//! │     existence because all writers go through this type)         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  2. One SQL statement against the store                         │
//! │       │                                                         │
//! │       ├── store rejects (CHECK, I/O) → error, mirror UNTOUCHED  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  3. Mirror updated to match — only after store success          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! The initial load is ordered by id ascending (the store's ordering).
//! `list_all`/`find_by_name` iterate the mirror, whose order is
//! unspecified; callers that need a stable order sort themselves.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::pool::{self, DbConfig};
use bodega_core::Product;

/// Repository owning the store connection and its in-memory mirror.
///
/// Mutating operations take `&mut self`: the borrow checker enforces the
/// single-writer assumption the consistency protocol relies on.
///
/// ## Usage
/// ```rust,ignore
/// let mut inventory = Inventory::open(DbConfig::new("./bodega.db")).await?;
///
/// inventory.add(Product::new(101, "Harina 1kg", 20, 2.50)).await?;
/// inventory.set_quantity(101, 15).await?;
///
/// for p in inventory.find_by_name("harina") {
///     println!("{} x{}", p.name, p.quantity);
/// }
///
/// inventory.close().await;
/// ```
#[derive(Debug)]
pub struct Inventory {
    pool: SqlitePool,
    products: HashMap<i64, Product>,
}

impl Inventory {
    /// Opens the store and loads the full catalog into memory.
    ///
    /// ## What This Does
    /// 1. Opens/creates the database file at the configured path
    /// 2. Runs the idempotent schema migrations (unless disabled)
    /// 3. Reloads the mirror from the store, ordered by id ascending
    ///
    /// ## Errors
    /// * `DbError::ConnectionFailed` - file can't be opened or created
    /// * `DbError::MigrationFailed` - schema creation failed
    pub async fn open(config: DbConfig) -> DbResult<Self> {
        let pool = pool::connect(&config).await?;

        if config.run_migrations {
            migrations::run_migrations(&pool).await?;
        }

        let mut inventory = Inventory {
            pool,
            products: HashMap::new(),
        };
        inventory.reload().await?;

        info!(count = inventory.len(), "Inventory loaded");
        Ok(inventory)
    }

    /// Replaces the mirror with the current store contents.
    async fn reload(&mut self) -> DbResult<()> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, nombre, cantidad, precio FROM productos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        self.products.clear();
        for product in rows {
            self.products.insert(product.id, product);
        }

        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Inserts a new product into the store and the mirror.
    ///
    /// ## Errors
    /// * `DbError::DuplicateId` - the id is already present
    /// * `DbError::ConstraintViolation` - the store rejected the row
    ///   (negative quantity or price reaching the CHECK constraints)
    pub async fn add(&mut self, product: Product) -> DbResult<()> {
        debug!(id = product.id, name = %product.name, "Adding product");

        if self.products.contains_key(&product.id) {
            return Err(DbError::duplicate(product.id));
        }

        sqlx::query("INSERT INTO productos (id, nombre, cantidad, precio) VALUES (?1, ?2, ?3, ?4)")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        self.products.insert(product.id, product);
        Ok(())
    }

    /// Deletes a product from the store and the mirror.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no product with this id
    pub async fn remove(&mut self, id: i64) -> DbResult<()> {
        debug!(id, "Removing product");

        if !self.products.contains_key(&id) {
            return Err(DbError::not_found(id));
        }

        sqlx::query("DELETE FROM productos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.products.remove(&id);
        Ok(())
    }

    /// Updates a product's quantity.
    ///
    /// No non-negativity pre-check happens here: a negative value travels
    /// to the store and comes back as `ConstraintViolation`, with the
    /// mirror untouched. Interactive callers validate first
    /// (`bodega_core::validation::validate_quantity`).
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no product with this id
    /// * `DbError::ConstraintViolation` - `quantity < 0` hit the CHECK
    pub async fn set_quantity(&mut self, id: i64, quantity: i64) -> DbResult<()> {
        debug!(id, quantity, "Updating quantity");

        if !self.products.contains_key(&id) {
            return Err(DbError::not_found(id));
        }

        sqlx::query("UPDATE productos SET cantidad = ?2 WHERE id = ?1")
            .bind(id)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        if let Some(product) = self.products.get_mut(&id) {
            product.quantity = quantity;
        }
        Ok(())
    }

    /// Updates a product's price. Same contract as [`set_quantity`].
    ///
    /// [`set_quantity`]: Inventory::set_quantity
    pub async fn set_price(&mut self, id: i64, price: f64) -> DbResult<()> {
        debug!(id, price, "Updating price");

        if !self.products.contains_key(&id) {
            return Err(DbError::not_found(id));
        }

        sqlx::query("UPDATE productos SET precio = ?2 WHERE id = ?1")
            .bind(id)
            .bind(price)
            .execute(&self.pool)
            .await?;

        if let Some(product) = self.products.get_mut(&id) {
            product.price = price;
        }
        Ok(())
    }

    // =========================================================================
    // Queries (mirror only, never fail)
    // =========================================================================

    /// Returns all products whose name contains `query`, case-insensitive,
    /// with surrounding whitespace trimmed from the query first.
    ///
    /// Order follows mirror iteration and is unspecified.
    pub fn find_by_name(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();

        self.products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Returns every product currently known.
    ///
    /// Order follows mirror iteration and is unspecified.
    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Returns the product with this id, if present.
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Returns true if a product with this id exists.
    pub fn contains(&self, id: i64) -> bool {
        self.products.contains_key(&id)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Shutdown
    // =========================================================================

    /// Releases the store connection.
    ///
    /// Takes `self` by value: the repository cannot be used, or closed
    /// again, afterwards.
    pub async fn close(self) {
        info!("Closing inventory store");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_in_memory() -> Inventory {
        Inventory::open(DbConfig::in_memory()).await.unwrap()
    }

    fn sorted(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by_key(|p| p.id);
        products
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let mut inv = open_in_memory().await;
        assert!(inv.is_empty());

        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();

        let all = inv.list_all();
        assert_eq!(all, vec![Product::new(101, "Harina 1kg", 20, 2.50)]);
        assert!(inv.contains(101));
        assert_eq!(inv.len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_id_rejected_without_side_effects() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();

        let err = inv
            .add(Product::new(101, "Otro", 1, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::DuplicateId { id: 101 }));

        // Neither mirror nor store changed
        assert_eq!(inv.get(101).unwrap().name, "Harina 1kg");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&inv.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_add_negative_price_hits_store_check() {
        let mut inv = open_in_memory().await;

        // Passes the mirror's duplicate check, rejected by CHECK (precio >= 0)
        let err = inv
            .add(Product::new(200, "Gratis al revés", 1, -1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));
        assert!(!inv.contains(200));
    }

    #[tokio::test]
    async fn test_remove_present_and_absent() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();

        inv.remove(101).await.unwrap();
        assert!(!inv.contains(101));
        assert!(inv.list_all().is_empty());
        assert!(inv.find_by_name("harina").is_empty());

        let err = inv.remove(101).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 101 }));
    }

    #[tokio::test]
    async fn test_set_quantity_updates_only_that_product() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();
        inv.add(Product::new(102, "Queso Mozzarella 1kg", 15, 6.00))
            .await
            .unwrap();

        inv.set_quantity(101, 15).await.unwrap();

        let p = inv.get(101).unwrap();
        assert_eq!(p.quantity, 15);
        assert_eq!(p.price, 2.50);
        assert_eq!(inv.get(102).unwrap().quantity, 15);
        assert_eq!(inv.get(102).unwrap().price, 6.00);
    }

    #[tokio::test]
    async fn test_set_price_updates_only_that_field() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();

        inv.set_price(101, 2.75).await.unwrap();

        let p = inv.get(101).unwrap();
        assert_eq!(p.price, 2.75);
        assert_eq!(p.quantity, 20);
    }

    #[tokio::test]
    async fn test_updates_on_absent_id_fail_and_change_nothing() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();

        assert!(matches!(
            inv.set_quantity(999, 5).await.unwrap_err(),
            DbError::NotFound { id: 999 }
        ));
        assert!(matches!(
            inv.set_price(999, 5.0).await.unwrap_err(),
            DbError::NotFound { id: 999 }
        ));
        assert_eq!(inv.list_all(), vec![Product::new(101, "Harina 1kg", 20, 2.50)]);
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected_by_store_mirror_untouched() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();

        let err = inv.set_quantity(101, -5).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));

        // Mirror kept the pre-failure value
        assert_eq!(inv.get(101).unwrap().quantity, 20);

        // And so did the store
        let stored: i64 = sqlx::query_scalar("SELECT cantidad FROM productos WHERE id = 101")
            .fetch_one(&inv.pool)
            .await
            .unwrap();
        assert_eq!(stored, 20);
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive_and_trims() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(102, "Queso Mozzarella 1kg", 15, 6.00))
            .await
            .unwrap();
        inv.add(Product::new(103, "Salsa de Tomate 500g", 30, 1.80))
            .await
            .unwrap();

        let found = inv.find_by_name("queso");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 102);

        // Trimmed and case-folded before matching
        assert_eq!(inv.find_by_name("  QUESO  ").len(), 1);
        assert_eq!(inv.find_by_name("mozzarella").len(), 1);

        assert!(inv.find_by_name("pepperoni").is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_empty_query_matches_everything() {
        let mut inv = open_in_memory().await;
        inv.add(Product::new(1, "A", 1, 1.0)).await.unwrap();
        inv.add(Product::new(2, "B", 1, 1.0)).await.unwrap();

        assert_eq!(inv.find_by_name("").len(), 2);
        assert_eq!(inv.find_by_name("   ").len(), 2);
    }

    #[tokio::test]
    async fn test_restart_reproduces_identical_mirror() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bodega.db");

        let before = {
            let mut inv = Inventory::open(DbConfig::new(&path)).await.unwrap();
            inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
                .await
                .unwrap();
            inv.add(Product::new(108, "Pepperoni 500g", 12, 4.00))
                .await
                .unwrap();
            inv.set_quantity(101, 7).await.unwrap();

            let snapshot = sorted(inv.list_all());
            inv.close().await;
            snapshot
        };

        let reopened = Inventory::open(DbConfig::new(&path)).await.unwrap();
        assert_eq!(sorted(reopened.list_all()), before);
        reopened.close().await;
    }

    /// The end-to-end scenario from the acceptance checklist: add, reject
    /// duplicate, update quantity, remove, search comes back empty.
    #[tokio::test]
    async fn test_full_lifecycle_scenario() {
        let mut inv = open_in_memory().await;

        inv.add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .unwrap();
        assert!(inv
            .add(Product::new(101, "Harina 1kg", 20, 2.50))
            .await
            .is_err());

        inv.set_quantity(101, 15).await.unwrap();
        let all = inv.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity, 15);
        assert_eq!(all[0].price, 2.50);

        inv.remove(101).await.unwrap();
        assert!(inv.find_by_name("harina").is_empty());
    }
}
