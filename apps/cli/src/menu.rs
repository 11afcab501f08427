//! # Console Menu
//!
//! The interactive text menu over the inventory repository.
//!
//! ## Input Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Every typed prompt loops until the input parses:               │
//! │                                                                 │
//! │  "Quantity: " ──► "abc"  → "Enter a whole number." → re-prompt  │
//! │               ──► "-3"   → validation message      → re-prompt  │
//! │               ──► "15"   → proceed                              │
//! │                                                                 │
//! │  EOF (Ctrl-D) at any prompt ends the session cleanly; the       │
//! │  caller still runs close() exactly once.                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stdin is read through tokio so the surrounding `select!` against
//! Ctrl-C keeps working while a prompt is waiting.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

use bodega_core::{validation, Product};
use bodega_db::Inventory;

/// Interactive menu session over stdin/stdout.
pub struct Menu {
    lines: Lines<BufReader<Stdin>>,
}

impl Menu {
    pub fn new() -> Self {
        Menu {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Runs the menu loop until the operator exits or stdin closes.
    ///
    /// Does NOT close the inventory; the caller owns shutdown so that the
    /// interrupted path and the normal path share a single `close()`.
    pub async fn run(mut self, inventory: &mut Inventory) -> io::Result<()> {
        loop {
            print_menu();
            let Some(choice) = self.read_line("Select an option: ").await? else {
                break;
            };

            let keep_running = match choice.trim() {
                "1" => self.add_product(inventory).await?,
                "2" => self.remove_product(inventory).await?,
                "3" => self.update_quantity(inventory).await?,
                "4" => self.update_price(inventory).await?,
                "5" => self.search_by_name(inventory).await?,
                "6" => {
                    list_all(inventory);
                    true
                }
                "0" => {
                    println!("Goodbye.");
                    false
                }
                other => {
                    debug!(input = other, "Unrecognized menu option");
                    println!("Invalid option.");
                    true
                }
            };

            if !keep_running {
                break;
            }
        }

        Ok(())
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================
    // Each returns Ok(false) when stdin closed mid-prompt.

    async fn add_product(&mut self, inventory: &mut Inventory) -> io::Result<bool> {
        println!("\n[ADD PRODUCT]");

        let Some(id) = self.prompt_i64("Id: ").await? else {
            return Ok(false);
        };
        let Some(name) = self.prompt_name("Name: ").await? else {
            return Ok(false);
        };
        let Some(quantity) = self.prompt_quantity("Quantity: ").await? else {
            return Ok(false);
        };
        let Some(price) = self.prompt_price("Price: ").await? else {
            return Ok(false);
        };

        match inventory.add(Product::new(id, name, quantity, price)).await {
            Ok(()) => println!("Product added."),
            Err(err) => println!("Could not add product: {err}."),
        }
        Ok(true)
    }

    async fn remove_product(&mut self, inventory: &mut Inventory) -> io::Result<bool> {
        let Some(id) = self.prompt_i64("Id to remove: ").await? else {
            return Ok(false);
        };

        match inventory.remove(id).await {
            Ok(()) => println!("Product removed."),
            Err(err) => println!("Could not remove product: {err}."),
        }
        Ok(true)
    }

    async fn update_quantity(&mut self, inventory: &mut Inventory) -> io::Result<bool> {
        let Some(id) = self.prompt_i64("Id: ").await? else {
            return Ok(false);
        };
        let Some(quantity) = self.prompt_quantity("New quantity: ").await? else {
            return Ok(false);
        };

        match inventory.set_quantity(id, quantity).await {
            Ok(()) => println!("Quantity updated."),
            Err(err) => println!("Could not update quantity: {err}."),
        }
        Ok(true)
    }

    async fn update_price(&mut self, inventory: &mut Inventory) -> io::Result<bool> {
        let Some(id) = self.prompt_i64("Id: ").await? else {
            return Ok(false);
        };
        let Some(price) = self.prompt_price("New price: ").await? else {
            return Ok(false);
        };

        match inventory.set_price(id, price).await {
            Ok(()) => println!("Price updated."),
            Err(err) => println!("Could not update price: {err}."),
        }
        Ok(true)
    }

    async fn search_by_name(&mut self, inventory: &Inventory) -> io::Result<bool> {
        let Some(query) = self.read_line("Search name: ").await? else {
            return Ok(false);
        };

        let mut found = inventory.find_by_name(&query);
        if found.is_empty() {
            println!("No products found.");
        } else {
            found.sort_by_key(|p| p.id);
            for product in &found {
                print_product(product);
            }
        }
        Ok(true)
    }

    // =========================================================================
    // Typed Prompts
    // =========================================================================

    /// Prints `prompt` and reads one line. `None` means stdin closed.
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.lines.next_line().await
    }

    /// Re-prompts until the input parses as an integer.
    async fn prompt_i64(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt).await? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Enter a whole number."),
            }
        }
    }

    /// Re-prompts until the input parses as a decimal.
    async fn prompt_f64(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.read_line(prompt).await? else {
                return Ok(None);
            };
            match line.trim().parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Enter a decimal number (use a dot)."),
            }
        }
    }

    /// Re-prompts until the name passes validation.
    async fn prompt_name(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.read_line(prompt).await? else {
                return Ok(None);
            };
            let name = line.trim();
            match validation::validate_name(name) {
                Ok(()) => return Ok(Some(name.to_string())),
                Err(err) => println!("{err}."),
            }
        }
    }

    /// Re-prompts until the quantity parses and is non-negative.
    async fn prompt_quantity(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(quantity) = self.prompt_i64(prompt).await? else {
                return Ok(None);
            };
            match validation::validate_quantity(quantity) {
                Ok(()) => return Ok(Some(quantity)),
                Err(err) => println!("{err}."),
            }
        }
    }

    /// Re-prompts until the price parses and is valid.
    async fn prompt_price(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(price) = self.prompt_f64(prompt).await? else {
                return Ok(None);
            };
            match validation::validate_price(price) {
                Ok(()) => return Ok(Some(price)),
                Err(err) => println!("{err}."),
            }
        }
    }
}

// =============================================================================
// Output Formatting
// =============================================================================

fn print_menu() {
    println!();
    println!("=== BODEGA INVENTORY ===");
    println!("1) Add product");
    println!("2) Remove product by id");
    println!("3) Update quantity");
    println!("4) Update price");
    println!("5) Search by name");
    println!("6) List all products");
    println!("0) Exit");
}

fn print_product(product: &Product) {
    println!(
        "ID: {} | Name: {} | Quantity: {} | Price: ${:.2}",
        product.id, product.name, product.quantity, product.price
    );
}

fn list_all(inventory: &Inventory) {
    let mut products = inventory.list_all();
    if products.is_empty() {
        println!("Inventory is empty.");
        return;
    }

    // Display order only; the repository makes no ordering promise
    products.sort_by_key(|p| p.id);
    for product in &products {
        print_product(product);
    }
}
