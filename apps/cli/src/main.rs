//! # Bodega Console Application
//!
//! Single-user inventory manager over a local SQLite file.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse the `--db` argument (explicit path, no hidden default location)
//! 3. Open the inventory: connect, migrate, load the mirror
//! 4. Seed the example catalog on first run
//! 5. Run the menu loop, racing it against Ctrl-C
//! 6. Close the store exactly once, on every exit path
//!
//! ## Usage
//! ```bash
//! # Default database file (./bodega.db)
//! cargo run -p bodega-cli
//!
//! # Specify database path
//! cargo run -p bodega-cli -- --db ./data/bodega.db
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=bodega=trace` - Trace for bodega crates only
//! - Default: INFO level, sqlx noise suppressed

mod menu;
mod seed;

use std::env;

use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use bodega_db::{DbConfig, Inventory};
use menu::Menu;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let Some(db_path) = parse_args() else {
        return Ok(());
    };

    // Fatal if the store can't be opened: no retry policy exists
    let mut inventory = Inventory::open(DbConfig::new(&db_path)).await?;
    seed::load_example_products(&mut inventory).await?;

    let menu = Menu::new();
    tokio::select! {
        result = menu.run(&mut inventory) => {
            if let Err(err) = result {
                error!(error = %err, "Menu loop failed");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!();
            info!("Interrupted");
        }
    }

    // Single shutdown point for both the normal and the interrupted path.
    // close(self) consumes the inventory, so a second close cannot compile.
    inventory.close().await;

    Ok(())
}

/// Parses command line arguments.
///
/// Returns the database path, or `None` when `--help` was requested.
fn parse_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./bodega.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bodega Inventory Manager");
                println!();
                println!("Usage: bodega [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./bodega.db)");
                println!("  -h, --help         Show this help message");
                return None;
            }
            _ => {}
        }
        i += 1;
    }

    Some(db_path)
}

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bodega=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
