//! # Seed Data Generator
//!
//! Populates a data directory with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default data directory (./meridian_data)
//! cargo run -p meridian-store --bin seed
//!
//! # Specify a data directory
//! cargo run -p meridian-store --bin seed -- --data-dir ./data
//! ```
//!
//! Refuses to run against a non-empty catalog; delete the data directory (or
//! use the store's clear-all) to regenerate.

use std::env;

use meridian_core::Product;
use meridian_store::{generate_product_id, Store, StoreConfig};
use tracing_subscriber::EnvFilter;

/// Sample catalog: (name, category, cost_cents, price_cents, inventory).
const SAMPLE_PRODUCTS: &[(&str, &str, i64, i64, i64)] = &[
    ("Coffee", "Beverages", 50, 250, 50),
    ("Sandwich", "Food", 200, 699, 25),
    ("Tea", "Beverages", 30, 200, 75),
    ("Pastry", "Bakery", 150, 450, 15),
    ("Juice", "Beverages", 100, 350, 30),
    ("Salad", "Food", 250, 899, 20),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut data_dir = String::from("./meridian_data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Meridian POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Data directory (default: ./meridian_data)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Meridian POS Seed Data Generator");
    println!("===================================");
    println!("Data directory: {}", data_dir);
    println!();

    let store = Store::open(StoreConfig::new(&data_dir))?;
    let catalog = store.catalog();

    let existing = catalog.list().len();
    if existing > 0 {
        println!("⚠ Catalog already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the data directory to regenerate.");
        return Ok(());
    }

    println!("Seeding products...");
    for (name, category, cost_cents, price_cents, inventory) in SAMPLE_PRODUCTS {
        let mut product = Product::new(
            generate_product_id(),
            *name,
            *cost_cents,
            *price_cents,
            *inventory,
        );
        product.category = Some((*category).to_string());
        catalog.create(product)?;
        println!("  + {} ({} units)", name, inventory);
    }

    println!();
    println!("✓ Seeded {} products", SAMPLE_PRODUCTS.len());
    println!("✓ Seed complete!");

    Ok(())
}
