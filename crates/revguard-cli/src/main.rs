//! revguard - review submission guard CLI
//!
//! Validates product reviews against a rating floor and a blacklist of
//! forbidden terms, stores admissible ones, and lists them by range.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! revguard config init
//!
//! # Check a candidate review
//! revguard validate --rating 4.5 --comment "great product"
//!
//! # Store it, then list reviews for the product
//! revguard submit --product sku-1 --rating 4.5 --range 12 --comment "great product"
//! revguard list --product sku-1 --start 10 --end 20
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
