//! Product catalog module.
//!
//! The boutique carries a single offering; the catalog is a fixed record
//! rather than a database.

mod product;

pub use product::{featured, Product};
