//! Checkout module.
//!
//! Contains the postal address record a shipping quote is requested for.

mod address;

pub use address::Address;
