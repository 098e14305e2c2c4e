//! Storefront domain types for Purse Boutique.
//!
//! The boutique sells a single product; this crate carries the types the
//! storefront collaborators exchange:
//!
//! - **Catalog**: the featured product
//! - **Cart**: line items with quantity merging and pricing
//! - **Checkout**: postal addresses
//! - **Money**: cents-based amounts in US dollars
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_commerce::prelude::*;
//!
//! let product = catalog::featured();
//! let mut cart = Cart::new("sess-1");
//! cart.add_item(&product, 2)?;
//!
//! let pricing = cart.pricing(Money::from_decimal(5.00))?;
//! println!("Total: {}", pricing.grand_total.display());
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartPricing, LineItem};
    pub use crate::catalog::{self, Product};
    pub use crate::checkout::Address;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
}
