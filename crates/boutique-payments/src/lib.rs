//! Card payment processor contract for Purse Boutique.
//!
//! The storefront delegates payment entirely to a third-party processor;
//! this crate carries the opaque create/confirm contract, a Stripe-style
//! HTTP gateway, and an in-memory double for checkout tests. The only
//! storefront-computed input is the charge amount (subtotal + shipping fee).

mod error;
mod processor;
mod types;

pub use error::PaymentError;
pub use processor::{PaymentProcessor, StripeGateway, TestProcessor, STRIPE_API_BASE};
pub use types::{CreateIntentRequest, CustomerInfo, IntentLineItem, PaymentIntent, PaymentStatus};
