//! Distance-based shipping fee estimation for Purse Boutique.
//!
//! The estimation pipeline has two collaborating pieces:
//!
//! - **Geocoder**: resolves a free-text postal address to coordinates by
//!   delegating to an external lookup service.
//! - **Fee calculator**: maps the great-circle distance (miles) between the
//!   warehouse and the destination to a tiered flat fee.
//!
//! [`ShippingEstimator::quote`] ties them together and never fails: when the
//! destination cannot be resolved the quote carries a fixed default fee and
//! a diagnostic message instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_shipping::{AddressQuery, GeocodeClient, ShippingEstimator};
//!
//! let estimator = ShippingEstimator::new(GeocodeClient::new()?);
//! let quote = estimator
//!     .quote(&AddressQuery::new("123 Main St", "Newark", "CA", "94560"))
//!     .await;
//! println!("shipping: {}", quote.fee.display());
//! ```

pub mod distance;
pub mod error;
pub mod fees;
pub mod geocode;
pub mod quote;

pub use distance::{haversine_miles, Coordinate, EARTH_RADIUS_MILES, WAREHOUSE};
pub use error::ShippingError;
pub use fees::{default_fee, fee_for_distance, FeeTier};
pub use geocode::{AddressQuery, GeocodeClient, Geocoder, GeocoderConfig};
pub use quote::{ShippingEstimator, ShippingQuote};
