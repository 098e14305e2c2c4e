//! Quote assembly.

use crate::distance::{haversine_miles, Coordinate, WAREHOUSE};
use crate::fees::{default_fee, fee_for_distance};
use crate::geocode::{AddressQuery, Geocoder};
use boutique_commerce::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Diagnostic carried by a fallback quote.
const UNRESOLVED_MESSAGE: &str = "Could not calculate distance. Using default shipping fee.";

/// The result of one shipping estimate.
///
/// Always usable: when the destination cannot be resolved the quote carries
/// the default fee, a zero distance, and a diagnostic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// The fee to charge.
    pub fee: Money,
    /// Great-circle distance from the warehouse, 0.0 when unresolved.
    pub distance_miles: f64,
    /// Advisory diagnostic, present only on the fallback path.
    pub error: Option<String>,
}

impl ShippingQuote {
    /// Whether the fee was computed from a resolved distance.
    pub fn is_estimated(&self) -> bool {
        self.error.is_none()
    }
}

/// Computes shipping quotes for destination addresses.
///
/// Stateless apart from the injected geocoder and the read-only origin;
/// concurrent quotes are independent.
pub struct ShippingEstimator<G> {
    geocoder: G,
    origin: Coordinate,
}

impl<G: Geocoder> ShippingEstimator<G> {
    /// Create an estimator measuring from the warehouse.
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            origin: WAREHOUSE,
        }
    }

    /// Measure from a different origin.
    pub fn with_origin(mut self, origin: Coordinate) -> Self {
        self.origin = origin;
        self
    }

    /// Quote shipping for an address.
    ///
    /// Never fails: a geocoder error or an unmatched address falls back to
    /// the default fee. The underlying failure is logged, not propagated.
    pub async fn quote(&self, query: &AddressQuery) -> ShippingQuote {
        let resolved = match self.geocoder.locate(query).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(error = %e, "geocode lookup failed");
                None
            }
        };

        match resolved {
            Some(destination) => {
                let distance = haversine_miles(self.origin, destination);
                debug!(distance_miles = distance, "destination resolved");
                ShippingQuote {
                    fee: fee_for_distance(distance),
                    distance_miles: distance,
                    error: None,
                }
            }
            None => ShippingQuote {
                fee: default_fee(),
                distance_miles: 0.0,
                error: Some(UNRESOLVED_MESSAGE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShippingError;
    use async_trait::async_trait;

    /// Geocoder that always resolves to a fixed coordinate.
    struct Fixed(Coordinate);

    #[async_trait]
    impl Geocoder for Fixed {
        async fn locate(&self, _: &AddressQuery) -> Result<Option<Coordinate>, ShippingError> {
            Ok(Some(self.0))
        }
    }

    /// Geocoder that finds no candidates.
    struct NoMatch;

    #[async_trait]
    impl Geocoder for NoMatch {
        async fn locate(&self, _: &AddressQuery) -> Result<Option<Coordinate>, ShippingError> {
            Ok(None)
        }
    }

    /// Geocoder whose single attempt fails outright.
    struct Unreachable;

    #[async_trait]
    impl Geocoder for Unreachable {
        async fn locate(&self, _: &AddressQuery) -> Result<Option<Coordinate>, ShippingError> {
            Err(ShippingError::Timeout)
        }
    }

    fn warehouse_query() -> AddressQuery {
        AddressQuery::new("37101 Cherry St", "Newark", "CA", "94560")
    }

    #[tokio::test]
    async fn test_quote_at_origin_is_local() {
        let estimator = ShippingEstimator::new(Fixed(WAREHOUSE));
        let quote = estimator.quote(&warehouse_query()).await;

        assert_eq!(quote.fee, Money::from_decimal(5.00));
        assert_eq!(quote.distance_miles, 0.0);
        assert!(quote.is_estimated());
    }

    #[tokio::test]
    async fn test_quote_regional_destination() {
        // ~62 miles due north of the warehouse.
        let destination = Coordinate::new(WAREHOUSE.lat + 0.8973, WAREHOUSE.lon);
        let estimator = ShippingEstimator::new(Fixed(destination));
        let quote = estimator.quote(&warehouse_query()).await;

        assert_eq!(quote.fee, Money::from_decimal(10.00));
        assert!((quote.distance_miles - 62.0).abs() < 0.5);
        assert!(quote.error.is_none());
    }

    #[tokio::test]
    async fn test_quote_opposite_coast() {
        let new_york = Coordinate::new(40.7128, -74.0060);
        let estimator = ShippingEstimator::new(Fixed(new_york));
        let quote = estimator.quote(&warehouse_query()).await;

        assert_eq!(quote.fee, Money::from_decimal(30.00));
        assert!(quote.distance_miles > 2000.0);
    }

    #[tokio::test]
    async fn test_quote_falls_back_when_unmatched() {
        let estimator = ShippingEstimator::new(NoMatch);
        let quote = estimator.quote(&warehouse_query()).await;

        assert_eq!(quote.fee, Money::from_decimal(20.00));
        assert_eq!(quote.distance_miles, 0.0);
        assert!(quote.error.as_deref().is_some_and(|m| !m.is_empty()));
        assert!(!quote.is_estimated());
    }

    #[tokio::test]
    async fn test_quote_falls_back_on_lookup_failure() {
        let estimator = ShippingEstimator::new(Unreachable);
        let quote = estimator.quote(&warehouse_query()).await;

        assert_eq!(quote.fee, Money::from_decimal(20.00));
        assert_eq!(quote.distance_miles, 0.0);
        assert!(quote.error.is_some());
    }

    #[tokio::test]
    async fn test_quote_with_custom_origin() {
        let origin = Coordinate::new(40.7128, -74.0060);
        let estimator = ShippingEstimator::new(Fixed(origin)).with_origin(origin);
        let quote = estimator.quote(&warehouse_query()).await;

        assert_eq!(quote.distance_miles, 0.0);
        assert_eq!(quote.fee, Money::from_decimal(5.00));
    }
}
