//! Distance-tiered flat shipping fees.

use boutique_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// A flat-fee bracket keyed by distance from the warehouse.
///
/// The tiers partition `[0, inf)`; boundaries are inclusive on the upper
/// bound, so a destination at exactly 25 miles is still `Local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeTier {
    /// Local delivery, up to 25 miles.
    Local,
    /// Regional, 25 to 100 miles.
    Regional,
    /// Statewide, 100 to 500 miles.
    Statewide,
    /// National, 500 to 2000 miles.
    National,
    /// Long distance, beyond 2000 miles.
    Extended,
}

impl FeeTier {
    /// Tier for a distance in miles.
    pub fn for_distance(miles: f64) -> Self {
        if miles <= 25.0 {
            FeeTier::Local
        } else if miles <= 100.0 {
            FeeTier::Regional
        } else if miles <= 500.0 {
            FeeTier::Statewide
        } else if miles <= 2000.0 {
            FeeTier::National
        } else {
            FeeTier::Extended
        }
    }

    /// The flat fee charged for this tier.
    pub fn fee(&self) -> Money {
        match self {
            FeeTier::Local => Money::new(500),
            FeeTier::Regional => Money::new(1000),
            FeeTier::Statewide => Money::new(1500),
            FeeTier::National => Money::new(2000),
            FeeTier::Extended => Money::new(3000),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeTier::Local => "local",
            FeeTier::Regional => "regional",
            FeeTier::Statewide => "statewide",
            FeeTier::National => "national",
            FeeTier::Extended => "extended",
        }
    }
}

/// Fee for a resolved distance in miles.
pub fn fee_for_distance(miles: f64) -> Money {
    FeeTier::for_distance(miles).fee()
}

/// Fee charged when the destination cannot be resolved.
///
/// Numerically equal to the `National` tier fee.
pub fn default_fee() -> Money {
    Money::new(2000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranges() {
        assert_eq!(FeeTier::for_distance(0.0), FeeTier::Local);
        assert_eq!(FeeTier::for_distance(12.5), FeeTier::Local);
        assert_eq!(FeeTier::for_distance(62.0), FeeTier::Regional);
        assert_eq!(FeeTier::for_distance(300.0), FeeTier::Statewide);
        assert_eq!(FeeTier::for_distance(1200.0), FeeTier::National);
        assert_eq!(FeeTier::for_distance(2554.0), FeeTier::Extended);
    }

    #[test]
    fn test_boundaries_take_cheaper_tier() {
        assert_eq!(FeeTier::for_distance(25.0), FeeTier::Local);
        assert_eq!(FeeTier::for_distance(100.0), FeeTier::Regional);
        assert_eq!(FeeTier::for_distance(500.0), FeeTier::Statewide);
        assert_eq!(FeeTier::for_distance(2000.0), FeeTier::National);
    }

    #[test]
    fn test_just_past_boundaries() {
        assert_eq!(FeeTier::for_distance(25.001), FeeTier::Regional);
        assert_eq!(FeeTier::for_distance(100.001), FeeTier::Statewide);
        assert_eq!(FeeTier::for_distance(500.001), FeeTier::National);
        assert_eq!(FeeTier::for_distance(2000.001), FeeTier::Extended);
    }

    #[test]
    fn test_tier_fees() {
        assert_eq!(FeeTier::Local.fee(), Money::from_decimal(5.00));
        assert_eq!(FeeTier::Regional.fee(), Money::from_decimal(10.00));
        assert_eq!(FeeTier::Statewide.fee(), Money::from_decimal(15.00));
        assert_eq!(FeeTier::National.fee(), Money::from_decimal(20.00));
        assert_eq!(FeeTier::Extended.fee(), Money::from_decimal(30.00));
    }

    #[test]
    fn test_default_fee_matches_national() {
        assert_eq!(default_fee(), FeeTier::National.fee());
    }

    #[test]
    fn test_fee_for_distance() {
        assert_eq!(fee_for_distance(10.0), Money::new(500));
        assert_eq!(fee_for_distance(3000.0), Money::new(3000));
    }
}
