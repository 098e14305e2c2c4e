//! Cart pricing breakdown.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
///
/// The shipping fee is the only adjustment this storefront applies; there is
/// no tax or discount handling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping fee for the destination address.
    pub shipping_total: Money,
    /// Final total (subtotal + shipping).
    pub grand_total: Money,
}

impl CartPricing {
    /// Check if shipping has been applied.
    pub fn has_shipping(&self) -> bool {
        self.shipping_total.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_shipping() {
        let pricing = CartPricing {
            subtotal: Money::new(4000),
            shipping_total: Money::new(500),
            grand_total: Money::new(4500),
        };
        assert!(pricing.has_shipping());

        let free = CartPricing {
            subtotal: Money::new(4000),
            shipping_total: Money::zero(),
            grand_total: Money::new(4000),
        };
        assert!(!free.has_shipping());
    }
}
