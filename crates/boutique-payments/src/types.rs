//! Payment intent types.

use boutique_commerce::ids::IntentId;
use boutique_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// Customer details attached to an intent as processor metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Shipping address as a single display line.
    pub shipping_address: String,
}

/// A purchased line, recorded with the intent for reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentLineItem {
    /// Product name.
    pub name: String,
    /// Quantity purchased.
    pub quantity: i64,
}

/// Request to open a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateIntentRequest {
    /// Total charge (subtotal + shipping fee).
    pub amount: Money,
    /// Shipping fee portion of the amount.
    pub shipping_fee: Money,
    /// Customer details.
    pub customer: CustomerInfo,
    /// Purchased lines.
    pub line_items: Vec<IntentLineItem>,
}

/// Lifecycle state of a payment intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Created, awaiting card confirmation.
    RequiresConfirmation,
    /// Confirmation submitted, settlement pending.
    Processing,
    /// Charge settled.
    Succeeded,
    /// Charge declined or errored.
    Failed,
}

impl PaymentStatus {
    /// Map a processor status string.
    pub fn from_processor(s: &str) -> Self {
        match s {
            "requires_payment_method" | "requires_confirmation" | "requires_action" => {
                PaymentStatus::RequiresConfirmation
            }
            "processing" => PaymentStatus::Processing,
            "succeeded" => PaymentStatus::Succeeded,
            _ => PaymentStatus::Failed,
        }
    }

    /// Whether the charge reached a terminal success.
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded)
    }
}

/// An open payment intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntent {
    /// Processor-assigned intent ID.
    pub id: IntentId,
    /// Client secret the card form completes the charge with.
    pub client_secret: String,
    /// Charge amount.
    pub amount: Money,
    /// Current status.
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            PaymentStatus::from_processor("requires_payment_method"),
            PaymentStatus::RequiresConfirmation
        );
        assert_eq!(
            PaymentStatus::from_processor("processing"),
            PaymentStatus::Processing
        );
        assert_eq!(
            PaymentStatus::from_processor("succeeded"),
            PaymentStatus::Succeeded
        );
        assert_eq!(
            PaymentStatus::from_processor("canceled"),
            PaymentStatus::Failed
        );
    }

    #[test]
    fn test_settled() {
        assert!(PaymentStatus::Succeeded.is_settled());
        assert!(!PaymentStatus::Processing.is_settled());
    }
}
