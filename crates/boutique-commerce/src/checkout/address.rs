//! Address types.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// All fields are free text; nothing beyond non-empty composition is
/// validated. The shipping estimator consumes only the four query fields,
/// never the full record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal/ZIP code.
    pub zip: String,
    /// Country.
    pub country: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            country: "USA".to_string(),
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip
        )
    }

    /// Check if the address has every field needed for a shipping quote.
    pub fn is_complete(&self) -> bool {
        !self.street.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.zip.is_empty()
    }

    /// The four free-text fields a geocode query is composed from.
    pub fn query_fields(&self) -> (&str, &str, &str, &str) {
        (&self.street, &self.city, &self.state, &self.zip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let addr = Address::new("123 Main St", "Newark", "CA", "94560");
        assert!(addr.is_complete());
        assert_eq!(addr.country, "USA");
    }

    #[test]
    fn test_address_incomplete() {
        let addr = Address::new("", "Newark", "CA", "94560");
        assert!(!addr.is_complete());
    }

    #[test]
    fn test_address_one_line() {
        let addr = Address::new("123 Main St", "Newark", "CA", "94560");
        assert_eq!(addr.one_line(), "123 Main St, Newark, CA 94560");
    }

    #[test]
    fn test_query_fields() {
        let addr = Address::new("123 Main St", "Newark", "CA", "94560");
        let (street, city, state, zip) = addr.query_fields();
        assert_eq!(street, "123 Main St");
        assert_eq!(city, "Newark");
        assert_eq!(state, "CA");
        assert_eq!(zip, "94560");
    }
}
