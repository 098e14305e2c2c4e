//! User record types.

use boutique_commerce::checkout::Address;
use boutique_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// A stored user, including the credential hash.
///
/// Only ever written to the `"users"` list; the signed-in view is
/// [`Profile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Email address, unique across the store.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Credential hash (never the raw password).
    pub password_hash: String,
    /// Saved shipping address.
    pub address: Option<Address>,
}

/// The credential-less view of a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Saved shipping address.
    pub address: Option<Address>,
}

impl From<&UserRecord> for Profile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            email: record.email.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_drops_credentials() {
        let record = UserRecord {
            id: UserId::new("user_1"),
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            password_hash: "$pbkdf2$10$aa$bb".to_string(),
            address: None,
        };

        let profile = Profile::from(&record);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert_eq!(profile.email, record.email);
    }
}
