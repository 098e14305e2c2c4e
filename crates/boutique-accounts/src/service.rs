//! Account operations over the key-value store.

use crate::password::PasswordHasher;
use crate::store::{KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use crate::user::{Profile, UserRecord};
use crate::AccountError;
use boutique_commerce::checkout::Address;
use boutique_commerce::ids::UserId;

/// Sign-up, log-in, and saved-address operations.
///
/// State lives entirely in the backing store: a `"users"` JSON list and a
/// `"current_user"` record. Corrupt stored JSON reads as signed-out rather
/// than failing, matching the storefront's tolerance for cleared or
/// tampered browser storage.
pub struct AccountService<S> {
    store: S,
    hasher: PasswordHasher,
}

impl<S: KeyValueStore> AccountService<S> {
    /// Create a service over a backing store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: PasswordHasher::default(),
        }
    }

    /// Use a custom hasher (tests lower the iteration count).
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Register a new user and sign them in.
    ///
    /// Rejects an email that is already registered.
    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Profile, AccountError> {
        PasswordHasher::validate(password)?;

        let mut users = self.load_users();
        if users.iter().any(|u| u.email == email) {
            return Err(AccountError::EmailTaken(email.to_string()));
        }

        let record = UserRecord {
            id: UserId::generate(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: self.hasher.hash(password),
            address: None,
        };
        let profile = Profile::from(&record);

        users.push(record);
        self.save_users(&users)?;
        self.set_current(&profile)?;

        Ok(profile)
    }

    /// Sign in with email and password.
    pub fn log_in(&self, email: &str, password: &str) -> Result<Profile, AccountError> {
        let users = self.load_users();
        let record = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(AccountError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify(password, &record.password_hash)
            .unwrap_or(false);
        if !verified {
            return Err(AccountError::InvalidCredentials);
        }

        let profile = Profile::from(record);
        self.set_current(&profile)?;
        Ok(profile)
    }

    /// Sign out the current user.
    pub fn log_out(&self) {
        self.store.remove(CURRENT_USER_KEY);
    }

    /// The signed-in user, `None` when absent or unparseable.
    pub fn current_user(&self) -> Option<Profile> {
        let raw = self.store.get(CURRENT_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Check if anyone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Save a shipping address on the signed-in user.
    ///
    /// Writes both the user-list record and the current-user record.
    pub fn update_address(&self, address: Address) -> Result<Profile, AccountError> {
        let current = self.current_user().ok_or(AccountError::NotSignedIn)?;

        let mut users = self.load_users();
        let record = users
            .iter_mut()
            .find(|u| u.id == current.id)
            .ok_or(AccountError::NotSignedIn)?;
        record.address = Some(address);

        let profile = Profile::from(&*record);
        self.save_users(&users)?;
        self.set_current(&profile)?;
        Ok(profile)
    }

    fn load_users(&self) -> Vec<UserRecord> {
        self.store
            .get(USERS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<(), AccountError> {
        let raw = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, raw);
        Ok(())
    }

    fn set_current(&self, profile: &Profile) -> Result<(), AccountError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(CURRENT_USER_KEY, raw);
        Ok(())
    }
}
