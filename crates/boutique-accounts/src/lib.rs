//! Key-value backed user and session store for Purse Boutique.
//!
//! Models the storefront's account collaborator: an opaque store holding a
//! `"users"` list and a `"current_user"` record, with sign-up, log-in,
//! log-out, and saved-address updates layered on top. Credentials are
//! hashed before they reach the store; the current-user record never
//! carries the hash.

mod error;
mod password;
mod service;
mod store;
mod user;

pub use error::AccountError;
pub use password::PasswordHasher;
pub use service::AccountService;
pub use store::{KeyValueStore, MemoryStore, CURRENT_USER_KEY, USERS_KEY};
pub use user::{Profile, UserRecord};
