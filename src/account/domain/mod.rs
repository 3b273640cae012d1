//! Domain model for accounts.
//!
//! Accounts own tasks, hold a salted password digest and an optional
//! profile photo reference.

mod account;
mod error;
mod ids;
mod password;
mod photo;
mod username;

pub use account::{Account, PersistedAccountData};
pub use error::AccountDomainError;
pub use ids::AccountId;
pub use password::{DEFAULT_HASH_ITERATIONS, PasswordHash};
pub use photo::{ALLOWED_PHOTO_EXTENSIONS, ProfilePhoto, UPLOAD_PREFIX};
pub use username::Username;
