//! Port contracts for account management.

pub mod repository;
pub mod sessions;

pub use repository::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
pub use sessions::{SessionClaims, SessionError, SessionToken, SessionTokens};
