//! In-memory adapter implementations for account ports.

mod account;

pub use account::InMemoryAccountRepository;
