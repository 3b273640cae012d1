//! Account management.
//!
//! Accounts own tasks. This module registers accounts, checks credentials,
//! issues and resolves session tokens, and manages the username, password
//! and profile photo reference of an account. Deleting an account removes
//! its tasks. Layout follows the task module:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
