//! Task lifecycle management.
//!
//! Tasks are created `pending`, move between `pending` and `completed`, can
//! be moved to the trash (`deleted`) and restored to `pending`, and are
//! purged either one at a time or by emptying the trash. Every operation is
//! scoped to the owning account. The module follows hexagonal architecture:
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
