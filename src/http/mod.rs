//! JSON HTTP API over the account and task services.
//!
//! Routes under `/api` accept and return JSON. Everything except
//! registration, login and the health check requires an
//! `Authorization: Bearer <token>` header naming a live account.

mod accounts;
mod auth;
mod dto;
mod error;
mod router;
mod server;
mod state;
mod tasks;

pub use auth::CurrentAccount;
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerHandle, start_server};
pub use state::{AppState, SharedAccountService, SharedTaskService};
