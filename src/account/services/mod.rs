//! Application services for account management.

mod accounts;

pub use accounts::{
    AccountService, AccountServiceError, AccountServiceResult, AuthenticatedSession,
    ChangePasswordRequest, LoginRequest, PhotoChange, REMEMBERED_SESSION_DAYS,
    RegisterAccountRequest, STANDARD_SESSION_DAYS,
};
