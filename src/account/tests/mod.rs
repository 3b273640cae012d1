//! Unit tests for account management.
