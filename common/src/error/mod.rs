//! Error types for the customer ledger
//!
//! This module provides the error type shared by the account service and the
//! API gateway. Domain failures carry the exact message shown to clients.

use std::fmt::Display;
use thiserror::Error;

/// Ledger error type
#[derive(Debug, Error)]
pub enum Error {
    /// No customer is registered under the given fiscal identifier
    #[error("Customer not found")]
    CustomerNotFound,

    /// A customer with the given fiscal identifier already exists
    #[error("Customer already exists")]
    CustomerAlreadyExists,

    /// Withdrawal amount exceeds the current balance
    #[error("Insufficient funds!")]
    InsufficientFunds,

    /// A recorded amount would push the balance out of the representable range
    #[error("Balance overflow")]
    BalanceOverflow,

    /// Invalid or unusable configuration value
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error.
    ///
    /// Domain errors keep their client-facing message untouched; only
    /// free-form variants are prefixed.
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            match e {
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context_fn(), msg)),
                other => other,
            }
        })
    }
}
