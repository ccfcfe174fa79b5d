//! Common types and utilities for the customer ledger
//!
//! This library contains the shared types used by the account service and
//! the API gateway: the unified error type, the decimal amount type and the
//! customer and statement models.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
