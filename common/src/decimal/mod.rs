//! Decimal type utilities for exact money arithmetic

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Monetary amount carried by statement entries and balances.
///
/// Serialized as a plain JSON number (the workspace enables
/// `rust_decimal/serde-float`).
pub type Amount = Decimal;
