//! Domain error types.

use thiserror::Error;

use crate::money::Money;

/// Errors raised while constructing entities from raw input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A monetary field that must not be negative was negative.
    #[error("Negative amount for {field}: {amount}")]
    NegativeAmount { field: &'static str, amount: Money },

    /// A monetary field above [`Money::MAX_AMOUNT`].
    #[error("Amount out of range for {field}: {amount}")]
    AmountOutOfRange { field: &'static str, amount: Money },

    /// An item quantity outside the supported range.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },
}
