use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a roster cannot be settled. Settlement is aborted as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least 2 named participants are required (found {found})")]
    InsufficientParticipants { found: usize },
    #[error("Entry and exit amounts must both be set for '{name}'")]
    IncompleteAmounts { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount must not be negative (found {0})")]
    Negative(Decimal),
    #[error("Amount must not exceed 1000000000000000 (found {0})")]
    TooLarge(Decimal),
}
