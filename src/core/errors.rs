use crate::core::money::Money;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    /// Trip with given ID not found
    #[error("Trip {0} not found")]
    TripNotFound(String),

    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Expense or split amount is below zero
    #[error("Amount must not be negative")]
    NegativeAmount,

    /// Category string is not one of the enumerated spending categories
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// Payer or split holder is not a resolved trip participant
    #[error("User {0} is not a trip participant")]
    NotTripParticipant(String),

    /// Expense created without any splits
    #[error("An expense needs at least one split")]
    EmptySplits,

    /// A participant may hold at most one split per expense
    #[error("User {0} appears in more than one split")]
    DuplicateSplitUser(String),

    /// Split amounts stray from the expense amount beyond tolerance
    #[error("Splits sum to {actual} but the expense amount is {expected}")]
    SplitMismatch { expected: Money, actual: Money },

    /// Split percentage outside the 0-100 range
    #[error("Split percentage {0} is outside 0-100")]
    InvalidPercentage(Decimal),

    /// Partial update carrying no fields
    #[error("Update contains no fields")]
    EmptyUpdate,

    /// Persistence failure, propagated to the caller unchanged
    #[error("Storage error: {0}")]
    Storage(String),
}
