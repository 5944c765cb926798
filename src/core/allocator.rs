use crate::core::errors::LedgerError;
use crate::core::models::{ExpenseSplit, SplitInput};
use crate::core::money::Money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

/// Validates and normalizes caller-supplied splits for a new expense,
/// minting one `ExpenseSplit` row per participant.
///
/// Rejected before anything is persisted: empty split lists, negative
/// amounts, percentages outside 0-100, users outside the participant set,
/// duplicate users, and split totals that stray from the expense amount by
/// more than one cent per split. Percentages are stored as supplied and are
/// never used to derive amounts.
pub fn allocate(
    expense_id: &str,
    amount: Money,
    inputs: &[SplitInput],
    participants: &[String],
    now: DateTime<Utc>,
) -> Result<Vec<ExpenseSplit>, LedgerError> {
    if inputs.is_empty() {
        warn!("Empty split list for expense {}", expense_id);
        return Err(LedgerError::EmptySplits);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut total = Money::ZERO;
    let mut splits = Vec::with_capacity(inputs.len());

    for input in inputs {
        if input.amount.is_negative() {
            return Err(LedgerError::NegativeAmount);
        }
        if let Some(percentage) = input.percentage {
            if percentage < Decimal::ZERO || percentage > Decimal::from(100) {
                return Err(LedgerError::InvalidPercentage(percentage));
            }
        }
        if !participants.iter().any(|id| id == &input.user_id) {
            warn!(
                "Split user {} is not a participant of this trip",
                input.user_id
            );
            return Err(LedgerError::NotTripParticipant(input.user_id.clone()));
        }
        if !seen.insert(input.user_id.as_str()) {
            return Err(LedgerError::DuplicateSplitUser(input.user_id.clone()));
        }

        let share = input.amount.round_to_cent();
        total += share;
        splits.push(ExpenseSplit {
            id: Uuid::new_v4().to_string(),
            expense_id: expense_id.to_string(),
            user_id: input.user_id.clone(),
            amount: share,
            percentage: input.percentage,
            settled: false,
            settled_at: None,
            created_at: now,
            updated_at: now,
        });
    }

    // One cent of drift per split absorbs proportional rounding residue.
    let tolerance = Money::new(Decimal::new(inputs.len() as i64, 2));
    if (total - amount).abs() > tolerance {
        warn!(
            "Splits for expense {} sum to {} against amount {}",
            expense_id, total, amount
        );
        return Err(LedgerError::SplitMismatch {
            expected: amount,
            actual: total,
        });
    }

    Ok(splits)
}
