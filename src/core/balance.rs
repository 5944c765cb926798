use crate::core::models::{Debt, Expense, LedgerTotals, ParticipantBalance};
use std::collections::BTreeMap;
use tracing::debug;
use utoipa::ToSchema;

/// Net positions for a trip: every participant with their accumulated
/// totals, plus the minimal debt edges that would settle them.
#[derive(Clone, Debug, serde::Serialize, ToSchema)]
pub struct TripBalances {
    pub trip_id: String,
    pub participants: Vec<ParticipantBalance>,
    pub debts: Vec<Debt>,
}

/// Folds every expense and settlement of a trip into per-participant totals.
///
/// A non-settlement expense credits the payer with the full amount and debits
/// each split holder with their share. A settlement credits the payer's
/// `settlements_paid` and each split holder's `settlements_received` instead.
/// Contributions referencing a user outside the resolved participant set are
/// skipped so one stale reference cannot fail the whole computation.
pub fn tally(participants: &[String], expenses: &[Expense]) -> BTreeMap<String, LedgerTotals> {
    let seed: BTreeMap<String, LedgerTotals> = participants
        .iter()
        .map(|id| (id.clone(), LedgerTotals::default()))
        .collect();

    let totals = expenses.iter().fold(seed, apply_expense);
    debug!(
        "Tallied {} expenses across {} participants",
        expenses.len(),
        totals.len()
    );
    totals
}

fn apply_expense(
    mut totals: BTreeMap<String, LedgerTotals>,
    expense: &Expense,
) -> BTreeMap<String, LedgerTotals> {
    if expense.kind.is_settlement() {
        if let Some(entry) = totals.get(&expense.payer_id).copied() {
            totals.insert(
                expense.payer_id.clone(),
                entry.with_settlement_paid(expense.amount),
            );
        }
        for split in &expense.splits {
            if let Some(entry) = totals.get(&split.user_id).copied() {
                totals.insert(
                    split.user_id.clone(),
                    entry.with_settlement_received(split.amount),
                );
            }
        }
    } else {
        if let Some(entry) = totals.get(&expense.payer_id).copied() {
            totals.insert(expense.payer_id.clone(), entry.with_paid(expense.amount));
        }
        for split in &expense.splits {
            if let Some(entry) = totals.get(&split.user_id).copied() {
                totals.insert(split.user_id.clone(), entry.with_owed(split.amount));
            }
        }
    }
    totals
}
