mod balance_tests;

use crate::core::ledger::LedgerService;
use crate::core::models::{ExpenseKind, NewExpense, SplitInput, TripProfile, UserIdentity};
use crate::core::money::Money;
use crate::infrastructure::directory::in_memory::InMemoryDirectory;
use crate::infrastructure::storage::in_memory::InMemoryExpenseStore;
use chrono::NaiveDate;

pub type TestService = LedgerService<InMemoryExpenseStore, InMemoryDirectory, InMemoryDirectory>;

pub const TRIP: &str = "trip-1";

pub fn create_test_service() -> (TestService, InMemoryExpenseStore, InMemoryDirectory) {
    let storage = InMemoryExpenseStore::new();
    let directory = InMemoryDirectory::new();
    let service = LedgerService::new(storage.clone(), directory.clone(), directory.clone());
    (service, storage, directory)
}

/// Registers Alice (owner), Bob and Carol (accepted collaborators) on
/// `trip-1` with the given budget in USD.
pub async fn seed_trip(directory: &InMemoryDirectory, budget: Option<Money>) {
    for (id, name) in [("alice", "Alice"), ("bob", "Bob"), ("carol", "Carol")] {
        directory
            .register_identity(UserIdentity {
                id: id.to_string(),
                name: name.to_string(),
                email: format!("{id}@example.com"),
            })
            .await;
    }
    directory
        .upsert_trip(
            TripProfile {
                id: TRIP.to_string(),
                name: "Lisbon".to_string(),
                budget,
                currency: "USD".to_string(),
            },
            "alice",
        )
        .await;
    for user in ["bob", "carol"] {
        directory.invite(TRIP, user).await;
        directory.accept_invitation(TRIP, user).await;
    }
}

pub fn money(units: i64) -> Money {
    Money::from_major(units)
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

pub fn spend(payer: &str, amount: Money, category: &str, splits: &[(&str, Money)]) -> NewExpense {
    new_expense(payer, amount, category.parse::<ExpenseKind>().unwrap(), splits)
}

pub fn settlement(payer: &str, amount: Money, splits: &[(&str, Money)]) -> NewExpense {
    new_expense(payer, amount, ExpenseKind::Settlement, splits)
}

fn new_expense(
    payer: &str,
    amount: Money,
    kind: ExpenseKind,
    splits: &[(&str, Money)],
) -> NewExpense {
    NewExpense {
        trip_id: TRIP.to_string(),
        payer_id: payer.to_string(),
        amount,
        currency: None,
        kind,
        description: None,
        expense_date: date(1),
        activity_id: None,
        splits: splits
            .iter()
            .map(|(user_id, amount)| SplitInput {
                user_id: (*user_id).to_string(),
                amount: *amount,
                percentage: None,
            })
            .collect(),
    }
}
