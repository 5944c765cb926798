use crate::core::allocator;
use crate::core::balance::{self, TripBalances};
use crate::core::errors::LedgerError;
use crate::core::models::{
    Expense, ExpenseFilter, ExpenseKind, ExpensePatch, ExpenseSplit, NewExpense,
    ParticipantBalance, UserIdentity,
};
use crate::core::money::Money;
use crate::core::settle;
use crate::core::summary::{self, TripSummary};
use crate::infrastructure::directory::{IdentityDirectory, TripDirectory};
use crate::infrastructure::storage::ExpenseStore;
use chrono::{DateTime, NaiveDate, Utc};
use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// An expense split enriched with its holder's display identity.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct SplitDetail {
    #[serde(flatten)]
    pub split: ExpenseSplit,
    pub user: Option<UserIdentity>,
}

/// An expense with payer and split-holder display identities attached.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ExpenseDetail {
    pub id: String,
    pub trip_id: String,
    pub payer_id: String,
    pub payer: Option<UserIdentity>,
    pub activity_id: Option<String>,
    #[schema(value_type = f64)]
    pub amount: Money,
    pub currency: String,
    #[serde(rename = "category")]
    #[schema(value_type = String, example = "food")]
    pub kind: ExpenseKind,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub expense_date: NaiveDate,
    pub splits: Vec<SplitDetail>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl ExpenseDetail {
    fn new(
        expense: Expense,
        payer: Option<UserIdentity>,
        holders: Vec<Option<UserIdentity>>,
    ) -> Self {
        let Expense {
            id,
            trip_id,
            payer_id,
            activity_id,
            amount,
            currency,
            kind,
            description,
            expense_date,
            splits,
            created_at,
            updated_at,
        } = expense;
        let splits = splits
            .into_iter()
            .zip(holders)
            .map(|(split, user)| SplitDetail { split, user })
            .collect();
        ExpenseDetail {
            id,
            trip_id,
            payer_id,
            payer,
            activity_id,
            amount,
            currency,
            kind,
            description,
            expense_date,
            splits,
            created_at,
            updated_at,
        }
    }
}

/// The shared-expense ledger: expense CRUD over the store, spend summaries,
/// and balance/debt computation. Reporting recomputes from committed state
/// on every call; no derived balance is cached or persisted.
pub struct LedgerService<S: ExpenseStore, T: TripDirectory, I: IdentityDirectory> {
    store: S,
    trips: T,
    identities: I,
}

impl<S: ExpenseStore, T: TripDirectory, I: IdentityDirectory> LedgerService<S, T, I> {
    pub fn new(store: S, trips: T, identities: I) -> Self {
        info!("Initializing LedgerService");
        LedgerService {
            store,
            trips,
            identities,
        }
    }

    /// Records an expense together with its splits as one atomic write.
    pub async fn create_expense(&self, new: NewExpense) -> Result<Expense, LedgerError> {
        info!(
            "Creating {} expense of {} in trip {} paid by {}",
            new.kind, new.amount, new.trip_id, new.payer_id
        );
        if new.amount.is_negative() {
            warn!("Rejected negative amount for trip {}", new.trip_id);
            return Err(LedgerError::NegativeAmount);
        }

        let profile = self
            .trips
            .trip_profile(&new.trip_id)
            .await?
            .ok_or_else(|| LedgerError::TripNotFound(new.trip_id.clone()))?;
        let participants = self.trips.trip_participants(&new.trip_id).await?;
        if !participants.iter().any(|id| id == &new.payer_id) {
            warn!(
                "Payer {} is not a participant of trip {}",
                new.payer_id, new.trip_id
            );
            return Err(LedgerError::NotTripParticipant(new.payer_id.clone()));
        }

        let now = Utc::now();
        let expense_id = Uuid::new_v4().to_string();
        let amount = new.amount.round_to_cent();
        let splits = allocator::allocate(&expense_id, amount, &new.splits, &participants, now)?;

        let expense = Expense {
            id: expense_id,
            trip_id: new.trip_id,
            payer_id: new.payer_id,
            activity_id: new.activity_id,
            amount,
            currency: new.currency.unwrap_or(profile.currency),
            kind: new.kind,
            description: new.description,
            expense_date: new.expense_date,
            splits: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let created = self.store.create_expense(expense, splits).await?;
        debug!("Expense created with ID: {}", created.id);
        Ok(created)
    }

    /// The expense with payer and split-holder identities attached, or
    /// `None` when it does not exist.
    pub async fn get_expense(
        &self,
        expense_id: &str,
    ) -> Result<Option<ExpenseDetail>, LedgerError> {
        debug!("Fetching expense {}", expense_id);
        let Some(expense) = self.store.get_expense(expense_id).await? else {
            return Ok(None);
        };

        let payer = self.identities.display_identity(&expense.payer_id).await?;
        let holders = try_join_all(
            expense
                .splits
                .iter()
                .map(|split| self.identities.display_identity(&split.user_id)),
        )
        .await?;

        Ok(Some(ExpenseDetail::new(expense, payer, holders)))
    }

    /// Trip expenses with splits attached, newest first.
    pub async fn list_expenses(
        &self,
        trip_id: &str,
        filter: &ExpenseFilter,
    ) -> Result<Vec<Expense>, LedgerError> {
        debug!("Listing expenses for trip {}", trip_id);
        self.store.list_expenses(trip_id, filter).await
    }

    /// Applies a whitelisted partial update. Splits are left untouched.
    pub async fn update_expense(
        &self,
        expense_id: &str,
        patch: ExpensePatch,
    ) -> Result<Expense, LedgerError> {
        info!("Updating expense {}", expense_id);
        if patch.is_empty() {
            warn!("Update for expense {} carries no fields", expense_id);
            return Err(LedgerError::EmptyUpdate);
        }

        let mut expense = self
            .store
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;

        if let Some(amount) = patch.amount {
            if amount.is_negative() {
                return Err(LedgerError::NegativeAmount);
            }
            expense.amount = amount.round_to_cent();
        }
        if let Some(currency) = patch.currency {
            expense.currency = currency;
        }
        if let Some(kind) = patch.kind {
            expense.kind = kind;
        }
        if let Some(description) = patch.description {
            expense.description = Some(description);
        }
        if let Some(expense_date) = patch.expense_date {
            expense.expense_date = expense_date;
        }
        if let Some(activity_id) = patch.activity_id {
            expense.activity_id = Some(activity_id);
        }
        expense.updated_at = Utc::now();

        let saved = self.store.update_expense(expense).await?;
        debug!("Expense updated: {}", saved.id);
        Ok(saved)
    }

    /// Removes the expense and, with it, its splits. `false` when nothing
    /// existed to delete.
    pub async fn delete_expense(&self, expense_id: &str) -> Result<bool, LedgerError> {
        info!("Deleting expense {}", expense_id);
        let deleted = self.store.delete_expense(expense_id).await?;
        if !deleted {
            debug!("Expense {} not found, nothing deleted", expense_id);
        }
        Ok(deleted)
    }

    /// Spend-vs-budget summary for the trip; settlements are not spending.
    /// Unknown trips yield a zeroed summary rather than an error.
    pub async fn get_summary(&self, trip_id: &str) -> Result<TripSummary, LedgerError> {
        debug!("Summarizing trip {}", trip_id);
        let Some(profile) = self.trips.trip_profile(trip_id).await? else {
            warn!("Trip {} not found, returning empty summary", trip_id);
            return Ok(TripSummary::empty(trip_id));
        };
        let expenses = self
            .store
            .list_expenses(trip_id, &ExpenseFilter::default())
            .await?;
        Ok(summary::summarize(&profile, &expenses))
    }

    /// Replays every expense and settlement into per-participant net
    /// positions and the minimal debts that would settle them.
    pub async fn calculate_balances(&self, trip_id: &str) -> Result<TripBalances, LedgerError> {
        debug!("Calculating balances for trip {}", trip_id);
        let participant_ids = self.trips.trip_participants(trip_id).await?;
        let expenses = self
            .store
            .list_expenses(trip_id, &ExpenseFilter::default())
            .await?;

        let totals = balance::tally(&participant_ids, &expenses);

        let identities = try_join_all(
            totals
                .keys()
                .map(|user_id| self.identities.display_identity(user_id)),
        )
        .await?;

        let participants: Vec<ParticipantBalance> = totals
            .iter()
            .zip(identities)
            .map(|((user_id, totals), identity)| ParticipantBalance {
                user_id: user_id.clone(),
                name: identity.map(|identity| identity.name),
                total_paid: totals.total_paid,
                total_owed: totals.total_owed,
                settlements_paid: totals.settlements_paid,
                settlements_received: totals.settlements_received,
                net_balance: totals.net_balance(),
            })
            .collect();

        let net: Vec<(String, Money)> = participants
            .iter()
            .map(|p| (p.user_id.clone(), p.net_balance))
            .collect();
        let debts = settle::simplify(&net);

        Ok(TripBalances {
            trip_id: trip_id.to_string(),
            participants,
            debts,
        })
    }
}
