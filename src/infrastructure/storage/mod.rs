use crate::core::errors::LedgerError;
use crate::core::models::{Expense, ExpenseFilter, ExpenseSplit};
use async_trait::async_trait;

/// Persistence seam for expenses and their splits.
///
/// `create_expense` is all-or-nothing: the expense row and every split row
/// land together or not at all. `delete_expense` removes the splits with the
/// expense; no orphan split may remain.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn create_expense(
        &self,
        expense: Expense,
        splits: Vec<ExpenseSplit>,
    ) -> Result<Expense, LedgerError>;

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError>;

    /// Matching expenses with splits attached, newest expense date first,
    /// ties broken by creation time descending.
    async fn list_expenses(
        &self,
        trip_id: &str,
        filter: &ExpenseFilter,
    ) -> Result<Vec<Expense>, LedgerError>;

    async fn update_expense(&self, expense: Expense) -> Result<Expense, LedgerError>;

    /// `false` when no such expense existed.
    async fn delete_expense(&self, expense_id: &str) -> Result<bool, LedgerError>;
}

pub mod in_memory;
