use crate::core::errors::LedgerError;
use crate::core::models::{Expense, ExpenseFilter, ExpenseSplit};
use crate::infrastructure::storage::ExpenseStore;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Expense and split rows in memory. Both tables sit behind one lock so the
/// write guard doubles as the transaction boundary for the atomic create.
#[derive(Clone, Default)]
pub struct InMemoryExpenseStore {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    expenses: HashMap<String, Expense>,
    splits: HashMap<String, Vec<ExpenseSplit>>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn attach(tables: &Tables, mut expense: Expense) -> Expense {
    expense.splits = tables.splits.get(&expense.id).cloned().unwrap_or_default();
    expense
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn create_expense(
        &self,
        mut expense: Expense,
        splits: Vec<ExpenseSplit>,
    ) -> Result<Expense, LedgerError> {
        let mut tables = self.tables.write().await;

        // Row constraints are checked before either table is touched; a
        // rejected split must not leave the expense row behind.
        if tables.expenses.contains_key(&expense.id) {
            return Err(LedgerError::Storage(format!(
                "expense {} already exists",
                expense.id
            )));
        }
        if expense.amount.is_negative() {
            return Err(LedgerError::NegativeAmount);
        }
        let mut holders: HashSet<&str> = HashSet::new();
        for split in &splits {
            if split.expense_id != expense.id {
                return Err(LedgerError::Storage(format!(
                    "split {} references expense {}",
                    split.id, split.expense_id
                )));
            }
            if split.amount.is_negative() {
                return Err(LedgerError::NegativeAmount);
            }
            if !holders.insert(split.user_id.as_str()) {
                return Err(LedgerError::DuplicateSplitUser(split.user_id.clone()));
            }
        }

        expense.splits.clear();
        tables.splits.insert(expense.id.clone(), splits);
        tables.expenses.insert(expense.id.clone(), expense.clone());
        Ok(attach(&tables, expense))
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError> {
        let tables = self.tables.read().await;
        Ok(tables
            .expenses
            .get(expense_id)
            .cloned()
            .map(|expense| attach(&tables, expense)))
    }

    async fn list_expenses(
        &self,
        trip_id: &str,
        filter: &ExpenseFilter,
    ) -> Result<Vec<Expense>, LedgerError> {
        let tables = self.tables.read().await;
        let mut expenses: Vec<Expense> = tables
            .expenses
            .values()
            .filter(|expense| expense.trip_id == trip_id)
            .cloned()
            .map(|expense| attach(&tables, expense))
            .filter(|expense| filter.matches(expense))
            .collect();
        expenses.sort_by(|a, b| {
            b.expense_date
                .cmp(&a.expense_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(expenses)
    }

    async fn update_expense(&self, mut expense: Expense) -> Result<Expense, LedgerError> {
        let mut tables = self.tables.write().await;
        if !tables.expenses.contains_key(&expense.id) {
            return Err(LedgerError::ExpenseNotFound(expense.id));
        }
        expense.splits.clear();
        tables.expenses.insert(expense.id.clone(), expense.clone());
        Ok(attach(&tables, expense))
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool, LedgerError> {
        let mut tables = self.tables.write().await;
        let removed = tables.expenses.remove(expense_id).is_some();
        // Splits cannot outlive their expense.
        tables.splits.remove(expense_id);
        Ok(removed)
    }
}
