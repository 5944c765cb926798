pub mod debt;
pub mod expense;
pub mod identity;
pub mod participant;
pub mod split;
pub mod trip;

pub use debt::Debt;
pub use expense::{Category, Expense, ExpenseFilter, ExpenseKind, ExpensePatch, NewExpense};
pub use identity::UserIdentity;
pub use participant::{LedgerTotals, ParticipantBalance};
pub use split::{ExpenseSplit, SplitInput};
pub use trip::{DEFAULT_CURRENCY, TripProfile};
