use crate::core::money::Money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One participant's share of an expense. At most one split per participant
/// per expense; splits are removed together with their expense.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpenseSplit {
    pub id: String,
    pub expense_id: String,
    pub user_id: String,
    #[schema(value_type = f64, example = 14.17)]
    pub amount: Money,
    /// Advisory only; balance math always reads `amount`.
    #[schema(value_type = Option<f64>, example = 33.33)]
    pub percentage: Option<Decimal>,
    /// Reserved for per-split settlement tracking; the balance engine
    /// ignores it.
    pub settled: bool,
    #[schema(value_type = Option<String>)]
    pub settled_at: Option<DateTime<Utc>>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

/// A caller-proposed share, before validation and normalization.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct SplitInput {
    pub user_id: String,
    #[schema(value_type = f64)]
    pub amount: Money,
    #[schema(value_type = Option<f64>)]
    pub percentage: Option<Decimal>,
}
