use crate::core::models::{Category, Expense, ExpenseKind, TripProfile, DEFAULT_CURRENCY};
use crate::core::money::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct CategoryTotal {
    pub category: Category,
    #[schema(value_type = f64)]
    pub total: Money,
}

/// Spend-vs-budget report for one trip.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct TripSummary {
    pub trip_id: String,
    #[schema(value_type = Option<f64>)]
    pub budget: Option<Money>,
    pub currency: String,
    #[schema(value_type = f64)]
    pub total_spent: Money,
    #[schema(value_type = Option<f64>)]
    pub remaining: Option<Money>,
    pub percent_used: Option<f64>,
    pub expense_count: usize,
    pub by_category: Vec<CategoryTotal>,
}

impl TripSummary {
    /// Defensive default for a trip the directory cannot resolve.
    pub fn empty(trip_id: &str) -> Self {
        TripSummary {
            trip_id: trip_id.to_string(),
            budget: None,
            currency: DEFAULT_CURRENCY.to_string(),
            total_spent: Money::ZERO,
            remaining: None,
            percent_used: None,
            expense_count: 0,
            by_category: Vec::new(),
        }
    }
}

/// Aggregates a trip's expenses against its budget.
///
/// Settlements record repayments, not spending, so they are excluded from
/// the total and the category breakdown. Budget-relative figures are `None`
/// when the trip has no budget.
pub fn summarize(profile: &TripProfile, expenses: &[Expense]) -> TripSummary {
    let mut total_spent = Money::ZERO;
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();

    for expense in expenses {
        if let ExpenseKind::Spend(category) = expense.kind {
            total_spent += expense.amount;
            *totals.entry(category).or_insert(Money::ZERO) += expense.amount;
        }
    }

    let mut by_category: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    // Largest first; the stable sort keeps equal totals in category order.
    by_category.sort_by(|a, b| b.total.cmp(&a.total));

    let remaining = profile.budget.map(|budget| budget - total_spent);
    let percent_used = profile.budget.and_then(|budget| {
        if budget > Money::ZERO {
            let percent = total_spent.amount() / budget.amount() * Decimal::from(100);
            percent.round_dp(2).to_f64()
        } else {
            None
        }
    });

    TripSummary {
        trip_id: profile.id.clone(),
        budget: profile.budget,
        currency: profile.currency.clone(),
        total_spent,
        remaining,
        percent_used,
        expense_count: expenses.len(),
        by_category,
    }
}
