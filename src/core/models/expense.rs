use super::split::{ExpenseSplit, SplitInput};
use crate::core::errors::LedgerError;
use crate::core::money::Money;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Spending categories a trip expense can be tagged with.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Lodging,
    Transport,
    Activities,
    Shopping,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Lodging => "lodging",
            Category::Transport => "transport",
            Category::Activities => "activities",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Category::Food),
            "lodging" => Ok(Category::Lodging),
            "transport" => Ok(Category::Transport),
            "activities" => Ok(Category::Activities),
            "shopping" => Ok(Category::Shopping),
            "other" => Ok(Category::Other),
            unknown => Err(LedgerError::UnknownCategory(unknown.to_string())),
        }
    }
}

/// What an expense records: trip spending in some category, or a direct
/// repayment between participants.
///
/// On the wire this is a single category string where `"settlement"` is the
/// reserved literal for the repayment kind, so a user-facing spending
/// category can never collide with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpenseKind {
    Spend(Category),
    Settlement,
}

impl ExpenseKind {
    pub fn is_settlement(&self) -> bool {
        matches!(self, ExpenseKind::Settlement)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseKind::Spend(category) => category.as_str(),
            ExpenseKind::Settlement => "settlement",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "settlement" {
            Ok(ExpenseKind::Settlement)
        } else {
            s.parse::<Category>().map(ExpenseKind::Spend)
        }
    }
}

impl Serialize for ExpenseKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExpenseKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// One outlay recorded against a trip, allocated across its splits.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub payer_id: String,
    pub activity_id: Option<String>,
    #[schema(value_type = f64, example = 42.50)]
    pub amount: Money,
    pub currency: String,
    #[serde(rename = "category")]
    #[schema(value_type = String, example = "food")]
    pub kind: ExpenseKind,
    pub description: Option<String>,
    #[schema(value_type = String, example = "2024-06-01")]
    pub expense_date: NaiveDate,
    pub splits: Vec<ExpenseSplit>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

/// Input for recording a new expense together with its splits.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub trip_id: String,
    pub payer_id: String,
    pub amount: Money,
    pub currency: Option<String>,
    pub kind: ExpenseKind,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub activity_id: Option<String>,
    pub splits: Vec<SplitInput>,
}

/// Whitelisted partial update for an expense. Splits are never touched here;
/// a patch with no fields set is rejected before any write.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ExpensePatch {
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Money>,
    pub currency: Option<String>,
    #[serde(rename = "category")]
    #[schema(value_type = Option<String>, example = "transport")]
    pub kind: Option<ExpenseKind>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub expense_date: Option<NaiveDate>,
    pub activity_id: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.currency.is_none()
            && self.kind.is_none()
            && self.description.is_none()
            && self.expense_date.is_none()
            && self.activity_id.is_none()
    }
}

/// Optional narrowing for expense listings.
#[derive(Clone, Debug, Default)]
pub struct ExpenseFilter {
    pub kind: Option<ExpenseKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(kind) = self.kind {
            if expense.kind != kind {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.expense_date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.expense_date > end {
                return false;
            }
        }
        true
    }
}
