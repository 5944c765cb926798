use crate::core::money::Money;
use serde::Serialize;
use utoipa::ToSchema;

/// Accumulated ledger totals for one trip participant. Immutable; the fold
/// helpers return a fresh record instead of mutating in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    pub total_paid: Money,
    pub total_owed: Money,
    pub settlements_paid: Money,
    pub settlements_received: Money,
}

impl LedgerTotals {
    pub fn with_paid(self, amount: Money) -> Self {
        LedgerTotals {
            total_paid: self.total_paid + amount,
            ..self
        }
    }

    pub fn with_owed(self, amount: Money) -> Self {
        LedgerTotals {
            total_owed: self.total_owed + amount,
            ..self
        }
    }

    pub fn with_settlement_paid(self, amount: Money) -> Self {
        LedgerTotals {
            settlements_paid: self.settlements_paid + amount,
            ..self
        }
    }

    pub fn with_settlement_received(self, amount: Money) -> Self {
        LedgerTotals {
            settlements_received: self.settlements_received + amount,
            ..self
        }
    }

    /// Positive means this participant is owed money overall, negative means
    /// they owe money.
    pub fn net_balance(&self) -> Money {
        (self.total_paid - self.total_owed) + (self.settlements_paid - self.settlements_received)
    }
}

/// A participant's resolved identity plus their net financial position.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ParticipantBalance {
    pub user_id: String,
    pub name: Option<String>,
    #[schema(value_type = f64)]
    pub total_paid: Money,
    #[schema(value_type = f64)]
    pub total_owed: Money,
    #[schema(value_type = f64)]
    pub settlements_paid: Money,
    #[schema(value_type = f64)]
    pub settlements_received: Money,
    #[schema(value_type = f64)]
    pub net_balance: Money,
}
