use crate::core::money::Money;
use serde::Serialize;
use utoipa::ToSchema;

/// One simplifying transaction: `from` pays `to` the given amount. Never
/// persisted; recomputed on every balance request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Debt {
    pub from: String,
    pub to: String,
    #[schema(value_type = f64)]
    pub amount: Money,
}
