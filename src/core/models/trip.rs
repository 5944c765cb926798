use crate::core::money::Money;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reporting currency used when neither the request nor the trip supplies
/// one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Budget and reporting currency for a trip, as resolved by the trip
/// directory.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TripProfile {
    pub id: String,
    pub name: String,
    #[schema(value_type = Option<f64>, example = 1000.0)]
    pub budget: Option<Money>,
    pub currency: String,
}
