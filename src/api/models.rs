use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::LedgerError;
use crate::core::models::{ExpenseKind, SplitInput};
use crate::core::money::Money;

/// Payload for recording an expense against the trip in the path.
#[derive(Deserialize, ToSchema)]
pub struct CreateExpenseRequest {
    pub payer_id: String,
    #[schema(value_type = f64, example = 90.0)]
    pub amount: Money,
    /// Defaults to the trip's reporting currency.
    pub currency: Option<String>,
    #[schema(value_type = String, example = "food")]
    pub category: ExpenseKind,
    pub description: Option<String>,
    #[schema(value_type = String, example = "2024-06-01")]
    pub expense_date: NaiveDate,
    pub activity_id: Option<String>,
    pub splits: Vec<SplitInput>,
}

#[derive(Deserialize)]
pub struct ListExpensesQuery {
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteExpenseResponse {
    pub deleted: bool,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for LedgerError to implement IntoResponse
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            LedgerError::TripNotFound(_) | LedgerError::ExpenseNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::NegativeAmount
            | LedgerError::UnknownCategory(_)
            | LedgerError::NotTripParticipant(_)
            | LedgerError::EmptySplits
            | LedgerError::DuplicateSplitUser(_)
            | LedgerError::SplitMismatch { .. }
            | LedgerError::InvalidPercentage(_)
            | LedgerError::EmptyUpdate => StatusCode::BAD_REQUEST,
            LedgerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
