use crate::{
    api::models::*,
    core::{
        balance::TripBalances,
        errors::LedgerError,
        ledger::{ExpenseDetail, LedgerService},
        models::{Expense, ExpenseFilter, ExpenseKind, ExpensePatch, NewExpense},
        summary::TripSummary,
    },
    infrastructure::{
        directory::in_memory::InMemoryDirectory, storage::in_memory::InMemoryExpenseStore,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

pub type AppService = LedgerService<InMemoryExpenseStore, InMemoryDirectory, InMemoryDirectory>;

// Define API routes
pub fn routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route(
            "/trips/{trip_id}/expenses",
            post(create_expense).get(list_expenses),
        )
        .route(
            "/expenses/{expense_id}",
            get(get_expense)
                .patch(update_expense)
                .delete(delete_expense),
        )
        .route("/trips/{trip_id}/summary", get(get_summary))
        .route("/trips/{trip_id}/balances", get(get_balances))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/trips/{trip_id}/expenses",
    request_body = CreateExpenseRequest,
    params(
        ("trip_id" = String, Path, description = "ID of the trip")
    ),
    responses(
        (status = 201, description = "Expense recorded with its splits", body = Expense),
        (status = 400, description = "Invalid amount, category or splits", body = ErrorResponse),
        (status = 404, description = "Trip not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_expense(
    State(service): State<Arc<AppService>>,
    Path(trip_id): Path<String>,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = service
        .create_expense(NewExpense {
            trip_id,
            payer_id: req.payer_id,
            amount: req.amount,
            currency: req.currency,
            kind: req.category,
            description: req.description,
            expense_date: req.expense_date,
            activity_id: req.activity_id,
            splits: req.splits,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 200, description = "Expense with payer and split identities", body = ExpenseDetail),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_expense(
    State(service): State<Arc<AppService>>,
    Path(expense_id): Path<String>,
) -> Result<Json<ExpenseDetail>, ApiError> {
    let detail = service
        .get_expense(&expense_id)
        .await?
        .ok_or(LedgerError::ExpenseNotFound(expense_id))?;
    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/trips/{trip_id}/expenses",
    params(
        ("trip_id" = String, Path, description = "ID of the trip"),
        ("category" = Option<String>, Query, description = "Only expenses of this category"),
        ("start_date" = Option<String>, Query, description = "Earliest expense date (inclusive)"),
        ("end_date" = Option<String>, Query, description = "Latest expense date (inclusive)")
    ),
    responses(
        (status = 200, description = "Matching expenses, newest first", body = Vec<Expense>),
        (status = 400, description = "Unknown category", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_expenses(
    State(service): State<Arc<AppService>>,
    Path(trip_id): Path<String>,
    Query(query): Query<ListExpensesQuery>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let kind = query
        .category
        .as_deref()
        .map(|raw| raw.parse::<ExpenseKind>())
        .transpose()?;
    let filter = ExpenseFilter {
        kind,
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let expenses = service.list_expenses(&trip_id, &filter).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    patch,
    path = "/expenses/{expense_id}",
    request_body = ExpensePatch,
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 200, description = "Expense updated", body = Expense),
        (status = 400, description = "Empty or invalid update", body = ErrorResponse),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn update_expense(
    State(service): State<Arc<AppService>>,
    Path(expense_id): Path<String>,
    Json(patch): Json<ExpensePatch>,
) -> Result<Json<Expense>, ApiError> {
    let expense = service.update_expense(&expense_id, patch).await?;
    Ok(Json(expense))
}

#[utoipa::path(
    delete,
    path = "/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 200, description = "Whether an expense was deleted", body = DeleteExpenseResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_expense(
    State(service): State<Arc<AppService>>,
    Path(expense_id): Path<String>,
) -> Result<Json<DeleteExpenseResponse>, ApiError> {
    let deleted = service.delete_expense(&expense_id).await?;
    Ok(Json(DeleteExpenseResponse { deleted }))
}

#[utoipa::path(
    get,
    path = "/trips/{trip_id}/summary",
    params(
        ("trip_id" = String, Path, description = "ID of the trip")
    ),
    responses(
        (status = 200, description = "Spend-vs-budget summary, settlements excluded", body = TripSummary),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_summary(
    State(service): State<Arc<AppService>>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripSummary>, ApiError> {
    let summary = service.get_summary(&trip_id).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/trips/{trip_id}/balances",
    params(
        ("trip_id" = String, Path, description = "ID of the trip")
    ),
    responses(
        (status = 200, description = "Participant net positions and simplified debts", body = TripBalances),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_balances(
    State(service): State<Arc<AppService>>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripBalances>, ApiError> {
    let balances = service.calculate_balances(&trip_id).await?;
    Ok(Json(balances))
}
