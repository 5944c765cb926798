use utoipa::OpenApi;

use crate::{
    api::models::{CreateExpenseRequest, DeleteExpenseResponse, ErrorResponse},
    core::{
        balance::TripBalances,
        ledger::{ExpenseDetail, SplitDetail},
        models::{Category, Debt, Expense, ExpensePatch, ExpenseSplit, ParticipantBalance,
            SplitInput, TripProfile, UserIdentity},
        summary::{CategoryTotal, TripSummary},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_expense,
        super::handlers::get_expense,
        super::handlers::list_expenses,
        super::handlers::update_expense,
        super::handlers::delete_expense,
        super::handlers::get_summary,
        super::handlers::get_balances
    ),
    components(schemas(
        CreateExpenseRequest,
        ExpensePatch,
        SplitInput,
        DeleteExpenseResponse,
        ErrorResponse,
        Category,
        Expense,
        ExpenseSplit,
        ExpenseDetail,
        SplitDetail,
        TripProfile,
        UserIdentity,
        TripSummary,
        CategoryTotal,
        TripBalances,
        ParticipantBalance,
        Debt
    )),
    info(
        title = "Tripledger API",
        description = "Shared-expense ledger and debt settlement for collaborative trips",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
