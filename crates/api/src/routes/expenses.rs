//! Expense routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use duoledger_core::expense::{
    CreateInstallmentPurchaseInput, CreateSimpleExpenseInput, InstallmentPurchase,
    MonthlyExpenses, MonthlyInstallment, SimpleExpense,
};
use duoledger_shared::AppError;
use duoledger_shared::types::{InstallmentPurchaseId, SimpleExpenseId};

use crate::{AppState, error::ApiResult, extractors::MonthQuery, middleware::AuthUser};

/// Creates the expense routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_month_expenses))
        .route("/expenses/all", get(list_all_simple_expenses))
        .route("/expenses/simple", post(create_simple_expense))
        .route(
            "/expenses/installments",
            get(list_installment_purchases).post(create_installment_purchase),
        )
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for a recorded simple expense.
#[derive(Debug, Serialize)]
pub struct SimpleExpenseCreated {
    /// Always true on success.
    pub success: bool,
    /// Assigned id.
    pub id: SimpleExpenseId,
}

/// Response for a recorded installment purchase.
#[derive(Debug, Serialize)]
pub struct InstallmentPurchaseCreated {
    /// Always true on success.
    pub success: bool,
    /// Assigned id.
    pub id: InstallmentPurchaseId,
    /// Derived amount of each installment.
    pub per_installment_amount: Decimal,
    /// The generated monthly schedule.
    pub installments: Vec<MonthlyInstallment>,
}

/// Response listing simple expenses.
#[derive(Debug, Serialize)]
pub struct SimpleExpenseList {
    /// Every simple expense, oldest first.
    pub expenses: Vec<SimpleExpense>,
}

/// Response listing installment purchases.
#[derive(Debug, Serialize)]
pub struct InstallmentPurchaseList {
    /// Every purchase, oldest first.
    pub purchases: Vec<InstallmentPurchase>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_simple_expense(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateSimpleExpenseInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SimpleExpenseCreated>)> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let expense = state.ledger.record_simple_expense(input).await?;
    info!(user = %user.email(), expense_id = %expense.id, "Simple expense created");

    Ok((
        StatusCode::CREATED,
        Json(SimpleExpenseCreated {
            success: true,
            id: expense.id,
        }),
    ))
}

async fn create_installment_purchase(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateInstallmentPurchaseInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<InstallmentPurchaseCreated>)> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let (purchase, installments) = state.ledger.record_installment_purchase(input).await?;
    info!(user = %user.email(), purchase_id = %purchase.id, "Installment purchase created");

    Ok((
        StatusCode::CREATED,
        Json(InstallmentPurchaseCreated {
            success: true,
            id: purchase.id,
            per_installment_amount: purchase.per_installment_amount,
            installments,
        }),
    ))
}

async fn list_month_expenses(
    State(state): State<AppState>,
    MonthQuery(month): MonthQuery,
) -> ApiResult<Json<MonthlyExpenses>> {
    Ok(Json(state.ledger.expenses_for_month(month).await?))
}

async fn list_all_simple_expenses(
    State(state): State<AppState>,
) -> ApiResult<Json<SimpleExpenseList>> {
    let expenses = state.ledger.all_simple_expenses().await?;
    Ok(Json(SimpleExpenseList { expenses }))
}

async fn list_installment_purchases(
    State(state): State<AppState>,
) -> ApiResult<Json<InstallmentPurchaseList>> {
    let purchases = state.ledger.installment_purchases().await?;
    Ok(Json(InstallmentPurchaseList { purchases }))
}
