//! Balance routes.

use axum::{Json, Router, extract::State, routing::get};

use duoledger_core::balance::{BalancesByType, PeriodBalance};
use duoledger_shared::AppError;

use crate::{AppState, error::ApiResult, extractors::MonthQuery};

/// Creates the balance routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/balance/by-type", get(get_balances_by_type))
        .route("/balance/stored", get(get_stored_balance))
}

/// Computes the unified balance for the month and caches it.
async fn get_balance(
    State(state): State<AppState>,
    MonthQuery(month): MonthQuery,
) -> ApiResult<Json<PeriodBalance>> {
    Ok(Json(state.ledger.balance_for_month(month).await?))
}

/// All-time simple balance and the month's installment balance, kept apart.
async fn get_balances_by_type(
    State(state): State<AppState>,
    MonthQuery(month): MonthQuery,
) -> ApiResult<Json<BalancesByType>> {
    Ok(Json(state.ledger.balances_by_type(month).await?))
}

/// The balance last cached for the month.
async fn get_stored_balance(
    State(state): State<AppState>,
    MonthQuery(month): MonthQuery,
) -> ApiResult<Json<PeriodBalance>> {
    state
        .ledger
        .stored_balance(month)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No stored balance for {month}")).into())
}
