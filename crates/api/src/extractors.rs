//! Request extractors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use duoledger_shared::AppError;
use duoledger_shared::types::YearMonth;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct MonthParams {
    month: Option<String>,
}

/// The required `?month=YYYY-MM` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthQuery(pub YearMonth);

impl<S> FromRequestParts<S> for MonthQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<MonthParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let raw = params
            .month
            .ok_or_else(|| AppError::Validation("Query parameter 'month' is required".into()))?;

        raw.parse()
            .map(MonthQuery)
            .map_err(|e| AppError::Validation(format!("Invalid month '{raw}': {e}")).into())
    }
}
