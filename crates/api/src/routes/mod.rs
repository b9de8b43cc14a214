//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth_middleware};

pub mod balances;
pub mod expenses;
pub mod system;

/// Creates the API router: public routes plus the ledger routes behind the
/// auth middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(system::protected_routes())
        .merge(expenses::routes())
        .merge(balances::routes())
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(system::public_routes())
        .merge(protected_routes)
}
