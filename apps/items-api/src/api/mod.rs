//! API routes module

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes, mounted at the root by `create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health::router(state.clone()))
}
