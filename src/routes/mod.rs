use axum::Router;

use crate::state::SharedState;

pub mod claim;
pub mod dashboard;
pub mod docs;
pub mod health;
pub mod inventory;
pub mod session;
pub mod settings;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(dashboard::router())
        .merge(inventory::router())
        .merge(session::router())
        .merge(claim::router())
        .merge(settings::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
