use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::dashboard::DashboardResponse, state::SharedState};

#[utoipa::path(
    get,
    path = "/state",
    tag = "session",
    responses((status = 200, description = "Full organizer snapshot", body = DashboardResponse))
)]
/// Return the full organizer snapshot: profile, session, counts, settings.
pub async fn dashboard(State(state): State<SharedState>) -> Json<DashboardResponse> {
    Json(DashboardResponse::from(&state.document()))
}

/// Configure the dashboard route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/state", get(dashboard))
}
