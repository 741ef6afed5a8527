use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use axum_valid::Valid;

use crate::{
    dto::claim::{ClaimRequest, ClaimResponse},
    error::AppError,
    services::claim_service,
    state::SharedState,
};

/// Routes for the attendee claim flow.
pub fn router() -> Router<SharedState> {
    Router::new().route("/claim/{session_id}", post(claim))
}

#[utoipa::path(
    post,
    path = "/claim/{session_id}",
    tag = "claim",
    params(("session_id" = String, Path, description = "Session id from the scanned QR link")),
    request_body = ClaimRequest,
    responses(
        (status = 200, description = "Claim outcome, issued or rejected", body = ClaimResponse),
        (status = 400, description = "Malformed session id or device key")
    )
)]
/// Attempt to claim one code for this device.
pub async fn claim(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Valid(Json(payload)): Valid<Json<ClaimRequest>>,
) -> Result<Json<ClaimResponse>, AppError> {
    let response = claim_service::claim(&state, &session_id, &payload.device_key).await?;
    Ok(Json(response))
}
