//! Health check service.

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the document can still be persisted.
///
/// Loading never fails, so the only interesting signal is the save path: a
/// full disk or revoked permissions mean mutations would be lost.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let session_active = state.document().session.active;

    match state.probe().await {
        Ok(()) => HealthResponse::ok(session_active),
        Err(err) => {
            warn!(error = %err, "state document is not writable");
            HealthResponse::degraded(session_active)
        }
    }
}
