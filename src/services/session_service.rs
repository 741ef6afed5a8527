//! Session lifecycle orchestration.

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::info;

use crate::{
    dto::session::{SessionCapRequest, SessionSnapshot, StartSessionRequest},
    error::ServiceError,
    state::{SharedState, inventory, session},
};

/// Length of server-generated session ids, matching the QR link tokens.
const SESSION_ID_LENGTH: usize = 10;

/// Open a new session, replacing any previous one.
///
/// Starting with an empty pool is blocked here with a conflict; the core
/// transform would only produce a degenerate already-ended session, so this
/// is the primary guard and the core's tolerance is the safety net.
pub async fn start_session(
    state: &SharedState,
    request: StartSessionRequest,
) -> Result<SessionSnapshot, ServiceError> {
    let session_id = request.session_id.unwrap_or_else(new_session_id);

    let snapshot = state
        .mutate(|doc| {
            if inventory::counts(doc).unused == 0 {
                return Err(ServiceError::InvalidState(
                    "cannot start a session with an empty code pool".into(),
                ));
            }
            Ok(SessionSnapshot::from(session::start_session(
                doc,
                session_id.clone(),
            )))
        })
        .await??;

    info!(
        session_id = %snapshot.id,
        cap = snapshot.cap,
        "session started"
    );
    Ok(snapshot)
}

/// Close the session, resetting it to the inactive state.
pub async fn end_session(state: &SharedState) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = state
        .mutate(|doc| {
            session::end_session(doc);
            SessionSnapshot::from(&doc.session)
        })
        .await?;

    info!("session ended");
    Ok(snapshot)
}

/// Flip the pacing switch of the running session.
pub async fn toggle_pause(state: &SharedState) -> Result<SessionSnapshot, ServiceError> {
    let snapshot = state
        .mutate(|doc| {
            session::toggle_pause(doc)?;
            Ok::<_, ServiceError>(SessionSnapshot::from(&doc.session))
        })
        .await??;

    info!(paused = snapshot.paused, "session pause toggled");
    Ok(snapshot)
}

/// Edit the cap of the running session. A blank cap counts as zero, which
/// clamps up to the dispensed count and ends the session.
pub async fn set_session_cap(
    state: &SharedState,
    request: SessionCapRequest,
) -> Result<SessionSnapshot, ServiceError> {
    let requested = request.cap.unwrap_or(0);

    let snapshot = state
        .mutate(|doc| {
            let applied = session::set_session_cap(doc, requested)?;
            Ok::<_, ServiceError>((applied, SessionSnapshot::from(&doc.session)))
        })
        .await??;

    let (applied, snapshot) = snapshot;
    info!(requested, applied, "session cap edited");
    Ok(snapshot)
}

/// Short opaque token for a new session, baked into the claim QR link.
fn new_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(|byte| (byte as char).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validation::validate_session_id;

    #[test]
    fn generated_ids_pass_their_own_validation() {
        for _ in 0..32 {
            let id = new_session_id();
            assert_eq!(id.len(), SESSION_ID_LENGTH);
            assert!(validate_session_id(&id).is_ok());
        }
    }
}
