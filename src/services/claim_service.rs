//! The attendee claim flow.
//!
//! One call runs the full pipeline inside a single document transform:
//! session check, anti-abuse guard, claim engine, guard record. Because the
//! whole sequence happens between one load and one save behind the state's
//! write gate, two racing claim requests can never both take the last code.

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{
    dto::{
        claim::{ClaimResponse, RejectReason},
        community::CommunityDto,
        validation::validate_session_id,
    },
    error::ServiceError,
    state::{SharedState, claim, guard},
};

/// Attempt to claim one code for the device that scanned `session_id`.
///
/// Rejections come back as regular payloads, never as errors; only a
/// malformed id or a storage failure produces an error.
pub async fn claim(
    state: &SharedState,
    session_id: &str,
    device_key: &str,
) -> Result<ClaimResponse, ServiceError> {
    validate_session_id(session_id)
        .map_err(|_| ServiceError::InvalidInput("malformed session id".into()))?;

    let now = OffsetDateTime::now_utc();
    let today = guard::day_key(now);
    let session_id = session_id.to_string();
    let device_key = device_key.to_string();

    let response = state
        .mutate(move |doc| {
            let community = CommunityDto::from(&doc.community);

            // A stale QR link from an older session reads as "no session".
            if !doc.session.active || doc.session.id != session_id {
                return ClaimResponse::rejected(RejectReason::Inactive, community);
            }

            if let Some(block) = guard::already_claimed(doc, &device_key, &session_id, &today) {
                debug!(%session_id, reason = ?block, "claim blocked by guard");
                return ClaimResponse::rejected(block, community);
            }

            match claim::claim_one(doc, now) {
                claim::ClaimOutcome::Issued { code } => {
                    guard::record_claim(doc, &device_key, &session_id, &code, now);
                    info!(
                        %session_id,
                        claimed = doc.session.claimed,
                        cap = doc.session.cap,
                        "code dispensed"
                    );
                    ClaimResponse::issued(code, community)
                }
                claim::ClaimOutcome::Rejected(reason) => {
                    debug!(%session_id, reason = ?reason, "claim rejected");
                    ClaimResponse::rejected(reason, community)
                }
            }
        })
        .await?;

    Ok(response)
}
