//! Session lifecycle transforms.
//!
//! At most one session exists at a time. The flow is
//! `Idle -> Live -> (Paused <-> Live) -> Ended -> Idle`: starting replaces any
//! prior session record, ending resets to the fully inactive state. The cap is
//! computed at start time from the default-cap setting and the inventory as it
//! is *then*, so inventory edits between saving settings and going live are
//! respected.

use thiserror::Error;

use crate::dao::models::{AppDocument, SessionState};
use crate::state::inventory;

/// Rejected session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The operation needs an open session.
    #[error("no session is active")]
    NotActive,
    /// The session has already stopped dispensing.
    #[error("session has already ended")]
    AlreadyEnded,
}

/// Effective cap for a session started right now.
///
/// An unset or zero default means "full unused inventory"; otherwise the
/// default is limited by what the pool actually holds.
pub fn compute_default_cap(doc: &AppDocument) -> u32 {
    let unused = inventory::counts(doc).unused as u32;
    match doc.settings.default_cap {
        None | Some(0) => unused,
        Some(limit) => unused.min(limit),
    }
}

/// Open a session under the given id, replacing any prior session record.
///
/// With an empty pool this degenerates to a cap-zero session that is already
/// ended; callers are expected to block that case up front, this path is only
/// a safety net.
pub fn start_session(doc: &mut AppDocument, session_id: String) -> &SessionState {
    let cap = compute_default_cap(doc);
    doc.session = SessionState {
        id: session_id,
        active: true,
        ended: cap == 0,
        cap,
        claimed: 0,
        paused: false,
    };
    &doc.session
}

/// Close the session, resetting it to the inactive state.
///
/// Guard history under old session ids is kept; ids are fresh per session so
/// the residue is inert.
pub fn end_session(doc: &mut AppDocument) {
    doc.session = SessionState::default();
}

/// Flip the pacing switch. Returns the new paused flag.
pub fn toggle_pause(doc: &mut AppDocument) -> Result<bool, SessionError> {
    if !doc.session.active {
        return Err(SessionError::NotActive);
    }
    if doc.session.ended {
        return Err(SessionError::AlreadyEnded);
    }
    doc.session.paused = !doc.session.paused;
    Ok(doc.session.paused)
}

/// Edit the cap of the running session; returns the cap actually applied.
///
/// The new cap is clamped up to the already-dispensed count so a claimant who
/// succeeded never retroactively fails; tightening to (or below) `claimed`
/// ends the session. Raising the cap above `claimed` reopens dispensing, which
/// is how a capped-out session is extended mid-event.
pub fn set_session_cap(doc: &mut AppDocument, new_cap: u32) -> Result<u32, SessionError> {
    if !doc.session.active {
        return Err(SessionError::NotActive);
    }
    let cap = new_cap.max(doc.session.claimed);
    doc.session.cap = cap;
    doc.session.ended = doc.session.claimed >= cap;
    Ok(cap)
}

/// Update the default cap setting; blank and zero both mean unset.
pub fn set_default_cap(doc: &mut AppDocument, value: Option<u32>) {
    doc.settings.default_cap = match value {
        None | Some(0) => None,
        Some(limit) => Some(limit),
    };
}
