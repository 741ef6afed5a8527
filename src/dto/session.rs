//! DTOs for session control and the live view.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{AppDocument, SessionState, Settings},
    dto::{common::CountsResponse, validation::validate_session_id},
    state::inventory,
};

/// Request to open a new session.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct StartSessionRequest {
    /// Caller-supplied opaque session id; generated server-side when omitted.
    #[validate(custom(function = "validate_session_id"))]
    pub session_id: Option<String>,
}

/// Request to edit the cap of the running session.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SessionCapRequest {
    /// New cap; a blank value counts as zero and ends the session.
    pub cap: Option<u32>,
}

/// Partial settings update; absent fields keep their current value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateSettingsRequest {
    /// New default cap; zero clears it back to "full inventory".
    pub default_cap: Option<u32>,
    /// Toggle synthetic test codes.
    pub test_mode: Option<bool>,
    /// Toggle the one-claim-per-day guard.
    pub daily_limit_enabled: Option<bool>,
    /// Toggle claim haptics in the organizer UI.
    pub haptics: Option<bool>,
}

/// Current settings as shown to the organizer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SettingsDto {
    /// Default session cap; absent means "full unused inventory".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cap: Option<u32>,
    /// Whether synthetic test codes are dispensed.
    pub test_mode: bool,
    /// Whether the one-claim-per-day guard is on.
    pub daily_limit_enabled: bool,
    /// Whether the organizer UI vibrates on claims.
    pub haptics: bool,
}

impl From<&Settings> for SettingsDto {
    fn from(value: &Settings) -> Self {
        Self {
            default_cap: value.default_cap,
            test_mode: value.test_mode,
            daily_limit_enabled: value.daily_limit_enabled,
            haptics: value.haptics,
        }
    }
}

/// Projection of the session record for organizer screens.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionSnapshot {
    /// Session identifier; empty while inactive.
    pub id: String,
    /// Whether a session is open.
    pub active: bool,
    /// Whether dispensing has stopped.
    pub ended: bool,
    /// Session cap.
    pub cap: u32,
    /// Codes dispensed so far.
    pub claimed: u32,
    /// Whether dispensing is paused.
    pub paused: bool,
    /// Codes left before the cap.
    pub remaining: u32,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(value: &SessionState) -> Self {
        Self {
            id: value.id.clone(),
            active: value.active,
            ended: value.ended,
            cap: value.cap,
            claimed: value.claimed,
            paused: value.paused,
            remaining: value.cap.saturating_sub(value.claimed),
        }
    }
}

/// Payload pushed to the organizer's live SSE stream after every mutation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LiveSnapshot {
    /// Current session projection.
    pub session: SessionSnapshot,
    /// Current pool sizes.
    pub counts: CountsResponse,
}

impl LiveSnapshot {
    /// Project the live view out of the full document.
    pub fn of(doc: &AppDocument) -> Self {
        Self {
            session: SessionSnapshot::from(&doc.session),
            counts: inventory::counts(doc).into(),
        }
    }
}
