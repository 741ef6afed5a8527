//! Persisted schema for the single application document.
//!
//! The whole application state is one JSON blob on disk. Every field carries a
//! serde default so documents written by older builds (or hand-edited ones
//! with missing fields) deserialize into a structurally complete value; adding
//! a field here with its default rule is the entire migration story.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Root document holding everything the distributor persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppDocument {
    /// Organizer-facing community profile; opaque to the core logic.
    pub community: CommunityProfile,
    /// Promo code pool split into unused and redeemed records.
    pub inventory: Inventory,
    /// The one distribution session, active or reset.
    pub session: SessionState,
    /// Anti-abuse memory, one guard record per claimant device key.
    ///
    /// Each record is the server-side analogue of what the claimant's browser
    /// would keep locally: claims keyed by session id plus the day key of the
    /// latest one. Devices mint their own keys, so this is advisory only.
    pub player_guards: IndexMap<String, PlayerGuard>,
    /// Organizer-tunable behaviour switches.
    pub settings: Settings,
}

/// Community profile shown to claimants; passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityProfile {
    /// Display name of the community.
    pub name: String,
    /// Link to the community's chat/group page.
    pub contact_url: String,
    /// Inline data URL for the community logo.
    pub logo_data_url: String,
    /// Free-form note shown on the claim screen.
    pub note: String,
}

/// The code pool plus the append-only claim audit trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    /// Codes not yet dispensed, in upload order (dispensed head-first).
    pub unused: Vec<CodeRecord>,
    /// Codes already dispensed, in claim order.
    pub redeemed: Vec<CodeRecord>,
    /// Claim audit entries, newest first, never mutated.
    pub redeemed_log: Vec<ClaimLogEntry>,
}

/// Lifecycle state of a single code record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStatus {
    /// Still in the pool, available for dispensing.
    #[default]
    Unused,
    /// Dispensed to a claimant.
    Redeemed,
}

/// One promo code in the pool.
///
/// `text` is canonical (trimmed, upper-cased) and unique case-insensitively
/// across the union of unused and redeemed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRecord {
    /// Stable identifier for edits and deletes.
    pub id: Uuid,
    /// Canonicalized code text.
    pub text: String,
    /// Whether the code has been dispensed.
    #[serde(default)]
    pub status: CodeStatus,
    /// When the code entered the pool.
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: OffsetDateTime,
    /// When the code was dispensed, if it has been.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub claimed_at: Option<OffsetDateTime>,
}

/// Append-only audit record of one successful claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimLogEntry {
    /// The dispensed code text.
    pub code: String,
    /// Session the claim happened in.
    pub session_id: String,
    /// When the claim happened.
    #[serde(with = "time::serde::rfc3339")]
    pub claimed_at: OffsetDateTime,
}

/// State of the (at most one) distribution session.
///
/// Invariants maintained by the session and claim transforms:
/// `claimed <= cap` always, `claimed == cap` implies `ended`, and an
/// inactive session is fully reset (`id` empty, counters zero).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// Caller-supplied opaque session identifier; empty while inactive.
    pub id: String,
    /// Whether a session is currently open.
    pub active: bool,
    /// Whether the session stopped dispensing (cap reached or pool empty).
    pub ended: bool,
    /// Maximum number of codes this session will dispense.
    pub cap: u32,
    /// Codes dispensed so far.
    pub claimed: u32,
    /// Organizer-toggled pacing switch.
    pub paused: bool,
}

/// Anti-abuse bookkeeping for one claimant device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerGuard {
    /// Successful claims from this device, keyed by session id.
    pub claims: IndexMap<String, PlayerClaim>,
    /// Day key (`YYYY-MM-DD`, UTC) of this device's most recent claim.
    pub last_claim_day_key: Option<String>,
}

/// Record of one successful claim from a device, kept for anti-abuse checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerClaim {
    /// Code that was dispensed.
    pub code: String,
    /// When the claim happened.
    #[serde(with = "time::serde::rfc3339")]
    pub claimed_at: OffsetDateTime,
    /// Day key (`YYYY-MM-DD`, UTC) of the claim.
    pub day_key: String,
}

/// Organizer-tunable switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default session cap; unset means "full unused inventory at start".
    pub default_cap: Option<u32>,
    /// Dispense synthetic `TEST-` codes without consuming inventory.
    pub test_mode: bool,
    /// Block a device from claiming more than once per day.
    pub daily_limit_enabled: bool,
    /// Vibrate on claim in the organizer UI; passed through untouched.
    pub haptics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_cap: None,
            test_mode: false,
            daily_limit_enabled: true,
            haptics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_upgrades_with_defaults() {
        let doc: AppDocument =
            serde_json::from_str(r#"{"community":{"name":"Garden Grove"}}"#).unwrap();

        assert_eq!(doc.community.name, "Garden Grove");
        assert!(doc.inventory.unused.is_empty());
        assert!(!doc.session.active);
        assert!(doc.settings.daily_limit_enabled);
        assert!(doc.settings.haptics);
        assert!(doc.settings.default_cap.is_none());
    }

    #[test]
    fn partial_settings_keep_their_defaults() {
        let doc: AppDocument =
            serde_json::from_str(r#"{"settings":{"test_mode":true}}"#).unwrap();

        assert!(doc.settings.test_mode);
        assert!(doc.settings.daily_limit_enabled);
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut doc = AppDocument::default();
        doc.session.active = true;
        doc.session.id = "abc123".into();
        doc.session.cap = 5;
        doc.inventory.unused.push(CodeRecord {
            id: Uuid::new_v4(),
            text: "PROMO1".into(),
            status: CodeStatus::Unused,
            uploaded_at: OffsetDateTime::UNIX_EPOCH,
            claimed_at: None,
        });

        let json = serde_json::to_string(&doc).unwrap();
        let back: AppDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
