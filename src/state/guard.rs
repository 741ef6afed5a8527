//! Per-device anti-abuse bookkeeping.
//!
//! Each claimant device mints an opaque key and keeps it in its own storage;
//! the document holds one guard record per key, mirroring what the device
//! would remember about itself. The scheme is advisory only: an attendee with
//! two devices gets two codes, and no stronger identity is attempted here.

use time::{OffsetDateTime, macros::format_description};

use crate::dao::models::{AppDocument, PlayerClaim};

/// Why a new claim is blocked by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A claim was already recorded today and the daily limit is on.
    Day,
    /// A claim was already recorded for this session.
    Session,
}

/// Day key (`YYYY-MM-DD`, UTC) used for the daily limit.
pub fn day_key(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    at.date()
        .format(&format)
        .unwrap_or_else(|_| at.date().to_string())
}

/// Check whether the device behind `device_key` may claim in this session.
///
/// The daily limit (on by default) wins over the per-session check: one
/// recorded claim today blocks that device for the rest of the day, whatever
/// the session.
pub fn already_claimed(
    doc: &AppDocument,
    device_key: &str,
    session_id: &str,
    today: &str,
) -> Option<BlockReason> {
    let record = doc.player_guards.get(device_key)?;
    if doc.settings.daily_limit_enabled && record.last_claim_day_key.as_deref() == Some(today) {
        return Some(BlockReason::Day);
    }
    if record.claims.contains_key(session_id) {
        return Some(BlockReason::Session);
    }
    None
}

/// Record a successful claim against the device's guard record.
pub fn record_claim(
    doc: &mut AppDocument,
    device_key: &str,
    session_id: &str,
    code: &str,
    now: OffsetDateTime,
) {
    let key = day_key(now);
    let record = doc.player_guards.entry(device_key.to_string()).or_default();
    record.claims.insert(
        session_id.to_string(),
        PlayerClaim {
            code: code.to_string(),
            claimed_at: now,
            day_key: key.clone(),
        },
    );
    record.last_claim_day_key = Some(key);
}
