//! The atomic "claim one code" transform.
//!
//! One call has exactly one observable effect: either one code leaves the
//! unused pool (or a synthetic test code is issued) or the caller gets a
//! single typed rejection. There are no internal retries.

use rand::Rng;
use rand::distr::Alphanumeric;
use time::OffsetDateTime;

use crate::dao::models::{AppDocument, ClaimLogEntry, CodeStatus};

/// Outcome of a claim attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// A code was dispensed.
    Issued {
        /// The dispensed code text.
        code: String,
    },
    /// The claim was refused; nothing was dispensed.
    Rejected(ClaimRejection),
}

/// Why a claim was refused. Expected, user-visible outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRejection {
    /// No session is open.
    Inactive,
    /// The session already dispensed its cap (or was ended).
    Cap,
    /// The organizer paused dispensing.
    Paused,
    /// The unused pool ran dry while the session counters still had room.
    Empty,
}

/// Attempt to dispense one code from the running session.
///
/// Checks run in strict priority order, first match wins: inactive, then
/// cap/ended, then paused, then empty pool. The cap and empty rejections mark
/// the session ended in the same transform so the next caller sees `Cap`
/// rather than a stale live state.
///
/// On success the *head* of the unused pool is dispensed. FIFO order is
/// load-bearing: codes go out in upload order, never randomly, so exhaustion
/// stays predictable for the organizer. Test mode issues a disposable
/// `TEST-` code without touching inventory or the audit log, but still moves
/// the session counters.
pub fn claim_one(doc: &mut AppDocument, now: OffsetDateTime) -> ClaimOutcome {
    if !doc.session.active {
        return ClaimOutcome::Rejected(ClaimRejection::Inactive);
    }
    if doc.session.ended || doc.session.claimed >= doc.session.cap {
        doc.session.ended = true;
        return ClaimOutcome::Rejected(ClaimRejection::Cap);
    }
    if doc.session.paused {
        return ClaimOutcome::Rejected(ClaimRejection::Paused);
    }
    if doc.inventory.unused.is_empty() {
        // Cap and inventory drifted apart (test-mode residue, manual
        // deletes); end the session instead of overselling.
        doc.session.ended = true;
        return ClaimOutcome::Rejected(ClaimRejection::Empty);
    }

    let code = if doc.settings.test_mode {
        test_code()
    } else {
        let mut record = doc.inventory.unused.remove(0);
        record.status = CodeStatus::Redeemed;
        record.claimed_at = Some(now);
        let code = record.text.clone();
        doc.inventory.redeemed.push(record);
        doc.inventory.redeemed_log.insert(
            0,
            ClaimLogEntry {
                code: code.clone(),
                session_id: doc.session.id.clone(),
                claimed_at: now,
            },
        );
        code
    };

    doc.session.claimed += 1;
    if doc.session.claimed >= doc.session.cap {
        doc.session.ended = true;
    }

    ClaimOutcome::Issued { code }
}

/// Disposable code handed out while rehearsing in test mode.
fn test_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|byte| (byte as char).to_ascii_uppercase())
        .collect();
    format!("TEST-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{inventory, session};

    fn now() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH
    }

    fn live_doc(codes: &[&str]) -> AppDocument {
        let mut doc = AppDocument::default();
        let lines: Vec<String> = codes.iter().map(|s| s.to_string()).collect();
        inventory::add_codes(&mut doc, &lines, now());
        session::start_session(&mut doc, "sess01".into());
        doc
    }

    #[test]
    fn claim_without_session_is_inactive() {
        let mut doc = AppDocument::default();
        assert_eq!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Rejected(ClaimRejection::Inactive)
        );
    }

    #[test]
    fn codes_are_dispensed_fifo() {
        let mut doc = live_doc(&["a1", "b2", "c3"]);
        for expected in ["A1", "B2", "C3"] {
            assert_eq!(
                claim_one(&mut doc, now()),
                ClaimOutcome::Issued {
                    code: expected.into()
                }
            );
        }
    }

    #[test]
    fn full_session_scenario_with_default_cap() {
        // unused=["A1","A2"], no default cap => cap 2; two claims succeed in
        // order, the third sees the cap.
        let mut doc = live_doc(&["A1", "A2"]);
        assert_eq!(doc.session.cap, 2);

        assert_eq!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Issued { code: "A1".into() }
        );
        assert_eq!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Issued { code: "A2".into() }
        );
        assert!(doc.inventory.unused.is_empty());
        assert_eq!(doc.inventory.redeemed.len(), 2);
        assert!(doc.session.ended);

        assert_eq!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Rejected(ClaimRejection::Cap)
        );
        assert_eq!(doc.session.claimed, 2);
    }

    #[test]
    fn claimed_never_exceeds_cap() {
        let mut doc = live_doc(&["a", "b", "c"]);
        session::set_session_cap(&mut doc, 2).unwrap();

        for _ in 0..5 {
            claim_one(&mut doc, now());
            assert!(doc.session.claimed <= doc.session.cap);
        }
        assert_eq!(doc.session.claimed, 2);
        assert!(doc.session.ended);
    }

    #[test]
    fn ended_is_set_in_the_same_transform_as_the_final_claim() {
        let mut doc = live_doc(&["only"]);
        assert!(matches!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Issued { .. }
        ));
        // The *next* caller must see Cap, not a stale live state.
        assert!(doc.session.ended);
    }

    #[test]
    fn pause_blocks_claims_without_moving_counters() {
        let mut doc = live_doc(&["a", "b"]);
        session::toggle_pause(&mut doc).unwrap();

        assert_eq!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Rejected(ClaimRejection::Paused)
        );
        assert_eq!(doc.session.claimed, 0);
        assert_eq!(doc.inventory.unused.len(), 2);
        assert!(!doc.session.ended);
    }

    #[test]
    fn empty_pool_rejects_and_ends_session() {
        let mut doc = live_doc(&["a", "b"]);
        // Force cap/inventory desync: organizer deletes codes mid-session.
        let ids: Vec<_> = doc.inventory.unused.iter().map(|r| r.id).collect();
        for id in ids {
            inventory::delete_code(&mut doc, id);
        }

        assert_eq!(
            claim_one(&mut doc, now()),
            ClaimOutcome::Rejected(ClaimRejection::Empty)
        );
        assert!(doc.session.ended);
    }

    #[test]
    fn successful_claim_moves_record_and_prepends_log() {
        let mut doc = live_doc(&["a1", "b2"]);
        claim_one(&mut doc, now());
        claim_one(&mut doc, now());

        assert_eq!(doc.inventory.redeemed[0].text, "A1");
        assert_eq!(doc.inventory.redeemed[0].status, CodeStatus::Redeemed);
        assert!(doc.inventory.redeemed[0].claimed_at.is_some());
        // Newest first.
        assert_eq!(doc.inventory.redeemed_log[0].code, "B2");
        assert_eq!(doc.inventory.redeemed_log[1].code, "A1");
        assert_eq!(doc.inventory.redeemed_log[0].session_id, "sess01");
    }

    #[test]
    fn test_mode_issues_synthetic_codes_without_touching_inventory() {
        let mut doc = live_doc(&["real1", "real2"]);
        doc.settings.test_mode = true;

        let ClaimOutcome::Issued { code } = claim_one(&mut doc, now()) else {
            panic!("test-mode claim should succeed");
        };
        assert!(code.starts_with("TEST-"));
        assert_eq!(doc.inventory.unused.len(), 2);
        assert!(doc.inventory.redeemed_log.is_empty());
        assert_eq!(doc.session.claimed, 1);
    }
}
