//! Pure transforms over the code pool.
//!
//! Every function here takes the loaded document, mutates it in place, and
//! returns; the service layer brackets each call with a full load and a full
//! save so one HTTP request is one document transform.

use std::collections::HashSet;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::dao::models::{AppDocument, CodeRecord, CodeStatus};

/// Counts of the two code pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    /// Codes still available.
    pub unused: usize,
    /// Codes already dispensed.
    pub redeemed: usize,
}

/// Result of an [`add_codes`] batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddReport {
    /// Lines that survived normalization and dedup and were appended.
    pub added: usize,
    /// Non-empty lines dropped as duplicates.
    pub skipped: usize,
}

/// Canonicalize one pasted or imported line into a code.
///
/// Takes the first CSV cell, strips stray quotes, trims, and upper-cases.
/// Returns `None` for lines with no content left.
pub fn normalize_line(raw: &str) -> Option<String> {
    let first = raw.split(',').next().unwrap_or("");
    let cleaned = first.replace('"', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Append a batch of raw lines to the unused pool.
///
/// Duplicates are dropped silently: against existing unused and redeemed
/// records (case-insensitive) and against earlier lines in the same batch.
/// Re-pasting a list is an expected flow, not an error. Survivors keep their
/// input order and get fresh ids with `now` as the upload timestamp.
pub fn add_codes(doc: &mut AppDocument, lines: &[String], now: OffsetDateTime) -> AddReport {
    let mut seen: HashSet<String> = doc
        .inventory
        .unused
        .iter()
        .chain(doc.inventory.redeemed.iter())
        .map(|record| record.text.to_uppercase())
        .collect();

    let mut report = AddReport {
        added: 0,
        skipped: 0,
    };

    for line in lines {
        let Some(text) = normalize_line(line) else {
            continue;
        };
        if !seen.insert(text.clone()) {
            report.skipped += 1;
            continue;
        }
        doc.inventory.unused.push(CodeRecord {
            id: Uuid::new_v4(),
            text,
            status: CodeStatus::Unused,
            uploaded_at: now,
            claimed_at: None,
        });
        report.added += 1;
    }

    report
}

/// Remove a record from either pool by id. No-op when the id is unknown.
pub fn delete_code(doc: &mut AppDocument, id: Uuid) -> bool {
    let before = doc.inventory.unused.len() + doc.inventory.redeemed.len();
    doc.inventory.unused.retain(|record| record.id != id);
    doc.inventory.redeemed.retain(|record| record.id != id);
    before != doc.inventory.unused.len() + doc.inventory.redeemed.len()
}

/// Overwrite a record's text with the re-normalized replacement.
///
/// Deliberately does not re-check uniqueness against the rest of the pool;
/// an edit that collides with another record is kept as typed. No-op when
/// the id is unknown or the replacement normalizes to nothing.
pub fn update_code_text(doc: &mut AppDocument, id: Uuid, new_text: &str) -> bool {
    let Some(text) = normalize_line(new_text) else {
        return false;
    };
    let record = doc
        .inventory
        .unused
        .iter_mut()
        .chain(doc.inventory.redeemed.iter_mut())
        .find(|record| record.id == id);
    match record {
        Some(record) => {
            record.text = text;
            true
        }
        None => false,
    }
}

/// Move a redeemed record back to the tail of the unused pool.
pub fn unredeem_code(doc: &mut AppDocument, id: Uuid) -> bool {
    let Some(index) = doc
        .inventory
        .redeemed
        .iter()
        .position(|record| record.id == id)
    else {
        return false;
    };
    let mut record = doc.inventory.redeemed.remove(index);
    record.status = CodeStatus::Unused;
    record.claimed_at = None;
    doc.inventory.unused.push(record);
    true
}

/// Unused code texts in insertion order, for file export.
pub fn export_unused(doc: &AppDocument) -> Vec<String> {
    doc.inventory
        .unused
        .iter()
        .map(|record| record.text.clone())
        .collect()
}

/// Pool sizes.
pub fn counts(doc: &AppDocument) -> Counts {
    Counts {
        unused: doc.inventory.unused.len(),
        redeemed: doc.inventory.redeemed.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn now() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH
    }

    #[test]
    fn normalization_takes_first_csv_cell_and_uppercases() {
        assert_eq!(normalize_line("abc123,claimed,extra"), Some("ABC123".into()));
        assert_eq!(normalize_line("  \"xy-9\"  "), Some("XY-9".into()));
        assert_eq!(normalize_line("   "), None);
        assert_eq!(normalize_line(",second"), None);
    }

    #[test]
    fn add_codes_dedups_mixed_case_within_batch() {
        let mut doc = AppDocument::default();
        let report = add_codes(&mut doc, &lines(&["abc", "ABC", "xyz"]), now());

        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(export_unused(&doc), vec!["ABC", "XYZ"]);
    }

    #[test]
    fn add_codes_dedups_against_both_pools() {
        let mut doc = AppDocument::default();
        add_codes(&mut doc, &lines(&["keep", "gone"]), now());
        let id = doc.inventory.unused[1].id;
        // Simulate a redeemed record by moving it over.
        unredeem_test_setup(&mut doc, id);

        let report = add_codes(&mut doc, &lines(&["KEEP", "gone", "new"]), now());
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(export_unused(&doc), vec!["KEEP", "NEW"]);
    }

    fn unredeem_test_setup(doc: &mut AppDocument, id: Uuid) {
        let index = doc
            .inventory
            .unused
            .iter()
            .position(|record| record.id == id)
            .unwrap();
        let mut record = doc.inventory.unused.remove(index);
        record.status = CodeStatus::Redeemed;
        doc.inventory.redeemed.push(record);
    }

    #[test]
    fn add_codes_drops_empty_lines_silently() {
        let mut doc = AppDocument::default();
        let report = add_codes(&mut doc, &lines(&["", "  ", "real"]), now());
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn add_codes_preserves_input_order() {
        let mut doc = AppDocument::default();
        add_codes(&mut doc, &lines(&["b2", "a1", "c3"]), now());
        assert_eq!(export_unused(&doc), vec!["B2", "A1", "C3"]);
    }

    #[test]
    fn delete_code_removes_from_either_pool() {
        let mut doc = AppDocument::default();
        add_codes(&mut doc, &lines(&["one", "two"]), now());
        let id = doc.inventory.unused[0].id;

        assert!(delete_code(&mut doc, id));
        assert_eq!(export_unused(&doc), vec!["TWO"]);
        assert!(!delete_code(&mut doc, id));
    }

    #[test]
    fn update_code_text_renormalizes_without_uniqueness_check() {
        let mut doc = AppDocument::default();
        add_codes(&mut doc, &lines(&["one", "two"]), now());
        let id = doc.inventory.unused[0].id;

        assert!(update_code_text(&mut doc, id, "  two ,rest"));
        // The collision with the existing TWO is kept as typed.
        assert_eq!(export_unused(&doc), vec!["TWO", "TWO"]);
    }

    #[test]
    fn update_code_text_rejects_blank_replacement() {
        let mut doc = AppDocument::default();
        add_codes(&mut doc, &lines(&["one"]), now());
        let id = doc.inventory.unused[0].id;

        assert!(!update_code_text(&mut doc, id, "   "));
        assert_eq!(export_unused(&doc), vec!["ONE"]);
    }

    #[test]
    fn unredeem_moves_record_back_to_unused_tail() {
        let mut doc = AppDocument::default();
        add_codes(&mut doc, &lines(&["one", "two"]), now());
        let id = doc.inventory.unused[0].id;
        unredeem_test_setup(&mut doc, id);
        assert_eq!(counts(&doc).redeemed, 1);

        assert!(unredeem_code(&mut doc, id));
        assert_eq!(export_unused(&doc), vec!["TWO", "ONE"]);
        let record = doc.inventory.unused.last().unwrap();
        assert_eq!(record.status, CodeStatus::Unused);
        assert!(record.claimed_at.is_none());
    }
}
