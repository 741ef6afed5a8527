//! Code pool operations: each one is a single load-transform-save pass.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dto::{
        common::CountsResponse,
        inventory::{
            AddCodesRequest, AddCodesResponse, ClaimLogResponse, CodeSummary, InventoryResponse,
            UpdateCodeRequest,
        },
    },
    error::ServiceError,
    state::{SharedState, inventory},
};

/// Add a pasted or imported batch of lines to the unused pool.
pub async fn add_codes(
    state: &SharedState,
    request: AddCodesRequest,
) -> Result<AddCodesResponse, ServiceError> {
    let now = OffsetDateTime::now_utc();
    let (report, counts) = state
        .mutate(|doc| {
            let report = inventory::add_codes(doc, &request.lines, now);
            (report, inventory::counts(doc))
        })
        .await?;

    info!(
        added = report.added,
        skipped = report.skipped,
        "processed code batch"
    );

    Ok(AddCodesResponse {
        added: report.added,
        skipped: report.skipped,
        counts: counts.into(),
    })
}

/// List both pools for the organizer's management screen.
pub fn list(state: &SharedState) -> InventoryResponse {
    let doc = state.document();
    InventoryResponse {
        unused: doc.inventory.unused.iter().map(CodeSummary::from).collect(),
        redeemed: doc
            .inventory
            .redeemed
            .iter()
            .map(CodeSummary::from)
            .collect(),
        counts: inventory::counts(&doc).into(),
    }
}

/// Unused code texts joined for file export.
pub fn export_unused(state: &SharedState) -> String {
    inventory::export_unused(&state.document()).join("\n")
}

/// The claim audit trail, newest first.
pub fn claim_log(state: &SharedState) -> ClaimLogResponse {
    let doc = state.document();
    ClaimLogResponse {
        entries: doc
            .inventory
            .redeemed_log
            .iter()
            .map(Into::into)
            .collect(),
    }
}

/// Delete a code from either pool. Unknown ids are a quiet no-op; deleting
/// from a stale list is an expected flow.
pub async fn delete_code(
    state: &SharedState,
    id: Uuid,
) -> Result<CountsResponse, ServiceError> {
    let (removed, counts) = state
        .mutate(|doc| {
            let removed = inventory::delete_code(doc, id);
            (removed, inventory::counts(doc))
        })
        .await?;

    if !removed {
        debug!(%id, "delete ignored; code not present");
    }

    Ok(counts.into())
}

/// Overwrite a code's text with the re-normalized replacement.
pub async fn update_code(
    state: &SharedState,
    id: Uuid,
    request: UpdateCodeRequest,
) -> Result<CountsResponse, ServiceError> {
    if inventory::normalize_line(&request.text).is_none() {
        return Err(ServiceError::InvalidInput(
            "replacement text is empty after normalization".into(),
        ));
    }

    let (updated, counts) = state
        .mutate(|doc| {
            let updated = inventory::update_code_text(doc, id, &request.text);
            (updated, inventory::counts(doc))
        })
        .await?;

    if !updated {
        return Err(ServiceError::NotFound(format!("code `{id}` not found")));
    }

    Ok(counts.into())
}

/// Move a redeemed code back into the unused pool.
pub async fn unredeem_code(
    state: &SharedState,
    id: Uuid,
) -> Result<CountsResponse, ServiceError> {
    let (restored, counts) = state
        .mutate(|doc| {
            let restored = inventory::unredeem_code(doc, id);
            (restored, inventory::counts(doc))
        })
        .await?;

    if !restored {
        return Err(ServiceError::NotFound(format!(
            "redeemed code `{id}` not found"
        )));
    }

    info!(%id, "code returned to unused pool");
    Ok(counts.into())
}
