//! DTOs for managing the code pool.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{ClaimLogEntry, CodeRecord, CodeStatus},
    dto::common::CountsResponse,
};

/// Batch of pasted or imported lines to add to the pool.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddCodesRequest {
    /// Raw lines; one code per line, CSV rows take the first cell.
    #[validate(length(min = 1, message = "at least one line is required"))]
    pub lines: Vec<String>,
}

/// Result of an add batch.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddCodesResponse {
    /// Codes appended to the unused pool.
    pub added: usize,
    /// Non-empty lines skipped as duplicates.
    pub skipped: usize,
    /// Pool sizes after the batch.
    pub counts: CountsResponse,
}

/// Replacement text for one code record.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCodeRequest {
    /// New code text; re-normalized before being stored.
    #[validate(length(min = 1, max = 128, message = "code text must be 1-128 characters"))]
    pub text: String,
}

/// One code record as shown to the organizer.
#[derive(Debug, Serialize, ToSchema)]
pub struct CodeSummary {
    /// Stable identifier for edits and deletes.
    pub id: Uuid,
    /// Canonical code text.
    pub text: String,
    /// `unused` or `redeemed`.
    pub status: String,
    /// When the code entered the pool (RFC 3339).
    pub uploaded_at: String,
    /// When the code was dispensed, if it has been (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_at: Option<String>,
}

impl From<&CodeRecord> for CodeSummary {
    fn from(value: &CodeRecord) -> Self {
        Self {
            id: value.id,
            text: value.text.clone(),
            status: match value.status {
                CodeStatus::Unused => "unused".into(),
                CodeStatus::Redeemed => "redeemed".into(),
            },
            uploaded_at: super::format_timestamp(value.uploaded_at),
            claimed_at: value.claimed_at.map(super::format_timestamp),
        }
    }
}

/// Both code pools, newest claims first in `redeemed`.
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryResponse {
    /// Codes still available, in upload order.
    pub unused: Vec<CodeSummary>,
    /// Codes already dispensed.
    pub redeemed: Vec<CodeSummary>,
    /// Pool sizes.
    pub counts: CountsResponse,
}

/// One entry of the claim audit trail.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClaimLogEntryDto {
    /// The dispensed code text.
    pub code: String,
    /// Session the claim happened in.
    pub session_id: String,
    /// When the claim happened (RFC 3339).
    pub claimed_at: String,
}

impl From<&ClaimLogEntry> for ClaimLogEntryDto {
    fn from(value: &ClaimLogEntry) -> Self {
        Self {
            code: value.code.clone(),
            session_id: value.session_id.clone(),
            claimed_at: super::format_timestamp(value.claimed_at),
        }
    }
}

/// The claim audit trail, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClaimLogResponse {
    /// Audit entries.
    pub entries: Vec<ClaimLogEntryDto>,
}
