//! DTOs for the attendee claim flow.
//!
//! Rejections are expected outcomes, not errors: they ship as a discriminated
//! payload so the claim screen can render one specific message per reason.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::{community::CommunityDto, validation::validate_device_key},
    state::{claim::ClaimRejection, guard::BlockReason},
};

/// Claim attempt payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ClaimRequest {
    /// Opaque key the claimant device minted and keeps in its own storage.
    #[validate(custom(function = "validate_device_key"))]
    pub device_key: String,
}

/// Why a claim attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No session is open (or the scanned link is stale).
    Inactive,
    /// The session dispensed its cap.
    Cap,
    /// The organizer paused dispensing.
    Paused,
    /// The pool ran dry.
    Empty,
    /// This device already claimed today.
    Day,
    /// This device already claimed in this session.
    Session,
}

impl From<ClaimRejection> for RejectReason {
    fn from(value: ClaimRejection) -> Self {
        match value {
            ClaimRejection::Inactive => RejectReason::Inactive,
            ClaimRejection::Cap => RejectReason::Cap,
            ClaimRejection::Paused => RejectReason::Paused,
            ClaimRejection::Empty => RejectReason::Empty,
        }
    }
}

impl From<BlockReason> for RejectReason {
    fn from(value: BlockReason) -> Self {
        match value {
            BlockReason::Day => RejectReason::Day,
            BlockReason::Session => RejectReason::Session,
        }
    }
}

/// Outcome of a claim attempt, tagged by `status`.
///
/// Both variants carry the community profile so the claim screen can show the
/// organizer's branding and contact link whatever the outcome.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClaimResponse {
    /// A code was dispensed to this device.
    Issued {
        /// The dispensed code text.
        code: String,
        /// Community profile for the claim screen.
        community: CommunityDto,
    },
    /// The claim was refused.
    Rejected {
        /// Specific refusal reason for the claim screen.
        reason: RejectReason,
        /// Community profile for the claim screen.
        community: CommunityDto,
    },
}

impl ClaimResponse {
    /// Build the success payload.
    pub fn issued(code: String, community: CommunityDto) -> Self {
        Self::Issued { code, community }
    }

    /// Build a refusal payload.
    pub fn rejected(reason: impl Into<RejectReason>, community: CommunityDto) -> Self {
        Self::Rejected {
            reason: reason.into(),
            community,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_response_serializes_with_status_tag() {
        let issued = ClaimResponse::issued("A1".into(), CommunityDto::default());
        let json = serde_json::to_value(&issued).unwrap();
        assert_eq!(json["status"], "issued");
        assert_eq!(json["code"], "A1");

        let rejected = ClaimResponse::rejected(RejectReason::Paused, CommunityDto::default());
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"], "paused");
    }
}
