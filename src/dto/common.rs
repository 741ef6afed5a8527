//! DTOs shared across route groups.

use serde::Serialize;
use utoipa::ToSchema;

use crate::state::inventory::Counts;

/// Generic action acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable outcome message.
    pub message: String,
}

impl ActionResponse {
    /// Build an acknowledgement from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sizes of the two code pools.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CountsResponse {
    /// Codes still available.
    pub unused: usize,
    /// Codes already dispensed.
    pub redeemed: usize,
}

impl From<Counts> for CountsResponse {
    fn from(value: Counts) -> Self {
        Self {
            unused: value.unused,
            redeemed: value.redeemed,
        }
    }
}
