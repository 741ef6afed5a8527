//! Request/response types for the HTTP boundary.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod claim;
pub mod common;
pub mod community;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod session;
pub mod validation;

fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| "invalid-timestamp".into())
}
