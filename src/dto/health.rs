//! Health DTO for the `/healthcheck` route.

use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Whether a session is currently open.
    pub session_active: bool,
}

impl HealthResponse {
    /// The store is readable and writable.
    pub fn ok(session_active: bool) -> Self {
        Self {
            status: "ok".to_string(),
            session_active,
        }
    }

    /// The store could not be written; state changes will not persist.
    pub fn degraded(session_active: bool) -> Self {
        Self {
            status: "degraded".to_string(),
            session_active,
        }
    }
}
