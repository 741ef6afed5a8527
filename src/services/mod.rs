/// Attendee claim flow: guard check, claim, guard record.
pub mod claim_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Code pool management operations.
pub mod inventory_service;
/// Live session snapshot streaming.
pub mod live_service;
/// Session lifecycle operations.
pub mod session_service;
/// Settings, community profile, and full reset.
pub mod settings_service;
