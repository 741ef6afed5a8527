//! Community profile passthrough DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::CommunityProfile;

/// Organizer-facing community profile; the core treats it as opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CommunityDto {
    /// Display name of the community.
    pub name: String,
    /// Link to the community's chat/group page.
    pub contact_url: String,
    /// Inline data URL for the community logo.
    pub logo_data_url: String,
    /// Free-form note shown on the claim screen.
    pub note: String,
}

impl From<&CommunityProfile> for CommunityDto {
    fn from(value: &CommunityProfile) -> Self {
        Self {
            name: value.name.clone(),
            contact_url: value.contact_url.clone(),
            logo_data_url: value.logo_data_url.clone(),
            note: value.note.clone(),
        }
    }
}

impl From<CommunityDto> for CommunityProfile {
    fn from(value: CommunityDto) -> Self {
        Self {
            name: value.name,
            contact_url: value.contact_url,
            logo_data_url: value.logo_data_url,
            note: value.note,
        }
    }
}
