//! Full organizer snapshot returned by `GET /state`.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dao::models::AppDocument,
    dto::{
        common::CountsResponse,
        community::CommunityDto,
        session::{SessionSnapshot, SettingsDto},
    },
    state::inventory,
};

/// Everything the organizer dashboard needs in one response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Community profile.
    pub community: CommunityDto,
    /// Current session projection.
    pub session: SessionSnapshot,
    /// Pool sizes.
    pub counts: CountsResponse,
    /// Current settings.
    pub settings: SettingsDto,
}

impl From<&AppDocument> for DashboardResponse {
    fn from(doc: &AppDocument) -> Self {
        Self {
            community: CommunityDto::from(&doc.community),
            session: SessionSnapshot::from(&doc.session),
            counts: inventory::counts(doc).into(),
            settings: SettingsDto::from(&doc.settings),
        }
    }
}
