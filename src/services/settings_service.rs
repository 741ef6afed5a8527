//! Settings, community profile, and the full reset.

use tracing::{info, warn};

use crate::{
    dao::models::AppDocument,
    dto::{
        community::CommunityDto,
        session::{SettingsDto, UpdateSettingsRequest},
    },
    error::ServiceError,
    state::{SharedState, session},
};

/// Apply a partial settings update; absent fields keep their current value.
pub async fn update_settings(
    state: &SharedState,
    request: UpdateSettingsRequest,
) -> Result<SettingsDto, ServiceError> {
    let settings = state
        .mutate(|doc| {
            if request.default_cap.is_some() {
                session::set_default_cap(doc, request.default_cap);
            }
            if let Some(test_mode) = request.test_mode {
                doc.settings.test_mode = test_mode;
            }
            if let Some(daily_limit) = request.daily_limit_enabled {
                doc.settings.daily_limit_enabled = daily_limit;
            }
            if let Some(haptics) = request.haptics {
                doc.settings.haptics = haptics;
            }
            SettingsDto::from(&doc.settings)
        })
        .await?;

    info!("settings updated");
    Ok(settings)
}

/// Read the community profile.
pub fn community(state: &SharedState) -> CommunityDto {
    CommunityDto::from(&state.document().community)
}

/// Replace the community profile wholesale; the core never inspects it.
pub async fn update_community(
    state: &SharedState,
    profile: CommunityDto,
) -> Result<CommunityDto, ServiceError> {
    let stored = state
        .mutate(|doc| {
            doc.community = profile.into();
            CommunityDto::from(&doc.community)
        })
        .await?;

    info!("community profile updated");
    Ok(stored)
}

/// Wipe everything back to defaults: profile, pools, session, guard history.
pub async fn reset_all(state: &SharedState) -> Result<(), ServiceError> {
    state.mutate(|doc| *doc = AppDocument::default()).await?;
    warn!("full state reset");
    Ok(())
}
