use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};
use axum_valid::Valid;

use crate::{
    dto::{
        common::ActionResponse,
        community::CommunityDto,
        session::{SettingsDto, UpdateSettingsRequest},
    },
    error::AppError,
    services::settings_service,
    state::SharedState,
};

/// Routes for settings, the community profile, and the full reset.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/settings", put(update_settings))
        .route("/community", get(get_community).put(update_community))
        .route("/reset", post(reset_all))
}

#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    request_body = UpdateSettingsRequest,
    responses((status = 200, description = "Settings after the update", body = SettingsDto))
)]
/// Apply a partial settings update.
pub async fn update_settings(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<UpdateSettingsRequest>>,
) -> Result<Json<SettingsDto>, AppError> {
    let settings = settings_service::update_settings(&state, payload).await?;
    Ok(Json(settings))
}

#[utoipa::path(
    get,
    path = "/community",
    tag = "settings",
    responses((status = 200, description = "Current community profile", body = CommunityDto))
)]
/// Read the community profile.
pub async fn get_community(State(state): State<SharedState>) -> Json<CommunityDto> {
    Json(settings_service::community(&state))
}

#[utoipa::path(
    put,
    path = "/community",
    tag = "settings",
    request_body = CommunityDto,
    responses((status = 200, description = "Stored community profile", body = CommunityDto))
)]
/// Replace the community profile.
pub async fn update_community(
    State(state): State<SharedState>,
    Json(payload): Json<CommunityDto>,
) -> Result<Json<CommunityDto>, AppError> {
    let profile = settings_service::update_community(&state, payload).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    post,
    path = "/reset",
    tag = "settings",
    responses((status = 200, description = "Everything reset to defaults", body = ActionResponse))
)]
/// Wipe profile, pools, session, and guard history back to defaults.
pub async fn reset_all(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    settings_service::reset_all(&state).await?;
    Ok(Json(ActionResponse::new("state reset to defaults")))
}
