use axum::{
    Json, Router,
    extract::State,
    response::sse::Sse,
    routing::{get, post, put},
};
use axum_valid::Valid;
use futures::Stream;
use tracing::info;

use crate::{
    dto::session::{SessionCapRequest, SessionSnapshot, StartSessionRequest},
    error::AppError,
    services::{live_service, session_service},
    state::SharedState,
};

/// Routes driving the session lifecycle and the live view.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/session/start", post(start_session))
        .route("/session/end", post(end_session))
        .route("/session/pause", post(toggle_pause))
        .route("/session/cap", put(set_session_cap))
        .route("/session/live", get(live_stream))
}

#[utoipa::path(
    post,
    path = "/session/start",
    tag = "session",
    request_body = StartSessionRequest,
    responses(
        (status = 200, description = "Session started", body = SessionSnapshot),
        (status = 409, description = "Code pool is empty")
    )
)]
/// Open a new session; the cap is computed from settings and inventory now.
pub async fn start_session(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<StartSessionRequest>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = session_service::start_session(&state, payload).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/session/end",
    tag = "session",
    responses(
        (status = 200, description = "Session reset to inactive", body = SessionSnapshot)
    )
)]
/// Close the session and reset it to the inactive state.
pub async fn end_session(
    State(state): State<SharedState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = session_service::end_session(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/session/pause",
    tag = "session",
    responses(
        (status = 200, description = "Pause toggled", body = SessionSnapshot),
        (status = 409, description = "No running session")
    )
)]
/// Flip the pacing switch of the running session.
pub async fn toggle_pause(
    State(state): State<SharedState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = session_service::toggle_pause(&state).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    put,
    path = "/session/cap",
    tag = "session",
    request_body = SessionCapRequest,
    responses(
        (status = 200, description = "Cap edited", body = SessionSnapshot),
        (status = 409, description = "No running session")
    )
)]
/// Edit the cap of the running session mid-event.
pub async fn set_session_cap(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<SessionCapRequest>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = session_service::set_session_cap(&state, payload).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    get,
    path = "/session/live",
    tag = "session",
    responses((status = 200, description = "Live session snapshots", content_type = "text/event-stream", body = String))
)]
/// Stream live session snapshots to the organizer screen.
pub async fn live_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, axum::Error>>> {
    info!("new live SSE connection");
    live_service::live_stream(&state)
}
