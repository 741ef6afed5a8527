use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        common::CountsResponse,
        inventory::{
            AddCodesRequest, AddCodesResponse, ClaimLogResponse, InventoryResponse,
            UpdateCodeRequest,
        },
    },
    error::AppError,
    services::inventory_service,
    state::SharedState,
};

/// Routes managing the code pool.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/codes", post(add_codes).get(list_codes))
        .route("/codes/export", get(export_unused))
        .route("/codes/log", get(claim_log))
        .route("/codes/{id}", put(update_code))
        .route("/codes/{id}", delete(delete_code))
        .route("/codes/{id}/unredeem", post(unredeem_code))
}

#[utoipa::path(
    post,
    path = "/codes",
    tag = "inventory",
    request_body = AddCodesRequest,
    responses(
        (status = 200, description = "Batch processed", body = AddCodesResponse)
    )
)]
/// Add pasted or imported lines to the unused pool; duplicates are skipped.
pub async fn add_codes(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<AddCodesRequest>>,
) -> Result<Json<AddCodesResponse>, AppError> {
    let response = inventory_service::add_codes(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/codes",
    tag = "inventory",
    responses(
        (status = 200, description = "Both code pools", body = InventoryResponse)
    )
)]
/// List unused and redeemed codes for the management screen.
pub async fn list_codes(State(state): State<SharedState>) -> Json<InventoryResponse> {
    Json(inventory_service::list(&state))
}

#[utoipa::path(
    get,
    path = "/codes/export",
    tag = "inventory",
    responses(
        (status = 200, description = "Unused codes, one per line", content_type = "text/plain", body = String)
    )
)]
/// Export the unused pool as plain text, one code per line, upload order.
pub async fn export_unused(State(state): State<SharedState>) -> impl IntoResponse {
    let body = inventory_service::export_unused(&state);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

#[utoipa::path(
    get,
    path = "/codes/log",
    tag = "inventory",
    responses(
        (status = 200, description = "Claim audit trail, newest first", body = ClaimLogResponse)
    )
)]
/// Return the append-only claim log.
pub async fn claim_log(State(state): State<SharedState>) -> Json<ClaimLogResponse> {
    Json(inventory_service::claim_log(&state))
}

#[utoipa::path(
    put,
    path = "/codes/{id}",
    tag = "inventory",
    params(("id" = Uuid, Path, description = "Identifier of the code to edit")),
    request_body = UpdateCodeRequest,
    responses(
        (status = 200, description = "Code updated", body = CountsResponse),
        (status = 404, description = "Unknown code id")
    )
)]
/// Overwrite a code's text.
pub async fn update_code(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<UpdateCodeRequest>>,
) -> Result<Json<CountsResponse>, AppError> {
    let counts = inventory_service::update_code(&state, id, payload).await?;
    Ok(Json(counts))
}

#[utoipa::path(
    delete,
    path = "/codes/{id}",
    tag = "inventory",
    params(("id" = Uuid, Path, description = "Identifier of the code to delete")),
    responses(
        (status = 200, description = "Code removed (or was already absent)", body = CountsResponse)
    )
)]
/// Delete a code from either pool; unknown ids are a quiet no-op.
pub async fn delete_code(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CountsResponse>, AppError> {
    let counts = inventory_service::delete_code(&state, id).await?;
    Ok(Json(counts))
}

#[utoipa::path(
    post,
    path = "/codes/{id}/unredeem",
    tag = "inventory",
    params(("id" = Uuid, Path, description = "Identifier of the redeemed code")),
    responses(
        (status = 200, description = "Code returned to the unused pool", body = CountsResponse),
        (status = 404, description = "Unknown or not-redeemed code id")
    )
)]
/// Move a redeemed code back into the unused pool.
pub async fn unredeem_code(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CountsResponse>, AppError> {
    let counts = inventory_service::unredeem_code(&state, id).await?;
    Ok(Json(counts))
}
