use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for code-drop-back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::dashboard::dashboard,
        crate::routes::inventory::add_codes,
        crate::routes::inventory::list_codes,
        crate::routes::inventory::export_unused,
        crate::routes::inventory::claim_log,
        crate::routes::inventory::update_code,
        crate::routes::inventory::delete_code,
        crate::routes::inventory::unredeem_code,
        crate::routes::session::start_session,
        crate::routes::session::end_session,
        crate::routes::session::toggle_pause,
        crate::routes::session::set_session_cap,
        crate::routes::session::live_stream,
        crate::routes::claim::claim,
        crate::routes::settings::update_settings,
        crate::routes::settings::get_community,
        crate::routes::settings::update_community,
        crate::routes::settings::reset_all,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::ActionResponse,
            crate::dto::common::CountsResponse,
            crate::dto::community::CommunityDto,
            crate::dto::dashboard::DashboardResponse,
            crate::dto::inventory::AddCodesRequest,
            crate::dto::inventory::AddCodesResponse,
            crate::dto::inventory::UpdateCodeRequest,
            crate::dto::inventory::CodeSummary,
            crate::dto::inventory::InventoryResponse,
            crate::dto::inventory::ClaimLogEntryDto,
            crate::dto::inventory::ClaimLogResponse,
            crate::dto::session::StartSessionRequest,
            crate::dto::session::SessionCapRequest,
            crate::dto::session::UpdateSettingsRequest,
            crate::dto::session::SettingsDto,
            crate::dto::session::SessionSnapshot,
            crate::dto::session::LiveSnapshot,
            crate::dto::claim::ClaimRequest,
            crate::dto::claim::ClaimResponse,
            crate::dto::claim::RejectReason,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "inventory", description = "Code pool management"),
        (name = "session", description = "Session lifecycle and live view"),
        (name = "claim", description = "Attendee claim flow"),
        (name = "settings", description = "Settings and community profile"),
    )
)]
pub struct ApiDoc;
