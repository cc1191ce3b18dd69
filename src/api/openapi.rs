//! OpenAPI specification endpoints

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

/// API documentation for the MI dialogue analysis service
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health_check,
        crate::api::analysis::analyze_conversation,
        crate::api::chat::detailed_chat,
    ),
    components(schemas(
        crate::api::health::HealthStatus,
        crate::api::error::ErrorResponse,
        crate::model::AnalyzeRequest,
        crate::model::DetailedChatRequest,
        crate::model::AnalysisResponse,
        crate::model::ChatResponse,
        crate::model::EvaluationRecord,
        crate::model::Icon,
        crate::model::ChatTurn,
    )),
    tags(
        (name = "analysis", description = "Four-axis transcript analysis"),
        (name = "chat", description = "Follow-up Q&A about one evaluation"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json);
}
