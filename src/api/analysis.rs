//! REST API endpoint for transcript analysis

use actix_web::{post, web, HttpResponse};

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::{AnalysisResponse, AnalyzeRequest};

/// Analyze a transcript against the four MI evaluation axes
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResponse),
        (status = 500, description = "Analysis failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze_conversation(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = state
        .analysis
        .analyze(
            &request.text,
            request.target_behavior.as_deref(),
            request.api_key.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_conversation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::model::{Config, Message};
    use crate::service::llm::{ChatCompleter, CompletionError, CompletionOverrides};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct CannedCompleter {
        fail: bool,
    }

    #[async_trait]
    impl ChatCompleter for CannedCompleter {
        async fn complete(
            &self,
            _messages: &[Message],
            _overrides: &CompletionOverrides,
        ) -> Result<String, CompletionError> {
            if self.fail {
                return Err(CompletionError::Provider("rate limited".to_string()));
            }
            Ok(concat!(
                "結果は以下の通りです。",
                r#"[{"statement":"変化したいと思いますか？","evaluation":"開かれた質問","score":4,"feedback":"良い質問です","suggestions":["変わりたい気持ちがある"],"icon":"good"}]"#
            )
            .to_string())
        }
    }

    fn state(fail: bool) -> web::Data<AppState> {
        web::Data::new(AppState::with_completer(
            Config::default(),
            Arc::new(CannedCompleter { fail }),
        ))
    }

    #[actix_web::test]
    async fn analyze_returns_all_four_axis_keys() {
        let app = test::init_service(
            App::new().app_data(state(false)).configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({
                "text": "Clinician: 変化したいと思いますか？"
            }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        for key in ["cct", "sst", "empathy", "partnership"] {
            let findings = body[key].as_array().unwrap_or_else(|| panic!("{key} missing"));
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0]["icon"], "good");
        }
    }

    #[actix_web::test]
    async fn completion_failure_yields_stage_labeled_500() {
        let app = test::init_service(
            App::new().app_data(state(true)).configure(configure),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({ "text": "Clinician: こんにちは" }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "analysis_error");
        assert!(body["message"].as_str().unwrap().starts_with("Analysis failed"));
    }
}
