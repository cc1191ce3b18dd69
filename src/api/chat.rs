//! REST API endpoint for detailed-chat follow-ups

use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::{ChatResponse, DetailedChatRequest};

/// Header carrying an optional per-request OpenAI API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Ask a follow-up question about one evaluation record
#[utoipa::path(
    post,
    path = "/detailed-chat",
    request_body = DetailedChatRequest,
    responses(
        (status = 200, description = "Chat response produced", body = ChatResponse),
        (status = 404, description = "Referenced evaluation not found", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Chat failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "chat"
)]
#[post("/detailed-chat")]
pub async fn detailed_chat(
    state: web::Data<AppState>,
    http_request: HttpRequest,
    request: web::Json<DetailedChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let api_key = http_request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    let response = state.chat.detailed_chat(&request, api_key).await?;

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}

/// Configure chat routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(detailed_chat);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::model::{Config, Message};
    use crate::service::llm::{ChatCompleter, CompletionError, CompletionOverrides};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct CapturingCompleter {
        last_api_key: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ChatCompleter for CapturingCompleter {
        async fn complete(
            &self,
            _messages: &[Message],
            overrides: &CompletionOverrides,
        ) -> Result<String, CompletionError> {
            *self.last_api_key.lock().unwrap() = overrides.api_key.clone();
            Ok("この評価は複雑な聞き返しに基づいています。".to_string())
        }
    }

    fn body(statement_index: usize) -> serde_json::Value {
        serde_json::json!({
            "conversation_text": "Clinician: 変化したいと思いますか？",
            "analysis_result": {
                "empathy": [{"statement": "変化したいと思いますか？", "evaluation": "e", "feedback": "f", "suggestions": []}]
            },
            "aspect": "empathy",
            "user_question": "なぜですか？",
            "statement_index": statement_index
        })
    }

    #[actix_web::test]
    async fn detailed_chat_returns_completion_and_forwards_header_key() {
        let completer = Arc::new(CapturingCompleter {
            last_api_key: Mutex::new(None),
        });
        let state = web::Data::new(AppState::with_completer(
            Config::default(),
            completer.clone(),
        ));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/detailed-chat")
            .insert_header((API_KEY_HEADER, "sk-per-request"))
            .set_json(body(0))
            .to_request();

        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(
            response["response"],
            "この評価は複雑な聞き返しに基づいています。"
        );
        assert_eq!(
            completer.last_api_key.lock().unwrap().as_deref(),
            Some("sk-per-request")
        );
    }

    #[actix_web::test]
    async fn unresolvable_evaluation_maps_to_diagnosable_404() {
        let state = web::Data::new(AppState::with_completer(
            Config::default(),
            Arc::new(CapturingCompleter {
                last_api_key: Mutex::new(None),
            }),
        ));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/detailed-chat")
            .set_json(body(7))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "evaluation_not_found");
        assert!(body["message"].as_str().unwrap().contains("index 7"));
    }
}
