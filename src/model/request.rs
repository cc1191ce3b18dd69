//! Request bodies for the HTTP API

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::ChatTurn;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Transcript of the clinician/client dialogue.
    pub text: String,
    /// Behavior the client wants to change. When present, statements
    /// relevant to this goal are weighted more heavily.
    pub target_behavior: Option<String>,
    /// Per-request OpenAI API key override.
    pub api_key: Option<String>,
}

/// Body of `POST /detailed-chat`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DetailedChatRequest {
    /// The transcript the original analysis was run on.
    pub conversation_text: String,
    /// Prior `/analyze` result, echoed back by the client. Kept loosely
    /// typed: records from older clients store the quoted statement under a
    /// legacy `content` field name.
    #[schema(value_type = Object)]
    pub analysis_result: Value,
    /// Axis key the question concerns (`cct`, `sst`, `empathy`, `partnership`).
    pub aspect: String,
    pub user_question: String,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
    /// Ask the model to cite academic grounding in its answer.
    #[serde(default)]
    pub use_reference: bool,
    /// Fallback index into the axis record list.
    #[serde(default)]
    pub statement_index: usize,
    /// Statement text used to resolve the record; takes priority over
    /// `statement_index`.
    pub statement_content: Option<String>,
}
