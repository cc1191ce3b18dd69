//! Detailed-chat orchestration
//!
//! Resolves which prior evaluation record a follow-up question concerns,
//! then reconstructs the grounding context server-side: the original
//! analysis-style prompt, a synthetic assistant turn restating the
//! resolved record, the caller's history in order, and the new question
//! last. Rebuilding the assistant turn here keeps the grounding fact
//! authoritative instead of trusting a client-echoed value.

use std::sync::Arc;

use serde_json::Value;

use crate::model::{DetailedChatRequest, Message};
use crate::service::llm::{ChatCompleter, CompletionError, CompletionOverrides};
use crate::service::prompts;

/// Number of leading characters of `statement_content` used for matching.
/// Character-counted, not bytes: transcripts are Japanese.
const STATEMENT_MATCH_PREFIX_CHARS: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Replying without grounding context would silently produce a
    /// misleading answer, so this is a hard failure.
    #[error("no evaluation found for {0}")]
    EvaluationNotFound(String),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Service answering follow-up questions about one evaluation record.
pub struct ChatService {
    llm: Arc<dyn ChatCompleter>,
}

impl ChatService {
    pub fn new(llm: Arc<dyn ChatCompleter>) -> Self {
        Self { llm }
    }

    pub async fn detailed_chat(
        &self,
        request: &DetailedChatRequest,
        api_key: Option<&str>,
    ) -> Result<String, ChatError> {
        let records = axis_records(&request.analysis_result, &request.aspect);
        let record = resolve_statement(
            records,
            request.statement_content.as_deref(),
            request.statement_index,
        )
        .ok_or_else(|| ChatError::EvaluationNotFound(describe_target(request)))?;

        let (developer, user) = prompts::detailed_chat_prompt(
            &request.conversation_text,
            &request.aspect,
            request.use_reference,
        );

        let mut messages = vec![
            Message::developer(developer),
            Message::user(user),
            Message::assistant(reply_context(record, request.statement_content.as_deref())),
        ];
        messages.extend(request.chat_history.iter().map(Message::from));
        messages.push(Message::user(request.user_question.clone()));

        tracing::debug!(
            aspect = %request.aspect,
            history_turns = request.chat_history.len(),
            use_reference = request.use_reference,
            "Detailed chat dispatched"
        );

        Ok(self
            .llm
            .complete(&messages, &CompletionOverrides::with_api_key(api_key))
            .await?)
    }
}

fn axis_records<'a>(analysis_result: &'a Value, aspect: &str) -> &'a [Value] {
    analysis_result
        .get(aspect)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Content match first, index fallback second. First match wins; ties
/// between records sharing a long common prefix are not disambiguated.
fn resolve_statement<'a>(
    records: &'a [Value],
    statement_content: Option<&str>,
    statement_index: usize,
) -> Option<&'a Value> {
    if let Some(content) = statement_content {
        let prefix: String = content.chars().take(STATEMENT_MATCH_PREFIX_CHARS).collect();
        if !prefix.is_empty() {
            if let Some(record) = records
                .iter()
                .find(|r| record_statement(r).is_some_and(|s| s.contains(&prefix)))
            {
                return Some(record);
            }
        }
    }

    records.get(statement_index)
}

/// Quoted statement of a stored record, tolerating the legacy `content`
/// field name older clients still send.
fn record_statement(record: &Value) -> Option<&str> {
    record
        .get("statement")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            record
                .get("content")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
}

/// Synthetic assistant turn restating the resolved evaluation in prose.
fn reply_context(record: &Value, statement_content: Option<&str>) -> String {
    let field = |name: &str| {
        record
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let statement = record_statement(record)
        .or(statement_content)
        .unwrap_or_default();
    let suggestions = record
        .get("suggestions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    format!(
        "発言: {statement}\n\n評価の根拠: {evaluation}\n\nフィードバック: {feedback}\n\n改善提案: {suggestions}\n\nこのフィードバックに関して質問はありますか。",
        evaluation = field("evaluation"),
        feedback = field("feedback"),
    )
}

fn describe_target(request: &DetailedChatRequest) -> String {
    match request.statement_content.as_deref() {
        Some(content) if !content.is_empty() => {
            let prefix: String = content.chars().take(STATEMENT_MATCH_PREFIX_CHARS).collect();
            format!(
                "statement starting with {prefix:?} (fallback index {})",
                request.statement_index
            )
        }
        _ => format!("statement index {}", request.statement_index),
    }
}
