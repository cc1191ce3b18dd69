//! Four-axis analysis orchestration
//!
//! Pure fan-out/fan-in: each axis runs compose, complete, parse on its own
//! with no shared mutable state, and the result is reassembled by axis
//! identity, never by completion order.

use std::sync::Arc;
use std::time::Instant;

use crate::model::{AnalysisResponse, EvaluationAxis, Finding, Message};
use crate::service::llm::{ChatCompleter, CompletionError, CompletionOverrides};
use crate::service::parser::parse_analysis_response;
use crate::service::prompts;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("axis {axis} analysis failed: {source}")]
    AxisFailed {
        axis: &'static str,
        #[source]
        source: CompletionError,
    },
}

/// Service running the four concurrent axis analyses for one transcript.
pub struct AnalysisService {
    llm: Arc<dyn ChatCompleter>,
}

impl AnalysisService {
    pub fn new(llm: Arc<dyn ChatCompleter>) -> Self {
        Self { llm }
    }

    /// Analyzes a transcript against all four axes concurrently.
    ///
    /// All-or-nothing: if any axis fails, the whole call fails, so callers
    /// never see a missing axis that looks like "zero findings".
    pub async fn analyze(
        &self,
        text: &str,
        target_behavior: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let (cct, sst, empathy, partnership) = tokio::try_join!(
            self.analyze_axis(text, EvaluationAxis::ChangeTalk, target_behavior, api_key),
            self.analyze_axis(text, EvaluationAxis::SustainTalk, target_behavior, api_key),
            self.analyze_axis(text, EvaluationAxis::Empathy, target_behavior, api_key),
            self.analyze_axis(text, EvaluationAxis::Partnership, target_behavior, api_key),
        )?;

        Ok(AnalysisResponse {
            cct,
            sst,
            empathy,
            partnership,
        })
    }

    async fn analyze_axis(
        &self,
        text: &str,
        axis: EvaluationAxis,
        target_behavior: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Vec<Finding>, AnalysisError> {
        let started = Instant::now();
        let (developer, user) = prompts::analysis_prompt(text, axis.key(), target_behavior);
        let messages = [Message::developer(developer), Message::user(user)];

        let raw = self
            .llm
            .complete(&messages, &CompletionOverrides::with_api_key(api_key))
            .await
            .map_err(|e| {
                tracing::error!(
                    axis = axis.key(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "Axis analysis failed"
                );
                AnalysisError::AxisFailed {
                    axis: axis.key(),
                    source: e,
                }
            })?;

        let findings = parse_analysis_response(&raw);

        tracing::info!(
            axis = axis.key(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            findings = findings.len(),
            "Axis analysis completed"
        );

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Canned completer: answers every axis with one record, optionally
    /// failing any prompt that mentions the given marker text.
    struct CannedCompleter {
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl ChatCompleter for CannedCompleter {
        async fn complete(
            &self,
            messages: &[Message],
            _overrides: &CompletionOverrides,
        ) -> Result<String, CompletionError> {
            if let Some(marker) = self.fail_on {
                if messages.iter().any(|m| m.content.contains(marker)) {
                    return Err(CompletionError::Provider("boom".to_string()));
                }
            }
            Ok(r#"[{"statement":"よく頑張っていますね","score":4}]"#.to_string())
        }
    }

    fn service(fail_on: Option<&'static str>) -> AnalysisService {
        AnalysisService::new(Arc::new(CannedCompleter { fail_on }))
    }

    #[tokio::test]
    async fn analyze_returns_all_four_axes() {
        let result = service(None)
            .analyze("Clinician: 変化したいと思いますか？", None, None)
            .await
            .unwrap();

        for findings in [&result.cct, &result.sst, &result.empathy, &result.partnership] {
            assert_eq!(findings.len(), 1);
            assert!(matches!(findings[0], Finding::Record(_)));
        }
    }

    #[tokio::test]
    async fn one_failing_axis_fails_the_whole_call() {
        // The empathy rubric is the only prompt containing this marker.
        let err = service(Some("共感性"))
            .analyze("Clinician: どう思いますか？", None, None)
            .await
            .unwrap_err();

        let AnalysisError::AxisFailed { axis, .. } = err;
        assert_eq!(axis, "empathy");
    }
}
