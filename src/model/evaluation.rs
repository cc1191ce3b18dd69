//! Evaluation records extracted from model completions

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message placed in the parse-failure sentinel, rendered by the frontend.
pub const PARSE_FAILURE_MESSAGE: &str = "分析結果のパースに失敗しました";

/// Traffic-light tag shown next to a record. Always derived from the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Good,
    #[default]
    Warning,
    Bad,
}

impl Icon {
    /// 4-5 is good, 2-3 is warning, 1 is bad.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 4 => Icon::Good,
            2..=3 => Icon::Warning,
            _ => Icon::Bad,
        }
    }
}

fn default_score() -> u8 {
    3
}

/// One evaluated clinician statement extracted by the model.
///
/// Field defaults are lenient because the model occasionally drops fields;
/// a record that fails to decode entirely is handled at the array level by
/// the parser, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EvaluationRecord {
    /// Verbatim quote from the transcript.
    #[serde(default)]
    pub statement: String,
    /// Scoring rationale. Internal, not rendered to the end user.
    #[serde(default)]
    pub evaluation: String,
    /// 1-5 rating of the statement against the axis rubric.
    #[serde(default = "default_score")]
    pub score: u8,
    /// User-facing feedback text.
    #[serde(default)]
    pub feedback: String,
    /// One or two suggested alternative phrasings.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Recomputed from `score` during normalization; whatever icon the
    /// model emitted is ignored.
    #[serde(skip_deserializing)]
    pub icon: Icon,
}

impl EvaluationRecord {
    /// Clamps the score into the 1-5 range and derives the icon from it.
    pub fn normalized(mut self) -> Self {
        self.score = self.score.clamp(1, 5);
        self.icon = Icon::from_score(self.score);
        self
    }
}

/// A single axis finding: a parsed record, or the sentinel emitted when the
/// completion could not be decoded.
///
/// `Failure` is declared first so that an `{"error": ...}` object does not
/// satisfy `Record`'s all-default fields during untagged deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Finding {
    Failure { error: String },
    Record(EvaluationRecord),
}

impl Finding {
    pub fn parse_failure() -> Self {
        Finding::Failure {
            error: PARSE_FAILURE_MESSAGE.to_string(),
        }
    }
}
