//! The four fixed evaluation axes of a Motivational Interviewing analysis

use serde::{Deserialize, Serialize};

/// Evaluation dimension a transcript is scored against.
///
/// The set is closed: every analysis produces exactly one record list per
/// variant, keyed on the wire by the short names the frontend stores
/// (`cct`, `sst`, `empathy`, `partnership`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationAxis {
    /// Change-talk promotion
    #[serde(rename = "cct")]
    ChangeTalk,
    /// Sustain-talk reduction
    #[serde(rename = "sst")]
    SustainTalk,
    #[serde(rename = "empathy")]
    Empathy,
    #[serde(rename = "partnership")]
    Partnership,
}

impl EvaluationAxis {
    /// All axes in the order the analysis fans out.
    pub const ALL: [EvaluationAxis; 4] = [
        EvaluationAxis::ChangeTalk,
        EvaluationAxis::SustainTalk,
        EvaluationAxis::Empathy,
        EvaluationAxis::Partnership,
    ];

    /// Wire key used in request/response bodies and rubric lookups.
    pub fn key(self) -> &'static str {
        match self {
            EvaluationAxis::ChangeTalk => "cct",
            EvaluationAxis::SustainTalk => "sst",
            EvaluationAxis::Empathy => "empathy",
            EvaluationAxis::Partnership => "partnership",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "cct" => Some(EvaluationAxis::ChangeTalk),
            "sst" => Some(EvaluationAxis::SustainTalk),
            "empathy" => Some(EvaluationAxis::Empathy),
            "partnership" => Some(EvaluationAxis::Partnership),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_for_all_axes() {
        for axis in EvaluationAxis::ALL {
            assert_eq!(EvaluationAxis::from_key(axis.key()), Some(axis));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(EvaluationAxis::from_key("oars"), None);
        assert_eq!(EvaluationAxis::from_key(""), None);
    }
}
