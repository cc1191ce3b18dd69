//! Tolerant extraction of evaluation records from completion text
//!
//! Completions are requested as JSON but arrive wrapped in prose or
//! markdown fences often enough that demanding a clean body would fail
//! routinely. The parser slices the largest bracket-delimited substring
//! and decodes that; anything unrecoverable becomes a sentinel finding so
//! the caller-visible shape stays valid. It never raises.

use crate::model::{EvaluationRecord, Finding};

/// Upper bound on records kept per axis.
const MAX_RECORDS: usize = 5;

/// Parses a raw completion into findings.
///
/// Decode failure, or the absence of a bracket pair, yields a single
/// sentinel finding rather than an empty list, so "parse failed" stays
/// distinguishable from "axis produced zero records".
pub fn parse_analysis_response(raw: &str) -> Vec<Finding> {
    match extract_records(raw) {
        Some(records) => records
            .into_iter()
            .take(MAX_RECORDS)
            .map(|r| Finding::Record(r.normalized()))
            .collect(),
        None => vec![Finding::parse_failure()],
    }
}

/// First `[` to last `]`, inclusive. Heuristic by design: a `]` inside a
/// string field past the true closing bracket is not specially handled.
fn extract_records(raw: &str) -> Option<Vec<EvaluationRecord>> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Icon;

    fn record(finding: &Finding) -> &EvaluationRecord {
        match finding {
            Finding::Record(r) => r,
            Finding::Failure { error } => panic!("expected record, got failure: {error}"),
        }
    }

    #[test]
    fn extracts_array_wrapped_in_prose() {
        let raw = concat!(
            "以下が分析結果です。\n",
            r#"[{"statement":"a","evaluation":"e","score":5,"feedback":"f","suggestions":["s1"],"icon":"good"}]"#,
            "\n以上です。"
        );
        let findings = parse_analysis_response(raw);
        assert_eq!(findings.len(), 1);
        let r = record(&findings[0]);
        assert_eq!(r.statement, "a");
        assert_eq!(r.score, 5);
        assert_eq!(r.icon, Icon::Good);
    }

    #[test]
    fn extracts_array_inside_markdown_fence() {
        let raw = "```json\n[{\"statement\":\"a\",\"score\":3}]\n```";
        let findings = parse_analysis_response(raw);
        assert_eq!(record(&findings[0]).statement, "a");
        assert_eq!(record(&findings[0]).icon, Icon::Warning);
    }

    #[test]
    fn no_brackets_yields_sentinel_not_empty() {
        let findings = parse_analysis_response("no brackets here");
        assert_eq!(findings, vec![Finding::parse_failure()]);
    }

    #[test]
    fn malformed_json_yields_sentinel() {
        assert_eq!(
            parse_analysis_response("[invalid json"),
            vec![Finding::parse_failure()]
        );
        assert_eq!(
            parse_analysis_response("] backwards ["),
            vec![Finding::parse_failure()]
        );
    }

    #[test]
    fn empty_array_is_a_valid_zero_finding_result() {
        assert!(parse_analysis_response("nothing notable: []").is_empty());
    }

    #[test]
    fn truncates_to_five_records() {
        let raw = format!(
            "[{}]",
            (0..7)
                .map(|i| format!(r#"{{"statement":"s{i}","score":4}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        assert_eq!(parse_analysis_response(&raw).len(), 5);
    }

    #[test]
    fn icon_is_rederived_from_score() {
        let raw = r#"[{"statement":"a","score":1,"icon":"good"}]"#;
        let findings = parse_analysis_response(raw);
        assert_eq!(record(&findings[0]).icon, Icon::Bad);
    }
}
