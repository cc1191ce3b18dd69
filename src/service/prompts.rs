//! Prompt composition for analysis and detailed-chat completions
//!
//! Every prompt is a two-part pair: the fixed developer block (the full MI
//! framework, identical for every call) and a per-request user block. The
//! split mirrors the system/user message convention of chat completion
//! APIs and keeps the expensive framework text from drifting between the
//! analysis and chat paths.

use crate::knowledge;

/// Composes the prompt pair for a single-axis analysis.
///
/// The user block carries the rubric for `aspect`, the optional
/// target-behavior emphasis (only when non-empty), the literal output
/// contract the model must honor, and the transcript verbatim.
pub fn analysis_prompt(
    text: &str,
    aspect: &str,
    target_behavior: Option<&str>,
) -> (&'static str, String) {
    let target_section = match target_behavior {
        Some(behavior) if !behavior.trim().is_empty() => format!(
            r#"
# 目標行動
{behavior}
　これは、クライエントが変化を望む行動や目標です。この目標に動機づけされるよう評価しなさい。"#
        ),
        _ => String::new(),
    };

    let user = format!(
        r#"
# 指示
対話文を与えるので，以下の評価軸で分析してください。
臨床家（治療を行う者）の発言から重要なものを抽出し評価してください。
# 評価軸
{rubric}{target_section}
# 出力形式
重要な発言を最大5つ抽出し、以下のJSON形式で返してください：
[
  {{
    "statement": "発言（意味のない発言は無視すること）",
    "evaluation": "評価の根拠（内部処理用でユーザには見せない）",
    "score": 1-5の評価点,
    "feedback": "具体的なフィードバック（ユーザに見せる）",
    "suggestions": ["改善提案1", "改善提案2(optional)"]フィードバックを踏まえた，よりよい発言の具体例。もしあれば補足説明。
    "icon": "good/warning/bad"  scoreが4-5ならgood、2-3ならwarning、1ならbad
  }}
]
# 対話文
{text}
"#,
        rubric = knowledge::rubric(aspect),
    );

    (knowledge::FRAMEWORK_INSTRUCTIONS, user)
}

/// Reference clause appended to chat prompts when the caller requests
/// academically grounded answers.
const REFERENCE_CLAUSE: &str = r#"

学術的な根拠や参考文献を含めて回答してください。心理学、カウンセリング、コミュニケーション理論の観点から専門的な説明を行ってください。
可能な限り具体的な研究結果や理論名を挙げて説明してください。"#;

/// Composes the prompt pair that grounds a detailed-chat exchange.
///
/// Same developer block as the analysis path; the user block scopes the
/// conversation to one rubric and the original transcript.
pub fn detailed_chat_prompt(text: &str, aspect: &str, use_reference: bool) -> (&'static str, String) {
    let mut user = format!(
        r#"# 指示
対話文を与えるので，以下の評価軸で分析してください。
臨床家（治療を行う者）の発言から重要なものを抽出し評価してください。
# 評価軸
{rubric}
# 対話文
{text}"#,
        rubric = knowledge::rubric(aspect),
    );

    if use_reference {
        user.push_str(REFERENCE_CLAUSE);
    }

    (knowledge::FRAMEWORK_INSTRUCTIONS, user.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::FRAMEWORK_INSTRUCTIONS;

    const TRANSCRIPT: &str = "Clinician: 変化したいと思いますか？\nClient: はい。";

    #[test]
    fn analysis_prompt_carries_framework_and_transcript() {
        let (developer, user) = analysis_prompt(TRANSCRIPT, "cct", None);
        assert_eq!(developer, FRAMEWORK_INSTRUCTIONS);
        assert!(user.contains(TRANSCRIPT));
        assert!(user.contains("チェンジトーク"));
        assert!(user.contains("最大5つ"));
    }

    #[test]
    fn target_behavior_clause_present_only_when_non_empty() {
        let (_, with) = analysis_prompt(TRANSCRIPT, "cct", Some("禁煙"));
        assert!(with.contains("# 目標行動"));
        assert!(with.contains("禁煙"));

        let (_, without) = analysis_prompt(TRANSCRIPT, "cct", None);
        assert!(!without.contains("# 目標行動"));

        let (_, blank) = analysis_prompt(TRANSCRIPT, "cct", Some("  "));
        assert!(!blank.contains("# 目標行動"));
    }

    #[test]
    fn unknown_aspect_degrades_to_echoed_key() {
        let (_, user) = analysis_prompt(TRANSCRIPT, "made-up-axis", None);
        assert!(user.contains("made-up-axis"));
    }

    #[test]
    fn chat_prompt_reference_clause_iff_requested() {
        let (_, with) = detailed_chat_prompt(TRANSCRIPT, "empathy", true);
        assert!(with.contains("学術的な根拠"));

        let (_, without) = detailed_chat_prompt(TRANSCRIPT, "empathy", false);
        assert!(!without.contains("学術的な根拠"));
        assert!(without.contains(TRANSCRIPT));
        assert!(without.contains("共感性"));
    }
}
