//! Per-character diagnostic trace of a conversion.
//!
//! Used by `lactool explain` to show which rule family fired for each
//! input character and which neighbor decided the outcome. Runs the same
//! resolution code path as [`latinize`](super::latinize), so the traced
//! output always matches the real one.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::convert::{resolve_at, AppliedRule};
use crate::unicode;

/// One input character's conversion record.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainStep {
    pub index: usize,
    pub input: char,
    pub rule: AppliedRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub output: String,
    /// Cyrillic input the rule tables do not know; passed through as-is.
    pub unmapped: bool,
}

/// Full trace for one conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub steps: Vec<ExplainStep>,
}

pub fn explain(text: &str) -> ExplainResult {
    let chars: Vec<char> = text.chars().collect();
    let mut steps = Vec::with_capacity(chars.len());
    let mut output = String::with_capacity(text.len());

    for (index, &input) in chars.iter().enumerate() {
        let resolution = resolve_at(&chars, index);
        let unmapped =
            resolution.rule == AppliedRule::Passthrough && unicode::is_cyrillic(input);
        output.push_str(&resolution.text);
        steps.push(ExplainStep {
            index,
            input,
            rule: resolution.rule,
            note: resolution.note,
            output: resolution.text,
            unmapped,
        });
    }

    ExplainResult {
        input: text.to_string(),
        output,
        steps,
    }
}

/// Pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let mut padded = String::from(s);
    for _ in UnicodeWidthStr::width(s)..width {
        padded.push(' ');
    }
    padded
}

/// Render an explanation as an aligned text table.
pub fn format_text(result: &ExplainResult) -> String {
    let output_width = result
        .steps
        .iter()
        .map(|s| UnicodeWidthStr::width(s.output.as_str()))
        .max()
        .unwrap_or(0)
        .max(3);

    let mut out = String::new();
    out.push_str(&format!("input:  {}\n", result.input));
    out.push_str(&format!("output: {}\n\n", result.output));

    for step in &result.steps {
        let input = step.input.to_string();
        let flag = if step.unmapped { "  (unmapped)" } else { "" };
        out.push_str(&format!(
            "{:>4}  {}  {}  {}{}{}\n",
            step.index,
            pad(&input, 2),
            pad(&step.output, output_width),
            pad(step.rule.label(), 14),
            step.note.unwrap_or(""),
            flag,
        ));
    }

    out
}
