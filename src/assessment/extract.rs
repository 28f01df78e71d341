//! Pulling structured assessment state out of a prose agent reply.
//!
//! The agent embeds a JSON object somewhere inside its final summary text.
//! We take the widest brace-delimited span (first `{` through last `}`),
//! parse it, and project the `category_results` object into
//! [`AssessmentState`](super::AssessmentState). A reply with no span, an
//! unparseable span, or no `category_results` yields `None` and the caller
//! keeps its previous state.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::state::AssessmentState;

static JSON_SPAN: Lazy<Regex> = Lazy::new(|| {
    // (?s) lets `.` cross newlines so the span can cover a pretty-printed
    // object. Greedy on purpose: first `{` to last `}`.
    Regex::new(r"(?s)\{.*\}").expect("json span regex")
});

/// Extract assessment state from a final summary, if it carries any.
pub fn extract_assessment_data(content: &str) -> Option<AssessmentState> {
    let span = JSON_SPAN.find(content)?;
    let parsed: Value = match serde_json::from_str(span.as_str()) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!("embedded JSON span failed to parse: {err}");
            return None;
        }
    };
    let results = parsed.get("category_results")?;
    serde_json::from_value(results.clone()).ok()
}
