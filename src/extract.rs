//! JSON candidate recovery from free-form model output.
//!
//! Models are asked for JSON-only output but routinely wrap it in prose or
//! markdown fences. This module runs a two-phase scan over the raw text and
//! degrades to a `raw_output` escape hatch when no object can be recovered.

use serde_json::{Map, Value};

/// Key under which unparseable model output is preserved.
pub const RAW_OUTPUT_KEY: &str = "raw_output";

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Locate a JSON candidate inside raw model text.
///
/// Phase one looks for the first ```json fenced block and takes its contents.
/// Phase two, only when no fence is present, takes the greedy span from the
/// first `{` to the last `}`. Nested objects and multiple fenced blocks are
/// a known limitation of the greedy scan; the first match wins.
pub fn extract_json_candidate(text: &str) -> Option<&str> {
    fenced_block(text).or_else(|| brace_span(text))
}

fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE_OPEN)?;
    let inner = &text[start + FENCE_OPEN.len()..];
    let end = inner.find(FENCE_CLOSE)?;
    Some(inner[..end].trim())
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Coerce raw model text into a JSON object.
///
/// If a candidate is found and parses to an object, that object is returned
/// as-is. Anything else (no candidate, parse failure, non-object JSON) yields
/// `{"raw_output": <text, unchanged>}`. A fenced block that fails to parse
/// does not fall through to the brace phase.
pub fn coerce_object(text: &str) -> Map<String, Value> {
    if let Some(candidate) = extract_json_candidate(text) {
        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => return map,
            Ok(other) => {
                tracing::warn!(kind = value_kind(&other), "model output parsed to non-object JSON");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse JSON candidate");
            }
        }
    }
    raw_fallback(text)
}

fn raw_fallback(text: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(RAW_OUTPUT_KEY.to_string(), Value::String(text.to_string()));
    map
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_block_wins_over_surrounding_prose() {
        let text = "Here are the facts you asked for:\n```json\n{\"services\": \"consulting\"}\n```\nLet me know if you need more.";
        let map = coerce_object(text);
        assert_eq!(map.get("services").unwrap(), "consulting");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn fenced_block_without_language_tag_is_not_a_fence_match() {
        // Plain ``` fences skip phase one, but the brace phase still finds
        // the object inside.
        let text = "```\n{\"a\": 1}\n```";
        let map = coerce_object(text);
        assert_eq!(map.get("a").unwrap(), 1);
    }

    #[test]
    fn first_fence_wins_when_there_are_several() {
        let text = "```json\n{\"first\": true}\n```\nand also\n```json\n{\"second\": true}\n```";
        let map = coerce_object(text);
        assert!(map.contains_key("first"));
        assert!(!map.contains_key("second"));
    }

    #[test]
    fn brace_span_is_greedy_first_to_last() {
        let candidate = extract_json_candidate("noise {\"k\": {\"nested\": 1}} trailing").unwrap();
        assert_eq!(candidate, "{\"k\": {\"nested\": 1}}");
    }

    #[test]
    fn bare_object_parses() {
        let map = coerce_object("{\"subject\": \"Hi\", \"body\": \"There\"}");
        assert_eq!(map.get("subject").unwrap(), "Hi");
    }

    #[test]
    fn no_candidate_yields_raw_output() {
        let text = "I could not find anything useful about this company.";
        let map = coerce_object(text);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(RAW_OUTPUT_KEY).unwrap(), text);
    }

    #[test]
    fn unparseable_candidate_yields_raw_output_unchanged() {
        let text = "result: {not json at all}";
        let map = coerce_object(text);
        assert_eq!(map.get(RAW_OUTPUT_KEY).unwrap(), text);
    }

    #[test]
    fn bad_fence_does_not_fall_through_to_braces() {
        // The fence contains garbage, yet a perfectly good object follows.
        // The algorithm takes one parse attempt only.
        let text = "```json\nnope\n```\n{\"ok\": true}";
        let map = coerce_object(text);
        assert_eq!(map.get(RAW_OUTPUT_KEY).unwrap(), text);
    }

    #[test]
    fn non_object_json_degrades() {
        let text = "[1, 2, 3]";
        let map = coerce_object(text);
        assert_eq!(map.get(RAW_OUTPUT_KEY).unwrap(), text);
    }

    #[test]
    fn unclosed_brace_has_no_candidate() {
        assert!(extract_json_candidate("} backwards {").is_none());
        assert!(extract_json_candidate("only an opener {").is_none());
    }
}
