//! CompanyInfo - best-effort structured facts about a researched company.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extract::RAW_OUTPUT_KEY;

/// Structured company facts recovered from model output.
///
/// The shape is deliberately loose: a string-keyed JSON object with
/// recommended keys (`services`, `products`, `market_segment`, `competitors`,
/// `strengths_weaknesses`, `company_url`) none of which are required. When
/// coercion fails entirely the single key `raw_output` holds the unmodified
/// model text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInfo(pub Map<String, Value>);

impl CompanyInfo {
    /// Wrap an already-coerced JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The escape hatch: preserve unparseable model text verbatim.
    pub fn from_raw_text(text: &str) -> Self {
        let mut map = Map::new();
        map.insert(RAW_OUTPUT_KEY.to_string(), Value::String(text.to_string()));
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether coercion failed and only the raw text survived.
    pub fn is_raw_fallback(&self) -> bool {
        self.0.len() == 1 && self.0.contains_key(RAW_OUTPUT_KEY)
    }

    /// Pretty JSON for display and for embedding in the drafting prompt.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(CompanyInfo::default().is_empty());
    }

    #[test]
    fn raw_fallback_preserves_text_unchanged() {
        let info = CompanyInfo::from_raw_text("no structure here");
        assert!(info.is_raw_fallback());
        assert!(!info.is_empty());
        assert_eq!(info.0.get(RAW_OUTPUT_KEY).unwrap(), "no structure here");
    }

    #[test]
    fn structured_info_is_not_raw_fallback() {
        let mut map = Map::new();
        map.insert("services".into(), "interior design".into());
        map.insert("company_url".into(), "atelier.example".into());
        let info = CompanyInfo::new(map);
        assert!(!info.is_raw_fallback());
        assert!(info.to_pretty_json().contains("interior design"));
    }
}
