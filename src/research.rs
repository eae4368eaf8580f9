//! Structured-extraction step: search results in, CompanyInfo out.

use tracing::warn;

use crate::company::CompanyInfo;
use crate::extract::coerce_object;
use crate::llm::{LlmClient, Message};
use crate::prompt::{build_research_user_message, RESEARCH_SYSTEM_PROMPT};
use crate::search::SearchResult;

/// Extract structured company facts from search results.
///
/// With no results there is nothing to extract: the model is not invoked and
/// an empty CompanyInfo comes back. One chat call otherwise; the raw text is
/// coerced through the fence/brace scan, and a transport failure degrades to
/// an empty CompanyInfo rather than propagating.
pub async fn research(llm: &LlmClient, query: &str, results: &[SearchResult]) -> CompanyInfo {
    if results.is_empty() {
        return CompanyInfo::default();
    }

    let messages = [
        Message::system(RESEARCH_SYSTEM_PROMPT),
        Message::user(build_research_user_message(query, results)),
    ];

    match llm.chat(&messages).await {
        Ok(raw) => CompanyInfo::new(coerce_object(&raw)),
        Err(e) => {
            warn!(error = %e, query, "company research failed");
            CompanyInfo::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn empty_results_short_circuit_without_a_model_call() {
        // Any request would show up on this listener.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        let llm = LlmClient::new("key", "gpt-4o-mini")
            .unwrap()
            .with_base_url(base_url);

        let info = research(&llm, "Atelier Interiors", &[]).await;
        assert!(info.is_empty());

        let no_connection =
            tokio::time::timeout(Duration::from_millis(50), listener.accept()).await;
        assert!(no_connection.is_err(), "model endpoint was contacted");
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_empty_info() {
        let llm = LlmClient::new("key", "gpt-4o-mini")
            .unwrap()
            .with_base_url("http://127.0.0.1:1/v1");
        let results = vec![SearchResult {
            title: Some("Atelier Interiors".to_string()),
            url: Some("https://atelier.example".to_string()),
            snippet: None,
            source: "Google".to_string(),
        }];

        let info = research(&llm, "Atelier Interiors", &results).await;
        assert!(info.is_empty());
    }
}
