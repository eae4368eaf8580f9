//! Prompt text for the two pipeline steps.
//!
//! The research prompt pins the JSON shape the extraction step expects; the
//! drafting prompt carries the hard rules (seller writes to buyer, generic
//! signature) and gets the per-category guidance appended at build time.

use crate::category::Category;
use crate::company::CompanyInfo;
use crate::search::SearchResult;

/// System prompt for the structured-extraction step.
pub const RESEARCH_SYSTEM_PROMPT: &str = r#"You are a helpful research assistant that extracts details about a given company.
You will receive web search results (website, LinkedIn, Crunchbase, etc.).
Your job is to summarize structured company details in JSON.

If information is missing from the results, make reasonable assumptions based on the type of company (e.g. B2B SaaS, E-commerce, Manufacturing, IT).

Guidelines for each field:
- "services": what services they provide (e.g. logistics solutions, SaaS platform, consulting, IT services).
- "products": their main product types or offerings (e.g. B2B commerce platform, consumer goods, AI tools).
- "market_segment": the industry plus customer type (e.g. "B2B commerce software for wholesalers and distributors").
- "competitors": likely competitors (e.g. Shopify Plus, Salesforce Commerce Cloud, Magento for ecommerce).
- "strengths_weaknesses": strengths like scalability, niche focus, strong brand; weaknesses like limited market presence, high competition, dependency on investors.
- "company_url": the official company website if available.

Output only JSON in this exact format:

{
  "services": "...",
  "products": "...",
  "market_segment": "...",
  "competitors": "...",
  "strengths_weaknesses": "...",
  "company_url": "..."
}"#;

/// Fixed portion of the drafting system prompt. The selected category and its
/// guidance are appended by [`build_email_system_prompt`].
const EMAIL_SYSTEM_PROMPT_BASE: &str = r#"You are a helpful email crafting assistant that creates professional B2B cold emails.
The input is structured research data about a target company (the buyer).
You are writing emails to the buyer on behalf of the seller's company (us).

Important rules:
- The buyer is the recipient. Do NOT write as if the buyer is sending the email.
- The sender is always our company (the seller) pitching products/services.
- End the email with a polite generic signature (e.g. "Warm regards, The Sales Team").
- NEVER use the buyer's company name in the signature.
- Always maintain a professional, persuasive, value-driven tone.

General formatting rules:
- Start with a professional greeting (e.g. "Dear [Company/Role],").
- Be concise and persuasive, tied to the buyer's industry and needs.
- Use proper line breaks for readability.
- End with a professional signature from our side (not the buyer's).

Output strictly valid JSON in this format:

{
  "subject": "<email subject>",
  "body": "<email body>"
}"#;

/// Build the drafting system prompt for one category.
pub fn build_email_system_prompt(category: Category) -> String {
    format!(
        "{}\n\nEmail category: {}\nStyle rules for this category: {}",
        EMAIL_SYSTEM_PROMPT_BASE,
        category.label(),
        category.guidance()
    )
}

/// Build the user message for the extraction step: the original query plus
/// the serialized search results.
pub fn build_research_user_message(query: &str, results: &[SearchResult]) -> String {
    let serialized =
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string());
    format!("Company to research: {query}\n\nSearch results:\n{serialized}")
}

/// Build the user message for the drafting step: the whole CompanyInfo.
pub fn build_draft_user_message(info: &CompanyInfo) -> String {
    format!("Research data about the buyer:\n{}", info.to_pretty_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn email_prompt_embeds_category_label_and_guidance() {
        let prompt = build_email_system_prompt(Category::Promotions);
        assert!(prompt.contains("Email category: promotions"));
        assert!(prompt.contains("Exclusive 20% Off"));
        assert!(prompt.contains("NEVER use the buyer's company name"));
    }

    #[test]
    fn research_message_embeds_query_and_every_result_field() {
        let results = vec![SearchResult {
            title: Some("Atelier Interiors - Home".to_string()),
            url: Some("https://atelier.example".to_string()),
            snippet: Some("Bespoke interior design studio".to_string()),
            source: "Google".to_string(),
        }];
        let msg = build_research_user_message("Atelier Interiors", &results);
        assert!(msg.contains("Company to research: Atelier Interiors"));
        assert!(msg.contains("Atelier Interiors - Home"));
        assert!(msg.contains("https://atelier.example"));
        assert!(msg.contains("Bespoke interior design studio"));
        assert!(msg.contains("Google"));
    }

    #[test]
    fn draft_message_embeds_company_fields() {
        let mut map = Map::new();
        map.insert("services".into(), "interior design".into());
        let msg = build_draft_user_message(&CompanyInfo::new(map));
        assert!(msg.contains("\"services\""));
        assert!(msg.contains("interior design"));
    }
}
