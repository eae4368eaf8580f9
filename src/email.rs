//! Email-drafting step and its output types.
//!
//! The draft is validated strictly against the two-field {subject, body}
//! schema; any shape failure hands the raw model text back instead of
//! erroring. Extra fields the model emits are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::category::Category;
use crate::company::CompanyInfo;
use crate::extract::extract_json_candidate;
use crate::llm::{LlmClient, Message};
use crate::prompt::{build_draft_user_message, build_email_system_prompt};

/// Sentinel returned when there is nothing to draft from.
pub const NO_COMPANY_INFO: &str = "No company info available to draft an email.";

/// A validated outbound email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Printable form: `"Subject: {subject}\n\n{body}"`.
    pub fn render(&self) -> String {
        format!("Subject: {}\n\n{}", self.subject, self.body)
    }
}

/// Outcome of the drafting step. Never an error.
#[derive(Debug, Clone)]
pub enum Drafted {
    /// Model output validated against the schema.
    Email(EmailDraft),
    /// Validation failed; the unmodified model text.
    Raw(String),
    /// No draft was produced (empty CompanyInfo, or the call failed).
    Unavailable(String),
}

impl Drafted {
    pub fn is_email(&self) -> bool {
        matches!(self, Drafted::Email(_))
    }
}

impl fmt::Display for Drafted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drafted::Email(draft) => f.write_str(&draft.render()),
            Drafted::Raw(text) => f.write_str(text),
            Drafted::Unavailable(reason) => f.write_str(reason),
        }
    }
}

/// Draft a marketing email for the researched company.
///
/// Empty CompanyInfo short-circuits to the [`NO_COMPANY_INFO`] sentinel
/// without invoking the model. Otherwise one chat call, candidate recovery
/// via the fence/brace scan, and strict {subject, body} validation.
pub async fn draft(llm: &LlmClient, info: &CompanyInfo, category: Category) -> Drafted {
    if info.is_empty() {
        return Drafted::Unavailable(NO_COMPANY_INFO.to_string());
    }

    let messages = [
        Message::system(build_email_system_prompt(category)),
        Message::user(build_draft_user_message(info)),
    ];

    match llm.chat(&messages).await {
        Ok(raw) => coerce_draft(&raw),
        Err(e) => {
            warn!(error = %e, category = %category, "email drafting failed");
            Drafted::Unavailable(format!("Email drafting failed: {e}"))
        }
    }
}

/// Validate raw model text into an EmailDraft, falling back to the raw text.
fn coerce_draft(raw: &str) -> Drafted {
    let Some(candidate) = extract_json_candidate(raw) else {
        warn!("no JSON candidate in draft output");
        return Drafted::Raw(raw.to_string());
    };

    match serde_json::from_str::<EmailDraft>(candidate) {
        Ok(draft) => Drafted::Email(draft),
        Err(e) => {
            warn!(error = %e, "draft output failed schema validation");
            Drafted::Raw(raw.to_string())
        }
    }
}
