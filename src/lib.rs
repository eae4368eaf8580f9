//! # Prospecta
//!
//! A CLI assistant that researches a company and drafts B2B outreach emails.
//!
//! ## Pipeline
//!
//! - **Search**: one SERP request through a fetch proxy, normalized results
//! - **Research**: structured company facts coerced from model output
//! - **Draft**: a category-styled {subject, body} email, strictly validated
//!
//! Every stage degrades on failure (empty results, raw-text fallback); no
//! malformed model output can crash the pipeline.

pub mod category;
pub mod company;
pub mod config;
pub mod email;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod research;
pub mod search;

pub use category::{Category, ALL_CATEGORIES};
pub use company::CompanyInfo;
pub use config::Config;
pub use email::{Drafted, EmailDraft};
pub use search::{SearchEngine, SearchResult};
