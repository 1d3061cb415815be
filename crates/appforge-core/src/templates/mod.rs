//! Remote template text retrieval
//!
//! This module provides:
//! - `TemplateRef` - a fetchable file plus its failure behavior
//! - `TemplateFetcher` - fetch-or-fallback retrieval that never errors

pub mod fetcher;

pub use fetcher::{FetchedText, TemplateFetcher, TemplateRef, TEMPLATE_BASE_ENV};
