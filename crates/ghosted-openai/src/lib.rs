//! ghosted-openai
//!
//! Chat-completion calls against an OpenAI-compatible endpoint. Thin
//! wrapper: one request, first choice, no retries.

pub mod client;
pub mod error;

pub use client::{CompletionClient, Completions, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::CompletionError;
