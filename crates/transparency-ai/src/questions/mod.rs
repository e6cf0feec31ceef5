//! Follow-up question generation.
//!
//! The generator prefers an AI-composed question set from the configured
//! completion provider and falls back to the static category catalog whenever
//! the provider is unavailable or its output is unusable.

pub mod catalog;
mod generator;
mod gemini;
mod provider;

pub use catalog::QuestionCatalog;
pub use gemini::GeminiClient;
pub use generator::QuestionGenerator;
pub use provider::{CompletionProvider, ProviderError};
