use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("completion provider rejected the request: {0}")]
    Rejected(String),
}

/// Capability to turn a text prompt into free text.
///
/// Callers must treat every outcome short of usable text, including an `Ok`
/// empty string, as a fallback trigger; implementations are free to fail but
/// never to panic.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Side-effecting availability probe. Must not fail; probes that error
    /// report `false`.
    async fn is_available(&self) -> bool;

    /// Generate free text for a prompt. An empty string is a valid response.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
