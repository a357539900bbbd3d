use std::time::Duration;

/// Which embedding backend the similarity scorer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderKind {
    /// In-process feature-hashing embedder. No network access.
    Local,
    /// Text Embeddings Inference server reached over HTTP.
    Tei,
}

impl std::fmt::Display for EmbedderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedderKind::Local => write!(f, "local"),
            EmbedderKind::Tei => write!(f, "tei"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub embedder: EmbedderKind,
    /// Only set (and required) when `embedder` is [`EmbedderKind::Tei`].
    pub tei_url: Option<String>,
    pub tei_timeout_secs: u64,
    pub embed_dim: usize,
    pub context_window: usize,
    pub min_content_chars: usize,
    pub progress_every: usize,
    pub log_level: String,
}

impl AppConfig {
    #[must_use]
    pub fn tei_timeout(&self) -> Duration {
        Duration::from_secs(self.tei_timeout_secs)
    }
}
