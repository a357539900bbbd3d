//! Text embedding backends for the similarity scorer.

use std::time::Duration;

use serde::Serialize;

use crate::error::SentimentError;

/// Maximum number of texts per /embed call.
const BATCH_SIZE: usize = 64;

/// Maps texts into a shared fixed-dimension vector space.
pub trait Embedder: Send + Sync {
    /// Embed every text, returning one vector per input in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the backend fails or returns a malformed response.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SentimentError>;
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SentimentError> {
        (**self).embed(texts)
    }
}

/// TEI (Text Embeddings Inference) HTTP client.
///
/// Uses the blocking reqwest client: scoring is synchronous from the
/// engine's point of view.
pub struct TeiEmbedder {
    client: reqwest::blocking::Client,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

impl TeiEmbedder {
    /// Create a new `TeiEmbedder` pointed at `tei_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built.
    pub fn new(tei_url: &str, timeout: Duration) -> Result<Self, SentimentError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/embed", tei_url.trim_end_matches('/')),
        })
    }
}

impl Embedder for TeiEmbedder {
    /// Texts are batched into groups of [`BATCH_SIZE`] (64) per request.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Tei`] if the request fails, TEI answers with a
    /// non-success status, or the number of vectors does not match the inputs.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SentimentError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = EmbedRequest { inputs: chunk };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .map_err(|e| SentimentError::Tei(format!("TEI request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(SentimentError::Tei(format!(
                    "TEI returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .map_err(|e| SentimentError::Tei(format!("TEI response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(SentimentError::Tei(format!(
                    "TEI returned {} embeddings for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        tracing::debug!(count = all_embeddings.len(), "embedded texts via TEI");
        Ok(all_embeddings)
    }
}
