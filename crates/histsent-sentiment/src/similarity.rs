//! Embedding-similarity scorer over the reference corpus.

use crate::corpus::ReferenceCorpus;
use crate::embeddings::Embedder;
use crate::error::SentimentError;
use crate::scorer::{Similarity, SimilarityScorer};

/// Cosine similarity of two vectors in `[-1.0, 1.0]`.
///
/// Returns `0.0` for empty, mismatched, or zero-magnitude inputs.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut mag_a = 0.0_f64;
    let mut mag_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(-1.0, 1.0)
}

/// Highest cosine similarity between `vector` and any of `references`.
fn best_match(vector: &[f32], references: &[Vec<f32>]) -> f64 {
    references
        .iter()
        .map(|r| cosine_similarity(vector, r))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Scores text by its closest reference phrase in each polarity class.
///
/// Reference phrases are embedded once, at construction.
pub struct EmbeddingSimilarity<E> {
    embedder: E,
    positive: Vec<Vec<f32>>,
    negative: Vec<Vec<f32>>,
}

impl<E: Embedder> EmbeddingSimilarity<E> {
    /// Embed the corpus with `embedder` and keep the vectors for later calls.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Embedding`] if either polarity class is empty
    /// or the embedder returns vectors of inconsistent dimension, and
    /// propagates any error from the embedder itself.
    pub fn new(embedder: E, corpus: &ReferenceCorpus) -> Result<Self, SentimentError> {
        if corpus.positive().is_empty() || corpus.negative().is_empty() {
            return Err(SentimentError::Embedding(
                "reference corpus needs at least one phrase per class".to_string(),
            ));
        }

        let positive_refs: Vec<&str> = corpus.positive().iter().map(String::as_str).collect();
        let negative_refs: Vec<&str> = corpus.negative().iter().map(String::as_str).collect();
        let positive = embedder.embed(&positive_refs)?;
        let negative = embedder.embed(&negative_refs)?;

        if positive.len() != positive_refs.len() || negative.len() != negative_refs.len() {
            return Err(SentimentError::Embedding(format!(
                "embedder returned {} + {} vectors for {} + {} reference phrases",
                positive.len(),
                negative.len(),
                positive_refs.len(),
                negative_refs.len()
            )));
        }

        let dim = positive[0].len();
        if dim == 0 || positive.iter().chain(&negative).any(|v| v.len() != dim) {
            return Err(SentimentError::Embedding(
                "reference embeddings have inconsistent dimensions".to_string(),
            ));
        }

        tracing::info!(
            positive = positive.len(),
            negative = negative.len(),
            dim,
            "embedded reference corpus"
        );

        Ok(Self {
            embedder,
            positive,
            negative,
        })
    }

    /// Dimension of the cached reference embeddings.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.positive[0].len()
    }
}

impl<E: Embedder> SimilarityScorer for EmbeddingSimilarity<E> {
    fn similarity(&self, text: &str) -> Result<Similarity, SentimentError> {
        let vector = self
            .embedder
            .embed(&[text])?
            .into_iter()
            .next()
            .ok_or_else(|| SentimentError::Embedding("embedder returned no vector".to_string()))?;

        if vector.len() != self.dim() {
            return Err(SentimentError::Embedding(format!(
                "text embedding has dimension {}, reference embeddings have {}",
                vector.len(),
                self.dim()
            )));
        }

        Ok(Similarity {
            positive: best_match(&vector, &self.positive),
            negative: best_match(&vector, &self.negative),
        })
    }
}
