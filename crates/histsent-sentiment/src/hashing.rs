//! In-process bag-of-words embedder based on feature hashing.

use sha2::{Digest, Sha256};

use crate::embeddings::Embedder;
use crate::error::SentimentError;

/// Function words dropped before hashing so they do not dominate overlap.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "by", "for", "from", "had", "has", "have",
    "in", "is", "it", "its", "of", "on", "or", "our", "that", "the", "their", "them", "these",
    "they", "this", "those", "to", "was", "we", "were", "which", "with",
];

/// Deterministic feature-hashing embedder.
///
/// Each lowercase word (minus stop words) is hashed with SHA-256 into one of
/// `dim` buckets; the bucket counts are L2-normalized. Cosine similarity
/// between two vectors is then word-overlap similarity, always in `[0.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "embedding dimension must be non-zero");
        Self { dim }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn bucket(&self, word: &str) -> usize {
        let hash = Sha256::digest(word.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash[..8]);
        let value = u64::from_le_bytes(head);
        let dim = u64::try_from(self.dim).unwrap_or(u64::MAX);
        usize::try_from(value % dim).unwrap_or(0)
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];
        for word in text.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            let word = word.to_lowercase();
            if STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            vector[self.bucket(&word)] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(4096)
    }
}

impl Embedder for HashingEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, SentimentError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::cosine_similarity;

    fn embed(embedder: &HashingEmbedder, text: &str) -> Vec<f32> {
        embedder.embed(&[text]).unwrap().remove(0)
    }

    #[test]
    fn vectors_have_configured_dimension() {
        let embedder = HashingEmbedder::new(128);
        assert_eq!(embed(&embedder, "heathen Chinese").len(), 128);
    }

    #[test]
    fn vectors_are_unit_length() {
        let embedder = HashingEmbedder::default();
        let v = embed(&embedder, "industrious and peaceful workers");
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn stop_words_only_yields_zero_vector() {
        let embedder = HashingEmbedder::default();
        let v = embed(&embedder, "the and of to");
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn embedding_is_deterministic_and_case_insensitive() {
        let embedder = HashingEmbedder::default();
        assert_eq!(embed(&embedder, "Yellow Peril"), embed(&embedder, "yellow peril"));
    }

    #[test]
    fn identical_word_sets_have_similarity_one() {
        let embedder = HashingEmbedder::default();
        let a = embed(&embedder, "faithful servants");
        let b = embed(&embedder, "the faithful servants!");
        let sim = cosine_similarity(&a, &b);
        assert!((sim - 1.0).abs() < 1e-6, "similarity was {sim}");
    }

    #[test]
    fn one_batch_entry_per_input() {
        let embedder = HashingEmbedder::new(64);
        let out = embedder.embed(&["a", "b c", ""]).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_dimension_panics() {
        let _ = HashingEmbedder::new(0);
    }
}
