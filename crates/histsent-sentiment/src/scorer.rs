//! Scorer interfaces consumed by the consensus engine.
//!
//! Each trait is one black-box signal. The engine only sees raw numbers;
//! labels and confidences are derived from them in [`crate::consensus`].

use crate::error::SentimentError;

/// Best-match cosine similarity of a text to each reference class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    /// In `[-1.0, 1.0]`.
    pub positive: f64,
    /// In `[-1.0, 1.0]`.
    pub negative: f64,
}

/// Compound valence plus the share of positive, negative and neutral words.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompoundScores {
    /// In `[-1.0, 1.0]`.
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

/// Polarity in `[-1.0, 1.0]` and subjectivity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Compares a text against the positive and negative reference phrases.
pub trait SimilarityScorer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the text cannot be embedded.
    fn similarity(&self, text: &str) -> Result<Similarity, SentimentError>;
}

/// Lexicon scorer on the compound scale.
pub trait CompoundScorer: Send + Sync {
    fn compound(&self, text: &str) -> CompoundScores;
}

/// Lexicon scorer on the polarity/subjectivity scale.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> PolarityScores;
}
