//! Weighted consensus over the three sentiment signals.
//!
//! Each method's raw score is labelled with that method's own thresholds
//! ([`Method::label`]); the raw scores are then fused with fixed weights
//! ([`Method::weight`]) without rescaling. The fused label and the agreement
//! flag are computed independently of each other.

use std::collections::BTreeMap;

use histsent_core::{AppConfig, EmbedderKind};

use crate::context::{ContextExtractor, DEFAULT_WINDOW};
use crate::corpus::ReferenceCorpus;
use crate::embeddings::TeiEmbedder;
use crate::error::SentimentError;
use crate::hashing::HashingEmbedder;
use crate::lexicon::{CompoundLexiconScorer, PatternPolarityScorer};
use crate::scorer::{CompoundScorer, PolarityScorer, SimilarityScorer};
use crate::similarity::EmbeddingSimilarity;
use crate::types::{ConsensusResult, ContextMatch, Method, MethodDetails, MethodResult, Sentiment};

/// Texts shorter than this (after trimming) skip the similarity scorer.
pub const MIN_SIMILARITY_CHARS: usize = 10;

/// Fused scores strictly beyond `±FUSED_THRESHOLD` are non-neutral.
pub const FUSED_THRESHOLD: f64 = 0.05;

/// Label for a fused score. The bounds are exclusive: exactly `±0.05` is neutral.
#[must_use]
pub fn fused_label(score: f64) -> Sentiment {
    if score > FUSED_THRESHOLD {
        Sentiment::Positive
    } else if score < -FUSED_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Runs the three scorers over a text and fuses their verdicts.
///
/// Holds the reference embeddings (inside the similarity scorer) for its
/// whole lifetime. All methods take `&self`, so one engine can be shared
/// across threads.
pub struct ConsensusEngine {
    similarity: Box<dyn SimilarityScorer>,
    compound: Box<dyn CompoundScorer>,
    polarity: Box<dyn PolarityScorer>,
    contexts: ContextExtractor,
}

impl ConsensusEngine {
    #[must_use]
    pub fn new(
        similarity: impl SimilarityScorer + 'static,
        compound: impl CompoundScorer + 'static,
        polarity: impl PolarityScorer + 'static,
    ) -> Self {
        Self {
            similarity: Box::new(similarity),
            compound: Box::new(compound),
            polarity: Box::new(polarity),
            contexts: ContextExtractor::new(DEFAULT_WINDOW),
        }
    }

    /// Engine with the built-in lexicons and the given similarity scorer.
    #[must_use]
    pub fn with_similarity(similarity: impl SimilarityScorer + 'static) -> Self {
        Self::new(
            similarity,
            CompoundLexiconScorer::new(),
            PatternPolarityScorer::new(),
        )
    }

    /// Engine backed by the in-process hashing embedder and the historical corpus.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Embedding`] if `dim` is zero, or any error
    /// from embedding the reference corpus.
    pub fn local(dim: usize) -> Result<Self, SentimentError> {
        if dim == 0 {
            return Err(SentimentError::Embedding(
                "embedding dimension must be non-zero".to_string(),
            ));
        }
        let similarity =
            EmbeddingSimilarity::new(HashingEmbedder::new(dim), &ReferenceCorpus::historical())?;
        Ok(Self::with_similarity(similarity))
    }

    /// Build the engine described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the embedding backend cannot be reached or
    /// the reference corpus cannot be embedded.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let engine = match config.embedder {
            EmbedderKind::Local => Self::local(config.embed_dim)?,
            EmbedderKind::Tei => {
                let url = config.tei_url.as_deref().ok_or_else(|| {
                    SentimentError::Tei("TEI embedder selected without a URL".to_string())
                })?;
                let embedder = TeiEmbedder::new(url, config.tei_timeout())?;
                let similarity =
                    EmbeddingSimilarity::new(embedder, &ReferenceCorpus::historical())?;
                Self::with_similarity(similarity)
            }
        };

        tracing::info!(
            embedder = %config.embedder,
            context_window = config.context_window,
            "consensus engine ready"
        );
        Ok(engine.with_context_window(config.context_window))
    }

    #[must_use]
    pub fn with_context_window(mut self, window: usize) -> Self {
        self.contexts = ContextExtractor::new(window);
        self
    }

    /// Classify `text` with all three methods and fuse the results.
    ///
    /// Never fails: degenerate input and similarity backend errors both
    /// degrade to neutral, zero-confidence method results.
    #[must_use]
    pub fn classify(&self, text: &str) -> ConsensusResult {
        let similarity = self.score_similarity(text);
        let compound = self.score_compound(text);
        let polarity = self.score_polarity(text);

        let score = Method::Similarity.weight() * similarity.score
            + Method::Compound.weight() * compound.score
            + Method::Polarity.weight() * polarity.score;
        let sentiment = fused_label(score);
        let agreement = similarity.sentiment == compound.sentiment
            && compound.sentiment == polarity.sentiment;

        let contexts = self.contexts.extract(text);

        tracing::debug!(
            %sentiment,
            score,
            agreement,
            contexts = contexts.len(),
            "classified text"
        );

        let methods = BTreeMap::from([
            (Method::Similarity, similarity),
            (Method::Compound, compound),
            (Method::Polarity, polarity),
        ]);

        ConsensusResult {
            sentiment,
            score,
            agreement,
            contexts,
            methods,
        }
    }

    /// Similarity method: positive minus negative best-match similarity.
    #[must_use]
    pub fn score_similarity(&self, text: &str) -> MethodResult {
        if text.trim().chars().count() < MIN_SIMILARITY_CHARS {
            return MethodResult::neutral(Method::Similarity);
        }

        let sim = match self.similarity.similarity(text) {
            Ok(sim) => sim,
            Err(e) => {
                tracing::warn!(error = %e, "similarity scorer failed; treating as neutral");
                return MethodResult::neutral(Method::Similarity);
            }
        };

        let score = sim.positive - sim.negative;
        MethodResult {
            method: Method::Similarity,
            sentiment: Method::Similarity.label(score),
            score,
            confidence: sim.positive.max(sim.negative),
            details: Some(MethodDetails::Similarity {
                positive_similarity: sim.positive,
                negative_similarity: sim.negative,
            }),
        }
    }

    /// Compound lexicon method. Confidence is the score's magnitude.
    #[must_use]
    pub fn score_compound(&self, text: &str) -> MethodResult {
        if text.is_empty() {
            return MethodResult::neutral(Method::Compound);
        }

        let scores = self.compound.compound(text);
        MethodResult {
            method: Method::Compound,
            sentiment: Method::Compound.label(scores.compound),
            score: scores.compound,
            confidence: scores.compound.abs(),
            details: Some(MethodDetails::Compound {
                pos: scores.pos,
                neg: scores.neg,
                neu: scores.neu,
            }),
        }
    }

    /// Polarity lexicon method. Confidence is the subjectivity, not the
    /// polarity magnitude.
    #[must_use]
    pub fn score_polarity(&self, text: &str) -> MethodResult {
        if text.is_empty() {
            return MethodResult::neutral(Method::Polarity);
        }

        let scores = self.polarity.polarity(text);
        MethodResult {
            method: Method::Polarity,
            sentiment: Method::Polarity.label(scores.polarity),
            score: scores.polarity,
            confidence: scores.subjectivity,
            details: Some(MethodDetails::Polarity {
                subjectivity: scores.subjectivity,
            }),
        }
    }

    /// Term windows using this engine's configured window size.
    #[must_use]
    pub fn extract_contexts(&self, text: &str) -> Vec<ContextMatch> {
        self.contexts.extract(text)
    }
}

#[cfg(test)]
#[path = "consensus_test.rs"]
mod tests;
