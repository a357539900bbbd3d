use std::collections::BTreeMap;

use serde::Serialize;

/// Three-way sentiment label shared by every scoring method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three independent scoring methods fused by the consensus engine.
///
/// Ordering follows the fusion order: similarity, compound lexicon, polarity lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Embedding similarity against the historical reference corpus.
    Similarity,
    /// Valence lexicon producing a compound score in `[-1.0, 1.0]`.
    Compound,
    /// Pattern lexicon producing polarity plus subjectivity.
    Polarity,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Similarity, Method::Compound, Method::Polarity];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Similarity => "similarity",
            Method::Compound => "compound",
            Method::Polarity => "polarity",
        }
    }

    /// Fixed fusion weight. The three weights sum to `1.0`.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Method::Similarity => 0.5,
            Method::Compound | Method::Polarity => 0.25,
        }
    }

    /// Map a raw score on this method's own scale to a label.
    ///
    /// The compound lexicon uses closed bounds at `±0.05`; the other two use
    /// open bounds at `±0.1`.
    #[must_use]
    pub fn label(self, score: f64) -> Sentiment {
        match self {
            Method::Compound => {
                if score >= 0.05 {
                    Sentiment::Positive
                } else if score <= -0.05 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
            Method::Similarity | Method::Polarity => {
                if score > 0.1 {
                    Sentiment::Positive
                } else if score < -0.1 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method-specific auxiliary values reported next to the raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodDetails {
    Similarity {
        positive_similarity: f64,
        negative_similarity: f64,
    },
    Compound {
        pos: f64,
        neg: f64,
        neu: f64,
    },
    Polarity {
        subjectivity: f64,
    },
}

/// Output of a single scoring method for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    pub method: Method,
    pub sentiment: Sentiment,
    /// Raw score on the method's own scale.
    pub score: f64,
    /// In `[0.0, 1.0]`.
    pub confidence: f64,
    /// `None` when the method short-circuited without running its scorer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MethodDetails>,
}

impl MethodResult {
    /// Neutral, zero-score, zero-confidence result used for degenerate input.
    #[must_use]
    pub fn neutral(method: Method) -> Self {
        Self {
            method,
            sentiment: Sentiment::Neutral,
            score: 0.0,
            confidence: 0.0,
            details: None,
        }
    }
}

/// A domain term found in the text plus the text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextMatch {
    /// The matched text as it appears in the source (original casing).
    pub term: String,
    /// Byte offset of the match within the source text.
    pub offset: usize,
    /// Window of up to `window_size` characters on each side of the match.
    pub context: String,
    /// Up to 50 characters immediately before the match.
    pub preceding: String,
    /// Up to 50 characters immediately after the match.
    pub following: String,
}

/// Fused verdict for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusResult {
    pub sentiment: Sentiment,
    /// Weighted sum of the raw method scores.
    pub score: f64,
    /// `true` iff all three methods produced the same label.
    pub agreement: bool,
    pub contexts: Vec<ContextMatch>,
    pub methods: BTreeMap<Method, MethodResult>,
}

impl ConsensusResult {
    #[must_use]
    pub fn contexts_found(&self) -> usize {
        self.contexts.len()
    }

    /// Raw score reported by one method. `0.0` if the method is absent.
    #[must_use]
    pub fn method_score(&self, method: Method) -> f64 {
        self.methods.get(&method).map_or(0.0, |m| m.score)
    }

    /// The first context window, if any term matched.
    #[must_use]
    pub fn first_context(&self) -> Option<&str> {
        self.contexts.first().map(|c| c.context.as_str())
    }
}
