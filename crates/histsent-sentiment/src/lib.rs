//! Consensus sentiment scoring for historical newspaper coverage of Chinese laborers.
//!
//! Three independent signals run over the same text: embedding similarity to a
//! reference corpus of period phrases, a compound valence lexicon, and a
//! polarity/subjectivity lexicon. [`ConsensusEngine`] labels each, fuses the
//! raw scores with fixed weights, and reports whether the methods agreed.
//! [`ContextExtractor`] pulls text windows around period terms such as
//! "coolie" or "celestial".

pub mod consensus;
pub mod context;
pub mod corpus;
pub mod embeddings;
pub mod error;
pub mod hashing;
pub mod lexicon;
pub mod scorer;
pub mod similarity;
pub mod types;

pub use consensus::{fused_label, ConsensusEngine};
pub use context::{extract_contexts, ContextExtractor, CONTEXT_TERMS, DEFAULT_WINDOW};
pub use corpus::ReferenceCorpus;
pub use embeddings::{Embedder, TeiEmbedder};
pub use error::SentimentError;
pub use hashing::HashingEmbedder;
pub use lexicon::{CompoundLexiconScorer, PatternPolarityScorer};
pub use scorer::{
    CompoundScorer, CompoundScores, PolarityScorer, PolarityScores, Similarity, SimilarityScorer,
};
pub use similarity::{cosine_similarity, EmbeddingSimilarity};
pub use types::{ConsensusResult, ContextMatch, Method, MethodDetails, MethodResult, Sentiment};
