//! Rule-based lexicon scorers tuned to 19th-century newspaper vocabulary.

mod compound;
mod pattern;

pub use compound::CompoundLexiconScorer;
pub use pattern::PatternPolarityScorer;

/// Words that invert the sentiment of what follows.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "nowhere", "cannot", "without",
    "hardly", "scarcely",
];

/// Split text into lowercase words with surrounding punctuation removed.
///
/// Inner apostrophes survive so contractions such as `don't` stay one token.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

pub(crate) fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}
