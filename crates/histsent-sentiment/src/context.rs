//! Extraction of text windows around period terms for Chinese laborers.

use regex::Regex;

use crate::types::ContextMatch;

/// Terms searched for, in reporting order.
///
/// Each term is matched independently, so `heathen chinese` also yields a
/// separate `chinese` match for the same span.
pub const CONTEXT_TERMS: &[&str] = &[
    "coolie",
    "chinese",
    "chinaman",
    "mongolian",
    "celestial",
    "heathen chinese",
    "yellow peril",
];

/// Default number of characters kept on each side of a match.
pub const DEFAULT_WINDOW: usize = 150;

/// Characters kept in `preceding` / `following`.
const EDGE_CHARS: usize = 50;

/// Byte index `n` characters before `idx`, or `0` if fewer exist.
fn back_chars(text: &str, idx: usize, n: usize) -> usize {
    text[..idx]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(idx, |(i, _)| i)
}

/// Byte index `n` characters after `idx`, or `text.len()` if fewer exist.
fn forward_chars(text: &str, idx: usize, n: usize) -> usize {
    text[idx..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| idx + i)
}

/// Case-insensitive literal term scanner.
///
/// Windows are measured in characters, not bytes, so multi-byte text is
/// never split inside a code point.
#[derive(Debug, Clone)]
pub struct ContextExtractor {
    patterns: Vec<Regex>,
    window: usize,
}

impl ContextExtractor {
    #[must_use]
    pub fn new(window: usize) -> Self {
        let patterns = CONTEXT_TERMS
            .iter()
            .map(|term| {
                Regex::new(&format!("(?i){}", regex::escape(term)))
                    .expect("escaped literal is a valid regex")
            })
            .collect();
        Self { patterns, window }
    }

    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// All matches, grouped by term in [`CONTEXT_TERMS`] order and in
    /// document order within each term.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<ContextMatch> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut contexts = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                let (start, end) = (m.start(), m.end());
                let window_start = back_chars(text, start, self.window);
                let window_end = forward_chars(text, end, self.window);
                let preceding_start = back_chars(text, start, EDGE_CHARS);
                let following_end = forward_chars(text, end, EDGE_CHARS);

                contexts.push(ContextMatch {
                    term: m.as_str().to_string(),
                    offset: start,
                    context: text[window_start..window_end].to_string(),
                    preceding: text[preceding_start..start].to_string(),
                    following: text[end..following_end].to_string(),
                });
            }
        }
        contexts
    }
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

/// Convenience wrapper around [`ContextExtractor::extract`].
#[must_use]
pub fn extract_contexts(text: &str, window_size: usize) -> Vec<ContextMatch> {
    ContextExtractor::new(window_size).extract(text)
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
