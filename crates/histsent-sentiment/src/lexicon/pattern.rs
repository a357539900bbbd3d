//! Adjective-pattern scorer producing polarity and subjectivity.

use std::collections::HashMap;

use super::{is_negator, tokenize};
use crate::scorer::{PolarityScorer, PolarityScores};

/// Multiplier applied to an assessment preceded (within two words) by a negator.
const NEGATION_FACTOR: f64 = -0.5;

/// Maximum distance in words between a negator and the word it negates.
const NEGATION_REACH: usize = 2;

/// `(word, polarity, subjectivity)`; polarity in `[-1, 1]`, subjectivity in `[0, 1]`.
pub(crate) const ASSESSMENTS: &[(&str, f64, f64)] = &[
    // Favourable
    ("abiding", 0.3, 0.5),
    ("admirable", 0.8, 0.9),
    ("beneficial", 0.5, 0.6),
    ("cheerful", 0.7, 0.8),
    ("clean", 0.4, 0.7),
    ("diligent", 0.5, 0.6),
    ("docile", 0.2, 0.6),
    ("excellent", 1.0, 1.0),
    ("faithful", 0.6, 0.7),
    ("friendly", 0.4, 0.5),
    ("frugal", 0.2, 0.5),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("hardworking", 0.5, 0.6),
    ("harmless", 0.3, 0.6),
    ("honest", 0.6, 0.9),
    ("industrious", 0.5, 0.6),
    ("inoffensive", 0.3, 0.6),
    ("intelligent", 0.8, 0.9),
    ("kind", 0.6, 0.9),
    ("loyal", 0.5, 0.7),
    ("neat", 0.4, 0.7),
    ("orderly", 0.3, 0.5),
    ("patient", 0.4, 0.6),
    ("peaceable", 0.5, 0.7),
    ("peaceful", 0.5, 0.7),
    ("quiet", 0.2, 0.5),
    ("reliable", 0.5, 0.6),
    ("respectable", 0.5, 0.7),
    ("skilled", 0.4, 0.5),
    ("skillful", 0.5, 0.6),
    ("sober", 0.3, 0.5),
    ("steady", 0.3, 0.5),
    ("thrifty", 0.3, 0.6),
    ("trustworthy", 0.6, 0.8),
    ("useful", 0.3, 0.4),
    ("valuable", 0.5, 0.6),
    ("worthy", 0.5, 0.6),
    // Hostile
    ("cheap", -0.2, 0.6),
    ("corrupt", -0.6, 0.8),
    ("dangerous", -0.6, 0.9),
    ("degraded", -0.6, 0.8),
    ("degrading", -0.6, 0.8),
    ("diseased", -0.6, 0.7),
    ("dirty", -0.6, 0.8),
    ("evil", -1.0, 1.0),
    ("filthy", -0.8, 0.9),
    ("heathen", -0.5, 0.7),
    ("hostile", -0.6, 0.8),
    ("idle", -0.3, 0.5),
    ("immoral", -0.7, 0.9),
    ("inferior", -0.5, 0.8),
    ("lazy", -0.6, 0.9),
    ("menacing", -0.6, 0.8),
    ("restrict", -0.3, 0.4),
    ("restricted", -0.3, 0.4),
    ("servile", -0.4, 0.7),
    ("threatening", -0.6, 0.7),
    ("threatens", -0.6, 0.7),
    ("unassimilable", -0.5, 0.8),
    ("vicious", -0.8, 0.9),
    ("wretched", -0.9, 1.0),
];

/// Words that scale the assessment immediately after them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("exceedingly", 1.5),
    ("utterly", 1.5),
    ("most", 1.4),
    ("thoroughly", 1.4),
    ("highly", 1.3),
    ("remarkably", 1.3),
    ("quite", 1.1),
    ("rather", 0.9),
    ("somewhat", 0.8),
    ("slightly", 0.6),
];

fn intensifier(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, factor)| factor)
}

/// Averages the polarity and subjectivity of every known assessment word.
#[derive(Debug, Clone)]
pub struct PatternPolarityScorer {
    lexicon: HashMap<&'static str, (f64, f64)>,
}

impl PatternPolarityScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: ASSESSMENTS
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
        }
    }
}

impl Default for PatternPolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for PatternPolarityScorer {
    fn polarity(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        let mut assessments: Vec<(f64, f64)> = Vec::new();
        let mut negated_at: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            if is_negator(token) {
                negated_at = Some(i);
                continue;
            }
            let Some(&(mut polarity, mut subjectivity)) = self.lexicon.get(token.as_str()) else {
                continue;
            };

            if let Some(factor) = i.checked_sub(1).and_then(|j| intensifier(&tokens[j])) {
                polarity *= factor;
                subjectivity *= factor;
            }
            if negated_at.is_some_and(|n| i - n <= NEGATION_REACH) {
                polarity *= NEGATION_FACTOR;
            }

            assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
        }

        if assessments.is_empty() {
            return PolarityScores::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let n = assessments.len() as f64;
        PolarityScores {
            polarity: assessments.iter().map(|a| a.0).sum::<f64>() / n,
            subjectivity: assessments.iter().map(|a| a.1).sum::<f64>() / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> PolarityScores {
        PatternPolarityScorer::new().polarity(text)
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(score(""), PolarityScores::default());
    }

    #[test]
    fn no_assessments_returns_zero() {
        assert_eq!(score("the steamer landed at the wharf"), PolarityScores::default());
    }

    #[test]
    fn mean_over_assessments() {
        let s = score("industrious and peaceful");
        assert!((s.polarity - 0.5).abs() < 1e-12, "got {}", s.polarity);
        assert!((s.subjectivity - 0.65).abs() < 1e-12, "got {}", s.subjectivity);
    }

    #[test]
    fn intensifier_scales_next_word() {
        let s = score("very faithful");
        assert!((s.polarity - 0.78).abs() < 1e-12, "got {}", s.polarity);
        assert!((s.subjectivity - 0.91).abs() < 1e-12, "got {}", s.subjectivity);
    }

    #[test]
    fn intensified_values_are_clamped() {
        let s = score("extremely excellent");
        assert_eq!(s.polarity, 1.0);
        assert_eq!(s.subjectivity, 1.0);
    }

    #[test]
    fn negation_halves_and_flips() {
        let s = score("not honest");
        assert!((s.polarity + 0.3).abs() < 1e-12, "got {}", s.polarity);
    }

    #[test]
    fn negation_reaches_over_an_intensifier() {
        let s = score("not very honest");
        assert!(s.polarity < 0.0, "got {}", s.polarity);
    }

    #[test]
    fn negation_does_not_reach_far_words() {
        let s = score("not in the least honest");
        assert!(s.polarity > 0.0, "got {}", s.polarity);
    }

    #[test]
    fn hostile_words_score_negative() {
        let s = score("filthy and immoral");
        assert!(s.polarity < -0.1);
    }
}
