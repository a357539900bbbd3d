//! Valence lexicon scorer producing a normalized compound score.

use std::collections::HashMap;

use super::{is_negator, tokenize};
use crate::scorer::{CompoundScorer, CompoundScores};

/// Normalization constant: compound = s / sqrt(s^2 + ALPHA).
const ALPHA: f64 = 15.0;

/// Valence added by an intensifying booster word.
const BOOST: f64 = 0.293;

/// Multiplier applied to a word preceded by a negator.
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens are checked for boosters and negators.
const LOOKBACK: usize = 3;

/// Word valences on a `[-4.0, 4.0]` scale.
///
/// General sentiment words plus period vocabulary used about Chinese laborers.
pub(crate) const VALENCES: &[(&str, f64)] = &[
    // Favourable
    ("abiding", 1.0),
    ("admirable", 2.6),
    ("beneficial", 1.9),
    ("benefit", 1.7),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("diligent", 1.9),
    ("docile", 0.8),
    ("excellent", 2.7),
    ("faithful", 2.2),
    ("friendly", 2.2),
    ("frugal", 1.0),
    ("good", 1.9),
    ("great", 3.1),
    ("hardworking", 2.0),
    ("harmless", 1.3),
    ("honest", 2.3),
    ("industrious", 1.9),
    ("inoffensive", 1.2),
    ("intelligent", 2.0),
    ("kind", 2.4),
    ("loyal", 2.1),
    ("neat", 1.9),
    ("orderly", 1.4),
    ("patient", 1.5),
    ("peaceable", 2.0),
    ("peaceful", 2.2),
    ("praise", 2.6),
    ("prosperity", 2.3),
    ("prosperous", 2.1),
    ("protect", 1.4),
    ("quiet", 0.9),
    ("reliable", 1.8),
    ("respectable", 1.9),
    ("skilled", 1.5),
    ("skillful", 1.9),
    ("sober", 1.2),
    ("steady", 1.2),
    ("thrifty", 1.4),
    ("trustworthy", 2.3),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("welcome", 2.0),
    ("welcomed", 2.0),
    ("worthy", 2.0),
    // Hostile
    ("cheap", -0.7),
    ("corrupt", -2.4),
    ("corruption", -2.6),
    ("crime", -2.5),
    ("criminal", -2.4),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("degraded", -2.2),
    ("degrading", -2.2),
    ("disease", -2.0),
    ("diseased", -2.2),
    ("dirty", -2.0),
    ("evil", -3.4),
    ("exclude", -1.4),
    ("excluded", -1.2),
    ("exclusion", -1.3),
    ("filth", -2.7),
    ("filthy", -2.8),
    ("gambling", -1.0),
    ("hate", -2.7),
    ("hatred", -3.2),
    ("heathen", -1.9),
    ("horde", -1.3),
    ("hordes", -1.3),
    ("immoral", -2.5),
    ("inferior", -1.9),
    ("invasion", -1.9),
    ("menace", -2.3),
    ("opium", -1.3),
    ("outrage", -2.5),
    ("peril", -2.3),
    ("restrict", -1.2),
    ("restricted", -1.1),
    ("restriction", -1.0),
    ("riot", -2.6),
    ("servile", -1.5),
    ("slave", -2.6),
    ("slavery", -2.9),
    ("threat", -2.4),
    ("threaten", -2.2),
    ("threatened", -2.0),
    ("threatening", -2.3),
    ("threatens", -2.2),
    ("unassimilable", -1.5),
    ("vice", -2.1),
    ("vicious", -2.6),
];

/// Boosters: positive entries intensify, negative entries dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", BOOST),
    ("extremely", BOOST),
    ("exceedingly", BOOST),
    ("highly", BOOST),
    ("thoroughly", BOOST),
    ("utterly", BOOST),
    ("remarkably", BOOST),
    ("most", BOOST),
    ("so", BOOST),
    ("slightly", -BOOST),
    ("somewhat", -BOOST),
    ("barely", -BOOST),
    ("rather", -BOOST),
];

fn booster(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, value)| value)
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Rule-based valence scorer.
///
/// Boosters within three words adjust magnitude (decaying with distance), a
/// negator within three words flips and dampens, and `but` halves what came
/// before it while amplifying what follows.
#[derive(Debug, Clone)]
pub struct CompoundLexiconScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl CompoundLexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: VALENCES.iter().copied().collect(),
        }
    }

    fn valence(&self, tokens: &[String], i: usize) -> f64 {
        let Some(&base) = self.lexicon.get(tokens[i].as_str()) else {
            return 0.0;
        };

        let mut value = base;
        let preceding = || tokens[..i].iter().rev().take(LOOKBACK);
        for (distance, prev) in preceding().enumerate() {
            if let Some(boost) = booster(prev) {
                let scaled = match distance {
                    0 => boost,
                    1 => boost * 0.95,
                    _ => boost * 0.9,
                };
                value += if value > 0.0 { scaled } else { -scaled };
            }
        }

        if preceding().any(|t| is_negator(t)) {
            value *= NEGATION_SCALAR;
        }
        value
    }
}

impl Default for CompoundLexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundScorer for CompoundLexiconScorer {
    fn compound(&self, text: &str) -> CompoundScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return CompoundScores::default();
        }

        let mut valences: Vec<f64> = (0..tokens.len()).map(|i| self.valence(&tokens, i)).collect();

        if let Some(pivot) = tokens.iter().position(|t| t == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let sum: f64 = valences.iter().sum();

        let mut pos_sum = 0.0_f64;
        let mut neg_sum = 0.0_f64;
        let mut neu_count = 0_usize;
        for &v in &valences {
            if v > 0.0 {
                pos_sum += v + 1.0;
            } else if v < 0.0 {
                neg_sum += v - 1.0;
            } else {
                neu_count += 1;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let neu_sum = neu_count as f64;
        let total = pos_sum + neg_sum.abs() + neu_sum;

        CompoundScores {
            compound: normalize(sum),
            pos: pos_sum / total,
            neg: neg_sum.abs() / total,
            neu: neu_sum / total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> CompoundScores {
        CompoundLexiconScorer::new().compound(text)
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(score(""), CompoundScores::default());
    }

    #[test]
    fn unknown_text_is_neutral() {
        let s = score("the ship arrived at the wharf");
        assert_eq!(s.compound, 0.0);
        assert!((s.neu - 1.0).abs() < 1e-12);
    }

    #[test]
    fn favourable_words_score_positive() {
        let s = score("industrious and peaceful");
        // 1.9 + 2.2 = 4.1 -> 4.1 / sqrt(4.1^2 + 15)
        let expected = 4.1 / (4.1_f64 * 4.1 + 15.0).sqrt();
        assert!((s.compound - expected).abs() < 1e-12, "got {}", s.compound);
    }

    #[test]
    fn hostile_words_score_negative() {
        let s = score("filthy habits and moral corruption");
        assert!(s.compound < -0.05, "got {}", s.compound);
        assert!(s.neg > s.pos);
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(score("they are peaceful").compound > 0.0);
        assert!(score("they are not peaceful").compound < 0.0);
        assert!(score("they aren't peaceful").compound < 0.0);
    }

    #[test]
    fn booster_intensifies() {
        assert!(score("very peaceful").compound > score("peaceful").compound);
        assert!(score("very filthy").compound < score("filthy").compound);
    }

    #[test]
    fn dampener_softens() {
        assert!(score("somewhat peaceful").compound < score("peaceful").compound);
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let s = score("honest but filthy");
        assert!(s.compound < 0.0, "got {}", s.compound);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        assert!(score("peaceful!").compound > 0.0);
    }

    #[test]
    fn compound_stays_bounded() {
        let text = "evil hatred slavery evil hatred slavery evil hatred slavery filthy";
        let s = score(text);
        assert!(s.compound >= -1.0 && s.compound < -0.9, "got {}", s.compound);
    }

    #[test]
    fn proportions_sum_to_one() {
        let s = score("the industrious heathen worked quietly");
        assert!((s.pos + s.neg + s.neu - 1.0).abs() < 1e-12);
    }
}
