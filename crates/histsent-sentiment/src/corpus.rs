//! Reference phrases characterising favourable and hostile 19th-century
//! framing of Chinese laborers.

/// Phrases typical of favourable coverage.
pub const POSITIVE_REFERENCES: &[&str] = &[
    "industrious and peaceful",
    "quiet and law abiding",
    "steady and reliable laborers",
    "harmless and inoffensive people",
    "useful workers in the mines",
    "faithful servants",
    "patient and hardworking",
];

/// Phrases typical of hostile coverage.
pub const NEGATIVE_REFERENCES: &[&str] = &[
    "coolie labor",
    "cheap Mongolian labor",
    "threat to white labor",
    "drives down wages",
    "heathen Chinese",
    "filthy habits",
    "unassimilable race",
    "vice and gambling dens",
    "opium smoking dens",
    "moral corruption",
    "yellow peril",
    "cannot be Americanized",
];

/// Exemplar phrases for each polarity class.
///
/// Owned by whichever similarity scorer embeds it; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCorpus {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl ReferenceCorpus {
    #[must_use]
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self { positive, negative }
    }

    /// The built-in historical corpus.
    #[must_use]
    pub fn historical() -> Self {
        Self::new(
            POSITIVE_REFERENCES.iter().map(|s| (*s).to_string()).collect(),
            NEGATIVE_REFERENCES.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    #[must_use]
    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    #[must_use]
    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

impl Default for ReferenceCorpus {
    fn default() -> Self {
        Self::historical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_corpus_has_both_classes() {
        let corpus = ReferenceCorpus::historical();
        assert_eq!(corpus.positive().len(), 7);
        assert_eq!(corpus.negative().len(), 12);
        assert_eq!(corpus.len(), 19);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn classes_do_not_overlap() {
        let corpus = ReferenceCorpus::historical();
        for phrase in corpus.positive() {
            assert!(
                !corpus.negative().contains(phrase),
                "phrase in both classes: {phrase}"
            );
        }
    }
}
