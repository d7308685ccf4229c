//! Keyword-counting sentiment heuristic behind a trait so the aggregator's
//! blending math does not care how the scores are produced.

/// Raw keyword hit counts for a piece of text. `is_neutral` is true when
/// the text matched neither word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn is_neutral(&self) -> bool {
        self.positive == 0 && self.negative == 0
    }
}

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentCounts;
}

const CHAT_POSITIVE: &[&str] = &["happy", "good", "great", "better", "positive", "joy", "excited"];
const CHAT_NEGATIVE: &[&str] = &["sad", "bad", "stressed", "anxious", "worried", "tired", "upset"];

const JOURNAL_POSITIVE: &[&str] = &[
    "happy", "good", "great", "better", "positive", "joy", "excited", "grateful", "thankful",
    "love",
];
const JOURNAL_NEGATIVE: &[&str] = &[
    "sad",
    "bad",
    "stressed",
    "anxious",
    "worried",
    "tired",
    "upset",
    "angry",
    "frustrated",
    "fear",
];

/// Case-insensitive word-list matcher on alphanumeric word boundaries.
pub struct KeywordScorer {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

impl KeywordScorer {
    /// The seven-word lists used for chat messages.
    pub fn chat() -> Self {
        Self {
            positive: CHAT_POSITIVE,
            negative: CHAT_NEGATIVE,
        }
    }

    /// The ten-word lists used for journal text.
    pub fn journal() -> Self {
        Self {
            positive: JOURNAL_POSITIVE,
            negative: JOURNAL_NEGATIVE,
        }
    }
}

impl SentimentScorer for KeywordScorer {
    fn score(&self, text: &str) -> SentimentCounts {
        let lower = text.to_lowercase();
        let mut counts = SentimentCounts::default();
        for word in lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if self.positive.contains(&word) {
                counts.positive += 1;
            }
            if self.negative.contains(&word) {
                counts.negative += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        let counts = KeywordScorer::chat().score("Feeling GREAT and Excited today");
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 0);
    }

    #[test]
    fn text_can_hit_both_lists() {
        let counts = KeywordScorer::chat().score("happy but tired");
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 1);
        assert!(!counts.is_neutral());
    }

    #[test]
    fn no_hits_is_neutral() {
        assert!(KeywordScorer::chat().score("went for a walk").is_neutral());
    }

    #[test]
    fn journal_lists_are_a_superset() {
        let counts = KeywordScorer::journal().score("grateful, thankful, but frustrated");
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 1);
        // The chat lists do not know these words
        assert!(KeywordScorer::chat()
            .score("grateful thankful frustrated")
            .is_neutral());
    }

    #[test]
    fn substrings_do_not_match() {
        // "goodness" must not count as "good"
        assert!(KeywordScorer::chat().score("goodness gracious").is_neutral());
    }
}
