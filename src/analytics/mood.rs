use serde::{Deserialize, Serialize};

use super::sentiment::{KeywordScorer, SentimentCounts, SentimentScorer};
use crate::models::{ChatMessage, ChatRole, JournalEntry, MoodLabel};

/// Percentage per mood bucket. Buckets are independent and do not sum
/// to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDistribution {
    pub happy: u8,
    pub content: u8,
    pub neutral: u8,
    pub sad: u8,
    pub stressed: u8,
}

impl MoodDistribution {
    /// Seed distribution shown before any signal has data.
    pub const DEFAULT: Self = Self {
        happy: 99,
        content: 87,
        neutral: 25,
        sad: 19,
        stressed: 7,
    };
}

const SESSION_WEIGHT: f64 = 0.5;
const CHAT_WEIGHT: f64 = 0.3;
const JOURNAL_WEIGHT: f64 = 0.2;

/// Blends explicit mood sessions, chat sentiment, and journal sentiment
/// into one distribution. The scorers are pluggable; the blending math is
/// not.
pub struct MoodAggregator {
    chat_scorer: Box<dyn SentimentScorer>,
    journal_scorer: Box<dyn SentimentScorer>,
}

impl Default for MoodAggregator {
    fn default() -> Self {
        Self {
            chat_scorer: Box::new(KeywordScorer::chat()),
            journal_scorer: Box::new(KeywordScorer::journal()),
        }
    }
}

impl MoodAggregator {
    pub fn new(
        chat_scorer: Box<dyn SentimentScorer>,
        journal_scorer: Box<dyn SentimentScorer>,
    ) -> Self {
        Self {
            chat_scorer,
            journal_scorer,
        }
    }

    /// With no data in any of the three signals, the prior distribution is
    /// returned untouched.
    pub fn aggregate(
        &self,
        prior: MoodDistribution,
        sessions: &[MoodLabel],
        chat: &[ChatMessage],
        journal: &[JournalEntry],
    ) -> MoodDistribution {
        let mut happy = 0.0;
        let mut content = 0.0;
        let mut neutral = 0.0;
        let mut sad = 0.0;
        let mut stressed = 0.0;
        let mut has_data = false;

        // Signal A: explicit mood selections, one per completed session
        if !sessions.is_empty() {
            has_data = true;
            let share = 100.0 / sessions.len() as f64 * SESSION_WEIGHT;
            for label in sessions {
                match label {
                    MoodLabel::Great => happy += share,
                    MoodLabel::Good => content += share,
                    MoodLabel::Okay => neutral += share,
                    MoodLabel::Meh => sad += share,
                    MoodLabel::Bad => stressed += share,
                }
            }
        }

        // Signal B: keyword sentiment over user-authored chat messages.
        // A message can count as both positive and negative; neutral only
        // when it matches neither list.
        let user_messages: Vec<&ChatMessage> =
            chat.iter().filter(|m| m.role == ChatRole::User).collect();
        if !user_messages.is_empty() {
            has_data = true;
            let total = user_messages.len() as f64;
            let mut positive = 0.0;
            let mut negative = 0.0;
            let mut neutral_msgs = 0.0;
            for msg in &user_messages {
                let counts = self.chat_scorer.score(&msg.content);
                if counts.positive > 0 {
                    positive += 1.0;
                }
                if counts.negative > 0 {
                    negative += 1.0;
                }
                if counts.is_neutral() {
                    neutral_msgs += 1.0;
                }
            }
            happy += positive * 0.7 / total * 100.0 * CHAT_WEIGHT;
            content += positive * 0.3 / total * 100.0 * CHAT_WEIGHT;
            neutral += neutral_msgs / total * 100.0 * CHAT_WEIGHT;
            sad += negative * 0.6 / total * 100.0 * CHAT_WEIGHT;
            stressed += negative * 0.4 / total * 100.0 * CHAT_WEIGHT;
        }

        // Signal C: keyword hits across all journal text
        let mut hits = SentimentCounts::default();
        for entry in journal {
            let counts = self.journal_scorer.score(&entry.text);
            hits.positive += counts.positive;
            hits.negative += counts.negative;
        }
        let total_hits = (hits.positive + hits.negative) as f64;
        if total_hits > 0.0 {
            has_data = true;
            let positive_ratio = hits.positive as f64 / total_hits;
            let negative_ratio = hits.negative as f64 / total_hits;
            happy += positive_ratio * 70.0 * JOURNAL_WEIGHT;
            content += positive_ratio * 30.0 * JOURNAL_WEIGHT;
            sad += negative_ratio * 60.0 * JOURNAL_WEIGHT;
            stressed += negative_ratio * 40.0 * JOURNAL_WEIGHT;
            neutral += (1.0 - positive_ratio - negative_ratio) * 100.0 * JOURNAL_WEIGHT;
        }

        if !has_data {
            return prior;
        }

        MoodDistribution {
            happy: clamp_pct(happy),
            content: clamp_pct(content),
            neutral: clamp_pct(neutral),
            sad: clamp_pct(sad),
            stressed: clamp_pct(stressed),
        }
    }
}

fn clamp_pct(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

const UPBEAT: &str =
    "You've been reflecting on positive experiences often this month. Keep it up!";
const STEADY: &str =
    "Your mood has been holding steady lately. A small daily practice can give it a lift.";
const HEAVY: &str =
    "Things have felt heavy recently. Be gentle with yourself, and consider starting with a breathing exercise.";

/// One-line encouragement derived from the dominant bucket. Ties resolve
/// in fixed order: happy, content, neutral, sad, stressed.
pub fn mood_insight(mood: &MoodDistribution) -> &'static str {
    let buckets = [
        mood.happy,
        mood.content,
        mood.neutral,
        mood.sad,
        mood.stressed,
    ];
    let mut dominant = 0;
    for (i, &value) in buckets.iter().enumerate() {
        if value > buckets[dominant] {
            dominant = i;
        }
    }
    match dominant {
        0 | 1 => UPBEAT,
        2 => STEADY,
        _ => HEAVY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed() -> MoodDistribution {
        MoodDistribution {
            happy: 0,
            content: 0,
            neutral: 0,
            sad: 0,
            stressed: 0,
        }
    }

    fn entry(text: &str) -> JournalEntry {
        JournalEntry::new(text.into(), "prompt".into())
    }

    #[test]
    fn sessions_only_split_the_half_weight() {
        let sessions = [
            MoodLabel::Great,
            MoodLabel::Great,
            MoodLabel::Bad,
            MoodLabel::Bad,
        ];
        let mood = MoodAggregator::default().aggregate(zeroed(), &sessions, &[], &[]);
        assert_eq!(mood.happy, 25);
        assert_eq!(mood.stressed, 25);
        assert_eq!(mood.content, 0);
        assert_eq!(mood.neutral, 0);
        assert_eq!(mood.sad, 0);
    }

    #[test]
    fn no_data_returns_the_prior_untouched() {
        let aggregator = MoodAggregator::default();
        let mood = aggregator.aggregate(MoodDistribution::DEFAULT, &[], &[], &[]);
        assert_eq!(mood, MoodDistribution::DEFAULT);

        // An entry with zero keyword hits is still "no data" for Signal C
        let mood = aggregator.aggregate(
            MoodDistribution::DEFAULT,
            &[],
            &[],
            &[entry("went for a walk")],
        );
        assert_eq!(mood, MoodDistribution::DEFAULT);
    }

    #[test]
    fn chat_signal_only_counts_user_messages() {
        let chat = [
            ChatMessage::user("I feel happy"),
            ChatMessage::user("so tired"),
            ChatMessage::user("nothing much"),
            ChatMessage::assistant("That's great, joy is wonderful!"),
        ];
        let mood = MoodAggregator::default().aggregate(zeroed(), &[], &chat, &[]);
        // total=3: one positive, one negative, one neutral message
        assert_eq!(mood.happy, 7);
        assert_eq!(mood.content, 3);
        assert_eq!(mood.neutral, 10);
        assert_eq!(mood.sad, 6);
        assert_eq!(mood.stressed, 4);
    }

    #[test]
    fn journal_signal_blends_hit_ratios() {
        let journal = [entry("grateful and happy but tired")];
        let mood = MoodAggregator::default().aggregate(zeroed(), &[], &[], &journal);
        // 2 positive hits, 1 negative hit
        assert_eq!(mood.happy, 9);
        assert_eq!(mood.content, 4);
        assert_eq!(mood.sad, 4);
        assert_eq!(mood.stressed, 3);
        assert_eq!(mood.neutral, 0);
    }

    #[test]
    fn buckets_are_not_renormalized() {
        // All-great sessions put 50 in happy and nothing anywhere else;
        // the distribution sums to 50, not 100.
        let sessions = [MoodLabel::Great, MoodLabel::Great];
        let mood = MoodAggregator::default().aggregate(zeroed(), &sessions, &[], &[]);
        let sum = mood.happy as u32
            + mood.content as u32
            + mood.neutral as u32
            + mood.sad as u32
            + mood.stressed as u32;
        assert_eq!(mood.happy, 50);
        assert_eq!(sum, 50);
    }

    #[test]
    fn insight_follows_the_dominant_bucket() {
        assert_eq!(mood_insight(&MoodDistribution::DEFAULT), UPBEAT);

        let low = MoodDistribution {
            happy: 5,
            content: 5,
            neutral: 10,
            sad: 40,
            stressed: 12,
        };
        assert_eq!(mood_insight(&low), HEAVY);

        let flat = MoodDistribution {
            happy: 20,
            content: 20,
            neutral: 20,
            sad: 20,
            stressed: 20,
        };
        // Ties resolve toward happy
        assert_eq!(mood_insight(&flat), UPBEAT);

        let steady = MoodDistribution {
            happy: 10,
            content: 10,
            neutral: 30,
            sad: 10,
            stressed: 10,
        };
        assert_eq!(mood_insight(&steady), STEADY);
    }
}
