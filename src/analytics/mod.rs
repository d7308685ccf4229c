//! Engagement & mood analytics: pure functions over the persisted records.
//! Handlers read via the repositories and call in here; nothing in this
//! module touches storage.

pub mod insights;
pub mod mood;
pub mod sentiment;
pub mod streak;

pub use insights::{select_insights, select_recommendations, InsightCard, RecommendationCard};
pub use mood::{mood_insight, MoodAggregator, MoodDistribution};
pub use sentiment::{KeywordScorer, SentimentCounts, SentimentScorer};
pub use streak::{current_streak, longest_streak};
