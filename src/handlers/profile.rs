use axum::{extract::State, Json};
use chrono::Local;

use crate::analytics::{
    current_streak, longest_streak, mood_insight, select_insights, select_recommendations,
    MoodAggregator, MoodDistribution,
};
use crate::dto::ProfileResponse;
use crate::error::AppResult;
use crate::store::{ChatLog, CheckInStore, JournalStore, MoodStore, ProfileStore, SurveyStore};
use crate::AppState;

/// The profile/insights dashboard: streaks from the check-in history, the
/// blended mood distribution, and the rule-selected insight and
/// recommendation cards.
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<ProfileResponse>> {
    let today = Local::now().date_naive();

    let name = ProfileStore::new(state.store.clone())
        .name()
        .await?
        .unwrap_or_else(|| "Friend".into());

    let check_in_dates = CheckInStore::new(state.store.clone()).all().await?;
    let streak = current_streak(&check_in_dates, today);
    let longest = longest_streak(&check_in_dates);

    let sessions = MoodStore::new(state.store.clone())
        .for_dates(&check_in_dates)
        .await?;
    let chat = ChatLog::new(state.store.clone()).all().await?;
    let entries = JournalStore::new(state.store.clone()).all().await?;

    let mood = MoodAggregator::default().aggregate(
        MoodDistribution::DEFAULT,
        &sessions,
        &chat,
        &entries,
    );

    let answers = SurveyStore::new(state.store.clone()).answers().await?;
    let insights = select_insights(&answers);
    let insight_ids: Vec<&str> = insights.iter().map(|c| c.id).collect();
    let recommendations = select_recommendations(&insight_ids);

    let recent_entries = entries.iter().take(3).cloned().collect();

    Ok(Json(ProfileResponse {
        name,
        check_ins: check_in_dates.len(),
        streak,
        longest_streak: longest,
        mood,
        mood_insight: mood_insight(&mood).to_string(),
        insights,
        recommendations,
        recent_entries,
    }))
}
