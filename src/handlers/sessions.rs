use axum::{extract::State, Json};
use chrono::Local;

use crate::analytics::current_streak;
use crate::dto::{DashboardResponse, MorningSessionRequest, MorningSessionResponse};
use crate::error::AppResult;
use crate::store::{ActivityStore, CheckInStore, MoodStore, PointsLedger};
use crate::AppState;

/// Completes the morning session: marks the day done, records the selected
/// mood (last write wins), awards points, and adds today's check-in.
pub async fn complete_morning_session(
    State(state): State<AppState>,
    Json(body): Json<MorningSessionRequest>,
) -> AppResult<Json<MorningSessionResponse>> {
    let today = Local::now().date_naive();

    ActivityStore::new(state.store.clone())
        .set_morning_completed(today)
        .await?;
    MoodStore::new(state.store.clone())
        .record(today, body.mood)
        .await?;

    let points_earned = state.config.morning_session_points;
    let balance = PointsLedger::new(state.store.clone())
        .apply_delta(points_earned, "morning session")
        .await?;

    let check_ins = CheckInStore::new(state.store.clone());
    let checked_in = check_ins.record(today).await?;
    let streak = current_streak(&check_ins.all().await?, today);

    tracing::info!(mood = body.mood.as_str(), streak, "Morning session completed");

    Ok(Json(MorningSessionResponse {
        points_earned,
        balance,
        streak,
        checked_in,
    }))
}

pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let today = Local::now().date_naive();
    let activities = ActivityStore::new(state.store.clone());

    Ok(Json(DashboardResponse {
        date: today,
        morning_completed: activities.morning_completed(today).await?,
        journal_completed: activities.journal_completed(today).await?,
        points: PointsLedger::new(state.store.clone()).balance().await?,
    }))
}
