use axum::{extract::State, Json};
use chrono::Local;
use rand::seq::SliceRandom;
use validator::Validate;

use crate::dto::{CreateJournalRequest, CreateJournalResponse, PromptResponse};
use crate::error::{AppError, AppResult};
use crate::models::JournalEntry;
use crate::store::{ActivityStore, JournalStore, PointsLedger};
use crate::AppState;

const PROMPTS: [&str; 10] = [
    "What are three things you're grateful for today?",
    "What's something that challenged you today and how did you handle it?",
    "What's one small win you had today?",
    "How are you feeling right now, and why might you be feeling this way?",
    "What's something you're looking forward to?",
    "What's one thing you could do tomorrow to take care of yourself?",
    "What's a recent interaction that made you feel good?",
    "What's something you learned recently?",
    "What's a goal you're working toward right now?",
    "What made you smile today?",
];

pub async fn get_prompt() -> Json<PromptResponse> {
    let prompt = PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PROMPTS[0]);
    Json(PromptResponse {
        prompt: prompt.to_string(),
    })
}

/// Saves a journal entry (newest first, immutable once written), marks the
/// journal activity complete for today, and awards points.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateJournalRequest>,
) -> AppResult<Json<CreateJournalResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if body.text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please write something before saving".into(),
        ));
    }

    let entry = JournalEntry::new(body.text, body.prompt);
    JournalStore::new(state.store.clone()).prepend(&entry).await?;

    let today = Local::now().date_naive();
    ActivityStore::new(state.store.clone())
        .set_journal_completed(today)
        .await?;

    let points_earned = state.config.journal_entry_points;
    let balance = PointsLedger::new(state.store.clone())
        .apply_delta(points_earned, "journal entry")
        .await?;

    tracing::info!(entry_id = %entry.id, "Journal entry saved");

    Ok(Json(CreateJournalResponse {
        entry,
        points_earned,
        balance,
    }))
}

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = JournalStore::new(state.store.clone()).all().await?;
    Ok(Json(entries))
}
