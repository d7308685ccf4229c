use axum::{extract::State, Json};

use crate::dto::{SurveyRequest, SurveyResponse};
use crate::error::AppResult;
use crate::store::SurveyStore;
use crate::AppState;

/// Replaces the stored survey answers wholesale, matching how the survey
/// flow commits on completion.
pub async fn submit_survey(
    State(state): State<AppState>,
    Json(body): Json<SurveyRequest>,
) -> AppResult<Json<SurveyResponse>> {
    SurveyStore::new(state.store.clone())
        .replace(&body.answers)
        .await?;
    Ok(Json(SurveyResponse {
        answers: body.answers,
    }))
}

pub async fn get_survey(State(state): State<AppState>) -> AppResult<Json<SurveyResponse>> {
    let answers = SurveyStore::new(state.store.clone()).answers().await?;
    Ok(Json(SurveyResponse { answers }))
}
