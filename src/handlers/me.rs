use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::{MeResponse, UpdateMeRequest};
use crate::error::{AppError, AppResult};
use crate::store::ProfileStore;
use crate::AppState;

const DEFAULT_NAME: &str = "Friend";

pub async fn get_me(State(state): State<AppState>) -> AppResult<Json<MeResponse>> {
    let name = ProfileStore::new(state.store.clone())
        .name()
        .await?
        .unwrap_or_else(|| DEFAULT_NAME.into());
    Ok(Json(MeResponse { name }))
}

pub async fn update_me(
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> AppResult<Json<MeResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = body.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Name cannot be blank".into()));
    }

    ProfileStore::new(state.store.clone()).set_name(&name).await?;
    Ok(Json(MeResponse { name }))
}
