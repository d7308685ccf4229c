use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod analytics;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use config::Config;
use store::KvStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>, config: Arc<Config>) -> Self {
        // One shared client; 30s cap so a stuck upstream can't hang a handler
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            store,
            config,
            http,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Profile name
        .route("/api/me", get(handlers::me::get_me))
        .route("/api/me", put(handlers::me::update_me))
        // Morning session & daily dashboard
        .route(
            "/api/sessions/morning",
            post(handlers::sessions::complete_morning_session),
        )
        .route("/api/dashboard", get(handlers::sessions::get_dashboard))
        // Journal
        .route("/api/journal/prompt", get(handlers::journal::get_prompt))
        .route("/api/journal", post(handlers::journal::create_entry))
        .route("/api/journal", get(handlers::journal::list_entries))
        // Chat companion
        .route("/api/chat/message", post(handlers::chat::send_message))
        .route("/api/chat/messages", get(handlers::chat::list_messages))
        .route("/api/chat/messages", delete(handlers::chat::clear_messages))
        // Survey
        .route("/api/survey", put(handlers::survey::submit_survey))
        .route("/api/survey", get(handlers::survey::get_survey))
        // Shop & points
        .route("/api/shop/items", get(handlers::shop::list_items))
        .route("/api/shop/redeem", post(handlers::shop::redeem_item))
        .route("/api/points", get(handlers::shop::get_points))
        // Profile & insights dashboard
        .route("/api/profile", get(handlers::profile::get_profile))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
