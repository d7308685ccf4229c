//! # Sprout — Request/Response DTOs
//!
//! All API contract types in one module.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Validation is expressed via `validator` derive macros

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analytics::{InsightCard, MoodDistribution, RecommendationCard};
use crate::models::{JournalEntry, MoodLabel, PointEntry};

// ============================================================================
// Common
// ============================================================================

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Profile name
// ============================================================================

/// GET /api/me
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub name: String,
}

/// PUT /api/me
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMeRequest {
    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub name: String,
}

// ============================================================================
// Morning session & dashboard
// ============================================================================

/// POST /api/sessions/morning
#[derive(Debug, Deserialize)]
pub struct MorningSessionRequest {
    pub mood: MoodLabel,
}

#[derive(Debug, Serialize)]
pub struct MorningSessionResponse {
    pub points_earned: i64,
    pub balance: i64,
    pub streak: u32,
    /// False when today's check-in already existed.
    pub checked_in: bool,
}

/// GET /api/dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: NaiveDate,
    pub morning_completed: bool,
    pub journal_completed: bool,
    pub points: i64,
}

// ============================================================================
// Journal
// ============================================================================

/// GET /api/journal/prompt
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// POST /api/journal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJournalRequest {
    #[validate(length(max = 20000, message = "Entry too long"))]
    pub text: String,
    #[validate(length(max = 500, message = "Prompt too long"))]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CreateJournalResponse {
    pub entry: JournalEntry,
    pub points_earned: i64,
    pub balance: i64,
}

// ============================================================================
// Chat companion
// ============================================================================

/// POST /api/chat/message
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 4000, message = "Message must be 1-4000 characters"))]
    pub content: String,
}

// ============================================================================
// Survey
// ============================================================================

/// PUT /api/survey — answers keyed by question number, replacing the stored
/// map wholesale.
#[derive(Debug, Deserialize)]
pub struct SurveyRequest {
    pub answers: HashMap<String, String>,
}

/// GET /api/survey
#[derive(Debug, Serialize)]
pub struct SurveyResponse {
    pub answers: HashMap<String, String>,
}

// ============================================================================
// Shop & points
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShopItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub category: &'static str,
}

/// POST /api/shop/redeem
#[derive(Debug, Deserialize)]
pub struct RedeemRequest {
    pub item_id: String,
}

#[derive(Debug, Serialize)]
pub struct RedeemResponse {
    pub item_id: String,
    pub balance: i64,
}

/// GET /api/points
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub balance: i64,
    pub ledger: Vec<PointEntry>,
}

// ============================================================================
// Profile & insights dashboard
// ============================================================================

/// GET /api/profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub check_ins: usize,
    pub streak: u32,
    pub longest_streak: u32,
    pub mood: MoodDistribution,
    pub mood_insight: String,
    pub insights: Vec<InsightCard>,
    pub recommendations: Vec<RecommendationCard>,
    pub recent_entries: Vec<JournalEntry>,
}
