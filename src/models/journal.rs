use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journal entry. Immutable once written; the list is stored newest
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub text: String,
    pub prompt: String,
    pub date: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(text: String, prompt: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            prompt,
            date: Utc::now(),
        }
    }
}
