//! Typed repositories over the key-value store. Each repository owns the
//! storage keys for one entity; unreadable records degrade to empty
//! defaults rather than failing the caller.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;

use super::{KvStore, StoreResult};
use crate::error::{AppError, AppResult};
use crate::models::{ChatMessage, JournalEntry, MoodLabel, PointEntry};

mod keys {
    use chrono::NaiveDate;

    pub const CHECK_INS: &str = "checkIns";
    pub const JOURNAL_ENTRIES: &str = "journalEntries";
    pub const CHAT_MESSAGES: &str = "chatMessages";
    pub const SURVEY_ANSWERS: &str = "surveyAnswers";
    pub const POINTS_LEDGER: &str = "pointsLedger";
    pub const USER_POINTS: &str = "userPoints";
    pub const USER_NAME: &str = "userName";

    pub fn mood(date: NaiveDate) -> String {
        format!("mood_{}", date.format("%Y-%m-%d"))
    }

    pub fn morning_completed(date: NaiveDate) -> String {
        format!("morning_completed_{}", date.format("%Y-%m-%d"))
    }

    pub fn journal_completed(date: NaiveDate) -> String {
        format!("journal_completed_{}", date.format("%Y-%m-%d"))
    }
}

fn parse_or_default<T: DeserializeOwned + Default>(key: &str, raw: Option<String>) -> T {
    match raw {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Unreadable record, substituting empty default");
            T::default()
        }),
        None => T::default(),
    }
}

/// Check-in dates: a deduplicated sequence of calendar days.
pub struct CheckInStore {
    store: Arc<dyn KvStore>,
}

impl CheckInStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> StoreResult<Vec<NaiveDate>> {
        let raw = self.store.get(keys::CHECK_INS).await?;
        let dates: Vec<String> = parse_or_default(keys::CHECK_INS, raw);
        Ok(dates
            .into_iter()
            .filter_map(|d| match d.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(value = %d, error = %e, "Skipping malformed check-in date");
                    None
                }
            })
            .collect())
    }

    /// Records a check-in for `date`. Returns false if the day was already
    /// checked in (at most one check-in per calendar day).
    pub async fn record(&self, date: NaiveDate) -> StoreResult<bool> {
        let raw = self.store.get(keys::CHECK_INS).await?;
        let mut dates: Vec<String> = parse_or_default(keys::CHECK_INS, raw);
        let formatted = date.format("%Y-%m-%d").to_string();
        if dates.contains(&formatted) {
            return Ok(false);
        }
        dates.push(formatted);
        self.store
            .set(keys::CHECK_INS, &serde_json::to_string(&dates)?)
            .await?;
        Ok(true)
    }
}

/// One mood label per calendar day, last write wins.
pub struct MoodStore {
    store: Arc<dyn KvStore>,
}

impl MoodStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn record(&self, date: NaiveDate, label: MoodLabel) -> StoreResult<()> {
        self.store.set(&keys::mood(date), label.as_str()).await
    }

    pub async fn get(&self, date: NaiveDate) -> StoreResult<Option<MoodLabel>> {
        let key = keys::mood(date);
        let raw = self.store.get(&key).await?;
        Ok(raw.and_then(|s| {
            let label = MoodLabel::parse(&s);
            if label.is_none() {
                tracing::warn!(key, value = %s, "Skipping unknown mood label");
            }
            label
        }))
    }

    /// Mood labels for the given dates, skipping days without one.
    pub async fn for_dates(&self, dates: &[NaiveDate]) -> StoreResult<Vec<MoodLabel>> {
        let mut labels = Vec::new();
        for date in dates {
            if let Some(label) = self.get(*date).await? {
                labels.push(label);
            }
        }
        Ok(labels)
    }
}

/// Journal entries, stored newest first. Entries are never edited or
/// deleted.
pub struct JournalStore {
    store: Arc<dyn KvStore>,
}

impl JournalStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> StoreResult<Vec<JournalEntry>> {
        let raw = self.store.get(keys::JOURNAL_ENTRIES).await?;
        Ok(parse_or_default(keys::JOURNAL_ENTRIES, raw))
    }

    pub async fn prepend(&self, entry: &JournalEntry) -> StoreResult<()> {
        let mut entries = self.all().await?;
        entries.insert(0, entry.clone());
        self.store
            .set(keys::JOURNAL_ENTRIES, &serde_json::to_string(&entries)?)
            .await
    }
}

/// Session-scoped companion chat transcript.
pub struct ChatLog {
    store: Arc<dyn KvStore>,
}

impl ChatLog {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> StoreResult<Vec<ChatMessage>> {
        let raw = self.store.get(keys::CHAT_MESSAGES).await?;
        Ok(parse_or_default(keys::CHAT_MESSAGES, raw))
    }

    pub async fn append(&self, message: &ChatMessage) -> StoreResult<()> {
        let mut messages = self.all().await?;
        messages.push(message.clone());
        self.store
            .set(keys::CHAT_MESSAGES, &serde_json::to_string(&messages)?)
            .await
    }

    pub async fn clear(&self) -> StoreResult<()> {
        self.store.remove(keys::CHAT_MESSAGES).await
    }
}

/// Survey answers, keyed by question number, overwritten wholesale on each
/// survey completion.
pub struct SurveyStore {
    store: Arc<dyn KvStore>,
}

impl SurveyStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn answers(&self) -> StoreResult<HashMap<String, String>> {
        let raw = self.store.get(keys::SURVEY_ANSWERS).await?;
        Ok(parse_or_default(keys::SURVEY_ANSWERS, raw))
    }

    pub async fn replace(&self, answers: &HashMap<String, String>) -> StoreResult<()> {
        self.store
            .set(keys::SURVEY_ANSWERS, &serde_json::to_string(answers)?)
            .await
    }
}

/// Append-only point ledger. The balance is derived by folding the deltas;
/// the legacy `userPoints` key is kept as a mirror of the derived total.
pub struct PointsLedger {
    store: Arc<dyn KvStore>,
}

impl PointsLedger {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn entries(&self) -> StoreResult<Vec<PointEntry>> {
        let raw = self.store.get(keys::POINTS_LEDGER).await?;
        Ok(parse_or_default(keys::POINTS_LEDGER, raw))
    }

    pub fn fold(entries: &[PointEntry]) -> i64 {
        entries.iter().map(|e| e.delta).sum()
    }

    pub async fn balance(&self) -> StoreResult<i64> {
        Ok(Self::fold(&self.entries().await?))
    }

    /// Appends a signed delta and returns the new balance. A spend that
    /// would take the balance below zero is rejected without writing.
    pub async fn apply_delta(&self, delta: i64, reason: &str) -> AppResult<i64> {
        let mut entries = self.entries().await?;
        let balance = Self::fold(&entries);
        if delta < 0 && balance + delta < 0 {
            return Err(AppError::InsufficientPoints {
                needed: -(balance + delta),
            });
        }

        entries.push(PointEntry {
            delta,
            reason: reason.to_string(),
            created_at: Utc::now(),
        });
        let balance = balance + delta;
        let raw = serde_json::to_string(&entries).map_err(super::StoreError::from)?;
        self.store.set(keys::POINTS_LEDGER, &raw).await?;
        self.store
            .set(keys::USER_POINTS, &balance.to_string())
            .await?;
        Ok(balance)
    }
}

/// Per-day activity completion sentinels shown on the dashboard.
pub struct ActivityStore {
    store: Arc<dyn KvStore>,
}

impl ActivityStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn morning_completed(&self, date: NaiveDate) -> StoreResult<bool> {
        let raw = self.store.get(&keys::morning_completed(date)).await?;
        Ok(raw.as_deref() == Some("true"))
    }

    pub async fn set_morning_completed(&self, date: NaiveDate) -> StoreResult<()> {
        self.store.set(&keys::morning_completed(date), "true").await
    }

    pub async fn journal_completed(&self, date: NaiveDate) -> StoreResult<bool> {
        let raw = self.store.get(&keys::journal_completed(date)).await?;
        Ok(raw.as_deref() == Some("true"))
    }

    pub async fn set_journal_completed(&self, date: NaiveDate) -> StoreResult<()> {
        self.store.set(&keys::journal_completed(date), "true").await
    }
}

/// The user's display name.
pub struct ProfileStore {
    store: Arc<dyn KvStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn name(&self) -> StoreResult<Option<String>> {
        self.store.get(keys::USER_NAME).await
    }

    pub async fn set_name(&self, name: &str) -> StoreResult<()> {
        self.store.set(keys::USER_NAME, name).await
    }
}
