use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One signed movement of the point balance. The ledger is append-only;
/// the balance is always a fold over the deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEntry {
    pub delta: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
