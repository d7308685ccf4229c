pub mod chat;
pub mod journal;
pub mod mood;
pub mod points;

pub use chat::{ChatMessage, ChatRole};
pub use journal::JournalEntry;
pub use mood::MoodLabel;
pub use points::PointEntry;
