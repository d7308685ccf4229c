pub mod chat;
pub mod health;
pub mod journal;
pub mod me;
pub mod profile;
pub mod sessions;
pub mod shop;
pub mod survey;
