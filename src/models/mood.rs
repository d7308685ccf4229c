use serde::{Deserialize, Serialize};

/// The five mood options offered by the morning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Great,
    Good,
    Okay,
    Meh,
    Bad,
}

impl MoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Great => "great",
            MoodLabel::Good => "good",
            MoodLabel::Okay => "okay",
            MoodLabel::Meh => "meh",
            MoodLabel::Bad => "bad",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "great" => Some(MoodLabel::Great),
            "good" => Some(MoodLabel::Good),
            "okay" => Some(MoodLabel::Okay),
            "meh" => Some(MoodLabel::Meh),
            "bad" => Some(MoodLabel::Bad),
            _ => None,
        }
    }
}
