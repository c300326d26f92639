use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-reported mood. Known moods are normalised; anything else is kept verbatim.
/// `null` deserializes as `Neutral`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Stressed,
    Sad,
    Anxious,
    Motivated,
    Other(String),
}

impl Mood {
    pub const KNOWN: [Mood; 6] = [
        Mood::Neutral,
        Mood::Happy,
        Mood::Stressed,
        Mood::Sad,
        Mood::Anxious,
        Mood::Motivated,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Stressed => "stressed",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Motivated => "motivated",
            Mood::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "neutral" => Mood::Neutral,
            "happy" => Mood::Happy,
            "stressed" => Mood::Stressed,
            "sad" | "low" | "down" => Mood::Sad,
            "anxious" => Mood::Anxious,
            "motivated" => Mood::Motivated,
            _ => Mood::Other(trimmed.to_string()),
        }
    }

    /// Guess a mood from free chat text, if it mentions one.
    pub fn detect(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("stressed") {
            Some(Mood::Stressed)
        } else if lower.contains("anxious") {
            Some(Mood::Anxious)
        } else if lower.contains("feeling low") || lower.contains("feeling down") {
            Some(Mood::Sad)
        } else {
            None
        }
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        Mood::parse(&s)
    }
}

impl From<Option<String>> for Mood {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(Mood::parse).unwrap_or_default()
    }
}

impl From<Mood> for String {
    fn from(m: Mood) -> Self {
        m.as_str().to_string()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
