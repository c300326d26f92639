use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChanakyaError;

pub const MAX_SCORE: f32 = 10.0;

/// The five PERMA well-being pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    PositiveEmotion,
    Engagement,
    Relationships,
    Meaning,
    Accomplishment,
}

impl Pillar {
    pub const ALL: &[Pillar] = &[
        Pillar::PositiveEmotion,
        Pillar::Engagement,
        Pillar::Relationships,
        Pillar::Meaning,
        Pillar::Accomplishment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::PositiveEmotion => "positive_emotion",
            Pillar::Engagement => "engagement",
            Pillar::Relationships => "relationships",
            Pillar::Meaning => "meaning",
            Pillar::Accomplishment => "accomplishment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::PositiveEmotion => "Positive Emotion",
            Pillar::Engagement => "Engagement",
            Pillar::Relationships => "Relationships",
            Pillar::Meaning => "Meaning",
            Pillar::Accomplishment => "Accomplishment",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Pillar::PositiveEmotion => 'P',
            Pillar::Engagement => 'E',
            Pillar::Relationships => 'R',
            Pillar::Meaning => 'M',
            Pillar::Accomplishment => 'A',
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Pillar::PositiveEmotion => "😊",
            Pillar::Engagement => "🧠",
            Pillar::Relationships => "❤️",
            Pillar::Meaning => "🌟",
            Pillar::Accomplishment => "🏆",
        }
    }

    /// Accepts the snake_case key, the display name, or the single letter.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Pillar::ALL.iter().copied().find(|p| {
            p.as_str() == s
                || p.display_name().eq_ignore_ascii_case(s)
                || (s.len() == 1 && s.eq_ignore_ascii_case(&p.letter().to_string()))
        })
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Per-pillar scores on a 0-10 scale. Unscored pillars are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermaScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_emotion: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accomplishment: Option<f32>,
}

impl PermaScores {
    pub fn get(&self, pillar: Pillar) -> Option<f32> {
        match pillar {
            Pillar::PositiveEmotion => self.positive_emotion,
            Pillar::Engagement => self.engagement,
            Pillar::Relationships => self.relationships,
            Pillar::Meaning => self.meaning,
            Pillar::Accomplishment => self.accomplishment,
        }
    }

    pub fn set(&mut self, pillar: Pillar, score: f32) -> Result<(), ChanakyaError> {
        validate_score(pillar, score)?;
        let slot = match pillar {
            Pillar::PositiveEmotion => &mut self.positive_emotion,
            Pillar::Engagement => &mut self.engagement,
            Pillar::Relationships => &mut self.relationships,
            Pillar::Meaning => &mut self.meaning,
            Pillar::Accomplishment => &mut self.accomplishment,
        };
        *slot = Some(score);
        Ok(())
    }

    /// Check every present score is finite and within 0..=10.
    pub fn validate(&self) -> Result<(), ChanakyaError> {
        for (pillar, score) in self.scored() {
            validate_score(pillar, score)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.scored().next().is_none()
    }

    pub fn scored(&self) -> impl Iterator<Item = (Pillar, f32)> + '_ {
        Pillar::ALL
            .iter()
            .filter_map(move |&p| self.get(p).map(|s| (p, s)))
    }

    /// Lowest scored pillar; ties go to the earlier pillar in PERMA order.
    pub fn weakest(&self) -> Option<(Pillar, f32)> {
        self.scored()
            .fold(None, |acc: Option<(Pillar, f32)>, cur| match acc {
                Some(best) if best.1 <= cur.1 => Some(best),
                _ => Some(cur),
            })
    }

    /// Highest scored pillar; ties go to the earlier pillar in PERMA order.
    pub fn strongest(&self) -> Option<(Pillar, f32)> {
        self.scored()
            .fold(None, |acc: Option<(Pillar, f32)>, cur| match acc {
                Some(best) if best.1 >= cur.1 => Some(best),
                _ => Some(cur),
            })
    }

    pub fn average(&self) -> Option<f32> {
        let (sum, n) = self
            .scored()
            .fold((0.0_f32, 0_u32), |(sum, n), (_, s)| (sum + s, n + 1));
        (n > 0).then(|| sum / n as f32)
    }

    /// Compact JSON object of the scored pillars, e.g. `{"meaning":4.0}`.
    pub fn to_prompt_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }

    /// One-line human summary for the `summary` placeholder.
    pub fn summary(&self) -> String {
        let (Some(avg), Some(strong), Some(weak)) =
            (self.average(), self.strongest(), self.weakest())
        else {
            return String::new();
        };
        if strong.0 == weak.0 {
            return format!(
                "{} {:.1}/10. Average {:.1}/10.",
                strong.0, strong.1, avg
            );
        }
        format!(
            "Strongest: {} ({:.1}/10). Needs attention: {} ({:.1}/10). Average {:.1}/10.",
            strong.0, strong.1, weak.0, weak.1, avg
        )
    }
}

fn validate_score(pillar: Pillar, score: f32) -> Result<(), ChanakyaError> {
    if !score.is_finite() || !(0.0..=MAX_SCORE).contains(&score) {
        return Err(ChanakyaError::InvalidInput(format!(
            "{} score must be between 0 and {MAX_SCORE}, got {score}",
            pillar.as_str()
        )));
    }
    Ok(())
}
