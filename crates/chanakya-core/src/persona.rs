use std::fmt;

use serde::{Deserialize, Serialize};

/// Deserializes leniently: unknown strings and `null` become `Neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Neutral,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }

    /// Lenient parse: anything unrecognised is treated as neutral.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Neutral,
        }
    }
}

impl From<Option<String>> for Gender {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(Gender::parse_lenient).unwrap_or_default()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The assistant character presented to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Chanakya,
    Krishna,
    Rukmini,
    /// PERMA wellness coach.
    Sathya,
}

impl Persona {
    /// Chat persona paired with the user's gender.
    pub fn for_user(gender: Gender) -> Self {
        match gender {
            Gender::Female => Persona::Krishna,
            Gender::Male => Persona::Rukmini,
            Gender::Neutral => Persona::Chanakya,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Persona::Chanakya => "Chanakya",
            Persona::Krishna => "Krishna",
            Persona::Rukmini => "Rukmini",
            Persona::Sathya => "SATHYA",
        }
    }

    pub fn gender(&self) -> Gender {
        match self {
            Persona::Chanakya => Gender::Neutral,
            Persona::Krishna => Gender::Male,
            Persona::Rukmini | Persona::Sathya => Gender::Female,
        }
    }

    pub fn welcome_message(&self) -> String {
        format!("Hi, I'm {}. How can I help you today?", self.name())
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_pairs_with_opposite_gender() {
        assert_eq!(Persona::for_user(Gender::Female), Persona::Krishna);
        assert_eq!(Persona::for_user(Gender::Male), Persona::Rukmini);
        assert_eq!(Persona::for_user(Gender::Neutral), Persona::Chanakya);
        assert_eq!(Persona::Krishna.gender(), Gender::Male);
        assert_eq!(Persona::Rukmini.gender(), Gender::Female);
    }

    #[test]
    fn welcome_message_names_persona() {
        assert_eq!(
            Persona::Chanakya.welcome_message(),
            "Hi, I'm Chanakya. How can I help you today?"
        );
    }

    #[test]
    fn lenient_gender_parse() {
        assert_eq!(Gender::parse_lenient("Female"), Gender::Female);
        assert_eq!(Gender::parse_lenient(" male "), Gender::Male);
        assert_eq!(Gender::parse_lenient("other"), Gender::Neutral);
        assert_eq!(Gender::parse_lenient(""), Gender::Neutral);
    }

    #[test]
    fn gender_serde_snake_case() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let parsed: Gender = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Gender::Neutral);
    }

    #[test]
    fn gender_deserializes_leniently() {
        let parse = |json: &str| serde_json::from_str::<Gender>(json).unwrap();
        assert_eq!(parse("\"Female\""), Gender::Female);
        assert_eq!(parse("\"MALE\""), Gender::Male);
        assert_eq!(parse("\"other\""), Gender::Neutral);
        assert_eq!(parse("null"), Gender::Neutral);
    }
}
