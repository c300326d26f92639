use serde::{Deserialize, Deserializer, Serialize};

use crate::budget::{parse_amount, Budget};
use crate::mood::Mood;
use crate::persona::{Gender, Persona};

pub const DEFAULT_USER_NAME: &str = "Friend";

/// What the assistant knows about the person it is talking to.
///
/// Income and expenses are kept as the user wrote them; they go into the
/// prompt verbatim and are only parsed when a budget is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub mood: Mood,
    #[serde(
        default,
        deserialize_with = "figure",
        skip_serializing_if = "Option::is_none"
    )]
    pub income: Option<String>,
    #[serde(
        default,
        deserialize_with = "figure",
        skip_serializing_if = "Option::is_none"
    )]
    pub expenses: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Figure {
    Text(String),
    Number(serde_json::Number),
}

/// Accept a money figure written either as a string or as a JSON number.
fn figure<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Figure>::deserialize(deserializer)?.map(|f| match f {
        Figure::Text(s) => s,
        Figure::Number(n) => n.to_string(),
    }))
}

fn default_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            name: default_name(),
            gender: Gender::Neutral,
            mood: Mood::Neutral,
            income: None,
            expenses: None,
        }
    }
}

impl UserContext {
    pub fn persona(&self) -> Persona {
        Persona::for_user(self.gender)
    }

    /// Both figures parsed, or `None` if either is missing or unreadable.
    pub fn budget(&self) -> Option<Budget> {
        let income = parse_amount(self.income.as_deref()?)?;
        let expenses = parse_amount(self.expenses.as_deref()?)?;
        Some(Budget::new(income, expenses))
    }

    /// Update the mood when a chat message clearly states one.
    pub fn observe_message(&mut self, text: &str) {
        if let Some(mood) = Mood::detect(text) {
            self.mood = mood;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let ctx = UserContext::default();
        assert_eq!(ctx.name, "Friend");
        assert_eq!(ctx.gender, Gender::Neutral);
        assert_eq!(ctx.mood, Mood::Neutral);
        assert_eq!(ctx.persona(), Persona::Chanakya);
        assert!(ctx.budget().is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let ctx: UserContext = serde_json::from_str(r#"{"gender":"female"}"#).unwrap();
        assert_eq!(ctx.name, "Friend");
        assert_eq!(ctx.persona(), Persona::Krishna);
    }

    #[test]
    fn lenient_fields_from_json() {
        let ctx: UserContext = serde_json::from_str(
            r#"{"gender":"Female","mood":null,"income":30000,"expenses":"25,000"}"#,
        )
        .unwrap();
        assert_eq!(ctx.gender, Gender::Female);
        assert_eq!(ctx.mood, Mood::Neutral);
        assert_eq!(ctx.income.as_deref(), Some("30000"));
        assert_eq!(ctx.expenses.as_deref(), Some("25,000"));
        assert_eq!(ctx.budget().unwrap().balance(), 5_000.0);

        let ctx: UserContext =
            serde_json::from_str(r#"{"gender":"other","income":null}"#).unwrap();
        assert_eq!(ctx.gender, Gender::Neutral);
        assert_eq!(ctx.income, None);
    }

    #[test]
    fn budget_from_written_figures() {
        let ctx = UserContext {
            income: Some("30K".into()),
            expenses: Some("25,000".into()),
            ..Default::default()
        };
        let budget = ctx.budget().unwrap();
        assert_eq!(budget.balance(), 5_000.0);
    }

    #[test]
    fn observe_message_updates_mood() {
        let mut ctx = UserContext::default();
        ctx.observe_message("how do I stop impulse spending?");
        assert_eq!(ctx.mood, Mood::Neutral);
        ctx.observe_message("I'm stressed");
        assert_eq!(ctx.mood, Mood::Stressed);
    }
}
