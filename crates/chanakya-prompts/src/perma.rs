use chanakya_core::{ChatHistory, PermaScores, Persona};

use crate::error::PromptError;
use crate::template::{PromptTemplate, Values};

/// Mood-tracker prompt for the SATHYA persona, built on the PERMA model.
///
/// Placeholders: `perma_scores`, `summary`, `history`, `input`.
pub const PERMA_PROMPT: &str = r#"
You are SATHYA, a young adult aged 20–30 girl, a wise, compassionate, and intelligent AI wellness coach and mentor. You are a wise but super-friendly wellness buddy. Your job is to help users boost their well-being using the PERMA model (Positive Emotion, Engagement, Relationships, Meaning, Accomplishment).

IMPORTANT: In every response, always begin by introducing yourself in a friendly way, e.g., "Hi, I'm SATHYA, your wellness coach!" or "Hello, this is SATHYA here." Then give your advice or encouragement as usual.

PERMA stands for:
- P – Positive Emotions (feeling joyful, hopeful, or grateful)
- E – Engagement (deep involvement, flow, or focus in tasks)
- R – Relationships (supportive and meaningful human connections)
- M – Meaning (a sense of purpose or being part of something larger)
- A – Accomplishment (achieving goals, celebrating progress)

When a user shares a message or journal entry:
1. Gently analyze what elements of PERMA it reflects.
2. Label or mention the most relevant PERMA pillar(s).
3. Offer thoughtful encouragement or advice based on the pillar(s).
4. Ask open-ended questions to help them reflect or take action.

Your communication style:
- Natural, friendly, wise tone — short but supportive responses.
- Never sound robotic. Be a mentor, not a therapist.
- Stay concise, impactful, and human.

Examples:
User: "I spent time helping a friend study. It felt really good."
You: That’s wonderful! You're nurturing Relationships, and even enjoying some Meaning through helping others. How did that make you feel afterwards?

User: "I’ve been really focused on learning to code lately."
You: Sounds like you’re in a deep state of Engagement — that’s a powerful space for growth! Are you proud of what you've built so far?

User: "I feel down. Nothing seems exciting lately."
You: Thank you for being honest. That might be a signal that some Positive Emotion or Meaning is missing. Is there something small that used to bring you joy we could revisit?

User's PERMA Scores: {perma_scores}
PERMA Summary: {summary}
Chat History: {history}
User: {input}
Chanakya:
"#;

/// Values for [`PERMA_PROMPT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermaPromptInput {
    pub perma_scores: String,
    pub summary: String,
    pub history: String,
    pub input: String,
}

impl PermaPromptInput {
    pub fn from_scores(
        scores: &PermaScores,
        history: &ChatHistory,
        history_limit: usize,
        input: &str,
    ) -> Self {
        Self {
            perma_scores: scores.to_prompt_value(),
            summary: scores.summary(),
            history: history.render(Persona::Sathya.name(), history_limit),
            input: input.to_string(),
        }
    }

    pub fn values(&self) -> Values {
        Values::from([
            ("perma_scores".to_string(), self.perma_scores.clone()),
            ("summary".to_string(), self.summary.clone()),
            ("history".to_string(), self.history.clone()),
            ("input".to_string(), self.input.clone()),
        ])
    }

    pub fn render(&self) -> Result<String, PromptError> {
        perma().render(&self.values())
    }
}

pub fn perma() -> &'static PromptTemplate {
    static TEMPLATE: std::sync::OnceLock<PromptTemplate> = std::sync::OnceLock::new();
    TEMPLATE.get_or_init(|| PromptTemplate::new("perma", PERMA_PROMPT))
}

#[cfg(test)]
mod tests {
    use chanakya_core::Pillar;

    use super::*;

    #[test]
    fn placeholder_contract() {
        assert_eq!(
            perma().placeholders(),
            &["perma_scores", "summary", "history", "input"]
        );
    }

    #[test]
    fn renders_input_and_preamble() {
        let input = PermaPromptInput {
            perma_scores: "{}".into(),
            summary: String::new(),
            history: String::new(),
            input: "I feel down".into(),
        };
        let out = input.render().unwrap();
        assert!(out.contains("You are SATHYA"));
        assert!(out.contains("PERMA stands for:"));
        assert!(out.contains("User's PERMA Scores: {}"));
        assert!(out.contains("User: I feel down"));
        assert!(!out.contains("{perma_scores}"));
        assert!(!out.contains("{input}"));
    }

    #[test]
    fn from_scores_fills_summary() {
        let mut scores = PermaScores::default();
        scores.set(Pillar::Meaning, 3.0).unwrap();
        scores.set(Pillar::Engagement, 8.0).unwrap();
        let input = PermaPromptInput::from_scores(&scores, &ChatHistory::new(), 10, "hello");
        assert_eq!(input.perma_scores, r#"{"engagement":8.0,"meaning":3.0}"#);
        assert!(input.summary.contains("Needs attention: Meaning"));
        assert_eq!(input.history, "");

        let out = input.render().unwrap();
        assert!(out.contains(r#"User's PERMA Scores: {"engagement":8.0,"meaning":3.0}"#));
        assert!(out.contains("PERMA Summary: Strongest: Engagement"));
    }

    #[test]
    fn missing_value_names_placeholder() {
        let mut values = PermaPromptInput::default().values();
        values.remove("summary");
        let err = perma().render(&values).unwrap_err();
        assert_eq!(err.to_string(), "template 'perma' is missing a value for 'summary'");
    }
}
