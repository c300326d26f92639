use serde::{Deserialize, Serialize};

/// A canned suggestion shown under the chat input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub id: String,
    pub text: String,
    pub emoji: String,
}

impl QuickReply {
    fn new(id: &str, text: &str, emoji: &str) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            emoji: emoji.into(),
        }
    }
}

pub fn default_quick_replies() -> Vec<QuickReply> {
    vec![
        QuickReply::new("1", "How can I save money?", "💰"),
        QuickReply::new("2", "I'm feeling stressed", "😫"),
        QuickReply::new("3", "Tell me a tip", "💡"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_defaults_with_unique_ids() {
        let replies = default_quick_replies();
        assert_eq!(replies.len(), 3);
        let mut ids: Vec<_> = replies.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
