pub mod error;
pub mod general;
pub mod perma;
pub mod template;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::PromptError;
pub use general::{GeneralPromptInput, GENERAL_PROMPT};
pub use perma::{PermaPromptInput, PERMA_PROMPT};
pub use template::{PromptTemplate, Values};

/// Which persona prompt to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    General,
    Perma,
}

impl TemplateKind {
    pub const ALL: &[TemplateKind] = &[TemplateKind::General, TemplateKind::Perma];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::General => "general",
            TemplateKind::Perma => "perma",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "general" => Some(TemplateKind::General),
            "perma" => Some(TemplateKind::Perma),
            _ => None,
        }
    }

    /// Like `from_str`, but reports the unknown name as an error.
    pub fn parse(s: &str) -> Result<Self, PromptError> {
        Self::from_str(s).ok_or_else(|| PromptError::UnknownTemplate(s.to_string()))
    }

    pub fn template(&self) -> &'static PromptTemplate {
        match self {
            TemplateKind::General => general::general(),
            TemplateKind::Perma => perma::perma(),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the prompt for `kind`. With `default` set, missing placeholders
/// are filled with it instead of failing.
pub fn assemble_prompt(
    kind: TemplateKind,
    values: &Values,
    default: Option<&str>,
) -> Result<String, PromptError> {
    let template = kind.template();
    match default {
        Some(d) => Ok(template.render_or_default(values, d)),
        None => template.render(values).inspect_err(|e| {
            tracing::warn!(template = kind.as_str(), "render failed: {e}");
        }),
    }
}
