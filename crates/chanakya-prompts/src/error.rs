use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template '{template}' is missing a value for '{name}'")]
    MissingPlaceholder { template: String, name: String },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error(transparent)]
    InvalidInput(#[from] chanakya_core::ChanakyaError),
}
