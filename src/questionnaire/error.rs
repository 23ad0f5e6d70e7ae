//! Schema mismatch errors raised while compiling questionnaires.

use thiserror::Error;

/// A static authoring mistake in a questionnaire definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Prompt and variable-name lists are not index-aligned.
    #[error("schema mismatch: {items} prompt(s) but {names} variable name(s)")]
    LengthMismatch { items: usize, names: usize },

    #[error("schema mismatch: variable name {name:?} at index {index} is already used")]
    DuplicateName { index: usize, name: String },

    #[error("schema mismatch: empty variable name at index {index}")]
    EmptyName { index: usize },

    #[error("schema mismatch: question {name:?} at index {index} has no options")]
    EmptyOptions { index: usize, name: String },

    /// Slider bounds, step or start position are inconsistent.
    #[error("schema mismatch: invalid slider range: {0}")]
    InvalidRange(String),

    #[error("schema mismatch: questionnaire {screen:?} has no questions")]
    EmptyQuestionnaire { screen: String },

    /// A screen can only hold questions of one instrument type.
    #[error("schema mismatch: question {name:?} at index {index} does not match the screen type")]
    MixedKinds { index: usize, name: String },
}

impl SchemaError {
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange(message.into())
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::DuplicateName { .. } => "duplicate_name",
            Self::EmptyName { .. } => "empty_name",
            Self::EmptyOptions { .. } => "empty_options",
            Self::InvalidRange(_) => "invalid_range",
            Self::EmptyQuestionnaire { .. } => "empty_questionnaire",
            Self::MixedKinds { .. } => "mixed_kinds",
        }
    }

    /// Index of the offending item, when the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::DuplicateName { index, .. }
            | Self::EmptyName { index }
            | Self::EmptyOptions { index, .. }
            | Self::MixedKinds { index, .. } => Some(*index),
            Self::LengthMismatch { .. }
            | Self::InvalidRange(_)
            | Self::EmptyQuestionnaire { .. } => None,
        }
    }
}
