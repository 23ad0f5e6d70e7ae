//! Compiled question schemas, in the shape the presentation engine reads.

use serde::{Deserialize, Serialize};

/// Scale-end labels `(low, high)`; serialized as a two-element array.
pub type Ticks = (String, String);

/// A question answered by a position on a continuous slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogQuestion {
    pub prompt: String,
    /// Persisted response key.
    pub name: String,
    pub ticks: Ticks,
    pub required: bool,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub slider_start: f64,
}

/// A question answered by picking one option from a fixed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub prompt: String,
    pub name: String,
    pub options: Vec<String>,
    pub required: bool,
}

/// One compiled question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionSchema {
    Analog(AnalogQuestion),
    Choice(ChoiceQuestion),
}

impl QuestionSchema {
    pub fn name(&self) -> &str {
        match self {
            Self::Analog(q) => &q.name,
            Self::Choice(q) => &q.name,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Analog(q) => &q.prompt,
            Self::Choice(q) => &q.prompt,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Self::Analog(q) => q.required,
            Self::Choice(q) => q.required,
        }
    }

    pub fn as_analog(&self) -> Option<&AnalogQuestion> {
        match self {
            Self::Analog(q) => Some(q),
            Self::Choice(_) => None,
        }
    }

    pub fn as_choice(&self) -> Option<&ChoiceQuestion> {
        match self {
            Self::Choice(q) => Some(q),
            Self::Analog(_) => None,
        }
    }
}
