//! Analog and multiple-choice questionnaire compilers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SchemaError;
use super::schema::{AnalogQuestion, ChoiceQuestion, QuestionSchema};

// =============================================================================
// Analog
// =============================================================================

/// Slider parameters shared by every question of an analog questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalogConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub slider_start: f64,
    pub required: bool,
    /// Wrap each prompt in `<b>`.
    pub bold_prompts: bool,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
            slider_start: 0.5,
            required: false,
            bold_prompts: true,
        }
    }
}

impl AnalogConfig {
    /// Same slider, prompts left as authored.
    pub fn plain_prompts(mut self) -> Self {
        self.bold_prompts = false;
        self
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(SchemaError::invalid_range("min and max must be finite"));
        }
        if self.min >= self.max {
            return Err(SchemaError::invalid_range(format!(
                "min {} must be below max {}",
                self.min, self.max
            )));
        }
        if !(self.step > 0.0 && self.step <= self.max - self.min) {
            return Err(SchemaError::invalid_range(format!(
                "step {} must be in (0, {}]",
                self.step,
                self.max - self.min
            )));
        }
        if !(self.min..=self.max).contains(&self.slider_start) {
            return Err(SchemaError::invalid_range(format!(
                "slider_start {} outside [{}, {}]",
                self.slider_start, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// [`compile_analog_with`] using the default slider (`[0, 1]`, step `0.01`,
/// start `0.5`, not required).
pub fn compile_analog<I, N>(
    items: &[I],
    names: &[N],
    ticks: (&str, &str),
) -> Result<Vec<QuestionSchema>, SchemaError>
where
    I: AsRef<str>,
    N: AsRef<str>,
{
    compile_analog_with(items, names, ticks, &AnalogConfig::default())
}

/// Zip prompts with variable names into slider questions, index for index.
///
/// The output order is the input order; any shuffling is left to the engine.
pub fn compile_analog_with<I, N>(
    items: &[I],
    names: &[N],
    ticks: (&str, &str),
    config: &AnalogConfig,
) -> Result<Vec<QuestionSchema>, SchemaError>
where
    I: AsRef<str>,
    N: AsRef<str>,
{
    if items.len() != names.len() {
        return Err(SchemaError::LengthMismatch {
            items: items.len(),
            names: names.len(),
        });
    }
    check_names(names.iter().map(|n| n.as_ref()))?;
    config.validate()?;

    let questions: Vec<QuestionSchema> = items
        .iter()
        .zip(names)
        .map(|(item, name)| {
            let item = item.as_ref();
            let prompt = if config.bold_prompts {
                format!("<b>{item}</b>")
            } else {
                item.to_string()
            };
            QuestionSchema::Analog(AnalogQuestion {
                prompt,
                name: name.as_ref().to_string(),
                ticks: (ticks.0.to_string(), ticks.1.to_string()),
                required: config.required,
                min: config.min,
                max: config.max,
                step: config.step,
                slider_start: config.slider_start,
            })
        })
        .collect();

    debug!(questions = questions.len(), "compiled analog questionnaire");
    Ok(questions)
}

// =============================================================================
// Choice
// =============================================================================

/// Authored multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSpec {
    pub prompt: String,
    pub options: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl ChoiceSpec {
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        name: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            name: name.into(),
            required: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Validate and repackage multiple-choice specs. Prompts and options pass
/// through untouched.
pub fn compile_choice(specs: &[ChoiceSpec]) -> Result<Vec<QuestionSchema>, SchemaError> {
    check_names(specs.iter().map(|s| s.name.as_str()))?;
    if let Some((index, spec)) = specs.iter().enumerate().find(|(_, s)| s.options.is_empty()) {
        return Err(SchemaError::EmptyOptions {
            index,
            name: spec.name.clone(),
        });
    }

    let questions: Vec<QuestionSchema> = specs
        .iter()
        .map(|spec| {
            QuestionSchema::Choice(ChoiceQuestion {
                prompt: spec.prompt.clone(),
                name: spec.name.clone(),
                options: spec.options.clone(),
                required: spec.required,
            })
        })
        .collect();

    debug!(questions = questions.len(), "compiled choice questionnaire");
    Ok(questions)
}

// =============================================================================
// Shared
// =============================================================================

fn check_names<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (index, name) in names.enumerate() {
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyName { index });
        }
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateName {
                index,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Stable content hash of a compiled questionnaire (blake3 over its JSON).
pub fn fingerprint(questions: &[QuestionSchema]) -> String {
    let bytes = serde_json::to_vec(questions).unwrap_or_default();
    blake3::hash(&bytes).to_hex().to_string()
}

// =============================================================================
// TESTS
// =============================================================================
