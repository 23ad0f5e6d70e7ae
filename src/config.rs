//! Experiment configuration and its JSON loader.
//!
//! Every field has a default, so an empty `{}` file (or no file at all) runs
//! the experiment as published.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::instructions::{ExperimentText, DEFAULT_STUDY_LINK};
use crate::instruments::{Instrument, BAIT_SLIDER_WIDTH};
use crate::labels::{Condition, DEFAULT_CUE_COLORS};
use crate::questionnaire::AnalogConfig;

/// Environment variable that pins the cue-assignment seed.
pub const SEED_ENV: &str = "FICTIONERO_SEED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Candidate colors for the condition cues.
    #[serde(default = "default_cue_colors")]
    pub cue_colors: Vec<String>,

    /// Fixed seed for the cue assignment; fresh entropy when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Slider parameters for analog questionnaires and ratings.
    #[serde(default)]
    pub analog: AnalogConfig,

    #[serde(default = "default_slider_width")]
    pub slider_width: u32,

    /// Questionnaires administered, in order.
    #[serde(default = "default_instruments")]
    pub instruments: Vec<Instrument>,

    #[serde(default = "default_study_link")]
    pub study_link: String,

    #[serde(default)]
    pub text: ExperimentText,
}

fn default_cue_colors() -> Vec<String> {
    DEFAULT_CUE_COLORS.iter().map(|c| c.to_string()).collect()
}

fn default_slider_width() -> u32 {
    BAIT_SLIDER_WIDTH
}

fn default_instruments() -> Vec<Instrument> {
    vec![Instrument::BaitExtended, Instrument::CopsExtended]
}

fn default_study_link() -> String {
    DEFAULT_STUDY_LINK.to_string()
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            cue_colors: default_cue_colors(),
            rng_seed: None,
            analog: AnalogConfig::default(),
            slider_width: default_slider_width(),
            instruments: default_instruments(),
            study_link: default_study_link(),
            text: ExperimentText::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cue_colors.len() < Condition::ALL.len() {
            return Err(ConfigError::invalid(format!(
                "cue_colors needs at least {} colors, got {}",
                Condition::ALL.len(),
                self.cue_colors.len()
            )));
        }
        for (idx, color) in self.cue_colors.iter().enumerate() {
            if color.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "cue_colors[{idx}] must be non-empty"
                )));
            }
            if self.cue_colors[..idx].contains(color) {
                return Err(ConfigError::invalid(format!(
                    "cue_colors[{idx}] repeats {color:?}"
                )));
            }
        }
        self.analog
            .validate()
            .map_err(|e| ConfigError::invalid(e.to_string()))?;
        if self.slider_width == 0 {
            return Err(ConfigError::invalid("slider_width must be >= 1"));
        }
        for (idx, instrument) in self.instruments.iter().enumerate() {
            if self.instruments[..idx].contains(instrument) {
                return Err(ConfigError::invalid(format!(
                    "instrument {instrument} is listed twice"
                )));
            }
        }
        if self.study_link.trim().is_empty() {
            return Err(ConfigError::invalid("study_link must be non-empty"));
        }
        Ok(())
    }

    /// `FICTIONERO_SEED` when set, else the configured seed.
    pub fn effective_seed(&self) -> Result<Option<u64>, ConfigError> {
        Ok(seed_from_env()?.or(self.rng_seed))
    }
}

/// Read `FICTIONERO_SEED`. Unset or blank means no seed; anything else must
/// parse as a `u64`.
pub fn seed_from_env() -> Result<Option<u64>, ConfigError> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => parse_seed(&raw),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(ConfigError::invalid(format!("{SEED_ENV} is not valid unicode")))
        }
    }
}

fn parse_seed(raw: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u64>().map(Some).map_err(|_| {
        warn!(value = %raw, "rejecting unparsable FICTIONERO_SEED");
        ConfigError::invalid(format!("{SEED_ENV}={raw:?} is not a u64 seed"))
    })
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<ExperimentConfig, ConfigError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let config: ExperimentConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}
