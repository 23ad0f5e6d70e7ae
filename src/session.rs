//! One participant session.
//!
//! A session assigns cue colors exactly once when it starts. Every builder
//! afterwards reads the same immutable map, so the colors a participant is
//! told about in the instructions are the ones they see on every trial.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::config::{ConfigError, ExperimentConfig};
use crate::instructions::{cue_markup, end_screen};
use crate::instruments::{rating_questions, realness_questions, Instrument};
use crate::labels::{assign_cue_colors, Condition, CueColors, LabelError};
use crate::questionnaire::{fingerprint, QuestionSchema, QuestionnaireScreen, SchemaError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Labels(#[from] LabelError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Instruction and content screens, with session cue colors filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionSet {
    pub consent: String,
    pub consent_button: String,
    pub fullscreen: String,
    pub fullscreen_button: String,
    pub task: String,
    pub task_button: String,
    pub fiction_cue: String,
    pub reality_cue: String,
    pub rating_phase: String,
    pub questionnaires_intro: String,
    pub feedback_intro: String,
    pub feedback_items: Vec<String>,
    pub feedback_comment: String,
    pub feedback_placeholder: String,
    pub debriefing: String,
    pub end_screen: String,
}

/// Everything the engine needs for one session, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct SessionBundle {
    pub generated_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub cue_colors: CueColors,
    pub instructions: InstructionSet,
    pub ratings: Vec<QuestionSchema>,
    pub realness: Vec<QuestionSchema>,
    pub questionnaires: Vec<QuestionnaireScreen>,
    /// blake3 over everything above except the timestamp.
    pub content_hash: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: ExperimentConfig,
    cue_colors: CueColors,
    seed: Option<u64>,
}

impl Session {
    /// Start a session, seeding from `FICTIONERO_SEED` or the config when
    /// either is set and from entropy otherwise.
    pub fn start(config: ExperimentConfig) -> Result<Self, SessionError> {
        let seed = config.effective_seed()?;
        Self::start_with_seed(config, seed)
    }

    /// Start a session with an explicit seed, bypassing the environment.
    pub fn start_with_seed(
        config: ExperimentConfig,
        seed: Option<u64>,
    ) -> Result<Self, SessionError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self::start_with_rng(config, &mut rng)?;
        session.seed = seed;
        Ok(session)
    }

    /// Start a session drawing the cue assignment from `rng`.
    pub fn start_with_rng<R: Rng + ?Sized>(
        config: ExperimentConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let cue_colors = assign_cue_colors(&config.cue_colors, rng)?;
        info!(cues = %cue_colors, "session cue colors assigned");
        Ok(Self {
            config,
            cue_colors,
            seed: None,
        })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn cue_colors(&self) -> &CueColors {
        &self.cue_colors
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn instructions(&self) -> Result<InstructionSet, SessionError> {
        let text = &self.config.text;
        Ok(InstructionSet {
            consent: text.consent.clone(),
            consent_button: text.consent_button.clone(),
            fullscreen: text.fullscreen.clone(),
            fullscreen_button: text.fullscreen_button.clone(),
            task: text.task_instructions(&self.cue_colors)?,
            task_button: text.instructions_button.clone(),
            fiction_cue: cue_markup(Condition::Fiction, &self.cue_colors)?,
            reality_cue: cue_markup(Condition::Reality, &self.cue_colors)?,
            rating_phase: text.rating_phase.clone(),
            questionnaires_intro: text.questionnaires_intro.clone(),
            feedback_intro: text.feedback_intro.clone(),
            feedback_items: text.feedback_items.clone(),
            feedback_comment: text.feedback_comment.clone(),
            feedback_placeholder: text.feedback_placeholder.clone(),
            debriefing: text.debriefing.clone(),
            end_screen: end_screen(&self.config.study_link),
        })
    }

    pub fn questionnaire(
        &self,
        instrument: Instrument,
    ) -> Result<QuestionnaireScreen, SessionError> {
        Ok(instrument.screen(&self.config.analog, self.config.slider_width)?)
    }

    pub fn questionnaires(&self) -> Result<Vec<QuestionnaireScreen>, SessionError> {
        self.config
            .instruments
            .iter()
            .map(|&instrument| self.questionnaire(instrument))
            .collect()
    }

    pub fn rating_questions(&self) -> Result<Vec<QuestionSchema>, SessionError> {
        Ok(rating_questions(&self.config.text, &self.config.analog)?)
    }

    pub fn realness_questions(&self) -> Result<Vec<QuestionSchema>, SessionError> {
        Ok(realness_questions(&self.config.text, &self.config.analog)?)
    }

    pub fn bundle(&self) -> Result<SessionBundle, SessionError> {
        let instructions = self.instructions()?;
        let ratings = self.rating_questions()?;
        let realness = self.realness_questions()?;
        let questionnaires = self.questionnaires()?;

        let mut hasher = blake3::Hasher::new();
        hasher.update(serde_json::to_string(&self.cue_colors).unwrap_or_default().as_bytes());
        hasher.update(b"|");
        hasher.update(serde_json::to_string(&instructions).unwrap_or_default().as_bytes());
        hasher.update(b"|");
        hasher.update(fingerprint(&ratings).as_bytes());
        hasher.update(b"|");
        hasher.update(fingerprint(&realness).as_bytes());
        for screen in &questionnaires {
            hasher.update(b"|");
            hasher.update(screen.data.schema_fingerprint.as_bytes());
        }
        let content_hash = hasher.finalize().to_hex().to_string();

        info!(
            questionnaires = questionnaires.len(),
            content_hash = %content_hash,
            "session bundle built"
        );

        Ok(SessionBundle {
            generated_at: Utc::now(),
            seed: self.seed,
            cue_colors: self.cue_colors.clone(),
            instructions,
            ratings,
            realness,
            questionnaires,
            content_hash,
        })
    }
}
