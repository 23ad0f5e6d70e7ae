#![forbid(unsafe_code)]

//! # fictionero
//!
//! Content and configuration core for the FictionEro experiment: do erotic
//! images feel less arousing when participants believe they are AI-generated?
//!
//! Two leaves feed the (external) presentation engine:
//!
//! - the **condition labeler** binds the experimental conditions (`Reality`,
//!   `Fiction`) to randomly permuted cue colors once per session, and
//! - the **questionnaire compiler** turns flat item/name lists into slider or
//!   multiple-choice question schemas.
//!
//! Everything else here (instruments, instruction text, screens, sessions)
//! is assembled from those two pieces and serialized to JSON for the engine.

pub mod config;
pub mod instructions;
pub mod instruments;
pub mod labels;
pub mod questionnaire;
pub mod session;

pub use config::{load_config_from_path, ConfigError, ExperimentConfig};
pub use instructions::ExperimentText;
pub use instruments::Instrument;
pub use labels::{
    assign_labels, assign_labels_with_entropy, shuffle_labels, CategoryLabelMap, Condition,
    CueColors, LabelError,
};
pub use questionnaire::{
    compile_analog, compile_analog_with, compile_choice, fingerprint, AnalogConfig,
    AnalogQuestion, ChoiceQuestion, ChoiceSpec, PresentationOptions, QuestionSchema,
    QuestionnaireScreen, SchemaError, ScreenKind,
};
pub use session::{Session, SessionBundle, SessionError};
