//! Questionnaire compilation for the presentation engine.
//!
//! Turns authored item lists into canonical question schemas:
//! - analog: parallel prompt/name lists become slider questions
//! - choice: multiple-choice specs are validated and repackaged
//!
//! Compilation is all-or-nothing. Any malformed item aborts with a
//! [`SchemaError`] naming the offending index and variable name.

pub mod compile;
pub mod error;
pub mod schema;
pub mod screen;

pub use compile::{
    compile_analog, compile_analog_with, compile_choice, fingerprint, AnalogConfig, ChoiceSpec,
};
pub use error::SchemaError;
pub use schema::{AnalogQuestion, ChoiceQuestion, QuestionSchema, Ticks};
pub use screen::{PresentationOptions, QuestionnaireScreen, ScreenData, ScreenKind};
