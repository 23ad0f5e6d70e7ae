//! Questionnaire instruments administered after the rating task.
//!
//! - **BAIT**: Beliefs about Artificial Images Technology, prefixed with the
//!   most loaded GAAIS items (Schepman et al., 2020, 2022, 2023). Analog
//!   agreement sliders.
//! - **COPS**: Consumption of Pornography Scale – General (Hatch et al.,
//!   2023), plus sexual activity and orientation. Multiple choice.
//!
//! Each instrument exists in two revisions that differ in items and variable
//! names. They are kept as separate instruments so that persisted response
//! keys stay unambiguous.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::instructions::ExperimentText;
use crate::questionnaire::{
    compile_analog_with, compile_choice, AnalogConfig, ChoiceSpec, PresentationOptions,
    QuestionSchema, QuestionnaireScreen, SchemaError,
};

/// Schepman et al. (2022) dropped "Strongly" from the agreement anchors.
pub const BAIT_TICKS: (&str, &str) = ("Disagree", "Agree");

pub const BAIT_SLIDER_WIDTH: u32 = 600;

const BAIT_PREAMBLE: &str = concat!(
    "<h2>About AI...</h2>",
    "<p>We are interested in your thoughts about Artificial Intelligence (AI).<br>",
    "Please read the statements below carefully and indicate the extent to which ",
    "you agree with each statement.</p>",
);

const COPS_PREAMBLE: &str = concat!(
    "<h2>About Pornography...</h2>",
    "<p style='text-align: left;'>Given the nature of our study, we are interested in ",
    "understanding your habits in terms of exposure to pornography. Please consider ",
    "answering the questions below.</p>",
);

// =============================================================================
// BAIT items
// =============================================================================

// GAAIS Neg9, Neg10, Neg15, Pos7, Pos12, Pos17 then BAIT 1-6.
const BAIT_ITEMS: [&str; 12] = [
    "Artificial Intelligence might take control of people",
    "Artificial Intelligence is dangerous",
    "I am worried about future uses of Artificial Intelligence<br>",
    "I am interested in using artificially intelligent systems in my daily life",
    "Artificial Intelligence is exciting",
    "Much of society will benefit from a future full of Artificial Intelligence<br>",
    "Current Artificial Intelligence algorithms can generate very realistic images",
    "Images of faces or people generated by Artificial Intelligence always contain errors and artifacts",
    "Videos generated by Artificial Intelligence have obvious problems that make them easy to spot as fake",
    "Current Artificial Intelligence algorithms can generate very realistic videos",
    "Computer-Generated Images (CGI) are capable of perfectly imitating reality",
    "Technology allows the creation of environments that seem just as real as reality",
];

// Response keys already in collected data; BAIT_3/BAIT_4 are kept as first
// published even though they read swapped against the items.
const BAIT_NAMES: [&str; 12] = [
    "GAAIS_Negative_9",
    "GAAIS_Negative_10",
    "GAAIS_Negative_15",
    "GAAIS_Positive_7",
    "GAAIS_Positive_12",
    "GAAIS_Positive_17",
    "BAIT_1_ImagesRealistic",
    "BAIT_2_ImagesIssues",
    "BAIT_3_VideosRealistic",
    "BAIT_4_VideosIssues",
    "BAIT_5_ImitatingReality",
    "BAIT_6_EnvironmentReal",
];

const BAIT_EXTENDED_ITEMS: [&str; 14] = [
    "Artificial Intelligence might take control of people",
    "Artificial Intelligence is dangerous",
    "I am worried about future uses of Artificial Intelligence",
    "I am interested in using artificially intelligent systems in my daily life",
    "Artificial Intelligence is exciting",
    "Much of society will benefit from a future full of Artificial Intelligence",
    "Current Artificial Intelligence algorithms can generate very realistic images",
    "Images of faces or people generated by Artificial Intelligence always contain errors and artifacts",
    "Videos generated by Artificial Intelligence have obvious problems that make them easy to spot as fake",
    "Current Artificial Intelligence algorithms can generate very realistic videos",
    "Computer-Generated Images (CGI) are capable of perfectly imitating reality",
    "Technology allows the creation of environments that seem just as real as reality",
    "Artificial Intelligence assistants can write texts that are indistinguishable from those written by humans",
    "Documents and paragraphs written by Artificial Intelligence usually read differently compared to Human productions",
];

// Revised keys name BAIT_3/BAIT_4 by content, so the same video items are stored
// under different suffixes than in `BAIT_NAMES`.
const BAIT_EXTENDED_NAMES: [&str; 14] = [
    "GAAIS_Negative_9",
    "GAAIS_Negative_10",
    "GAAIS_Negative_15",
    "GAAIS_Positive_7",
    "GAAIS_Positive_12",
    "GAAIS_Positive_17",
    "BAIT_1_ImagesRealistic",
    "BAIT_2_ImagesIssues",
    "BAIT_3_VideosIssues",
    "BAIT_4_VideosRealistic",
    "BAIT_5_ImitatingReality",
    "BAIT_6_EnvironmentReal",
    "BAIT_7_TextRealistic",
    "BAIT_8_TextIssues",
];

// =============================================================================
// COPS items
// =============================================================================

const COPS_FREQUENCY_PROMPT: &str =
    "<b>How often have you viewed pornography in the past 30 days?</b>";
const COPS_FREQUENCY_OPTIONS: [&str; 7] = [
    "0. I haven't viewed pornography in the past 30 days",
    "1. I viewed pornography once in the past 30 days",
    "2. I viewed pornography twice in the past 30 days",
    "3. I viewed pornography weekly",
    "4. I viewed pornography multiple times a week",
    "5. I viewed pornography daily",
    "6. I viewed pornography multiple times a day",
];

const COPS_DURATION_PROMPT: &str = "<b>4. When I view pornography, I view it for...</b>";
const COPS_DURATION_OPTIONS: [&str; 6] = [
    "1. Less than 5 minutes",
    "2. 6-15 minutes",
    "3. 16-25 minutes",
    "4. 26-35 minutes",
    "5. 36-45 minutes",
    "6. 46+ minutes",
];

const SEXUAL_ACTIVITY_PROMPT: &str = "<b>When was the last time you engaged in any kind of sexual activity (intercourse or masturbation)?</b>";
const SEXUAL_ACTIVITY_OPTIONS: [&str; 6] = [
    "1. Less than 24h ago",
    "2. Within the last 3 days",
    "3. within the last week",
    "4. Within the last month",
    "5. Within the last year",
    "6. More than a year ago",
];

const ORIENTATION_PROMPT: &str = "<b>How would you describe your sexual orientation?</b>";
const ORIENTATION_OPTIONS: [&str; 4] = ["Heterosexual", "Bisexual", "Homosexual", "Other"];

fn cops_specs(activity_name: &str) -> Vec<ChoiceSpec> {
    vec![
        ChoiceSpec::new(
            COPS_FREQUENCY_PROMPT,
            "COPS_Frequency_2",
            COPS_FREQUENCY_OPTIONS,
        ),
        ChoiceSpec::new(COPS_DURATION_PROMPT, "COPS_Duration_1", COPS_DURATION_OPTIONS),
        ChoiceSpec::new(SEXUAL_ACTIVITY_PROMPT, activity_name, SEXUAL_ACTIVITY_OPTIONS),
        ChoiceSpec::new(ORIENTATION_PROMPT, "SexualOrientation", ORIENTATION_OPTIONS),
    ]
}

// =============================================================================
// Instruments
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// GAAIS + BAIT 1-6.
    Bait,
    /// GAAIS + BAIT 1-8, with the text-generation items.
    BaitExtended,
    /// COPS with the activity item keyed `COPS_Horniness_1`.
    Cops,
    /// COPS with the activity item keyed `SexualActivity`.
    CopsExtended,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Bait,
        Instrument::BaitExtended,
        Instrument::Cops,
        Instrument::CopsExtended,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Instrument::Bait => "bait",
            Instrument::BaitExtended => "bait_extended",
            Instrument::Cops => "cops",
            Instrument::CopsExtended => "cops_extended",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.slug() == slug)
    }

    /// Value stored in the engine's `data.screen` field.
    pub fn screen_name(self) -> String {
        format!("questionnaire_{}", self.slug())
    }

    pub fn item_count(self) -> usize {
        match self {
            Instrument::Bait => BAIT_ITEMS.len(),
            Instrument::BaitExtended => BAIT_EXTENDED_ITEMS.len(),
            Instrument::Cops | Instrument::CopsExtended => self.choice_specs().len(),
        }
    }

    pub fn preamble(self) -> &'static str {
        match self {
            Instrument::Bait | Instrument::BaitExtended => BAIT_PREAMBLE,
            Instrument::Cops | Instrument::CopsExtended => COPS_PREAMBLE,
        }
    }

    /// Authored multiple-choice specs; empty for slider instruments.
    pub fn choice_specs(self) -> Vec<ChoiceSpec> {
        match self {
            Instrument::Bait | Instrument::BaitExtended => Vec::new(),
            Instrument::Cops => cops_specs("COPS_Horniness_1"),
            Instrument::CopsExtended => cops_specs("SexualActivity"),
        }
    }

    /// Compile the instrument's questions. `analog` applies to slider
    /// instruments only.
    pub fn compile(self, analog: &AnalogConfig) -> Result<Vec<QuestionSchema>, SchemaError> {
        match self {
            Instrument::Bait => compile_analog_with(&BAIT_ITEMS, &BAIT_NAMES, BAIT_TICKS, analog),
            Instrument::BaitExtended => compile_analog_with(
                &BAIT_EXTENDED_ITEMS,
                &BAIT_EXTENDED_NAMES,
                BAIT_TICKS,
                analog,
            ),
            Instrument::Cops | Instrument::CopsExtended => compile_choice(&self.choice_specs()),
        }
    }

    /// Presentation options the instrument is administered with.
    pub fn presentation(self, slider_width: u32) -> PresentationOptions {
        match self {
            Instrument::Bait | Instrument::BaitExtended => PresentationOptions {
                randomize_question_order: true,
                require_movement: Some(false),
                css_classes: Vec::new(),
                slider_width: Some(slider_width),
            },
            Instrument::Cops | Instrument::CopsExtended => PresentationOptions {
                css_classes: vec!["narrow-text".to_string()],
                ..PresentationOptions::default()
            },
        }
    }

    /// Full engine screen for this instrument.
    pub fn screen(
        self,
        analog: &AnalogConfig,
        slider_width: u32,
    ) -> Result<QuestionnaireScreen, SchemaError> {
        QuestionnaireScreen::new(
            self.screen_name(),
            self.preamble(),
            self.compile(analog)?,
            self.presentation(slider_width),
        )
    }
}

// =============================================================================
// Stimulus ratings
// =============================================================================

/// Slider questions asked after every image: arousal, appeal, valence.
///
/// Valence has its own anchors, so it is compiled separately and appended.
/// Prompts already carry their own markup.
pub fn rating_questions(
    text: &ExperimentText,
    analog: &AnalogConfig,
) -> Result<Vec<QuestionSchema>, SchemaError> {
    let analog = analog.clone().plain_prompts();
    let mut questions = compile_analog_with(
        &[text.rating_arousal.as_str(), text.rating_appeal.as_str()],
        &["Arousal", "Enticement"],
        (text.rating_ticks.0.as_str(), text.rating_ticks.1.as_str()),
        &analog,
    )?;
    questions.extend(compile_analog_with(
        &[text.rating_valence.as_str()],
        &["Valence"],
        (text.valence_ticks.0.as_str(), text.valence_ticks.1.as_str()),
        &analog,
    )?);
    Ok(questions)
}

/// Single realness slider for the second pass over the images.
pub fn realness_questions(
    text: &ExperimentText,
    analog: &AnalogConfig,
) -> Result<Vec<QuestionSchema>, SchemaError> {
    compile_analog_with(
        &[text.rating_realness.as_str()],
        &["Realness"],
        (text.rating_ticks.0.as_str(), text.rating_ticks.1.as_str()),
        &analog.clone().plain_prompts(),
    )
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
