//! Questionnaire screens: compiled questions plus pass-through presentation
//! options, serialized as engine trial definitions.

use serde::{Deserialize, Serialize};

use super::compile::fingerprint;
use super::error::SchemaError;
use super::schema::QuestionSchema;

/// Engine plugin that renders the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    #[serde(rename = "multiple-slider")]
    MultipleSlider,
    #[serde(rename = "survey-multi-choice")]
    SurveyMultiChoice,
}

impl ScreenKind {
    fn accepts(self, question: &QuestionSchema) -> bool {
        matches!(
            (self, question),
            (ScreenKind::MultipleSlider, QuestionSchema::Analog(_))
                | (ScreenKind::SurveyMultiChoice, QuestionSchema::Choice(_))
        )
    }

    fn for_question(question: &QuestionSchema) -> Self {
        match question {
            QuestionSchema::Analog(_) => ScreenKind::MultipleSlider,
            QuestionSchema::Choice(_) => ScreenKind::SurveyMultiChoice,
        }
    }
}

/// Per-screen options the engine interprets; carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationOptions {
    #[serde(default)]
    pub randomize_question_order: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_movement: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css_classes: Vec<String>,
    /// Slider width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_width: Option<u32>,
}

/// Data the engine stores alongside every response from the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenData {
    pub screen: String,
    pub schema_fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireScreen {
    #[serde(rename = "type")]
    pub kind: ScreenKind,
    pub preamble: String,
    pub questions: Vec<QuestionSchema>,
    #[serde(flatten)]
    pub options: PresentationOptions,
    pub data: ScreenData,
}

impl QuestionnaireScreen {
    /// Wrap compiled questions in a screen. The plugin is picked from the
    /// question type; every question must share it.
    pub fn new(
        screen: impl Into<String>,
        preamble: impl Into<String>,
        questions: Vec<QuestionSchema>,
        options: PresentationOptions,
    ) -> Result<Self, SchemaError> {
        let screen = screen.into();
        let kind = match questions.first() {
            Some(first) => ScreenKind::for_question(first),
            None => return Err(SchemaError::EmptyQuestionnaire { screen }),
        };
        if let Some((index, q)) = questions
            .iter()
            .enumerate()
            .find(|(_, q)| !kind.accepts(q))
        {
            return Err(SchemaError::MixedKinds {
                index,
                name: q.name().to_string(),
            });
        }

        let schema_fingerprint = fingerprint(&questions);
        Ok(Self {
            kind,
            preamble: preamble.into(),
            questions,
            options,
            data: ScreenData {
                screen,
                schema_fingerprint,
            },
        })
    }

    /// Variable names in question order.
    pub fn names(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::compile::{compile_analog, compile_choice, ChoiceSpec};

    #[test]
    fn slider_screen_flattens_options() {
        let qs = compile_analog(&["a", "b"], &["n1", "n2"], ("Lo", "Hi")).unwrap();
        let opts = PresentationOptions {
            randomize_question_order: true,
            require_movement: Some(false),
            slider_width: Some(600),
            ..PresentationOptions::default()
        };
        let screen =
            QuestionnaireScreen::new("questionnaire_test", "<h2>T</h2>", qs, opts).unwrap();
        let json = serde_json::to_value(&screen).unwrap();

        assert_eq!(json["type"], "multiple-slider");
        assert_eq!(json["randomize_question_order"], true);
        assert_eq!(json["require_movement"], false);
        assert_eq!(json["slider_width"], 600);
        assert!(json.get("css_classes").is_none());
        assert_eq!(json["data"]["screen"], "questionnaire_test");
        assert_eq!(screen.names(), vec!["n1", "n2"]);
    }

    #[test]
    fn empty_screen_is_rejected() {
        let err = QuestionnaireScreen::new("x", "", Vec::new(), PresentationOptions::default())
            .unwrap_err();
        assert_eq!(err.code(), "empty_questionnaire");
    }

    #[test]
    fn mixed_question_types_are_rejected() {
        let mut qs = compile_analog(&["a"], &["n1"], ("Lo", "Hi")).unwrap();
        qs.extend(compile_choice(&[ChoiceSpec::new("p", "c1", ["x"])]).unwrap());
        let err = QuestionnaireScreen::new("x", "", qs, PresentationOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::MixedKinds {
                index: 1,
                name: "c1".into()
            }
        );
    }
}
