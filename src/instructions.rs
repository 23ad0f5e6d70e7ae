//! Participant-facing text and the builders that fill in session cue colors.
//!
//! The text is static content; only [`ExperimentText::task_instructions`]
//! depends on the session, through the cue colors bound to each condition.

use serde::{Deserialize, Serialize};

use crate::labels::{Condition, CueColors, LabelError};

pub const DEFAULT_STUDY_LINK: &str =
    "https://realitybending.github.io/FictionEro/experiment/english.html";

const PARAGRAPH: &str = "<p style='text-align: left; margin-left: 30%; margin-right: 30%;'>";

/// Escape characters that would break out of an HTML attribute or element.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Cue word for `condition`, bold and colored with the session's cue color.
pub fn cue_markup(condition: Condition, colors: &CueColors) -> Result<String, LabelError> {
    let color = colors.require(condition)?;
    Ok(format!(
        "<b style='color:{}'>{}</b>",
        escape_html(color),
        condition.cue_text()
    ))
}

// =============================================================================
// Text bundle
// =============================================================================

/// All static participant-facing text, overridable from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentText {
    pub consent: String,
    pub consent_button: String,
    pub fullscreen: String,
    pub fullscreen_button: String,
    pub instructions_button: String,
    pub rating_phase: String,
    pub questionnaires_intro: String,

    pub rating_ticks: (String, String),
    pub valence_ticks: (String, String),
    pub rating_appeal: String,
    pub rating_arousal: String,
    pub rating_valence: String,
    pub rating_realness: String,

    pub feedback_intro: String,
    pub feedback_items: Vec<String>,
    pub feedback_comment: String,
    pub feedback_placeholder: String,

    pub debriefing: String,
}

impl Default for ExperimentText {
    fn default() -> Self {
        Self {
            consent: CONSENT.to_string(),
            consent_button:
                "I am more than 18 years old, and I read, understood, and consent to the above"
                    .to_string(),
            fullscreen:
                "<p>The experiment will switch to full screen mode when you press the button below</p>"
                    .to_string(),
            fullscreen_button: "Continue".to_string(),
            instructions_button: "Let's start!".to_string(),
            rating_phase: RATING_PHASE.to_string(),
            questionnaires_intro:
                "<p><b>Thank you</b><br>Now please help us answer a few questions about yourself.</p>"
                    .to_string(),
            rating_ticks: ("Not at all".to_string(), "Very much".to_string()),
            valence_ticks: ("Unpleasant".to_string(), "Pleasant".to_string()),
            rating_appeal: "How <b>enticing</b> would you rate this image to be?".to_string(),
            rating_arousal: "How much did you feel <b>sexually aroused</b>?".to_string(),
            rating_valence: "The <b>feeling</b> evoked by the image was...".to_string(),
            rating_realness: "How <b>realistic</b> was this image?".to_string(),
            feedback_intro: concat!(
                "<h1>Thank you!</h1>",
                "<p>Before we end, we wanted to know some of your thoughts on the experiment. ",
                "Please tick all that apply:</p>",
            )
            .to_string(),
            feedback_items: FEEDBACK_ITEMS.iter().map(|s| s.to_string()).collect(),
            feedback_comment: "Do you have any other comments or feedback?".to_string(),
            feedback_placeholder: "Type here".to_string(),
            debriefing: DEBRIEFING.to_string(),
        }
    }
}

impl ExperimentText {
    /// Task instructions naming the cue word and color for each condition.
    pub fn task_instructions(&self, colors: &CueColors) -> Result<String, LabelError> {
        let fiction = cue_markup(Condition::Fiction, colors)?;
        let reality = cue_markup(Condition::Reality, colors)?;

        let mut out = String::from("<h1>Instructions</h1>");
        out.push_str(PARAGRAPH);
        out.push_str(concat!(
            "In this study, we aim at validating our <b>new image-generation algorithm</b> ",
            "(based on a new form of Generative Adversarial Network - GAN - technology) ",
            "trained to produce high-quality erotic (but also non-erotic content).</p>",
        ));
        out.push_str(PARAGRAPH);
        out.push_str(&format!(
            "In the following task, you will be presented with erotic and non-erotic images \
             generated by our algorithm (preceded by the word '{fiction}'), intermixed with \
             real photos (preceded by the word '{reality}') taken from public picture databases.</p>"
        ));
        out.push_str(PARAGRAPH);
        out.push_str("After each image, you will have to rate the images on the following scales:</p>");
        out.push_str("<ul style='text-align: left; margin-left: 30%; margin-right: 30%;'>");
        out.push_str(concat!(
            "<li><b>Arousing</b>: How much do you find the image sexually arousing. ",
            "This question is about your own <i>personal reaction</i> felt in your body ",
            "when seeing the image.</li>",
            "<li><b>Enticing</b>: How enticing and sexually appealing would you rate this ",
            "image to be. Think of how much, in general, people similar to you in terms of ",
            "gender and sexual orientation would like it.</li>",
            "<li><b>Valence</b>: Did the image evoke a positive and pleasant (not necessarily ",
            "sexual) feeling in you, or could it better characterized as negative and ",
            "unpleasant? Think of how much you did enjoy (or not) looking at the image</li></ul>",
        ));
        out.push_str(PARAGRAPH);
        out.push_str(concat!(
            "While the answers to these scales can sometimes be very similar, they can also ",
            "be different depending on the person, the image, and the context. For example, ",
            "we can sometimes find ourselves aroused to a picture that would probably not be ",
            "considered universally appealing. Conversely, an enticing and \"objectively\" ",
            "sexy image can, for one reason or another, not evoke any reaction in our body.</p>",
        ));
        out.push_str(PARAGRAPH);
        out.push_str(concat!(
            "<b>Try to be attentive to what happens in your mind and body while watching the ",
            "images to try to answer accurately based on your own feelings and reactions.</b></p>",
        ));
        out.push_str(PARAGRAPH);
        out.push_str(concat!(
            "Also, as some images are non-erotic, it might seem odd to think of how arousing ",
            "it is. Don't worry, it's normal. <b>There is no right or wrong answer</b>, just ",
            "listen to your body and try to answer as best as you can based on what you feel.</p>",
        ));
        Ok(out)
    }
}

/// Closing screen with a link participants can share.
pub fn end_screen(link: &str) -> String {
    let link = escape_html(link);
    format!(
        "<h1>Thank you for participating</h1>\
         <p>It means a lot to us. Don't hesitate to share the study by sending this link \
         <i>(but please don't reveal the details of the experiment)</i>:</p>\
         <p><a href='{link}'>{link}</a></p>\
         <p><b>You can safely close the tab now.</b></p>"
    )
}

// =============================================================================
// Content
// =============================================================================

const FEEDBACK_ITEMS: [&str; 10] = [
    "I had fun",
    "It was boring",
    "I could tell which images were photos and which were AI-generated",
    "I didn't see any difference between photos and AI-generated images",
    "I felt like the AI-generated images were more arousing than the photos",
    "I felt like the AI-generated images were less arousing than the photos",
    "I felt like the labels ('Photograph' and 'AI-generated') were not always correct",
    "I felt like the labels were reversed (e.g., 'Photograph' for AI-generated images and vice versa)",
    "Some pictures were really arousing",
    "I didn't really feel anything when watching the images",
];

const RATING_PHASE: &str = concat!(
    "<h1>Great!</h1>",
    "<p style='text-align: left; margin-left: 30%; margin-right: 30%;'>Thanks a lot. ",
    "In the next phase, we would like to see if you found our <b>image generation ",
    "algorithm convincing</b> and error-free.</p>",
    "<p style='text-align: left; margin-left: 30%; margin-right: 30%;'>We will briefly ",
    "present you <b>all the images</b> one last time (the AI-generated ones, as well as ",
    "the photos), and you will have to rate them on how <b>real</b> (how realistic, ",
    "photography-like) the image is.</p>",
    "<p style='text-align: left; margin-left: 30%; margin-right: 30%;'>We are interested ",
    "in your overall impression and gut feeling of whether you felt that the image was ",
    "AI-generated or not.</p>",
);

const DEBRIEFING: &str = concat!(
    "<h2>Debriefing</h2>",
    "<p align='left'>The purpose of this study was actually to study the effect on sexual ",
    "arousal of <i>believing</i> that the content is AI-generated. Indeed, we want to test ",
    "de hypothesis that believing that erotic images are fake would lead to a lower ",
    "emotional arousal. As we are primarily interested in your <i>beliefs</i> about reality, ",
    "all images were in fact taken from an existing database of real images used in ",
    "psychology research to study emotions. We apologize for the necessary deception used ",
    "in the instructions, and we hope that you understand its role in ensuring the validity ",
    "of our experiment.</p>",
    "<p align='left'><b>Thank you again!</b> Your participation in this study will be kept ",
    "completely confidential. If you have any questions or concerns about the project, ",
    "please contact D.Makowski@sussex.ac.uk.</p>",
    "<p>To complete your participation in this study, click on 'Continue' and <b>wait until ",
    "your responses have been successfully saved</b> before closing the tab.</p>",
);

const CONSENT: &str = concat!(
    "<img src='https://blogs.brighton.ac.uk/sussexwrites/files/2019/06/University-of-Sussex-logo-transparent.png' ",
    "width='150px' align='right'/><br><br><br><br><br>",
    "<h1>Informed Consent</h1>",
    "<p align='left'><b>Invitation to Take Part</b><br>",
    "You are being invited to take part in a research study to further our understanding ",
    "of the impact of new technologies. Thank you for carefully reading this information ",
    "sheet. This study is being conducted by Dr Dominique Makowski from the University of ",
    "Sussex, who is happy to be contacted (D.Makowski@sussex.ac.uk) if you have any questions.</p>",
    "<p align='left'><b>Why have I been invited and what will I do?</b><br>",
    "We are investigating how new technology can impact the habits and behaviours related ",
    "to pornography. In this study, you will be shown <b>erotic images</b>, so please make ",
    "sure you find yourself in an <b>private setting</b> for the whole duration of the ",
    "experiment (~20min).</p>",
    "<p align='left'><b>What will happen to the results and my personal information?</b><br>",
    "The results of this research may be written into a scientific publication. Your ",
    "anonymity will be ensured in the way described in the consent information below. ",
    "Please read this information carefully and then, if you wish to take part, please ",
    "acknowledge that you have fully understood this sheet, and that you consent to take ",
    "part in the study as it is described here.</p>",
    "<p align='left'><b>Consent</b><br></p><ul>",
    "<li align='left'>I understand that by signing below I am agreeing to take part in the ",
    "University of Sussex research described here, and that I have read and understood this ",
    "information sheet</li>",
    "<li align='left'>I understand that my participation is entirely voluntary, that I can ",
    "choose not to participate in part or all of the study, and that I can withdraw at any ",
    "stage without having to give a reason and without being penalised in any way (e.g., if ",
    "I am a student, my decision whether or not to take part will not affect my grades).</li>",
    "<li align='left'>I understand that since the study is anonymous, it will be impossible ",
    "to withdraw my data once I have completed and submitted the test/questionnaire.</li>",
    "<li align='left'>I understand that my personal data will be used for the purposes of ",
    "this research study and will be handled in accordance with Data Protection legislation. ",
    "I understand that the University's Privacy Notice provides further information on how ",
    "the University uses personal data in its research.</li>",
    "<li align='left'>I understand that my collected data will be stored in a de-identified ",
    "way. De-identified data may be made publically available through secured scientific ",
    "online data repositories.</li>",
    "<li align='left'>I understand that I will be shown potentially sensitive material ",
    "(erotic images), and thus confirm that I am older than 18 years old.</li>",
    "</ul></p>",
    "<p align='left'>For further information about this research, or if you have any ",
    "concerns, please contact Dr Dominique Makowski (D.Makowski@sussex.ac.uk). This research ",
    "has been approved (ER/NR274/1) by the School of Psychology. The University of Sussex has ",
    "insurance in place to cover its legal liabilities in respect of this study.</p>",
);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::assign_labels;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn colors(reality: &str, fiction: &str) -> CueColors {
        // Search seeds for the wanted order.
        let candidates = vec![reality.to_string(), fiction.to_string()];
        (0..64)
            .map(|seed| {
                assign_labels(&Condition::ALL, &candidates, &mut StdRng::seed_from_u64(seed))
                    .unwrap()
            })
            .find(|m| m.get(&Condition::Reality).map(String::as_str) == Some(reality))
            .unwrap()
    }

    #[test]
    fn instructions_carry_session_colors() {
        let text = ExperimentText::default();
        let html = text.task_instructions(&colors("red", "green")).unwrap();
        assert!(html.contains("<b style='color:green'>AI-generated</b>"));
        assert!(html.contains("<b style='color:red'>Photograph</b>"));
        assert!(html.starts_with("<h1>Instructions</h1>"));
    }

    #[test]
    fn cue_colors_are_escaped() {
        let m = colors("red'><script>", "blue");
        let cue = cue_markup(Condition::Reality, &m).unwrap();
        assert!(!cue.contains("<script>"));
        assert!(cue.contains("&lt;script&gt;"));
    }

    #[test]
    fn missing_condition_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let only_reality =
            assign_labels(&[Condition::Reality], &["red".to_string()], &mut rng).unwrap();
        let err = ExperimentText::default()
            .task_instructions(&only_reality)
            .unwrap_err();
        assert_eq!(err.code(), "unassigned_category");
    }

    #[test]
    fn end_screen_links_twice() {
        let html = end_screen(DEFAULT_STUDY_LINK);
        assert_eq!(html.matches(DEFAULT_STUDY_LINK).count(), 2);
    }

    #[test]
    fn text_overrides_keep_other_defaults() {
        let text: ExperimentText =
            serde_json::from_str(r#"{"instructions_button": "Go"}"#).unwrap();
        assert_eq!(text.instructions_button, "Go");
        assert_eq!(text.feedback_items.len(), 10);
        assert_eq!(text.valence_ticks.0, "Unpleasant");
    }
}
