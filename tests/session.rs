use fictionero::config::load_config_from_path;
use fictionero::{Condition, ConfigError, ExperimentConfig, Instrument, ScreenKind, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn seeded(seed: u64) -> Session {
    Session::start_with_rng(ExperimentConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn instructions_use_the_session_colors() {
    let session = seeded(17);
    let reality = session.cue_colors().get(&Condition::Reality).unwrap().clone();
    let fiction = session.cue_colors().get(&Condition::Fiction).unwrap().clone();
    assert_ne!(reality, fiction);

    let set = session.instructions().unwrap();
    assert!(set
        .task
        .contains(&format!("<b style='color:{fiction}'>AI-generated</b>")));
    assert!(set
        .task
        .contains(&format!("<b style='color:{reality}'>Photograph</b>")));
    assert_eq!(
        set.fiction_cue,
        format!("<b style='color:{fiction}'>AI-generated</b>")
    );
    assert!(set.end_screen.contains("FictionEro"));
}

#[test]
fn default_bundle_has_extended_instruments() {
    let bundle = seeded(1).bundle().unwrap();
    let screens: Vec<&str> = bundle
        .questionnaires
        .iter()
        .map(|s| s.data.screen.as_str())
        .collect();
    assert_eq!(
        screens,
        vec!["questionnaire_bait_extended", "questionnaire_cops_extended"]
    );
    assert_eq!(bundle.questionnaires[0].kind, ScreenKind::MultipleSlider);
    assert_eq!(bundle.questionnaires[1].kind, ScreenKind::SurveyMultiChoice);
    assert_eq!(bundle.ratings.len(), 3);
    assert_eq!(bundle.realness.len(), 1);
    assert_eq!(bundle.content_hash.len(), 64);
}

#[test]
fn bundle_serializes_for_the_engine() {
    let bundle = seeded(5).bundle().unwrap();
    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["cue_colors"].as_array().unwrap().len(), 2);
    assert_eq!(json["questionnaires"][0]["type"], "multiple-slider");
    assert_eq!(json["questionnaires"][0]["slider_width"], 600);
    assert_eq!(json["questionnaires"][1]["css_classes"][0], "narrow-text");
    assert!(json["generated_at"].is_string());
}

#[test]
fn config_file_drives_the_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("experiment.json");
    std::fs::write(
        &path,
        r#"{
            "cue_colors": ["orange", "purple"],
            "rng_seed": 11,
            "instruments": ["bait", "cops"],
            "slider_width": 480,
            "study_link": "https://example.org/study"
        }"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    let session = Session::start(config).unwrap();
    assert_eq!(session.seed(), Some(11));

    let mut colors: Vec<&String> = session.cue_colors().labels().collect();
    colors.sort();
    assert_eq!(colors, vec!["orange", "purple"]);

    let bundle = session.bundle().unwrap();
    assert_eq!(bundle.questionnaires.len(), 2);
    assert_eq!(bundle.questionnaires[0].options.slider_width, Some(480));
    assert_eq!(
        bundle.questionnaires[1].questions[2].name(),
        "COPS_Horniness_1"
    );
    assert!(bundle
        .instructions
        .end_screen
        .contains("https://example.org/study"));
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"cue_colors": ["red"]}"#).unwrap();
    assert!(matches!(
        load_config_from_path(&path),
        Err(ConfigError::Invalid(_))
    ));

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        load_config_from_path(&path),
        Err(ConfigError::Parse(_))
    ));

    assert!(matches!(
        load_config_from_path(dir.path().join("missing.json")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn every_instrument_builds_a_screen() {
    let session = seeded(0);
    for instrument in Instrument::ALL {
        let screen = session.questionnaire(instrument).unwrap();
        assert_eq!(screen.questions.len(), instrument.item_count());
        assert_eq!(screen.data.screen, instrument.screen_name());
    }
}
