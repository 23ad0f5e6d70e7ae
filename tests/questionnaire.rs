use fictionero::{
    compile_analog, compile_analog_with, compile_choice, fingerprint, AnalogConfig, ChoiceSpec,
    Instrument, QuestionSchema, SchemaError,
};

#[test]
fn analog_example_compiles_in_order_with_defaults() {
    let qs = compile_analog(&["a", "b"], &["n1", "n2"], ("Lo", "Hi")).unwrap();
    assert_eq!(qs.len(), 2);

    let first = qs[0].as_analog().unwrap();
    assert_eq!(first.name, "n1");
    assert_eq!(first.prompt, "<b>a</b>");
    assert_eq!(first.ticks, ("Lo".to_string(), "Hi".to_string()));
    assert_eq!(first.min, 0.0);
    assert_eq!(first.max, 1.0);
    assert_eq!(first.step, 0.01);
    assert_eq!(first.slider_start, 0.5);
    assert!(!first.required);

    let second = qs[1].as_analog().unwrap();
    assert_eq!(second.name, "n2");
    assert_eq!(second.prompt, "<b>b</b>");
}

#[test]
fn analog_length_mismatch() {
    let err = compile_analog(&["a", "b"], &["n1"], ("Lo", "Hi")).unwrap_err();
    assert_eq!(err, SchemaError::LengthMismatch { items: 2, names: 1 });
    assert_eq!(err.code(), "length_mismatch");
}

#[test]
fn analog_duplicate_names() {
    let err = compile_analog(&["a", "b", "c"], &["n1", "n2", "n1"], ("Lo", "Hi")).unwrap_err();
    assert_eq!(
        err,
        SchemaError::DuplicateName {
            index: 2,
            name: "n1".into()
        }
    );
}

#[test]
fn analog_bad_config_aborts_whole_compile() {
    let cfg = AnalogConfig {
        slider_start: 5.0,
        ..AnalogConfig::default()
    };
    let err = compile_analog_with(&["a"], &["n1"], ("Lo", "Hi"), &cfg).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidRange(_)));
}

#[test]
fn choice_empty_options() {
    let specs = vec![
        ChoiceSpec::new("p1", "c1", ["x", "y"]),
        ChoiceSpec::new("p2", "c2", Vec::<String>::new()),
    ];
    let err = compile_choice(&specs).unwrap_err();
    assert_eq!(
        err,
        SchemaError::EmptyOptions {
            index: 1,
            name: "c2".into()
        }
    );
}

#[test]
fn choice_duplicate_names() {
    let specs = vec![
        ChoiceSpec::new("p1", "same", ["x"]),
        ChoiceSpec::new("p2", "same", ["y"]),
    ];
    let err = compile_choice(&specs).unwrap_err();
    assert_eq!(err.code(), "duplicate_name");
    assert_eq!(err.index(), Some(1));
}

#[test]
fn choice_passes_text_through() {
    let specs = vec![ChoiceSpec::new("<b>Q?</b>", "q", ["b", "a", "c"]).required(true)];
    let qs = compile_choice(&specs).unwrap();
    let q = qs[0].as_choice().unwrap();
    assert_eq!(q.prompt, "<b>Q?</b>");
    assert_eq!(q.options, vec!["b", "a", "c"]);
    assert!(q.required);
}

#[test]
fn compilation_is_idempotent() {
    let items = ["a", "b", "c"];
    let names = ["x", "y", "z"];
    let first = compile_analog(&items, &names, ("Lo", "Hi")).unwrap();
    let second = compile_analog(&items, &names, ("Lo", "Hi")).unwrap();
    assert_eq!(first, second);
    assert_eq!(fingerprint(&first), fingerprint(&second));

    let specs = Instrument::Cops.choice_specs();
    assert_eq!(compile_choice(&specs).unwrap(), compile_choice(&specs).unwrap());
}

#[test]
fn names_trace_back_to_source_index() {
    let items = ["first", "second", "third"];
    let names = ["A", "B", "C"];
    let qs = compile_analog(&items, &names, ("Lo", "Hi")).unwrap();
    for q in &qs {
        let idx = names.iter().position(|n| *n == q.name()).unwrap();
        assert_eq!(q.prompt(), format!("<b>{}</b>", items[idx]));
        assert_eq!(names.iter().filter(|n| **n == q.name()).count(), 1);
    }
}

#[test]
fn compiled_sequence_round_trips_through_json() {
    let qs = Instrument::BaitExtended
        .compile(&AnalogConfig::default())
        .unwrap();
    let json = serde_json::to_string(&qs).unwrap();
    let back: Vec<QuestionSchema> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, qs);
}
