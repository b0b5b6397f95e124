use filter_parity::prelude::*;

// ============================================================================
// Literal rendering
// ============================================================================

#[test]
fn test_render_scalars() {
    assert_eq!(OctaveValue::Scalar(7.0).render(Orientation::Row), "7.0");
    assert_eq!(OctaveValue::Scalar(0.2).render(Orientation::Row), "0.2");
    assert_eq!(OctaveValue::Scalar(f64::NAN).render(Orientation::Row), "NaN");
    assert_eq!(OctaveValue::Scalar(f64::INFINITY).render(Orientation::Row), "Inf");
    assert_eq!(
        OctaveValue::Scalar(f64::NEG_INFINITY).render(Orientation::Row),
        "-Inf"
    );
}

#[test]
fn test_render_vectors_by_orientation() {
    let v = OctaveValue::Vector(vec![1.0, -2.5, 3e-20]);
    assert_eq!(v.render(Orientation::Row), "[1.0, -2.5, 3e-20]");
    assert_eq!(v.render(Orientation::Column), "[1.0; -2.5; 3e-20]");
    assert_eq!(OctaveValue::Vector(vec![]).render(Orientation::Row), "[]");
}

#[test]
fn test_render_strings_and_expressions() {
    assert_eq!(OctaveValue::Str("high".into()).render(Orientation::Row), "'high'");
    assert_eq!(OctaveValue::Str("it's".into()).render(Orientation::Row), "'it''s'");
    assert_eq!(
        OctaveValue::Expr("hann(8)".into()).render(Orientation::Column),
        "hann(8)"
    );
}

#[test]
fn test_rendered_numbers_round_trip() {
    let taps: Vec<f64> = fir1(7, 0.2).unwrap();
    let rendered = OctaveValue::Vector(taps.clone()).render(Orientation::Row);
    let parsed: Vec<f64> = rendered
        .trim_matches(['[', ']'])
        .split(", ")
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(parsed, taps);
}

#[test]
fn test_session_options_builder() {
    let options = SessionOptions::default()
        .program("octave")
        .args(["--no-gui"])
        .oned_as(Orientation::Column);
    assert_eq!(options.program, "octave");
    assert_eq!(options.args, vec!["--no-gui".to_string()]);
    assert_eq!(options.oned_as, Orientation::Column);

    let defaults = SessionOptions::default();
    assert_eq!(defaults.program, "octave-cli");
    assert_eq!(defaults.oned_as, Orientation::Row);
}

// ============================================================================
// Setup failures
// ============================================================================

#[test]
fn test_missing_program_is_a_spawn_setup_error() {
    let options = SessionOptions::default().program("filter-parity-missing-octave-binary");
    let err = OctaveOracle::open(&options).unwrap_err();
    match err {
        ParityError::Setup { stage, .. } => assert_eq!(stage, "spawn"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_program_aborts_check() {
    let options = SessionOptions::default().program("filter-parity-missing-octave-binary");
    let check = FirDesignCheck::new(FilterSpec::new(7, 0.2).unwrap());
    let err = check
        .run_scoped(|| OctaveOracle::open(&options), &RunConfig::default())
        .unwrap_err();
    assert!(matches!(err, ParityError::Setup { .. }));
}

// ============================================================================
// Live Octave (requires octave-cli with the signal package)
// ============================================================================

#[test]
#[ignore = "requires octave-cli with the signal package"]
fn test_octave_fir_design_check() {
    let config = RunConfig::builder().seed(0).build().unwrap();
    let check = FirDesignCheck::new(FilterSpec::new(7, 0.2).unwrap());
    let report = check
        .run_scoped(|| OctaveOracle::open(&SessionOptions::default()), &config)
        .unwrap();
    assert_eq!(report.reference_taps.len(), 8);
    assert!(report.summary().max_tap_deviation < 1e-12);
}

#[test]
#[ignore = "requires octave-cli with the signal package"]
fn test_octave_smoothing_check() {
    let config = RunConfig::builder().seed(0).build().unwrap();
    let options = SessionOptions::default().oned_as(Orientation::Column);
    let check = SmoothingCheck::new(SmoothingSpec::new(5, 3).unwrap());
    let report = check
        .run_scoped(|| OctaveOracle::open(&options), &config)
        .unwrap();
    assert_eq!(report.reference.len(), 15);
}

#[test]
#[ignore = "requires octave-cli with the signal package"]
fn test_octave_session_reports_call_errors() {
    let mut oracle = OctaveOracle::open(&SessionOptions::default()).unwrap();
    let session = oracle.session();
    let err = session
        .call("fir1", &[OctaveValue::Str("bad".into())])
        .unwrap_err();
    assert!(matches!(err, ParityError::Bridge(_)));

    // The session stays usable after a failed call.
    let taps = session
        .call("fir1", &[OctaveValue::Scalar(3.0), OctaveValue::Scalar(0.5)])
        .unwrap();
    assert_eq!(taps.len(), 4);

    session.close().unwrap();
    assert!(session.is_closed());
}
