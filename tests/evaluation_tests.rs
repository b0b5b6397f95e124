use approx::assert_relative_eq;

use filter_parity::prelude::*;

// ============================================================================
// allclose
// ============================================================================

#[test]
fn test_allclose_accepts_within_relative_tolerance() {
    let report = allclose("x", &[1.0 + 5e-8, 2.0], &[1.0, 2.0], Tolerance::default()).unwrap();
    assert_eq!(report.total, 2);
    assert!(report.max_abs_deviation > 0.0);
    assert!(report.max_rel_deviation <= 1e-7);
}

#[test]
fn test_allclose_scales_by_desired() {
    // 1e-7 relative to the desired value 1.0, not to the actual value.
    let err = allclose("x", &[1.0 + 2e-7], &[1.0], Tolerance::default()).unwrap_err();
    match err {
        ParityError::ClosenessViolation {
            label,
            mismatched,
            total,
            ..
        } => {
            assert_eq!(label, "x");
            assert_eq!(mismatched, 1);
            assert_eq!(total, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_allclose_zero_desired_needs_atol() {
    assert!(allclose("x", &[1e-12], &[0.0], Tolerance::default()).is_err());
    assert!(allclose("x", &[1e-12], &[0.0], Tolerance::absolute(1e-9).unwrap()).is_ok());
}

#[test]
fn test_allclose_special_values() {
    let tol = Tolerance::default();
    assert!(allclose("x", &[f64::NAN], &[f64::NAN], tol).is_ok());
    assert!(allclose("x", &[f64::NAN], &[0.0], tol).is_err());
    assert!(allclose("x", &[f64::INFINITY], &[f64::INFINITY], tol).is_ok());
    assert!(allclose("x", &[f64::NEG_INFINITY], &[f64::INFINITY], tol).is_err());
}

#[test]
fn test_allclose_length_mismatch() {
    let err = allclose("y", &[1.0], &[1.0, 2.0], Tolerance::default()).unwrap_err();
    assert_eq!(
        err,
        ParityError::LengthMismatch {
            label: "y".to_string(),
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_tolerance_validation() {
    assert_eq!(
        Tolerance::new(-1.0, 0.0).unwrap_err(),
        ParityError::InvalidTolerance(-1.0)
    );
    assert!(Tolerance::new(0.0, f64::INFINITY).is_err());
    let tol = Tolerance::absolute(5.0).unwrap();
    assert_eq!(tol.rtol, 1e-7);
    assert_eq!(tol.atol, 5.0);
}

// ============================================================================
// Band bounds
// ============================================================================

#[test]
fn test_pass_band_reports_first_violation() {
    let bound = BandBound::pass(0..4, -6.0);
    let err = bound.check("local", &[0.0, -1.0, -7.0, -8.0, -50.0]).unwrap_err();
    assert_eq!(
        err,
        ParityError::BoundViolation {
            implementation: "local".to_string(),
            band: Band::Pass,
            bin: 2,
            value_db: -7.0,
            limit_db: -6.0
        }
    );
}

#[test]
fn test_bounds_are_strict() {
    assert!(BandBound::pass(0..1, -6.0).check("a", &[-6.0]).is_err());
    assert!(BandBound::stop_from(0, -20.0).check("a", &[-20.0]).is_err());
}

#[test]
fn test_stop_band_runs_to_end() {
    let bound = BandBound::stop_from(2, -20.0);
    assert!(bound.check("a", &[0.0, 0.0, -30.0, -40.0]).is_ok());

    let err = bound.check("a", &[0.0, 0.0, -30.0, -10.0]).unwrap_err();
    assert!(matches!(err, ParityError::BoundViolation { bin: 3, band: Band::Stop, .. }));
}

#[test]
fn test_bounds_clip_end_to_available_bins() {
    assert!(BandBound::pass(0..130, -6.0).check("a", &[0.0; 10]).is_ok());
}

#[test]
fn test_band_past_last_bin_is_rejected() {
    let err = BandBound::stop_from(278, -20.0).check("a", &[0.0; 100]).unwrap_err();
    assert_eq!(
        err,
        ParityError::EmptyBand {
            band: Band::Stop,
            start: 278,
            bins: 100
        }
    );

    assert!(BandBound::stop_from(100, -20.0).check("a", &[-30.0; 100]).is_err());
    assert!(BandBound::pass(5..5, -6.0).check("a", &[0.0; 10]).is_err());
}

#[test]
fn test_rescale_keeps_covered_frequencies() {
    let pass = BandBound::pass(0..130, -6.0);
    let stop = BandBound::stop_from(278, -20.0);

    assert_eq!(pass.rescale(512, 512), pass);
    assert_eq!(stop.rescale(512, 512), stop);

    let pass_1024 = pass.rescale(512, 1024);
    assert_eq!((pass_1024.start, pass_1024.end), (0, Some(260)));
    assert_eq!(stop.rescale(512, 1024).start, 556);

    assert_eq!(pass.rescale(512, 256).end, Some(65));
    assert_eq!(stop.rescale(512, 256).start, 139);

    // Edges round up: bin 326 of 600 is the first at or above 278/512.
    assert_eq!(stop.rescale(512, 600).start, 326);
    assert_eq!(stop.rescale(512, 600).limit_db, -20.0);
}

#[test]
fn test_nan_fails_bounds() {
    assert!(BandBound::pass(0..1, -6.0).check("a", &[f64::NAN]).is_err());
    assert!(BandBound::stop_from(0, -20.0).check("a", &[f64::NAN]).is_err());
}

// ============================================================================
// CSV export
// ============================================================================

#[test]
fn test_write_response_csv() {
    let taps: Vec<f64> = fir1(7, 0.2).unwrap();
    let response = freqz(&taps, 16).unwrap();

    let mut out = Vec::new();
    write_response_csv(&mut out, &response, &response).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], RESPONSE_CSV_HEADER);

    let first: Vec<f64> = lines[1].split(',').map(|v| v.parse().unwrap()).collect();
    assert_eq!(first.len(), 5);
    assert_eq!(first[0], 0.0);
    assert_relative_eq!(first[1], 0.0, epsilon = 1e-9);
    assert_eq!(first[1], first[2]);
}

#[test]
fn test_write_response_csv_length_mismatch() {
    let a = freqz(&[1.0], 8).unwrap();
    let b = freqz(&[1.0], 4).unwrap();
    let err = write_response_csv(Vec::new(), &a, &b).unwrap_err();
    assert!(matches!(err, ParityError::LengthMismatch { expected: 8, got: 4, .. }));
}
