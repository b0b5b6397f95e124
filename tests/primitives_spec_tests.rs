use filter_parity::prelude::*;

#[test]
fn test_filter_spec_defaults() {
    let spec = FilterSpec::new(7, 0.2).unwrap();
    assert_eq!(spec.order(), 7);
    assert_eq!(spec.numtaps(), 8);
    assert_eq!(spec.cutoff(), 0.2);
    assert_eq!(spec.window(), Window::Hamming);
    assert_eq!(spec.kind(), FilterKind::LowPass);
}

#[test]
fn test_filter_spec_order_zero_is_single_tap() {
    let spec = FilterSpec::new(0, 0.5).unwrap();
    assert_eq!(spec.numtaps(), 1);
}

#[test]
fn test_filter_spec_rejects_cutoff_outside_open_interval() {
    for cutoff in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
        let err = FilterSpec::new(7, cutoff).unwrap_err();
        assert!(
            matches!(err, ParityError::InvalidCutoff(_)),
            "cutoff {} gave {:?}",
            cutoff,
            err
        );
    }
}

#[test]
fn test_filter_spec_high_pass_needs_odd_taps() {
    let err = FilterSpec::new(7, 0.3)
        .unwrap()
        .with_kind(FilterKind::HighPass)
        .unwrap_err();
    assert_eq!(err, ParityError::EvenTapsHighPass(8));

    let spec = FilterSpec::new(8, 0.3)
        .unwrap()
        .with_kind(FilterKind::HighPass)
        .unwrap();
    assert_eq!(spec.kind(), FilterKind::HighPass);
}

#[test]
fn test_filter_spec_with_window() {
    let spec = FilterSpec::new(10, 0.4).unwrap().with_window(Window::Blackman);
    assert_eq!(spec.window(), Window::Blackman);
}

#[test]
fn test_smoothing_spec_valid() {
    let spec = SmoothingSpec::new(5, 3).unwrap();
    assert_eq!(spec.window_length(), 5);
    assert_eq!(spec.polyorder(), 3);

    let identity = SmoothingSpec::new(1, 0).unwrap();
    assert_eq!(identity.window_length(), 1);
}

#[test]
fn test_smoothing_spec_rejects_even_or_zero_window() {
    assert_eq!(
        SmoothingSpec::new(4, 2).unwrap_err(),
        ParityError::InvalidWindowLength(4)
    );
    assert_eq!(
        SmoothingSpec::new(0, 0).unwrap_err(),
        ParityError::InvalidWindowLength(0)
    );
}

#[test]
fn test_smoothing_spec_rejects_order_not_below_window() {
    // Swapping the two parameters is the classic porting mistake.
    assert_eq!(
        SmoothingSpec::new(3, 5).unwrap_err(),
        ParityError::InvalidPolyorder {
            polyorder: 5,
            window_length: 3
        }
    );
    assert!(SmoothingSpec::new(5, 5).is_err());
}
