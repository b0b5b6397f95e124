use approx::assert_relative_eq;
use std::f64::consts::PI;

use filter_parity::prelude::*;

#[test]
fn test_unwrap_empty_and_single() {
    assert!(unwrap(&[]).is_empty());
    assert_eq!(unwrap(&[1.0]), vec![1.0]);
}

#[test]
fn test_unwrap_leaves_smooth_phase_untouched() {
    let phase = [0.0, 0.5, 1.0, 1.5, 2.0];
    assert_eq!(unwrap(&phase), phase.to_vec());
}

#[test]
fn test_unwrap_removes_wraparound() {
    // A linear phase of -0.8 rad per sample, wrapped into (-π, π].
    let truth: Vec<f64> = (0..12).map(|i| -0.8 * i as f64).collect();
    let wrapped: Vec<f64> = truth
        .iter()
        .map(|&p| (p + PI).rem_euclid(2.0 * PI) - PI)
        .collect();

    let unwrapped = unwrap(&wrapped);
    for (u, t) in unwrapped.iter().zip(&truth) {
        assert_relative_eq!(*u, *t, epsilon = 1e-12);
    }
}
