use approx::assert_relative_eq;

use filter_parity::prelude::*;

const SIGNAL: [f64; 9] = [2.0, 2.0, 5.0, 2.0, 1.0, 0.0, 1.0, 4.0, 9.0];

fn assert_all_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want) {
        assert_relative_eq!(*g, *w, epsilon = 1e-10);
    }
}

#[test]
fn test_savgol_coeffs_quadratic_five() {
    let coeffs: Vec<f64> = savgol_coeffs(5, 2).unwrap();
    let want: Vec<f64> = [-3.0, 12.0, 17.0, 12.0, -3.0]
        .iter()
        .map(|v| v / 35.0)
        .collect();
    assert_all_close(&coeffs, &want);
}

#[test]
fn test_savgol_coeffs_sum_to_one() {
    for (window, order) in [(5, 3), (7, 2), (11, 4), (3, 0)] {
        let coeffs: Vec<f64> = savgol_coeffs(window, order).unwrap();
        let total: f64 = coeffs.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn test_savgol_filter_interp_edges() {
    let y = savgol_filter(&SIGNAL, 5, 2, EdgeMode::Interp).unwrap();
    assert_all_close(
        &y,
        &[
            1.6571428571428573,
            3.1714285714285713,
            3.5428571428571427,
            2.857142857142857,
            0.6571428571428571,
            0.17142857142857143,
            1.0,
            4.0,
            9.0,
        ],
    );
}

#[test]
fn test_savgol_filter_nearest_edges() {
    let y = savgol_filter(&SIGNAL, 5, 2, EdgeMode::Nearest).unwrap();
    assert_all_close(
        &y,
        &[
            1.7428571428571429,
            3.0285714285714285,
            3.5428571428571427,
            2.857142857142857,
            0.6571428571428571,
            0.17142857142857143,
            1.0,
            4.6,
            7.9714285714285715,
        ],
    );
}

#[test]
fn test_savgol_filter_padded_modes_share_interior() {
    let interior = [3.5428571428571427, 2.857142857142857, 0.6571428571428571];

    let cases = [
        (EdgeMode::Mirror, [1.4857142857142858, 3.0285714285714285], [5.0285714285714285, 6.942857142857143]),
        (EdgeMode::Constant, [1.2285714285714286, 3.2], [5.371428571428571, 5.6571428571428575]),
        (EdgeMode::Wrap, [3.9714285714285715, 2.4285714285714284], [5.2, 6.171428571428572]),
    ];

    for (mode, head, tail) in cases {
        let y = savgol_filter(&SIGNAL, 5, 2, mode).unwrap();
        assert_all_close(&y[..2], &head);
        assert_all_close(&y[2..5], &interior);
        assert_all_close(&y[7..], &tail);
    }
}

#[test]
fn test_savgol_filter_preserves_polynomials() {
    let cubic: Vec<f64> = (0..15)
        .map(|i| {
            let t = i as f64 - 7.0;
            0.5 * t * t * t - 2.0 * t * t + t - 3.0
        })
        .collect();

    let y = savgol_filter(&cubic, 5, 3, EdgeMode::Interp).unwrap();
    for (g, w) in y.iter().zip(&cubic) {
        assert_relative_eq!(*g, *w, epsilon = 1e-8, max_relative = 1e-10);
    }
}

#[test]
fn test_savgol_filter_window_one_is_identity() {
    let y = savgol_filter(&SIGNAL, 1, 0, EdgeMode::Interp).unwrap();
    assert_all_close(&y, &SIGNAL);
}

#[test]
fn test_savgol_filter_window_equal_to_length() {
    let y = savgol_filter(&[1.0, 2.0, 3.0, 4.0, 5.0], 5, 1, EdgeMode::Interp).unwrap();
    assert_all_close(&y, &[1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_savgol_filter_errors() {
    assert_eq!(
        savgol_filter::<f64>(&[], 5, 2, EdgeMode::Interp).unwrap_err(),
        ParityError::EmptyInput
    );
    assert_eq!(
        savgol_filter(&[1.0, 2.0, 3.0], 5, 2, EdgeMode::Interp).unwrap_err(),
        ParityError::WindowTooLong {
            window_length: 5,
            len: 3
        }
    );
    assert_eq!(
        savgol_coeffs::<f64>(4, 2).unwrap_err(),
        ParityError::InvalidWindowLength(4)
    );
    assert_eq!(
        savgol_coeffs::<f64>(5, 5).unwrap_err(),
        ParityError::InvalidPolyorder {
            polyorder: 5,
            window_length: 5
        }
    );
}

#[test]
fn test_savgol_padded_modes_accept_short_signals() {
    let y = savgol_filter(&[1.0, 2.0, 3.0], 5, 2, EdgeMode::Nearest).unwrap();
    assert_eq!(y.len(), 3);
}

#[test]
fn test_savgol_f32() {
    let x: Vec<f32> = SIGNAL.iter().map(|&v| v as f32).collect();
    let y = savgol_filter(&x, 5, 2, EdgeMode::Interp).unwrap();
    assert_relative_eq!(y[4], 0.657_142_9f32, epsilon = 1e-4);
    assert_relative_eq!(y[8], 9.0f32, epsilon = 1e-4);
}
