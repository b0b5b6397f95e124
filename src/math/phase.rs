//! Phase unwrapping for frequency response plots.

use core::f64::consts::PI;

/// Unwrap a sequence of angles (radians) by adding multiples of `2π` wherever
/// consecutive samples jump by more than `π`.
///
/// Follows the usual convention: the correction for a jump of exactly `±π`
/// keeps the sign of the jump, so the output is identical to the input when no
/// jump exceeds `π`.
pub fn unwrap(angles: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(angles.len());
    let Some(&first) = angles.first() else {
        return out;
    };
    out.push(first);

    let mut correction = 0.0;
    for pair in angles.windows(2) {
        let delta = pair[1] - pair[0];
        let mut wrapped = (delta + PI).rem_euclid(2.0 * PI) - PI;
        if wrapped == -PI && delta > 0.0 {
            wrapped = PI;
        }
        if delta.abs() >= PI {
            correction += wrapped - delta;
        }
        out.push(pair[1] + correction);
    }
    out
}
