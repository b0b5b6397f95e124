//! Window-method FIR filter design.
//!
//! ## Purpose
//!
//! This module designs linear-phase FIR filters by windowing an ideal
//! (sinc) impulse response, the method behind Octave's `fir1` and scipy's
//! `firwin`.
//!
//! ## Design notes
//!
//! * **Scaling**: Taps are normalized so the gain at the centre of the first
//!   pass band is exactly 1 (DC for low-pass, Nyquist for high-pass).
//! * **Conventions**: [`firwin`] takes the tap count, [`fir1`] takes the order
//!   (`taps - 1`), matching the two reference APIs.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Ideal response**: `h[n] = c · sinc(c · (n - α))` with `α = (N - 1) / 2`
//!   and `c` the cutoff normalized to Nyquist.
//!
//! ## Invariants
//!
//! * Output length equals the requested tap count.
//! * Taps are symmetric, `h[n] == h[N - 1 - n]`.
//! * A single-tap design is `[1]`.
//!
//! ## Non-goals
//!
//! * Multi-band and band-stop designs are not provided.

use core::f64::consts::PI;

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::math::window::Window;
use crate::primitives::errors::ParityError;
use crate::primitives::spec::{FilterKind, FilterSpec};

/// Normalized sinc, `sin(πx) / (πx)`.
#[inline]
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Design a windowed-sinc FIR filter with `numtaps` taps.
pub fn firwin<T: Float>(
    numtaps: usize,
    cutoff: T,
    window: Window,
    kind: FilterKind,
) -> Result<Vec<T>, ParityError> {
    if numtaps == 0 {
        return Err(ParityError::EmptyInput);
    }
    let c = cutoff.to_f64().unwrap_or(f64::NAN);
    Validator::validate_cutoff(c)?;
    Validator::validate_kind(kind, numtaps)?;

    let alpha = 0.5 * (numtaps - 1) as f64;
    let win: Vec<f64> = window.coefficients(numtaps);

    let mut taps: Vec<f64> = (0..numtaps)
        .map(|n| {
            let m = n as f64 - alpha;
            let ideal = match kind {
                FilterKind::LowPass => c * sinc(c * m),
                FilterKind::HighPass => sinc(m) - c * sinc(c * m),
            };
            ideal * win[n]
        })
        .collect();

    // Unit gain at the centre of the first pass band.
    let scale: f64 = match kind {
        FilterKind::LowPass => taps.iter().sum(),
        FilterKind::HighPass => taps
            .iter()
            .enumerate()
            .map(|(n, &h)| h * (PI * (n as f64 - alpha)).cos())
            .sum(),
    };
    for h in taps.iter_mut() {
        *h /= scale;
    }

    Ok(taps
        .into_iter()
        .map(|h| T::from(h).unwrap_or_else(T::nan))
        .collect())
}

/// Low-pass Hamming design of the given order (`order + 1` taps).
pub fn fir1<T: Float>(order: usize, cutoff: T) -> Result<Vec<T>, ParityError> {
    firwin(order + 1, cutoff, Window::Hamming, FilterKind::LowPass)
}

/// Design the filter described by `spec`.
pub fn design(spec: &FilterSpec) -> Result<Vec<f64>, ParityError> {
    firwin(spec.numtaps(), spec.cutoff(), spec.window(), spec.kind())
}
