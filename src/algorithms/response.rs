//! Frequency response of FIR filters.
//!
//! ## Purpose
//!
//! This module evaluates the discrete-time transfer function of a tap
//! sequence on a uniform grid over `[0, π)`, matching the default behaviour of
//! Octave's and scipy's `freqz`.
//!
//! ## Key concepts
//!
//! * **Grid**: `w_k = π·k / N` for `k in 0..N`; Nyquist itself is excluded.
//! * **Response**: `H(w) = Σ b[n]·e^{-j·w·n}`.
//!
//! ## Invariants
//!
//! * `frequencies.len() == response.len() == bins`.
//!
//! ## Non-goals
//!
//! * IIR (pole) responses and whole-circle grids are not provided.

use core::f64::consts::PI;

use nalgebra::Complex;

use crate::engine::validator::Validator;
use crate::math::linalg::dot_f64;
use crate::math::phase;
use crate::primitives::errors::ParityError;

/// Default number of frequency bins.
pub const DEFAULT_BINS: usize = 512;

/// Frequency grid and complex response samples of one filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Angular frequencies in rad/sample.
    pub frequencies: Vec<f64>,

    /// Complex response at each frequency.
    pub response: Vec<Complex<f64>>,
}

impl FrequencyResponse {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.response.len()
    }

    /// Whether the response has no bins.
    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }

    /// Magnitude in decibels, `20·log10(|H|)`. Zero magnitude maps to `-inf`.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.response
            .iter()
            .map(|h| 20.0 * h.norm().log10())
            .collect()
    }

    /// Phase in radians, unwrapped across bins.
    pub fn phase_unwrapped(&self) -> Vec<f64> {
        let wrapped: Vec<f64> = self.response.iter().map(|h| h.arg()).collect();
        phase::unwrap(&wrapped)
    }
}

/// Evaluate the response of `taps` at `bins` equally spaced frequencies.
pub fn freqz(taps: &[f64], bins: usize) -> Result<FrequencyResponse, ParityError> {
    Validator::validate_bins(bins)?;
    if taps.is_empty() {
        return Err(ParityError::EmptyInput);
    }

    let mut frequencies = Vec::with_capacity(bins);
    let mut response = Vec::with_capacity(bins);
    let mut cos_row = vec![0.0; taps.len()];
    let mut sin_row = vec![0.0; taps.len()];

    for k in 0..bins {
        let w = PI * k as f64 / bins as f64;
        for (n, (c, s)) in cos_row.iter_mut().zip(sin_row.iter_mut()).enumerate() {
            let (sin, cos) = (w * n as f64).sin_cos();
            *c = cos;
            *s = sin;
        }
        let re = dot_f64(taps, &cos_row);
        let im = -dot_f64(taps, &sin_row);

        frequencies.push(w);
        response.push(Complex::new(re, im));
    }

    Ok(FrequencyResponse {
        frequencies,
        response,
    })
}
