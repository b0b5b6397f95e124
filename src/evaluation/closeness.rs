//! Element-wise closeness comparison of two sequences.
//!
//! ## Purpose
//!
//! This module implements the `allclose` comparison used to decide whether
//! the reference and local implementations agree, and reports the largest
//! deviations when they do not.
//!
//! ## Design notes
//!
//! * **Asymmetric**: `|actual - desired| <= atol + rtol·|desired|`, with the
//!   tolerance scaled by the *desired* value, as in numpy's `assert_allclose`.
//! * **Special values**: NaNs in the same position are equal; infinities are
//!   equal only to an infinity of the same sign.
//!
//! ## Invariants
//!
//! * Sequences of different length never compare close.
//! * Reported deviations are computed over finite pairs only.

use serde::Serialize;

use crate::engine::validator::Validator;
use crate::primitives::errors::ParityError;

/// Relative and absolute tolerance for [`allclose`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerance {
    /// Relative tolerance, scaled by `|desired|`.
    pub rtol: f64,

    /// Absolute tolerance.
    pub atol: f64,
}

impl Default for Tolerance {
    /// `rtol = 1e-7`, `atol = 0`.
    fn default() -> Self {
        Self {
            rtol: 1e-7,
            atol: 0.0,
        }
    }
}

impl Tolerance {
    /// Tolerance with explicit relative and absolute parts.
    pub fn new(rtol: f64, atol: f64) -> Result<Self, ParityError> {
        Validator::validate_tolerance(rtol)?;
        Validator::validate_tolerance(atol)?;
        Ok(Self { rtol, atol })
    }

    /// Default relative tolerance with the given absolute tolerance.
    pub fn absolute(atol: f64) -> Result<Self, ParityError> {
        Self::new(Self::default().rtol, atol)
    }

    fn accepts(&self, actual: f64, desired: f64) -> bool {
        if actual.is_nan() || desired.is_nan() {
            return actual.is_nan() && desired.is_nan();
        }
        if actual.is_infinite() || desired.is_infinite() {
            return actual == desired;
        }
        (actual - desired).abs() <= self.atol + self.rtol * desired.abs()
    }
}

/// Summary of a successful comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloseReport {
    /// Largest `|actual - desired|` over finite pairs.
    pub max_abs_deviation: f64,

    /// Largest `|actual - desired| / |desired|` over finite pairs.
    pub max_rel_deviation: f64,

    /// Number of elements compared.
    pub total: usize,
}

/// Compare `actual` against `desired` element-wise.
///
/// Returns a [`ParityError::ClosenessViolation`] labelled `label` when any
/// element falls outside `tol`.
pub fn allclose(
    label: &str,
    actual: &[f64],
    desired: &[f64],
    tol: Tolerance,
) -> Result<CloseReport, ParityError> {
    Validator::validate_lengths(label, desired.len(), actual.len())?;

    let mut max_abs = 0.0_f64;
    let mut max_rel = 0.0_f64;
    let mut mismatched = 0;

    for (&a, &d) in actual.iter().zip(desired) {
        if !tol.accepts(a, d) {
            mismatched += 1;
        }
        if a.is_finite() && d.is_finite() {
            let diff = (a - d).abs();
            max_abs = max_abs.max(diff);
            let rel = if d != 0.0 {
                diff / d.abs()
            } else if diff == 0.0 {
                0.0
            } else {
                f64::INFINITY
            };
            max_rel = max_rel.max(rel);
        }
    }

    if mismatched > 0 {
        return Err(ParityError::ClosenessViolation {
            label: label.to_string(),
            max_abs_deviation: max_abs,
            max_rel_deviation: max_rel,
            mismatched,
            total: actual.len(),
        });
    }

    Ok(CloseReport {
        max_abs_deviation: max_abs,
        max_rel_deviation: max_rel,
        total: actual.len(),
    })
}
