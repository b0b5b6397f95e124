//! Parameter validation for filter design, smoothing, and checks.
//!
//! ## Purpose
//!
//! This module collects the parameter checks used by the parameter type constructors,
//! the local algorithms, and the run configuration builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Stateless**: All checks are associated functions on a unit struct.
//!
//! ## Key concepts
//!
//! * **Cutoff**: Normalized to Nyquist, strictly inside (0, 1).
//! * **Savitzky-Golay**: Odd window, polynomial order below the window length.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.

use crate::primitives::errors::ParityError;
use crate::primitives::spec::FilterKind;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for design parameters and check configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Design Parameters
    // ========================================================================

    /// Validate a normalized cutoff frequency.
    pub fn validate_cutoff(cutoff: f64) -> Result<(), ParityError> {
        if !cutoff.is_finite() || cutoff <= 0.0 || cutoff >= 1.0 {
            return Err(ParityError::InvalidCutoff(cutoff));
        }
        Ok(())
    }

    /// Validate that the tap count suits the response shape.
    ///
    /// # Notes
    ///
    /// * An even-length symmetric filter has a zero at Nyquist, so it cannot
    ///   be high-pass.
    pub fn validate_kind(kind: FilterKind, numtaps: usize) -> Result<(), ParityError> {
        if kind == FilterKind::HighPass && numtaps % 2 == 0 {
            return Err(ParityError::EvenTapsHighPass(numtaps));
        }
        Ok(())
    }

    /// Validate Savitzky-Golay window length and polynomial order.
    pub fn validate_smoothing(window_length: usize, polyorder: usize) -> Result<(), ParityError> {
        if window_length == 0 || window_length % 2 == 0 {
            return Err(ParityError::InvalidWindowLength(window_length));
        }
        if polyorder >= window_length {
            return Err(ParityError::InvalidPolyorder {
                polyorder,
                window_length,
            });
        }
        Ok(())
    }

    /// Validate the number of frequency response bins.
    pub fn validate_bins(bins: usize) -> Result<(), ParityError> {
        if bins == 0 {
            return Err(ParityError::InvalidBins(bins));
        }
        Ok(())
    }

    // ========================================================================
    // Check Parameters
    // ========================================================================

    /// Validate a closeness tolerance.
    pub fn validate_tolerance(tol: f64) -> Result<(), ParityError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ParityError::InvalidTolerance(tol));
        }
        Ok(())
    }

    /// Validate that two sequences line up.
    pub fn validate_lengths(label: &str, expected: usize, got: usize) -> Result<(), ParityError> {
        if expected != got {
            return Err(ParityError::LengthMismatch {
                label: label.to_string(),
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), ParityError> {
        if let Some(param) = duplicate_param {
            return Err(ParityError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
