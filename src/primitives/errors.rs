//! Error types for filter design, smoothing, and cross-implementation checks.
//!
//! ## Purpose
//!
//! This module defines [`ParityError`], the single error type returned by every
//! fallible operation in the crate: parameter validation, the reference session
//! bridge, and the acceptance checks themselves.
//!
//! ## Design notes
//!
//! * **Flat**: One enum, no nested error sources, so errors can be cloned and
//!   compared in tests.
//! * **Descriptive**: Check failures carry the implementation name, the band or
//!   label, and the offending numeric values.
//!
//! ## Key concepts
//!
//! * **Setup errors** abort the reference path before any comparison runs.
//! * **Bound violations** and **closeness violations** are assertion failures.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery; every error surfaces to the caller.

use core::fmt;

use crate::primitives::spec::Band;

/// Error type for all filter-parity operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ParityError {
    /// Input sequence is empty.
    EmptyInput,

    /// Cutoff frequency outside the open interval (0, 1).
    InvalidCutoff(f64),

    /// Smoothing window length is zero or even.
    InvalidWindowLength(usize),

    /// Polynomial order is not below the window length.
    InvalidPolyorder {
        /// Requested polynomial order.
        polyorder: usize,
        /// Window length it was paired with.
        window_length: usize,
    },

    /// A high-pass design was requested with an even number of taps.
    EvenTapsHighPass(usize),

    /// Interp edge mode needs at least `window_length` samples.
    WindowTooLong {
        /// Window length.
        window_length: usize,
        /// Signal length.
        len: usize,
    },

    /// Frequency response bin count is zero.
    InvalidBins(usize),

    /// A band bound covers no bin of the response it is applied to.
    EmptyBand {
        /// Which band is empty.
        band: Band,
        /// First bin of the band.
        start: usize,
        /// Number of bins in the response.
        bins: usize,
    },

    /// Tolerance is negative or not finite.
    InvalidTolerance(f64),

    /// Two sequences that must line up have different lengths.
    LengthMismatch {
        /// Name of the compared quantity.
        label: String,
        /// Expected length.
        expected: usize,
        /// Observed length.
        got: usize,
    },

    /// Builder parameter set more than once.
    DuplicateParameter {
        /// Parameter name.
        parameter: &'static str,
    },

    /// The reference session could not be started or prepared.
    Setup {
        /// Which setup step failed (e.g. "spawn", "pkg load signal").
        stage: String,
        /// Failure detail reported by the bridge.
        detail: String,
    },

    /// A call through an established reference session failed.
    Bridge(String),

    /// A frequency response sample fell outside its required band limit.
    BoundViolation {
        /// Implementation that produced the response.
        implementation: String,
        /// Band whose bound was violated.
        band: Band,
        /// First offending bin.
        bin: usize,
        /// Magnitude at that bin, in dB.
        value_db: f64,
        /// Limit for the band, in dB.
        limit_db: f64,
    },

    /// Two sequences differ beyond tolerance.
    ClosenessViolation {
        /// Name of the compared quantity.
        label: String,
        /// Largest absolute deviation observed.
        max_abs_deviation: f64,
        /// Largest relative deviation observed.
        max_rel_deviation: f64,
        /// Number of elements outside tolerance.
        mismatched: usize,
        /// Number of elements compared.
        total: usize,
    },

    /// Writing exported data failed.
    Io(String),
}

impl fmt::Display for ParityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::InvalidCutoff(c) => {
                write!(f, "Invalid cutoff: {} (must be > 0 and < 1)", c)
            }
            Self::InvalidWindowLength(w) => {
                write!(f, "Invalid window_length: {} (must be odd and >= 1)", w)
            }
            Self::InvalidPolyorder {
                polyorder,
                window_length,
            } => write!(
                f,
                "Invalid polyorder: {} (must be less than window_length {})",
                polyorder, window_length
            ),
            Self::EvenTapsHighPass(n) => write!(
                f,
                "High-pass design needs an odd number of taps, got {}",
                n
            ),
            Self::WindowTooLong { window_length, len } => write!(
                f,
                "window_length {} exceeds signal length {} in interp mode",
                window_length, len
            ),
            Self::InvalidBins(n) => write!(f, "Invalid bin count: {} (must be at least 1)", n),
            Self::EmptyBand { band, start, bins } => write!(
                f,
                "{} starting at bin {} covers no bin of a {}-bin response",
                band, start, bins
            ),
            Self::InvalidTolerance(t) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", t)
            }
            Self::LengthMismatch {
                label,
                expected,
                got,
            } => write!(
                f,
                "Length mismatch for {}: expected {}, got {}",
                label, expected, got
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::Setup { stage, detail } => {
                write!(f, "Reference session setup failed at '{}': {}", stage, detail)
            }
            Self::Bridge(detail) => write!(f, "Reference call failed: {}", detail),
            Self::BoundViolation {
                implementation,
                band,
                bin,
                value_db,
                limit_db,
            } => {
                let relation = match band {
                    Band::Pass => ">",
                    Band::Stop => "<",
                };
                write!(
                    f,
                    "{} {} bound violated at bin {}: {:.3} dB (required {} {} dB)",
                    implementation, band, bin, value_db, relation, limit_db
                )
            }
            Self::ClosenessViolation {
                label,
                max_abs_deviation,
                max_rel_deviation,
                mismatched,
                total,
            } => write!(
                f,
                "{} not close: {}/{} elements mismatched, max abs deviation {:e}, max rel deviation {:e}",
                label, mismatched, total, max_abs_deviation, max_rel_deviation
            ),
            Self::Io(detail) => write!(f, "I/O error: {}", detail),
        }
    }
}

impl std::error::Error for ParityError {}

impl From<std::io::Error> for ParityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
