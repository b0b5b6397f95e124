//! # filter-parity — FIR design and Savitzky-Golay parity checks against GNU Octave
//!
//! This crate checks that two implementations of the same signal-processing
//! routines agree: a reference implementation running in a GNU Octave session
//! (with the `signal` package) and a local implementation shipped with this
//! crate.
//!
//! ## What is checked?
//!
//! * **FIR design**: `fir1(m, p)` in Octave and `firwin(m + 1, p)` locally
//!   must both produce a low-pass response above -6 dB on the first 130 of 512
//!   bins and below -20 dB from bin 278 on. Other bin counts scale these
//!   edges so the same frequencies are checked. An optional assertion
//!   compares the two dB curves within 5 dB.
//! * **Savitzky-Golay smoothing**: `sgolayfilt` in Octave and
//!   `savgol_filter` locally must produce the same smoothed signal for a
//!   noisy 15-sample step, within `rtol = 1e-7`.
//!
//! ## Quick Start
//!
//! The checks are written against the [`FilterOracle`](prelude::FilterOracle)
//! trait. Any oracle can be substituted for Octave; here the local oracle is
//! checked against itself:
//!
//! ```rust
//! use filter_parity::prelude::*;
//!
//! let config = RunConfig::builder().seed(0).build()?;
//!
//! let fir = FirDesignCheck::new(FilterSpec::new(7, 0.2)?);
//! let report = fir.run_scoped(|| Ok(LocalOracle), &config)?;
//! assert_eq!(report.reference_taps.len(), 8);
//!
//! let smoothing = SmoothingCheck::new(SmoothingSpec::new(5, 3)?);
//! let report = smoothing.run_scoped(|| Ok(LocalOracle), &config)?;
//! assert_eq!(report.local.len(), 15);
//! # Ok::<(), ParityError>(())
//! ```
//!
//! Against Octave, open the session inside the scoped runner so it is closed
//! on every exit path:
//!
//! ```rust,no_run
//! use filter_parity::prelude::*;
//!
//! let config = RunConfig::from_vars(|key| std::env::var(key).ok());
//! let options = SessionOptions::default().oned_as(Orientation::Column);
//!
//! let check = SmoothingCheck::new(SmoothingSpec::new(5, 3)?);
//! let report = check.run_scoped(|| OctaveOracle::open(&options), &config)?;
//! println!("max deviation: {:e}", report.closeness.max_abs_deviation);
//! # Ok::<(), ParityError>(())
//! ```
//!
//! ## Parameter conventions
//!
//! Octave and the local library order their arguments differently:
//!
//! | Routine        | Octave                          | Local                                  |
//! |----------------|---------------------------------|----------------------------------------|
//! | FIR design     | `fir1(order, cutoff)`           | `firwin(order + 1, cutoff, ...)`       |
//! | Savitzky-Golay | `sgolayfilt(x, order, length)`  | `savgol_filter(x, length, order, ...)` |
//!
//! [`FilterSpec`](prelude::FilterSpec) and
//! [`SmoothingSpec`](prelude::SmoothingSpec) name these fields so callers do
//! not depend on either positional convention.
//!
//! ## Error handling
//!
//! Every fallible operation returns [`ParityError`](prelude::ParityError).
//! Setup failures of the reference session, band bound violations, and
//! closeness violations are distinct variants; none is recovered internally.

#![warn(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - parameter types and errors.
mod primitives;

// Layer 2: Math - windows, least squares, phase unwrapping.
mod math;

// Layer 3: Algorithms - FIR design, frequency response, Savitzky-Golay.
mod algorithms;

// Layer 4: Evaluation - band bounds, closeness, CSV export.
mod evaluation;

// Layer 5: Adapters - local and Octave oracles.
mod adapters;

// Layer 6: Engine - validation, scoped sessions, the two checks.
mod engine;

// Layer 7: API - run configuration and re-exports.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard filter-parity prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use filter_parity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Band, BandBound, CI_VAR, CloseReport, DEFAULT_BINS, EdgeMode, FilterKind, FilterOracle,
        FilterSpec, FirDesignCheck, FirReport, FirSummary, FrequencyResponse, LocalOracle,
        OctaveOracle, OctaveSession, OctaveValue, Orientation, ParityError, RESPONSE_CSV_HEADER,
        RunConfig, RunConfigBuilder, SEED_VAR, STEP_SIGNAL, SessionOptions, SmoothingCheck,
        SmoothingReport, SmoothingSpec, Tolerance, Window, allclose, fir1, firwin, freqz,
        savgol_coeffs, savgol_filter, unwrap, with_session, write_response_csv,
    };
}
