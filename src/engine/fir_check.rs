//! FIR design equivalence check.
//!
//! ## Purpose
//!
//! This module designs the same FIR filter with a reference oracle and with
//! the local library, evaluates both frequency responses, and applies the
//! acceptance policy: a pass-band floor and a stop-band ceiling for each
//! implementation, plus an optional closeness check between the two dB curves.
//!
//! ## Design notes
//!
//! * **Order of assertions**: reference pass band, local pass band,
//!   reference stop band, local stop band, then the optional cross check.
//!   The first failure is returned.
//! * **Cross check**: Off unless `RunConfig::cross_check` is set. Older
//!   Octave releases design slightly different taps, so this is opt-in.
//!
//! ## Key concepts
//!
//! * **Default policy**: bins `[0, 130)` above -6 dB, bins `[278, 512)` below
//!   -20 dB, cross check within 5 dB.
//! * **Band grid**: Bounds are written for a 512-bin response and rescaled to
//!   `RunConfig::bins` before use, so they keep covering `[0, 0.254π)` and
//!   `[0.543π, π)` at any bin count.
//!
//! ## Invariants
//!
//! * Both responses share the configured bin count.
//! * Each band covers at least one bin; an empty band is an error.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::adapters::FilterOracle;
use crate::adapters::local::LocalOracle;
use crate::algorithms::response::{DEFAULT_BINS, FrequencyResponse, freqz};
use crate::api::RunConfig;
use crate::engine::session::with_session;
use crate::evaluation::bounds::BandBound;
use crate::evaluation::closeness::{CloseReport, Tolerance, allclose};
use crate::evaluation::export::write_response_csv;
use crate::primitives::errors::ParityError;
use crate::primitives::spec::FilterSpec;

/// Default pass-band: first 130 bins above -6 dB.
pub const DEFAULT_PASS_BINS: usize = 130;
/// Default pass-band floor in dB.
pub const DEFAULT_PASS_MIN_DB: f64 = -6.0;
/// Default stop-band: bins from 278 on.
pub const DEFAULT_STOP_START: usize = 278;
/// Default stop-band ceiling in dB.
pub const DEFAULT_STOP_MAX_DB: f64 = -20.0;
/// Default absolute tolerance of the cross check, in dB.
pub const DEFAULT_CROSS_ATOL_DB: f64 = 5.0;

// ============================================================================
// Check
// ============================================================================

/// Compares a reference FIR designer against the local one.
#[derive(Debug, Clone, PartialEq)]
pub struct FirDesignCheck {
    spec: FilterSpec,
    pass_band: BandBound,
    stop_band: BandBound,
    cross_tolerance: Tolerance,
}

impl FirDesignCheck {
    /// Check `spec` with the default acceptance policy.
    pub fn new(spec: FilterSpec) -> Self {
        Self {
            spec,
            pass_band: BandBound::pass(0..DEFAULT_PASS_BINS, DEFAULT_PASS_MIN_DB),
            stop_band: BandBound::stop_from(DEFAULT_STOP_START, DEFAULT_STOP_MAX_DB),
            cross_tolerance: Tolerance {
                rtol: Tolerance::default().rtol,
                atol: DEFAULT_CROSS_ATOL_DB,
            },
        }
    }

    /// Replace the pass-band bound, given in bins of a 512-bin response.
    pub fn with_pass_band(mut self, bound: BandBound) -> Self {
        self.pass_band = bound;
        self
    }

    /// Replace the stop-band bound, given in bins of a 512-bin response.
    pub fn with_stop_band(mut self, bound: BandBound) -> Self {
        self.stop_band = bound;
        self
    }

    /// Replace the cross-check tolerance.
    pub fn with_cross_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.cross_tolerance = tolerance;
        self
    }

    /// Design parameters under test.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Run against an already open reference oracle.
    pub fn run<R: FilterOracle>(
        &self,
        reference: &mut R,
        config: &RunConfig,
    ) -> Result<FirReport, ParityError> {
        let reference_taps = reference.design_fir(&self.spec)?;
        let local_taps = LocalOracle.design_fir(&self.spec)?;
        debug!(
            reference = reference.name(),
            reference_taps = reference_taps.len(),
            local_taps = local_taps.len(),
            "fir designs obtained"
        );

        let reference_response = freqz(&reference_taps, config.bins)?;
        let local_response = freqz(&local_taps, config.bins)?;
        let reference_db = reference_response.magnitude_db();
        let local_db = local_response.magnitude_db();

        let pass_band = self.pass_band.rescale(DEFAULT_BINS, config.bins);
        let stop_band = self.stop_band.rescale(DEFAULT_BINS, config.bins);

        pass_band.check(reference.name(), &reference_db)?;
        pass_band.check(LocalOracle.name(), &local_db)?;
        stop_band.check(reference.name(), &reference_db)?;
        stop_band.check(LocalOracle.name(), &local_db)?;

        let cross_check = if config.cross_check {
            Some(allclose(
                "magnitude dB",
                &local_db,
                &reference_db,
                self.cross_tolerance,
            )?)
        } else {
            None
        };

        info!(
            order = self.spec.order(),
            cutoff = self.spec.cutoff(),
            bins = config.bins,
            "fir design check passed"
        );

        Ok(FirReport {
            reference_name: reference.name().to_string(),
            reference_taps,
            local_taps,
            reference_response,
            local_response,
            cross_check,
        })
    }

    /// Open a reference oracle, run the check, and release the oracle on
    /// every exit path.
    pub fn run_scoped<R, O>(&self, open: O, config: &RunConfig) -> Result<FirReport, ParityError>
    where
        R: FilterOracle,
        O: FnOnce() -> Result<R, ParityError>,
    {
        with_session(open, |reference| self.run(reference, config))
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a passing FIR design check.
#[derive(Debug, Clone, PartialEq)]
pub struct FirReport {
    /// Name of the reference oracle.
    pub reference_name: String,

    /// Taps from the reference designer.
    pub reference_taps: Vec<f64>,

    /// Taps from the local designer.
    pub local_taps: Vec<f64>,

    /// Response of the reference design.
    pub reference_response: FrequencyResponse,

    /// Response of the local design.
    pub local_response: FrequencyResponse,

    /// Cross-check result, when enabled.
    pub cross_check: Option<CloseReport>,
}

/// Serializable digest of a [`FirReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirSummary {
    /// Name of the reference oracle.
    pub reference_name: String,
    /// Taps from the reference designer.
    pub reference_taps: Vec<f64>,
    /// Taps from the local designer.
    pub local_taps: Vec<f64>,
    /// Largest tap difference.
    pub max_tap_deviation: f64,
    /// Cross-check result, when enabled.
    pub cross_check: Option<CloseReport>,
}

impl FirReport {
    /// Write magnitude and phase of both responses as CSV.
    pub fn export_csv<W: Write>(&self, out: W) -> Result<(), ParityError> {
        write_response_csv(out, &self.reference_response, &self.local_response)
    }

    /// Digest for JSON reports.
    pub fn summary(&self) -> FirSummary {
        let max_tap_deviation = self
            .reference_taps
            .iter()
            .zip(&self.local_taps)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        FirSummary {
            reference_name: self.reference_name.clone(),
            reference_taps: self.reference_taps.clone(),
            local_taps: self.local_taps.clone(),
            max_tap_deviation,
            cross_check: self.cross_check,
        }
    }
}
