//! Savitzky-Golay smoothing equivalence check.
//!
//! ## Purpose
//!
//! This module smooths one noisy signal with a reference oracle and with the
//! local library and asserts the two outputs agree element-wise.
//!
//! ## Design notes
//!
//! * **Noise**: Standard-normal noise is added to a fixed base signal. The
//!   realization comes from `RunConfig::seed` when set, and from OS entropy
//!   otherwise.
//! * **Tolerance**: `rtol = 1e-7`, `atol = 0` unless overridden; the local
//!   output is the actual value and the reference output the desired one.
//!
//! ## Invariants
//!
//! * Both outputs have the length of the input signal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use tracing::{debug, info};

use crate::adapters::FilterOracle;
use crate::adapters::local::LocalOracle;
use crate::api::RunConfig;
use crate::engine::session::with_session;
use crate::engine::validator::Validator;
use crate::evaluation::closeness::{CloseReport, Tolerance, allclose};
use crate::primitives::errors::ParityError;
use crate::primitives::spec::SmoothingSpec;

/// Fifteen-sample step: five zeros, five ones, five zeros.
pub const STEP_SIGNAL: [f64; 15] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

/// Compares a reference Savitzky-Golay implementation against the local one.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingCheck {
    spec: SmoothingSpec,
    base: Vec<f64>,
    tolerance: Tolerance,
}

impl SmoothingCheck {
    /// Check `spec` on the step signal with default tolerances.
    pub fn new(spec: SmoothingSpec) -> Self {
        Self {
            spec,
            base: STEP_SIGNAL.to_vec(),
            tolerance: Tolerance::default(),
        }
    }

    /// Replace the noise-free base signal.
    pub fn with_base_signal(mut self, base: Vec<f64>) -> Result<Self, ParityError> {
        if base.is_empty() {
            return Err(ParityError::EmptyInput);
        }
        self.base = base;
        Ok(self)
    }

    /// Replace the closeness tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Smoothing parameters under test.
    pub fn spec(&self) -> &SmoothingSpec {
        &self.spec
    }

    /// Base signal plus one draw of standard-normal noise.
    pub fn noisy_signal(&self, config: &RunConfig) -> Vec<f64> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.base
            .iter()
            .map(|&v| v + rng.sample::<f64, _>(StandardNormal))
            .collect()
    }

    /// Draw a noisy signal and run against an already open reference oracle.
    pub fn run<R: FilterOracle>(
        &self,
        reference: &mut R,
        config: &RunConfig,
    ) -> Result<SmoothingReport, ParityError> {
        let signal = self.noisy_signal(config);
        self.run_on(reference, signal)
    }

    /// Run against an already open reference oracle on a given signal.
    pub fn run_on<R: FilterOracle>(
        &self,
        reference: &mut R,
        signal: Vec<f64>,
    ) -> Result<SmoothingReport, ParityError> {
        let reference_output = reference.smooth(&signal, &self.spec)?;
        let local_output = LocalOracle.smooth(&signal, &self.spec)?;
        debug!(
            reference = reference.name(),
            len = signal.len(),
            "smoothed signals obtained"
        );

        Validator::validate_lengths(
            &format!("{} smoothed signal", reference.name()),
            signal.len(),
            reference_output.len(),
        )?;
        Validator::validate_lengths(
            &format!("{} smoothed signal", LocalOracle.name()),
            signal.len(),
            local_output.len(),
        )?;

        let closeness = allclose(
            "smoothed signal",
            &local_output,
            &reference_output,
            self.tolerance,
        )?;

        info!(
            window_length = self.spec.window_length(),
            polyorder = self.spec.polyorder(),
            max_abs_deviation = closeness.max_abs_deviation,
            "smoothing check passed"
        );

        Ok(SmoothingReport {
            reference_name: reference.name().to_string(),
            signal,
            reference: reference_output,
            local: local_output,
            closeness,
        })
    }

    /// Open a reference oracle, run the check, and release the oracle on
    /// every exit path.
    pub fn run_scoped<R, O>(
        &self,
        open: O,
        config: &RunConfig,
    ) -> Result<SmoothingReport, ParityError>
    where
        R: FilterOracle,
        O: FnOnce() -> Result<R, ParityError>,
    {
        with_session(open, |reference| self.run(reference, config))
    }
}

/// Outcome of a passing smoothing check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothingReport {
    /// Name of the reference oracle.
    pub reference_name: String,

    /// Noisy input signal.
    pub signal: Vec<f64>,

    /// Reference output.
    pub reference: Vec<f64>,

    /// Local output.
    pub local: Vec<f64>,

    /// Deviation summary.
    pub closeness: CloseReport,
}
