//! High-level API: run configuration and check entry points.
//!
//! ## Purpose
//!
//! This module provides the user-facing configuration for a parity run. The
//! noise seed, plot export, the optional cross-implementation assertion, and
//! the response bin count are all carried explicitly in a [`RunConfig`]
//! instead of being read from process-wide state.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Explicit environment**: [`RunConfig::from_vars`] takes a lookup
//!   function, so only the binary decides where variables come from.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RunConfigBuilder`] via `RunConfig::builder()`.
//! 2. Chain configuration methods (`.seed()`, `.skip_plots()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`RunConfig`].

use serde::Serialize;

use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::FilterOracle;
pub use crate::adapters::local::LocalOracle;
pub use crate::adapters::octave::{
    OctaveOracle, OctaveSession, OctaveValue, Orientation, SessionOptions,
};
pub use crate::algorithms::fir::{fir1, firwin};
pub use crate::algorithms::response::{DEFAULT_BINS, FrequencyResponse, freqz};
pub use crate::algorithms::savgol::{EdgeMode, savgol_coeffs, savgol_filter};
pub use crate::engine::fir_check::{FirDesignCheck, FirReport, FirSummary};
pub use crate::engine::session::with_session;
pub use crate::engine::smoothing_check::{STEP_SIGNAL, SmoothingCheck, SmoothingReport};
pub use crate::evaluation::bounds::BandBound;
pub use crate::evaluation::closeness::{CloseReport, Tolerance, allclose};
pub use crate::evaluation::export::{RESPONSE_CSV_HEADER, write_response_csv};
pub use crate::math::phase::unwrap;
pub use crate::math::window::Window;
pub use crate::primitives::errors::ParityError;
pub use crate::primitives::spec::{Band, FilterKind, FilterSpec, SmoothingSpec};

/// Variable that marks a CI run; any non-empty value disables plot export.
pub const CI_VAR: &str = "CI";

/// Variable holding an optional `u64` noise seed.
pub const SEED_VAR: &str = "FILTER_PARITY_SEED";

// ============================================================================
// Run Configuration
// ============================================================================

/// Validated configuration shared by both checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// Noise seed; `None` draws a fresh realization each run.
    pub seed: Option<u64>,

    /// Skip writing plot data.
    pub skip_plots: bool,

    /// Enable the cross-implementation dB closeness assertion.
    pub cross_check: bool,

    /// Number of frequency response bins.
    pub bins: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            skip_plots: false,
            cross_check: false,
            bins: DEFAULT_BINS,
        }
    }
}

impl RunConfig {
    /// Start a builder with default settings.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Build a configuration from named variables.
    ///
    /// `CI` set to any non-empty value enables `skip_plots`;
    /// `FILTER_PARITY_SEED` sets the seed when it parses as `u64`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let skip_plots = lookup(CI_VAR).is_some_and(|v| !v.is_empty());
        let seed = lookup(SEED_VAR).and_then(|v| v.trim().parse::<u64>().ok());
        Self {
            seed,
            skip_plots,
            ..Self::default()
        }
    }
}

/// Fluent builder for [`RunConfig`].
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    /// Noise seed.
    pub seed: Option<u64>,

    /// Skip writing plot data.
    pub skip_plots: Option<bool>,

    /// Enable the cross-implementation dB assertion.
    pub cross_check: Option<bool>,

    /// Number of frequency response bins.
    pub bins: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RunConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the noise generator.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Skip writing plot data.
    pub fn skip_plots(mut self, skip: bool) -> Self {
        if self.skip_plots.is_some() {
            self.duplicate_param = Some("skip_plots");
        }
        self.skip_plots = Some(skip);
        self
    }

    /// Enable or disable the cross-implementation dB assertion.
    pub fn cross_check(mut self, enabled: bool) -> Self {
        if self.cross_check.is_some() {
            self.duplicate_param = Some("cross_check");
        }
        self.cross_check = Some(enabled);
        self
    }

    /// Set the number of frequency response bins.
    pub fn bins(mut self, bins: usize) -> Self {
        if self.bins.is_some() {
            self.duplicate_param = Some("bins");
        }
        self.bins = Some(bins);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<RunConfig, ParityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = RunConfig::default();
        let bins = self.bins.unwrap_or(defaults.bins);
        Validator::validate_bins(bins)?;

        Ok(RunConfig {
            seed: self.seed,
            skip_plots: self.skip_plots.unwrap_or(defaults.skip_plots),
            cross_check: self.cross_check.unwrap_or(defaults.cross_check),
            bins,
        })
    }
}
