//! In-process oracle backed by the crate's own signal library.

use crate::adapters::FilterOracle;
use crate::algorithms::{fir, savgol};
use crate::primitives::errors::ParityError;
use crate::primitives::spec::{FilterSpec, SmoothingSpec};

/// [`FilterOracle`] over [`fir::design`] and [`savgol::smooth`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOracle;

impl FilterOracle for LocalOracle {
    fn name(&self) -> &str {
        "local"
    }

    fn design_fir(&mut self, spec: &FilterSpec) -> Result<Vec<f64>, ParityError> {
        fir::design(spec)
    }

    fn smooth(&mut self, signal: &[f64], spec: &SmoothingSpec) -> Result<Vec<f64>, ParityError> {
        savgol::smooth(signal, spec)
    }
}
