//! Layer 5: Adapters
//!
//! # Purpose
//!
//! Implementations of [`FilterOracle`], the narrow interface through which a
//! check obtains filter designs and smoothed signals:
//! - `local`: the crate's own signal library
//! - `octave`: a GNU Octave session with the `signal` package loaded
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

use crate::primitives::errors::ParityError;
use crate::primitives::spec::{FilterSpec, SmoothingSpec};

/// Local signal library adapter.
pub mod local;

/// GNU Octave session adapter.
pub mod octave;

/// Source of FIR designs and Savitzky-Golay smoothing results.
///
/// Implementations may hold an external session; [`close`](Self::close)
/// releases it and is called by the engine on every exit path.
pub trait FilterOracle {
    /// Name used in failure reports.
    fn name(&self) -> &str;

    /// Design the FIR filter described by `spec`, returning its taps.
    fn design_fir(&mut self, spec: &FilterSpec) -> Result<Vec<f64>, ParityError>;

    /// Smooth `signal` with a Savitzky-Golay filter.
    fn smooth(&mut self, signal: &[f64], spec: &SmoothingSpec) -> Result<Vec<f64>, ParityError>;

    /// Release any external resources.
    fn close(&mut self) -> Result<(), ParityError> {
        Ok(())
    }
}
