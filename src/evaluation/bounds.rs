//! Pass-band and stop-band magnitude bounds.
//!
//! ## Purpose
//!
//! This module expresses the acceptance policy for a designed filter as a set
//! of per-band limits on the magnitude response (in dB) over a range of bins.
//!
//! ## Design notes
//!
//! * **Slice semantics**: A bound covers `[start, end)` with `end` clipped to
//!   the number of available bins. A range that covers no bin at all is an
//!   error, never a pass.
//! * **Grid independence**: Bin `k` of an `N`-bin response sits at `πk/N`, so
//!   a bound written for one grid is moved to another with
//!   [`BandBound::rescale`], keeping the covered frequencies.
//! * **NaN fails**: A NaN magnitude never satisfies a bound.

use core::ops::Range;

use serde::Serialize;

use crate::primitives::errors::ParityError;
use crate::primitives::spec::Band;

/// Magnitude limit applied over a range of bins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandBound {
    /// Which band this bound describes.
    pub band: Band,

    /// First bin covered.
    pub start: usize,

    /// One past the last bin covered; `None` runs to the end.
    pub end: Option<usize>,

    /// Pass band: strict lower limit. Stop band: strict upper limit.
    pub limit_db: f64,
}

impl BandBound {
    /// Every bin in `bins` must be strictly above `min_db`.
    pub fn pass(bins: Range<usize>, min_db: f64) -> Self {
        Self {
            band: Band::Pass,
            start: bins.start,
            end: Some(bins.end),
            limit_db: min_db,
        }
    }

    /// Every bin from `start` onward must be strictly below `max_db`.
    pub fn stop_from(start: usize, max_db: f64) -> Self {
        Self {
            band: Band::Stop,
            start,
            end: None,
            limit_db: max_db,
        }
    }

    /// Move the bound from a `grid_bins` grid to a `bins` grid.
    ///
    /// Bin `k` is kept when `k / bins` lies in `[start / grid_bins, end / grid_bins)`,
    /// i.e. both edges are rounded up on the new grid.
    pub fn rescale(&self, grid_bins: usize, bins: usize) -> Self {
        let scale = |edge: usize| (edge * bins).div_ceil(grid_bins.max(1));
        Self {
            band: self.band,
            start: scale(self.start),
            end: self.end.map(scale),
            limit_db: self.limit_db,
        }
    }

    /// Check a magnitude response produced by `implementation`.
    pub fn check(&self, implementation: &str, magnitude_db: &[f64]) -> Result<(), ParityError> {
        let end = self
            .end
            .map_or(magnitude_db.len(), |e| e.min(magnitude_db.len()));
        if self.start >= end {
            return Err(ParityError::EmptyBand {
                band: self.band,
                start: self.start,
                bins: magnitude_db.len(),
            });
        }

        for (offset, &value) in magnitude_db[self.start..end].iter().enumerate() {
            let ok = match self.band {
                Band::Pass => value > self.limit_db,
                Band::Stop => value < self.limit_db,
            };
            if !ok {
                return Err(ParityError::BoundViolation {
                    implementation: implementation.to_string(),
                    band: self.band,
                    bin: self.start + offset,
                    value_db: value,
                    limit_db: self.limit_db,
                });
            }
        }
        Ok(())
    }
}
