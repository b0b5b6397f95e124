//! CSV export of frequency responses for external plotting.
//!
//! Writes one row per bin with the magnitude (dB) and unwrapped phase of a
//! reference and a local response, ready for a two-panel plot.

use std::io::Write;

use crate::algorithms::response::FrequencyResponse;
use crate::engine::validator::Validator;
use crate::primitives::errors::ParityError;

/// Column header written by [`write_response_csv`].
pub const RESPONSE_CSV_HEADER: &str = "w,reference_db,local_db,reference_phase,local_phase";

/// Write both responses side by side as CSV.
pub fn write_response_csv<W: Write>(
    mut out: W,
    reference: &FrequencyResponse,
    local: &FrequencyResponse,
) -> Result<(), ParityError> {
    Validator::validate_lengths("response bins", reference.len(), local.len())?;

    let ref_db = reference.magnitude_db();
    let local_db = local.magnitude_db();
    let ref_phase = reference.phase_unwrapped();
    let local_phase = local.phase_unwrapped();

    writeln!(out, "{}", RESPONSE_CSV_HEADER)?;
    for i in 0..reference.len() {
        writeln!(
            out,
            "{},{},{},{},{}",
            reference.frequencies[i], ref_db[i], local_db[i], ref_phase[i], local_phase[i]
        )?;
    }
    out.flush()?;
    Ok(())
}
