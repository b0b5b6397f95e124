//! Scoped acquisition of oracle sessions.
//!
//! ## Purpose
//!
//! This module guarantees that a reference session is released on every exit
//! path of a check: success, setup error in the body, or assertion failure.
//!
//! ## Design notes
//!
//! * **Explicit close**: [`FilterOracle::close`] runs after the body whatever
//!   its outcome; the oracle is dropped right after, so adapters with a `Drop`
//!   backstop also cover panics.
//! * **Error priority**: A body error wins over a close error; the close error
//!   is logged instead.

use tracing::warn;

use crate::adapters::FilterOracle;
use crate::primitives::errors::ParityError;

/// Open an oracle, run `body` against it, then close it.
pub fn with_session<R, T, O, B>(open: O, body: B) -> Result<T, ParityError>
where
    R: FilterOracle,
    O: FnOnce() -> Result<R, ParityError>,
    B: FnOnce(&mut R) -> Result<T, ParityError>,
{
    let mut oracle = open()?;
    let outcome = body(&mut oracle);
    let closed = oracle.close();
    drop(oracle);

    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!(error = %close_err, "failed to close reference session after error");
            Err(err)
        }
    }
}
