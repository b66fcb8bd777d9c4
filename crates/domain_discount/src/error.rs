//! Discount domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur while computing a net payable amount
#[derive(Debug, Error)]
pub enum DiscountError {
    /// The calculation could not be completed; carries the underlying cause
    #[error("Computation failure: {source}")]
    ComputationFailure {
        #[from]
        source: CoreError,
    },
}
