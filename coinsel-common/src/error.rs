//! Error types for value arithmetic and coin selection
//!
//! Selection failures are deterministic: retrying with identical inputs
//! reproduces the identical error, so callers decide how to surface them
//! rather than retrying.
//!
//! # Usage
//!
//! ```
//! use coinsel_common::error::SelectionError;
//! use coinsel_common::types::Value;
//! use coinsel_common::utxo_selection::select;
//!
//! match select(&[], &Value::from_lovelace(1_000_000), 5) {
//!     Err(SelectionError::InsufficientFunds { shortfall, .. }) => {
//!         assert_eq!(shortfall.lovelace(), 1_000_000);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use crate::types::{AssetId, Value};
use thiserror::Error;

/// Errors produced by [`Value`] arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("lovelace quantity overflow")]
    LovelaceOverflow,

    #[error("quantity overflow for asset {0}")]
    AssetOverflow(AssetId),

    #[error("cannot subtract {subtrahend} from {minuend}")]
    Underflow { minuend: Value, subtrahend: Value },
}

/// Reasons a coin selection can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The available UTXOs cannot cover the target, whatever the input cap
    #[error("Insufficient funds: required {required}, available {available}, short by {shortfall}")]
    InsufficientFunds {
        /// Total value of every available UTXO
        available: Value,
        /// The requested target
        required: Value,
        /// `required` minus the value the pass accumulated, clamped at zero per
        /// dimension
        shortfall: Value,
    },

    /// The target is reachable, but only with more inputs than allowed
    #[error("Input limit exceeded: coverage needs {needed} inputs, at most {max_inputs} allowed")]
    InputLimitExceeded {
        /// The cap that was applied
        max_inputs: usize,
        /// Inputs the same ordering needs to reach coverage
        needed: usize,
    },

    /// The supplied UTXO set is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SelectionError {
    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            SelectionError::InsufficientFunds { .. } => "insufficient_funds",
            SelectionError::InputLimitExceeded { .. } => "input_limit_exceeded",
            SelectionError::InvalidInput(_) => "invalid_input",
        }
    }
}

// Arithmetic failures during selection mean the input set itself is unusable
impl From<ValueError> for SelectionError {
    fn from(err: ValueError) -> Self {
        SelectionError::InvalidInput(err.to_string())
    }
}
