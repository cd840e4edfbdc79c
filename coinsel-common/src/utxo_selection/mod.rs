//! UTXO selection module
//!
//! This module chooses which unspent outputs a transaction should consume to
//! pay a multi-asset target, and computes the change owed back to the wallet.
//!
//! # Overview
//!
//! Selection is a greedy single pass over an ordered UTXO set:
//!
//! 1. Reject sets with duplicate output references
//! 2. Order the UTXOs (largest lovelace first by default)
//! 3. Take UTXOs in order until the accumulated value covers the target,
//!    never taking more than the input cap allows
//! 4. Return the selected UTXOs and `accumulated - target` as change
//!
//! Coverage is checked in every dimension the target names: lovelace and each
//! required native asset. The default ordering looks at lovelace only, so a
//! UTXO holding a required token but little lovelace can be reached late. The
//! [`SelectionStrategy::AssetAware`] ordering exists for wallets where that
//! matters.
//!
//! # Module Structure
//!
//! - `types.rs` - Request, result and strategy types
//! - `selector.rs` - Configurable selector (Strategy pattern context)
//! - `strategies/` - Orderings and the shared greedy pass
//!
//! # Typical Usage
//!
//! ```
//! use coinsel_common::types::{AssetId, OutputRef, ResolvedInput, Value};
//! use coinsel_common::utxo_selection::select;
//!
//! let token = AssetId::new(vec![0x11; 28], b"X".to_vec());
//! let utxos = vec![ResolvedInput::new(
//!     OutputRef::new(vec![0xaa; 32], 0),
//!     vec![0x61],
//!     Value::from_lovelace(2_000_000).with_asset(token.clone(), 10),
//! )];
//!
//! let target = Value::from_lovelace(1_000_000).with_asset(token.clone(), 5);
//! let result = select(&utxos, &target, 1).unwrap();
//!
//! assert_eq!(result.lovelace_change(), 1_000_000);
//! assert_eq!(result.change().quantity_of(&token), 5);
//! ```
//!
//! # Purity
//!
//! Selection reads its inputs and returns a new result. It performs no I/O,
//! holds no global state and never mutates the supplied UTXOs or values, so it
//! may run concurrently on independent inputs without locking.

pub mod types;
pub mod selector;
pub mod strategies;

pub use selector::UtxoSelector;
pub use types::{SelectionRequest, SelectionResult, SelectionStrategy, UNLIMITED_INPUTS};

use crate::error::SelectionError;
use crate::types::{ResolvedInput, Value};
use strategies::{LargestFirstStrategy, Strategy};

/// Select UTXOs largest-first until `target` is covered
///
/// # Arguments
/// * `available` - UTXOs available for spending
/// * `target` - Value to cover
/// * `max_inputs` - Upper bound on the number of selected UTXOs
///
/// # Errors
/// * `SelectionError::InvalidInput` for duplicate output references
/// * `SelectionError::InputLimitExceeded` if only the cap prevents coverage
/// * `SelectionError::InsufficientFunds` if the UTXOs cannot cover the target
pub fn select(
    available: &[ResolvedInput],
    target: &Value,
    max_inputs: usize,
) -> Result<SelectionResult, SelectionError> {
    LargestFirstStrategy::new().select(&SelectionRequest::new(available, target, max_inputs))
}
