//! UTXO selection strategies
//!
//! Each strategy implements the `Strategy` trait by supplying an ordering of
//! the available UTXOs. Validation and the greedy accumulation pass are shared
//! and live in [`base`].

use crate::error::SelectionError;
use crate::types::{ResolvedInput, Value};
use crate::utxo_selection::types::{SelectionRequest, SelectionResult};

pub mod base;
pub mod largest_first;
pub mod asset_aware;
pub mod utils;

// Re-export implementations
pub use largest_first::LargestFirstStrategy;
pub use asset_aware::AssetAwareStrategy;

/// Trait defining a UTXO selection strategy
///
/// Any struct implementing this trait can be used as a strategy
/// for UTXO selection.
pub trait Strategy {
    /// Name of this strategy
    fn name(&self) -> &'static str;

    /// Order the available UTXOs for the greedy pass
    ///
    /// The order must be total and must not depend on the order of `utxos`,
    /// so that selection is reproducible.
    fn order<'a>(&self, utxos: &'a [ResolvedInput], target: &Value) -> Vec<&'a ResolvedInput>;

    /// Select UTXOs using this strategy
    ///
    /// # Arguments
    /// * `request` - Available UTXOs, target value and input cap
    ///
    /// # Returns
    /// * The selection result, or the reason no selection is possible
    fn select(&self, request: &SelectionRequest<'_>) -> Result<SelectionResult, SelectionError> {
        base::validate_utxos(request.available)?;
        let ordered = self.order(request.available, request.target);
        base::greedy_select(&ordered, request.target, request.max_inputs)
    }
}
