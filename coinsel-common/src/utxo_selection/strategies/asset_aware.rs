//! AssetAware UTXO selection strategy
//!
//! Largest-first ordering can rank a UTXO holding a required token behind
//! many lovelace-rich UTXOs and run into the input cap before reaching it.
//! This strategy ranks such UTXOs first instead.

use crate::types::{ResolvedInput, Value};
use crate::utxo_selection::strategies::Strategy;
use crate::utxo_selection::strategies::utils;

/// Strategy that offers UTXOs carrying a required asset before all others
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetAwareStrategy;

impl AssetAwareStrategy {
    /// Create a new AssetAwareStrategy
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for AssetAwareStrategy {
    fn name(&self) -> &'static str {
        "AssetAware"
    }

    fn order<'a>(&self, utxos: &'a [ResolvedInput], target: &Value) -> Vec<&'a ResolvedInput> {
        let mut sorted: Vec<&ResolvedInput> = utxos.iter().collect();
        sorted.sort_by(|a, b| {
            let a_required = utils::carries_required_asset(a, target);
            let b_required = utils::carries_required_asset(b, target);
            // true sorts before false
            b_required
                .cmp(&a_required)
                .then_with(|| utils::compare_by_lovelace_desc(a, b))
        });
        sorted
    }
}
