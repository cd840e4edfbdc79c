//! LargestFirst UTXO selection strategy
//!
//! This module implements the default strategy, which offers UTXOs to the
//! greedy pass in descending lovelace order.

use crate::types::{ResolvedInput, Value};
use crate::utxo_selection::strategies::Strategy;
use crate::utxo_selection::strategies::utils;

/// Strategy for reaching coverage with few inputs by taking larger UTXOs first
///
/// Native assets play no part in the ordering. They are only checked through
/// the coverage test after each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFirstStrategy;

impl LargestFirstStrategy {
    /// Create a new LargestFirstStrategy
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for LargestFirstStrategy {
    fn name(&self) -> &'static str {
        "LargestFirst"
    }

    fn order<'a>(&self, utxos: &'a [ResolvedInput], _target: &Value) -> Vec<&'a ResolvedInput> {
        utils::sort_by_lovelace(utxos)
    }
}
