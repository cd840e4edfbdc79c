//! Utility functions for UTXO selection
//!
//! This module provides ordering and aggregation helpers for selection strategies.

use std::cmp::Ordering;

use crate::types::{ResolvedInput, Value};

/// Compare two UTXOs by descending lovelace
///
/// Ties are broken by ascending output index, then ascending transaction id,
/// which makes the order total for any set with unique output references.
pub fn compare_by_lovelace_desc(a: &ResolvedInput, b: &ResolvedInput) -> Ordering {
    b.lovelace()
        .cmp(&a.lovelace())
        .then_with(|| a.output_ref.index.cmp(&b.output_ref.index))
        .then_with(|| a.output_ref.tx_id.cmp(&b.output_ref.tx_id))
}

/// Sort UTXOs by lovelace in descending order
///
/// # Arguments
/// * `utxos` - UTXOs to sort
///
/// # Returns
/// * References to the UTXOs, largest first
pub fn sort_by_lovelace(utxos: &[ResolvedInput]) -> Vec<&ResolvedInput> {
    let mut sorted: Vec<&ResolvedInput> = utxos.iter().collect();
    sorted.sort_by(|a, b| compare_by_lovelace_desc(a, b));
    sorted
}

/// Whether a UTXO holds any native asset that `target` requires
pub fn carries_required_asset(utxo: &ResolvedInput, target: &Value) -> bool {
    utxo.value()
        .assets()
        .keys()
        .any(|asset| target.assets().contains_key(asset))
}
