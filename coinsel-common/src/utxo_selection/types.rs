//! Core types for UTXO selection
//!
//! This module defines the request and result types passed across the
//! selection engine's boundary, and the strategy enum used to choose an
//! ordering.
//!
//! # Key Types
//!
//! - [`SelectionRequest`]: Borrowed view of the UTXOs, target and input cap
//! - [`SelectionResult`]: Selected UTXOs (in selection order) and the change
//! - [`SelectionStrategy`]: Which ordering the greedy pass walks

use crate::types::{AssetId, ResolvedInput, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Cap used when the caller places no bound on the number of inputs
pub const UNLIMITED_INPUTS: usize = usize::MAX;

/// UTXO selection strategy
///
/// Every strategy runs the same greedy pass; they differ only in the order in
/// which UTXOs are offered to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Largest lovelace quantity first
    ///
    /// This is the default. It converges fastest toward a pure lovelace
    /// target, but it is blind to native assets: a UTXO holding a required
    /// token with little lovelace may be ranked too late to fit under the cap.
    #[default]
    LargestFirst,

    /// UTXOs holding an asset the target requires first, then largest first
    ///
    /// Within each group the largest-first order applies.
    AssetAware,
}

impl SelectionStrategy {
    /// Stable name used in logs and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::LargestFirst => "largest_first",
            SelectionStrategy::AssetAware => "asset_aware",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single selection call's inputs
///
/// Borrowed so that selection never takes ownership of, or mutates, the
/// caller's UTXO set.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    /// UTXOs available for spending (order does not affect the result)
    pub available: &'a [ResolvedInput],
    /// Value the selected inputs must cover
    pub target: &'a Value,
    /// Maximum number of inputs the result may contain
    pub max_inputs: usize,
}

impl<'a> SelectionRequest<'a> {
    /// Create a new selection request
    pub fn new(available: &'a [ResolvedInput], target: &'a Value, max_inputs: usize) -> Self {
        Self {
            available,
            target,
            max_inputs,
        }
    }
}

/// Outcome of a successful selection
///
/// The sum of the selected UTXO values always equals the target plus the
/// change, exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    selected: Vec<ResolvedInput>,
    change: Value,
    total: Value,
}

impl SelectionResult {
    pub(crate) fn new(selected: Vec<ResolvedInput>, change: Value, total: Value) -> Self {
        Self {
            selected,
            change,
            total,
        }
    }

    /// Selected UTXOs, in the order they were chosen
    pub fn selected(&self) -> &[ResolvedInput] {
        &self.selected
    }

    /// Number of inputs selected
    pub fn input_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether no input was needed
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Full change value owed back to the wallet
    pub fn change(&self) -> &Value {
        &self.change
    }

    /// Lovelace part of the change
    pub fn lovelace_change(&self) -> u64 {
        self.change.lovelace()
    }

    /// Per-asset part of the change
    pub fn assets_change(&self) -> &BTreeMap<AssetId, u64> {
        self.change.assets()
    }

    /// Combined value of the selected UTXOs
    pub fn total_selected(&self) -> &Value {
        &self.total
    }

    /// Split into the selected UTXOs and the change
    pub fn into_parts(self) -> (Vec<ResolvedInput>, Value) {
        (self.selected, self.change)
    }
}
