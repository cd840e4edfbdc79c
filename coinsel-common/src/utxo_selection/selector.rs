//! Main UTXO selector implementation
//!
//! This module provides the `UtxoSelector`, which delegates to the strategy
//! implementation matching its configured [`SelectionStrategy`].
//!
//! # Overview
//!
//! The selector is the configurable entry point for coin selection. It holds
//! only plain settings (a strategy and a default input cap), so one selector
//! can serve many threads at once; every call works on its own borrowed inputs
//! and allocates only local state.
//!
//! # Usage
//!
//! ```
//! use coinsel_common::types::{OutputRef, ResolvedInput, Value};
//! use coinsel_common::utxo_selection::selector::UtxoSelector;
//! use coinsel_common::utxo_selection::types::SelectionStrategy;
//!
//! let utxos = vec![
//!     ResolvedInput::new(OutputRef::new(vec![1; 32], 0), vec![0x61], Value::from_lovelace(5_000_000)),
//!     ResolvedInput::new(OutputRef::new(vec![2; 32], 0), vec![0x61], Value::from_lovelace(3_000_000)),
//! ];
//!
//! let selector = UtxoSelector::new().with_strategy(SelectionStrategy::LargestFirst);
//! let result = selector.select(&utxos, &Value::from_lovelace(4_000_000), 5).unwrap();
//!
//! assert_eq!(result.input_count(), 1);
//! assert_eq!(result.lovelace_change(), 1_000_000);
//! ```

use log::{debug, info, warn};

use crate::config::SelectionConfig;
use crate::error::SelectionError;
use crate::logging::SafeLog;
use crate::scoring::{ScoredSelection, Scorer};
use crate::types::{ResolvedInput, Value};
use crate::utxo_selection::strategies::{AssetAwareStrategy, LargestFirstStrategy, Strategy};
use crate::utxo_selection::types::{SelectionRequest, SelectionResult, SelectionStrategy, UNLIMITED_INPUTS};

/// UTXO selector that uses a configured strategy to select UTXOs
///
/// # Design Pattern
///
/// The `UtxoSelector` implements the Strategy pattern, where:
/// - `UtxoSelector` is the context
/// - `Strategy` trait defines the interface for strategies
/// - Concrete strategy types implement specific orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtxoSelector {
    /// Ordering used for selection
    strategy: SelectionStrategy,
    /// Cap applied by `select_with_default_cap`
    default_max_inputs: usize,
}

impl Default for UtxoSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl UtxoSelector {
    /// Create a new UTXO selector with default settings
    ///
    /// # Returns
    ///
    /// A new `UtxoSelector` with:
    /// - Strategy set to largest first
    /// - No default input cap
    pub fn new() -> Self {
        Self {
            strategy: SelectionStrategy::LargestFirst,
            default_max_inputs: UNLIMITED_INPUTS,
        }
    }

    /// Create a selector from loaded configuration
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            strategy: config.strategy,
            default_max_inputs: config.effective_max_inputs(),
        }
    }

    /// Set the strategy for this selector
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the input cap used when the caller does not supply one
    pub fn with_default_max_inputs(mut self, max_inputs: usize) -> Self {
        self.default_max_inputs = max_inputs;
        self
    }

    /// Get the current strategy
    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Get the default input cap
    pub fn default_max_inputs(&self) -> usize {
        self.default_max_inputs
    }

    fn strategy_impl(&self) -> Box<dyn Strategy> {
        match self.strategy {
            SelectionStrategy::LargestFirst => Box::new(LargestFirstStrategy::new()),
            SelectionStrategy::AssetAware => Box::new(AssetAwareStrategy::new()),
        }
    }

    /// Select UTXOs covering `target` using at most `max_inputs` of them
    ///
    /// # Arguments
    ///
    /// * `utxos` - Available UTXOs to select from
    /// * `target` - Value the selected inputs must cover
    /// * `max_inputs` - Upper bound on the number of selected UTXOs
    ///
    /// # Returns
    ///
    /// * The selected UTXOs and change, or the reason selection failed
    pub fn select(
        &self,
        utxos: &[ResolvedInput],
        target: &Value,
        max_inputs: usize,
    ) -> Result<SelectionResult, SelectionError> {
        let strategy_impl = self.strategy_impl();
        debug!(
            "Selecting with {} from {} UTXOs: target {}, max inputs {}",
            strategy_impl.name(),
            utxos.len(),
            target,
            max_inputs
        );

        let request = SelectionRequest::new(utxos, target, max_inputs);
        let outcome = strategy_impl.select(&request);

        match &outcome {
            Ok(result) => info!(
                "Selected {} of {} UTXOs {}, change {}",
                result.input_count(),
                utxos.len(),
                result.selected().safe_log_format(),
                result.change()
            ),
            Err(err) => warn!("Selection failed ({}): {}", err.kind(), err),
        }

        outcome
    }

    /// Select UTXOs using this selector's default input cap
    pub fn select_with_default_cap(
        &self,
        utxos: &[ResolvedInput],
        target: &Value,
    ) -> Result<SelectionResult, SelectionError> {
        self.select(utxos, target, self.default_max_inputs)
    }

    /// Select UTXOs covering the sum of several requested amounts
    ///
    /// # Errors
    /// * `SelectionError::InvalidInput` if the amounts overflow when summed
    /// * Any error from [`UtxoSelector::select`]
    pub fn select_for_amounts(
        &self,
        utxos: &[ResolvedInput],
        amounts: &[Value],
        max_inputs: usize,
    ) -> Result<SelectionResult, SelectionError> {
        let target = Value::try_sum(amounts)?;
        self.select(utxos, &target, max_inputs)
    }

    /// Select UTXOs, then attach the score produced by `scorer`
    pub fn select_scored<S: Scorer + ?Sized>(
        &self,
        utxos: &[ResolvedInput],
        target: &Value,
        max_inputs: usize,
        scorer: &S,
    ) -> Result<ScoredSelection, SelectionError> {
        let result = self.select(utxos, target, max_inputs)?;
        let score = scorer.score(&result);
        debug!("Selection scored {:.4}", score.confidence);
        Ok(ScoredSelection { result, score })
    }
}
