//! Coinsel Common Library
//!
//! This crate provides UTXO coin selection for Cardano-style wallets whose
//! outputs carry lovelace and bundles of native assets.
//!
//! # Modules
//!
//! - `types`: Asset identifiers, multi-asset values and resolved UTXOs
//! - `error`: Value arithmetic and selection errors
//! - `utxo_selection`: The selection engine, its strategies and selector
//! - `scoring`: Optional, caller-injected scoring of selection results
//! - `config`: Configuration management
//! - `logging`: Logging setup and identifier sanitizing

/// Core domain types
pub mod types;

/// Error types
pub mod error;

/// UTXO selection algorithms and utilities
pub mod utxo_selection;

/// Scoring of selection results
pub mod scoring;

/// Configuration management
pub mod config;

/// Logging functionality
pub mod logging;

/// Re-export domain types
pub use types::{AssetId, OutputRef, ResolvedInput, TxOutput, Value, LOVELACE_PER_ADA};

/// Re-export error types
pub use error::{SelectionError, ValueError};

/// Re-export UTXO selection types
pub use utxo_selection::{
    select, SelectionRequest, SelectionResult, SelectionStrategy, UtxoSelector, UNLIMITED_INPUTS,
};

/// Re-export scoring types
pub use scoring::{HeuristicScorer, Score, ScoredSelection, Scorer};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use once_cell::sync::OnceCell;

static INIT_RESULT: OnceCell<Result<(), String>> = OnceCell::new();

/// Library initialization
///
/// Sets up logging with the default configuration. This function can be
/// safely called multiple times; it only initializes once and returns the
/// first call's outcome afterwards.
///
/// # Returns
/// * Result with () on success, or an error message string
pub fn init() -> Result<(), String> {
    INIT_RESULT
        .get_or_init(|| {
            logging::init(&logging::LogConfig::default())
                .map_err(|e| format!("Failed to initialize logging: {}", e))
        })
        .clone()
}
