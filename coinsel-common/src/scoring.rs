//! Optional scoring of selection results
//!
//! The selection engine never scores its own output. Callers that want a
//! quality figure attached to a selection pass a [`Scorer`] explicitly, either
//! the built-in [`HeuristicScorer`] or any closure
//! `Fn(&SelectionResult) -> Score`.
//!
//! ```
//! use coinsel_common::scoring::{Score, Scorer};
//! use coinsel_common::types::{OutputRef, ResolvedInput, Value};
//! use coinsel_common::utxo_selection::select;
//!
//! let utxos = vec![ResolvedInput::new(
//!     OutputRef::new(vec![1; 32], 0),
//!     vec![0x61],
//!     Value::from_lovelace(5_000_000),
//! )];
//! let result = select(&utxos, &Value::from_lovelace(5_000_000), 1).unwrap();
//!
//! let exact_match = |r: &coinsel_common::SelectionResult| {
//!     Score::new(if r.change().is_zero() { 1.0 } else { 0.0 })
//! };
//! assert_eq!(exact_match.score(&result).confidence, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::utxo_selection::types::SelectionResult;

/// Upper bound applied by [`HeuristicScorer`]
pub const MAX_CONFIDENCE: f32 = 0.99;

/// Confidence a [`HeuristicScorer`] starts from before penalties
pub const DEFAULT_BASE_CONFIDENCE: f32 = 0.92;

/// Penalty per input beyond the first
const INPUT_PENALTY: f32 = 0.01;

/// Penalty when the selection leaves lovelace change
const CHANGE_PENALTY: f32 = 0.01;

/// Quality figure attached to a selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Confidence in the selection, in `[0, 1]`
    pub confidence: f32,
}

impl Score {
    /// Create a score, clamping the confidence into `[0, 1]`
    pub fn new(confidence: f32) -> Self {
        Self {
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Scoring function over selection results
pub trait Scorer {
    /// Score a successful selection
    fn score(&self, result: &SelectionResult) -> Score;
}

impl<F> Scorer for F
where
    F: Fn(&SelectionResult) -> Score,
{
    fn score(&self, result: &SelectionResult) -> Score {
        self(result)
    }
}

/// Deterministic scorer that favours few inputs and no change
///
/// `confidence = min(0.99, base - 0.01 * (inputs - 1) - 0.01 if lovelace change)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicScorer {
    base_confidence: f32,
}

impl HeuristicScorer {
    /// Create a scorer with the default base confidence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer starting from `base_confidence`
    pub fn with_base_confidence(base_confidence: f32) -> Self {
        Self { base_confidence }
    }

    /// Base confidence before penalties
    pub fn base_confidence(&self) -> f32 {
        self.base_confidence
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self {
            base_confidence: DEFAULT_BASE_CONFIDENCE,
        }
    }
}

impl Scorer for HeuristicScorer {
    fn score(&self, result: &SelectionResult) -> Score {
        let input_penalty = result.input_count().saturating_sub(1) as f32 * INPUT_PENALTY;
        let change_penalty = if result.lovelace_change() > 0 {
            CHANGE_PENALTY
        } else {
            0.0
        };
        Score::new((self.base_confidence - input_penalty - change_penalty).min(MAX_CONFIDENCE))
    }
}

/// A selection result together with the score a caller attached to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSelection {
    /// The selection itself
    pub result: SelectionResult,
    /// Score produced by the injected scorer
    pub score: Score,
}
