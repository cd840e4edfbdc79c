//! Base routines shared by every selection strategy
//!
//! Strategies differ only in ordering; the checks run before selection and the
//! greedy accumulation pass are implemented once here.

use std::collections::HashSet;

use crate::error::SelectionError;
use crate::types::{ResolvedInput, Value};
use crate::utxo_selection::types::SelectionResult;

/// Reject malformed UTXO sets before any selection runs
///
/// # Errors
/// * `SelectionError::InvalidInput` if a UTXO has an empty transaction id or
///   two UTXOs share an output reference
pub fn validate_utxos(utxos: &[ResolvedInput]) -> Result<(), SelectionError> {
    let mut seen = HashSet::with_capacity(utxos.len());
    for utxo in utxos {
        if utxo.output_ref.tx_id.is_empty() {
            return Err(SelectionError::InvalidInput(format!(
                "output #{} has an empty transaction id",
                utxo.output_ref.index
            )));
        }
        if !seen.insert(&utxo.output_ref) {
            return Err(SelectionError::InvalidInput(format!(
                "duplicate output reference {}",
                utxo.output_ref
            )));
        }
    }
    Ok(())
}

/// Walk `ordered` once, taking UTXOs until the accumulated value covers `target`
///
/// A UTXO is never taken once `max_inputs` have been selected. Selection stops
/// as soon as the target is covered, so the result is always the shortest
/// covering prefix of `ordered`.
///
/// # Errors
/// * `SelectionError::InputLimitExceeded` if the cap stopped the pass while the
///   full set would have covered the target
/// * `SelectionError::InsufficientFunds` if the full set cannot cover the target;
///   its `shortfall` is what the pass still lacked when it stopped
/// * `SelectionError::InvalidInput` if summing the UTXOs overflows, including
///   the total of the whole set computed to classify a failed pass
pub fn greedy_select(
    ordered: &[&ResolvedInput],
    target: &Value,
    max_inputs: usize,
) -> Result<SelectionResult, SelectionError> {
    let mut accumulated = Value::zero();
    let mut selected: Vec<ResolvedInput> = Vec::new();
    let mut cap_reached = false;

    for utxo in ordered {
        if accumulated.covers(target) {
            break;
        }
        if selected.len() >= max_inputs {
            cap_reached = true;
            break;
        }
        accumulated = accumulated.checked_add(utxo.value())?;
        selected.push((*utxo).clone());
    }

    if accumulated.covers(target) {
        let change = accumulated.checked_sub(target)?;
        return Ok(SelectionResult::new(selected, change, accumulated));
    }

    let available = Value::try_sum(ordered.iter().map(|utxo| utxo.value()))?;
    if cap_reached && available.covers(target) {
        return Err(SelectionError::InputLimitExceeded {
            max_inputs,
            needed: inputs_needed(ordered, target)?,
        });
    }

    Err(SelectionError::InsufficientFunds {
        shortfall: target.saturating_sub(&accumulated),
        required: target.clone(),
        available,
    })
}

/// Length of the shortest prefix of `ordered` whose value covers `target`
///
/// Only called once the whole set is known to cover the target.
fn inputs_needed(ordered: &[&ResolvedInput], target: &Value) -> Result<usize, SelectionError> {
    let mut accumulated = Value::zero();
    for (count, utxo) in ordered.iter().enumerate() {
        if accumulated.covers(target) {
            return Ok(count);
        }
        accumulated = accumulated.checked_add(utxo.value())?;
    }
    Ok(ordered.len())
}
