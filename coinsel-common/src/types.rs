//! Core domain types for coin selection
//!
//! This module defines the values the selection engine works with: native
//! asset identifiers, multi-asset [`Value`]s, and resolved UTXOs.
//!
//! # Key Types
//!
//! - [`AssetId`]: A (policy id, asset name) pair identifying a native asset
//! - [`Value`]: A lovelace quantity plus a possibly-empty native asset bundle
//! - [`OutputRef`]: Reference to a transaction output (tx id and index)
//! - [`ResolvedInput`]: A UTXO, i.e. an output reference with the output it points to
//!
//! # Example
//!
//! ```
//! use coinsel_common::types::{AssetId, Value};
//!
//! let token = AssetId::new(vec![0xab; 28], b"HOSKY".to_vec());
//! let held = Value::from_lovelace(2_000_000).with_asset(token.clone(), 10);
//! let wanted = Value::from_lovelace(1_000_000).with_asset(token.clone(), 5);
//!
//! assert!(held.covers(&wanted));
//! let change = held.checked_sub(&wanted).unwrap();
//! assert_eq!(change.lovelace(), 1_000_000);
//! assert_eq!(change.quantity_of(&token), 5);
//! ```
//!
//! Asset bundles never hold zero-quantity entries. Every constructor and
//! arithmetic operation drops them, so two values are equal exactly when they
//! hold the same quantities.

use crate::error::ValueError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of lovelace in one ada
pub const LOVELACE_PER_ADA: u64 = 1_000_000;

/// Native asset identifier
///
/// Both halves are opaque byte strings and compare by content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId {
    /// Minting policy hash
    #[serde(with = "hex::serde")]
    pub policy_id: Vec<u8>,

    /// Asset name within the policy (may be empty)
    #[serde(with = "hex::serde")]
    pub asset_name: Vec<u8>,
}

impl AssetId {
    /// Create a new asset identifier
    pub fn new(policy_id: impl Into<Vec<u8>>, asset_name: impl Into<Vec<u8>>) -> Self {
        Self {
            policy_id: policy_id.into(),
            asset_name: asset_name.into(),
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", hex::encode(&self.policy_id), hex::encode(&self.asset_name))
    }
}

/// A lovelace quantity together with a bundle of native assets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValueRepr", into = "ValueRepr")]
pub struct Value {
    lovelace: u64,
    assets: BTreeMap<AssetId, u64>,
}

impl Value {
    /// The zero value
    pub fn zero() -> Self {
        Self::default()
    }

    /// A pure lovelace value
    pub fn from_lovelace(lovelace: u64) -> Self {
        Self {
            lovelace,
            assets: BTreeMap::new(),
        }
    }

    /// Build a value from a lovelace amount and a list of asset quantities
    ///
    /// Repeated identifiers are summed and zero quantities are dropped.
    ///
    /// # Errors
    /// * `ValueError::AssetOverflow` if repeated entries overflow `u64`
    pub fn from_parts<I>(lovelace: u64, assets: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = (AssetId, u64)>,
    {
        let mut value = Self::from_lovelace(lovelace);
        for (asset, quantity) in assets {
            value.add_asset(asset, quantity)?;
        }
        Ok(value)
    }

    /// Set the quantity held of `asset`, replacing any previous quantity
    ///
    /// A quantity of zero removes the asset from the bundle.
    pub fn with_asset(mut self, asset: AssetId, quantity: u64) -> Self {
        if quantity == 0 {
            self.assets.remove(&asset);
        } else {
            self.assets.insert(asset, quantity);
        }
        self
    }

    /// Lovelace quantity
    pub fn lovelace(&self) -> u64 {
        self.lovelace
    }

    /// Native asset bundle (never contains zero quantities)
    pub fn assets(&self) -> &BTreeMap<AssetId, u64> {
        &self.assets
    }

    /// Quantity held of `asset`, zero if absent
    pub fn quantity_of(&self, asset: &AssetId) -> u64 {
        self.assets.get(asset).copied().unwrap_or(0)
    }

    /// Whether this value carries any native assets
    pub fn has_assets(&self) -> bool {
        !self.assets.is_empty()
    }

    /// Whether this value is zero in every dimension
    pub fn is_zero(&self) -> bool {
        self.lovelace == 0 && self.assets.is_empty()
    }

    /// Whether this value meets or exceeds `other` in every dimension `other` requires
    ///
    /// Assets present only in `self` are irrelevant.
    pub fn covers(&self, other: &Value) -> bool {
        self.lovelace >= other.lovelace
            && other
                .assets
                .iter()
                .all(|(asset, quantity)| self.quantity_of(asset) >= *quantity)
    }

    /// Add two values, merging asset bundles
    ///
    /// # Errors
    /// * `ValueError::LovelaceOverflow` or `ValueError::AssetOverflow` on `u64` overflow
    pub fn checked_add(&self, other: &Value) -> Result<Value, ValueError> {
        let mut sum = self.clone();
        sum.lovelace = sum
            .lovelace
            .checked_add(other.lovelace)
            .ok_or(ValueError::LovelaceOverflow)?;
        for (asset, quantity) in &other.assets {
            sum.add_asset(asset.clone(), *quantity)?;
        }
        Ok(sum)
    }

    /// Subtract `other` from this value
    ///
    /// Assets whose remainder is zero are dropped from the result.
    ///
    /// # Errors
    /// * `ValueError::Underflow` unless `self` covers `other`
    pub fn checked_sub(&self, other: &Value) -> Result<Value, ValueError> {
        if !self.covers(other) {
            return Err(ValueError::Underflow {
                minuend: self.clone(),
                subtrahend: other.clone(),
            });
        }
        Ok(self.saturating_sub(other))
    }

    /// Subtract `other` from this value, clamping every dimension at zero
    pub fn saturating_sub(&self, other: &Value) -> Value {
        let mut remainder = Value::from_lovelace(self.lovelace.saturating_sub(other.lovelace));
        for (asset, quantity) in &self.assets {
            let left = quantity.saturating_sub(other.quantity_of(asset));
            if left > 0 {
                remainder.assets.insert(asset.clone(), left);
            }
        }
        remainder
    }

    /// Sum a sequence of values; the empty sum is zero
    ///
    /// # Errors
    /// * Any overflow reported by [`Value::checked_add`]
    pub fn try_sum<'a, I>(values: I) -> Result<Value, ValueError>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .try_fold(Value::zero(), |acc, value| acc.checked_add(value))
    }

    fn add_asset(&mut self, asset: AssetId, quantity: u64) -> Result<(), ValueError> {
        if quantity == 0 {
            return Ok(());
        }
        let total = self
            .quantity_of(&asset)
            .checked_add(quantity)
            .ok_or_else(|| ValueError::AssetOverflow(asset.clone()))?;
        self.assets.insert(asset, total);
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lovelace", self.lovelace)?;
        for (asset, quantity) in &self.assets {
            write!(f, " + {} {}", quantity, asset)?;
        }
        Ok(())
    }
}

/// Serialized shape of a [`Value`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ValueRepr {
    lovelace: u64,
    #[serde(default)]
    assets: Vec<AssetEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssetEntry {
    #[serde(with = "hex::serde")]
    policy_id: Vec<u8>,
    #[serde(with = "hex::serde")]
    asset_name: Vec<u8>,
    quantity: u64,
}

impl TryFrom<ValueRepr> for Value {
    type Error = ValueError;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        Value::from_parts(
            repr.lovelace,
            repr.assets
                .into_iter()
                .map(|entry| (AssetId::new(entry.policy_id, entry.asset_name), entry.quantity)),
        )
    }
}

impl From<Value> for ValueRepr {
    fn from(value: Value) -> Self {
        ValueRepr {
            lovelace: value.lovelace,
            assets: value
                .assets
                .into_iter()
                .map(|(asset, quantity)| AssetEntry {
                    policy_id: asset.policy_id,
                    asset_name: asset.asset_name,
                    quantity,
                })
                .collect(),
        }
    }
}

/// Reference to a transaction output
///
/// This is the identity of a UTXO: two UTXOs are the same entity exactly when
/// their references match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutputRef {
    /// Hash of the transaction that created the output
    #[serde(with = "hex::serde")]
    pub tx_id: Vec<u8>,

    /// Position of the output within that transaction
    pub index: u64,
}

impl OutputRef {
    /// Create a new output reference
    pub fn new(tx_id: impl Into<Vec<u8>>, index: u64) -> Self {
        Self {
            tx_id: tx_id.into(),
            index,
        }
    }
}

impl fmt::Display for OutputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", hex::encode(&self.tx_id), self.index)
    }
}

/// A transaction output: destination address and the value it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Raw address bytes
    #[serde(with = "hex::serde")]
    pub address: Vec<u8>,

    /// Value locked at the output
    pub value: Value,
}

/// Unspent transaction output resolved to the output it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInput {
    /// Reference to the output being spent
    pub output_ref: OutputRef,

    /// The referenced output
    pub output: TxOutput,
}

impl ResolvedInput {
    /// Create a new resolved input
    ///
    /// # Arguments
    /// * `output_ref` - Reference to the unspent output
    /// * `address` - Raw address bytes of the output
    /// * `value` - Value held by the output
    pub fn new(output_ref: OutputRef, address: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            output_ref,
            output: TxOutput {
                address: address.into(),
                value,
            },
        }
    }

    /// Value held by this UTXO
    pub fn value(&self) -> &Value {
        &self.output.value
    }

    /// Lovelace held by this UTXO
    pub fn lovelace(&self) -> u64 {
        self.output.value.lovelace()
    }

    /// Get a unique identifier for this UTXO
    pub fn id(&self) -> String {
        self.output_ref.to_string()
    }
}
