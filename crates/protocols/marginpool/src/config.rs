//! Client-side pool configuration
//!
//! Descriptors for where a pool lives and how its asset is scaled. They
//! are supplied by the caller; the toolkit owns no address tables.

use bastion_core::{CoinType, ObjectId};
use serde::{Deserialize, Serialize};

/// Static metadata for a pool's underlying asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Human symbol, e.g. "USDC"
    pub symbol: String,

    /// Fully-qualified coin type of the asset
    pub coin_type: CoinType,

    /// Number of decimal places
    pub decimals: u8,

    /// Integer scaling factor (10^decimals)
    pub scalar: u64,
}

impl AssetMetadata {
    /// Build metadata with the scalar derived from `decimals`
    pub fn new(symbol: impl Into<String>, coin_type: CoinType, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            coin_type,
            decimals,
            scalar: 10u64.pow(decimals as u32),
        }
    }
}

/// Where a margin pool lives on-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTarget {
    /// Package publishing the margin pool module
    pub package: ObjectId,

    /// The pool's shared object
    pub pool_id: ObjectId,

    /// Underlying asset metadata
    pub asset: AssetMetadata,
}
