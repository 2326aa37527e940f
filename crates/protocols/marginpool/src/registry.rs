//! Pool parameter key registry
//!
//! One variant per readable pool parameter. The ordered slices below are
//! the positional contract between the call batcher and the result
//! decoder: calls are appended in slice order and results are read back
//! by the same indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit class of a decoded parameter, drives human-readable conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Scaled by the asset's token scalar (10^decimals)
    AssetAmount,
    /// Fixed-point rate scaled by `RATE_SCALE`
    Rate,
    /// Plain integer, no scaling
    Timestamp,
}

/// A readable margin pool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolParam {
    SupplyCap,
    MaxUtilizationRate,
    ProtocolSpread,
    MinBorrow,
    InterestRate,
    TotalSupply,
    SupplyShares,
    TotalBorrow,
    BorrowShares,
    LastUpdateTimestamp,
    UserSupplyShares,
    UserSupplyAmount,
}

/// Base parameters readable without any credential, in call order
pub const BASE_PARAMS: [PoolParam; 10] = [
    PoolParam::SupplyCap,
    PoolParam::MaxUtilizationRate,
    PoolParam::ProtocolSpread,
    PoolParam::MinBorrow,
    PoolParam::InterestRate,
    PoolParam::TotalSupply,
    PoolParam::SupplyShares,
    PoolParam::TotalBorrow,
    PoolParam::BorrowShares,
    PoolParam::LastUpdateTimestamp,
];

/// Credential-gated parameters, in call order
pub const SUPPLIER_PARAMS: [PoolParam; 2] =
    [PoolParam::UserSupplyShares, PoolParam::UserSupplyAmount];

impl PoolParam {
    /// Total number of parameters, bound for `index()`
    pub const COUNT: usize = 12;

    /// On-chain accessor function name
    pub fn move_function(&self) -> &'static str {
        match self {
            Self::SupplyCap => "supply_cap",
            Self::MaxUtilizationRate => "max_utilization_rate",
            Self::ProtocolSpread => "protocol_spread",
            Self::MinBorrow => "min_borrow",
            Self::InterestRate => "interest_rate",
            Self::TotalSupply => "total_supply",
            Self::SupplyShares => "supply_shares",
            Self::TotalBorrow => "total_borrow",
            Self::BorrowShares => "borrow_shares",
            Self::LastUpdateTimestamp => "last_update_timestamp",
            Self::UserSupplyShares => "user_supply_shares",
            Self::UserSupplyAmount => "user_supply_amount",
        }
    }

    /// Whether reading this parameter requires a supplier credential
    pub fn requires_credential(&self) -> bool {
        matches!(self, Self::UserSupplyShares | Self::UserSupplyAmount)
    }

    /// Unit class used when converting the raw value for display
    pub fn unit(&self) -> Unit {
        match self {
            Self::InterestRate | Self::MaxUtilizationRate | Self::ProtocolSpread => Unit::Rate,
            Self::LastUpdateTimestamp => Unit::Timestamp,
            Self::SupplyCap
            | Self::MinBorrow
            | Self::TotalSupply
            | Self::SupplyShares
            | Self::TotalBorrow
            | Self::BorrowShares
            | Self::UserSupplyShares
            | Self::UserSupplyAmount => Unit::AssetAmount,
        }
    }

    /// Dense index for fixed-size per-parameter storage
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PoolParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.move_function())
    }
}
