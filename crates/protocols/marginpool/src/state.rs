//! Margin pool state types
//!
//! Raw on-chain structures mirrored from the pool object, and the fully
//! decoded parameter bundle assembled from a simulation round trip. Raw
//! fields are exact scaled integers; the bundle holds human-readable
//! numbers.

use crate::calculator::InterestCurve;
use crate::config::AssetMetadata;
use bastion_core::{ObjectId, ProtocolError, TimestampMs};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Interest-curve configuration, raw scaled integers
/// (object path `config.interest_config`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestConfig {
    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub base_rate: u64,

    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub base_slope: u64,

    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub excess_slope: u64,

    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub optimal_utilization: u64,
}

/// Pool risk limits, raw scaled integers
/// (object path `config.margin_pool_config`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginPoolConfig {
    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub max_utilization_rate: u64,

    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub min_borrow: u64,

    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub protocol_spread: u64,

    #[serde(deserialize_with = "u64_from_int_or_string")]
    pub supply_cap: u64,
}

/// Pool totals (object path `state`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTotals {
    #[serde(deserialize_with = "u128_from_int_or_string")]
    pub total_supply: u128,

    #[serde(deserialize_with = "u128_from_int_or_string")]
    pub total_borrow: u128,
}

/// Nested `config` field of the pool object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolObjectConfig {
    pub interest_config: InterestConfig,
    pub margin_pool_config: MarginPoolConfig,
}

/// The margin pool object as fetched from the chain.
///
/// Extra fields in the object (id, version, and so on) are ignored; only
/// the paths the interest model needs are mirrored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginPoolObject {
    pub config: PoolObjectConfig,
    pub state: PoolTotals,
}

impl MarginPoolObject {
    /// Parse the pool object from its gateway JSON field tree.
    ///
    /// Any missing or unparseable field is fatal for the whole request.
    pub fn from_json(
        object_id: &ObjectId,
        value: serde_json::Value,
    ) -> Result<Self, ProtocolError> {
        serde_json::from_value(value).map_err(|e| ProtocolError::MalformedPoolObject {
            object_id: object_id.to_string(),
            message: e.to_string(),
        })
    }
}

/// Fully decoded margin pool parameter bundle.
///
/// Total over the parameter registry: parameters whose reads produced no
/// value are zero, and the user fields stay zero when no credential was
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolParameters {
    /// Asset the pool lends out
    pub asset: AssetMetadata,

    /// Hard cap on total supplied assets, human units
    pub supply_cap: f64,

    /// Utilization ceiling, fraction of 1.0
    pub max_utilization_rate: f64,

    /// Protocol's cut of borrow interest, fraction of 1.0
    pub protocol_spread: f64,

    /// Smallest allowed borrow, human units
    pub min_borrow: f64,

    /// Current borrow APR, fraction of 1.0
    pub interest_rate: f64,

    /// Total supplied assets, human units
    pub total_supply: f64,

    /// Outstanding supply shares, human units
    pub supply_shares: f64,

    /// Total borrowed assets, human units
    pub total_borrow: f64,

    /// Outstanding borrow shares, human units
    pub borrow_shares: f64,

    /// Last interest accrual, chain clock milliseconds
    pub last_update_timestamp: TimestampMs,

    /// Caller's supply shares (zero without a credential)
    pub user_supply_shares: f64,

    /// Caller's withdrawable amount (zero without a credential)
    pub user_supply_amount: f64,

    /// Derived interest-curve readings
    pub curve: InterestCurve,
}

impl PoolParameters {
    /// Assets currently available to borrow, human units
    pub fn available_liquidity(&self) -> f64 {
        (self.total_supply - self.total_borrow).max(0.0)
    }

    /// Headroom left under the supply cap, human units
    pub fn remaining_supply_capacity(&self) -> f64 {
        (self.supply_cap - self.total_supply).max(0.0)
    }
}

// Chain encoders widen 64/128-bit integers to JSON strings; accept both
// forms when mirroring object fields.

fn u64_from_int_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an unsigned integer or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            v.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

fn u128_from_int_or_string<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    struct U128Visitor;

    impl<'de> Visitor<'de> for U128Visitor {
        type Value = u128;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an unsigned integer or a decimal string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
            Ok(v as u128)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
            v.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U128Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_object_json() -> serde_json::Value {
        json!({
            "id": "0xpool",
            "version": 42,
            "config": {
                "interest_config": {
                    "base_rate": "50000000",
                    "base_slope": "100000000",
                    "excess_slope": "2000000000",
                    "optimal_utilization": "800000000"
                },
                "margin_pool_config": {
                    "max_utilization_rate": "900000000",
                    "min_borrow": "1000000000",
                    "protocol_spread": "200000000",
                    "supply_cap": "5000000000000"
                }
            },
            "state": {
                "total_supply": "1000000000000",
                "total_borrow": "250000000000"
            }
        })
    }

    #[test]
    fn test_pool_object_from_json_with_string_numbers() {
        let id = ObjectId::new("0xpool");
        let pool = MarginPoolObject::from_json(&id, sample_object_json()).unwrap();

        assert_eq!(pool.config.interest_config.base_rate, 50_000_000);
        assert_eq!(pool.config.interest_config.optimal_utilization, 800_000_000);
        assert_eq!(pool.config.margin_pool_config.supply_cap, 5_000_000_000_000);
        assert_eq!(pool.state.total_supply, 1_000_000_000_000);
        assert_eq!(pool.state.total_borrow, 250_000_000_000);
    }

    #[test]
    fn test_pool_object_from_json_with_plain_numbers() {
        let id = ObjectId::new("0xpool");
        let pool = MarginPoolObject::from_json(
            &id,
            json!({
                "config": {
                    "interest_config": {
                        "base_rate": 1,
                        "base_slope": 2,
                        "excess_slope": 3,
                        "optimal_utilization": 4
                    },
                    "margin_pool_config": {
                        "max_utilization_rate": 5,
                        "min_borrow": 6,
                        "protocol_spread": 7,
                        "supply_cap": 8
                    }
                },
                "state": { "total_supply": 9, "total_borrow": 10 }
            }),
        )
        .unwrap();

        assert_eq!(pool.config.interest_config.base_rate, 1);
        assert_eq!(pool.state.total_borrow, 10);
    }

    #[test]
    fn test_pool_object_missing_field_is_fatal() {
        let id = ObjectId::new("0xbadpool");
        let mut value = sample_object_json();
        value["config"]["interest_config"]
            .as_object_mut()
            .unwrap()
            .remove("base_rate");

        let err = MarginPoolObject::from_json(&id, value).unwrap_err();
        assert_eq!(err.error_code(), "malformed_pool_object");
        let text = err.to_string();
        assert!(text.contains("0xbadpool"));
        assert!(text.contains("base_rate"));
    }

    #[test]
    fn test_pool_object_garbage_number_is_fatal() {
        let id = ObjectId::new("0xpool");
        let mut value = sample_object_json();
        value["state"]["total_supply"] = json!("not-a-number");

        assert!(MarginPoolObject::from_json(&id, value).is_err());
    }

    #[test]
    fn test_liquidity_accessors() {
        let pool = sample_parameters();
        assert_eq!(pool.available_liquidity(), 750.0);
        assert_eq!(pool.remaining_supply_capacity(), 4000.0);
    }

    #[test]
    fn test_liquidity_accessors_clamp_at_zero() {
        let mut pool = sample_parameters();
        pool.total_borrow = pool.total_supply + 5.0;
        assert_eq!(pool.available_liquidity(), 0.0);

        pool.total_supply = pool.supply_cap + 1.0;
        assert_eq!(pool.remaining_supply_capacity(), 0.0);
    }

    fn sample_parameters() -> PoolParameters {
        PoolParameters {
            asset: AssetMetadata::new(
                "SUI",
                bastion_core::CoinType::new("0x2::sui::SUI"),
                9,
            ),
            supply_cap: 5000.0,
            max_utilization_rate: 0.9,
            protocol_spread: 0.2,
            min_borrow: 1.0,
            interest_rate: 0.09,
            total_supply: 1000.0,
            supply_shares: 1000.0,
            total_borrow: 250.0,
            borrow_shares: 250.0,
            last_update_timestamp: 1_700_000_000_000,
            user_supply_shares: 0.0,
            user_supply_amount: 0.0,
            curve: InterestCurve {
                base_borrow_apr: 0.05,
                high_kink: 0.8,
                borrow_apr_on_high_kink: 0.13,
                max_borrow_apr: 0.33,
                utilization_rate: 0.25,
                supply_apr: 0.018,
            },
        }
    }
}
