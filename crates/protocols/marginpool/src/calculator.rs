//! Margin Pool Calculator
//!
//! Pure math for the kinked utilization interest model. No I/O - just
//! calculations over `RATE_SCALE`-scaled integers, with floats appearing
//! only in `normalize` at the output boundary.
//!
//! # Units
//! - Scaled rate: `RATE_SCALE` == 1.0 (nine fractional digits)
//! - Utilization: same scale, `RATE_SCALE` == fully borrowed
//! - Every division is floor division

use crate::constants::RATE_SCALE;
use crate::state::{InterestConfig, MarginPoolConfig, PoolTotals};
use serde::{Deserialize, Serialize};

/// Multiply two scaled values: `a * b / RATE_SCALE`
///
/// The double-width product cannot overflow for any pair of u64 inputs;
/// a quotient past `u64::MAX` saturates instead of wrapping.
pub fn scaled_mul(a: u64, b: u64) -> u64 {
    let scaled = (a as u128 * b as u128) / RATE_SCALE as u128;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Convert a scaled value to a float at the output boundary
pub fn normalize(value: u64) -> f64 {
    value as f64 / RATE_SCALE as f64
}

/// Current utilization as a scaled rate: `borrow * RATE_SCALE / supply`
///
/// An empty pool has zero utilization, never an error. A borrow so far
/// past the supply that the scaled ratio leaves the u64 range saturates
/// at `u64::MAX` instead of wrapping back down.
pub fn pool_utilization(total_borrow: u128, total_supply: u128) -> u64 {
    if total_supply == 0 {
        return 0;
    }
    let scaled = total_borrow.saturating_mul(RATE_SCALE as u128) / total_supply;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Borrow APR (scaled) at a given scaled utilization.
///
/// Piecewise-linear: up to the kink the base slope applies; past it the
/// excess slope takes over for the portion above the kink. Both branches
/// agree exactly at the kink, and extreme configurations saturate at
/// `u64::MAX` rather than wrapping.
pub fn borrow_apr_at(interest: &InterestConfig, utilization: u64) -> u64 {
    if utilization < interest.optimal_utilization {
        interest
            .base_rate
            .saturating_add(scaled_mul(utilization, interest.base_slope))
    } else {
        interest
            .base_rate
            .saturating_add(scaled_mul(interest.optimal_utilization, interest.base_slope))
            .saturating_add(scaled_mul(
                utilization - interest.optimal_utilization,
                interest.excess_slope,
            ))
    }
}

/// Supply APR (scaled): the borrow interest passed through to suppliers
/// after the protocol takes its spread.
/// supply = borrow_apr * utilization * (1 - protocol_spread)
pub fn supply_apr_scaled(borrow_apr: u64, utilization: u64, protocol_spread: u64) -> u64 {
    let retained = RATE_SCALE.saturating_sub(protocol_spread);
    scaled_mul(scaled_mul(borrow_apr, utilization), retained)
}

/// Derived interest-curve readings for a pool, in human units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestCurve {
    /// Curve intercept: borrow APR at zero utilization
    pub base_borrow_apr: f64,
    /// Utilization where the excess slope takes over
    pub high_kink: f64,
    /// Borrow APR exactly at the kink
    pub borrow_apr_on_high_kink: f64,
    /// Borrow APR at the configured utilization ceiling (not at 100%)
    pub max_borrow_apr: f64,
    /// Current utilization, borrow / supply
    pub utilization_rate: f64,
    /// Current supply APR after the protocol spread
    pub supply_apr: f64,
}

impl InterestCurve {
    /// Derive the curve readings from raw scaled config and pool totals.
    ///
    /// `current_borrow_apr` is the pool's own decoded interest-rate
    /// parameter; it feeds the supply APR directly rather than being
    /// recomputed from the curve.
    pub fn derive(
        interest: &InterestConfig,
        margin: &MarginPoolConfig,
        totals: &PoolTotals,
        current_borrow_apr: u64,
    ) -> Self {
        let utilization = pool_utilization(totals.total_borrow, totals.total_supply);

        Self {
            base_borrow_apr: normalize(interest.base_rate),
            high_kink: normalize(interest.optimal_utilization),
            borrow_apr_on_high_kink: normalize(borrow_apr_at(
                interest,
                interest.optimal_utilization,
            )),
            max_borrow_apr: normalize(borrow_apr_at(interest, margin.max_utilization_rate)),
            utilization_rate: normalize(utilization),
            supply_apr: normalize(supply_apr_scaled(
                current_borrow_apr,
                utilization,
                margin.protocol_spread,
            )),
        }
    }
}
