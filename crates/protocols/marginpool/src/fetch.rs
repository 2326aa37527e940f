//! Pool parameter fetching
//!
//! Composes the parameter read batch, runs it through the gateway
//! simulation alongside the pool object fetch, and assembles the decoded
//! bundle. The assembly step is synchronous and public so callers who
//! compose their own batches can reuse it without going through the
//! gateway plumbing here.

use crate::calculator::InterestCurve;
use crate::calls::build_parameter_batch;
use crate::config::{AssetMetadata, PoolTarget};
use crate::decode::{decode_results, format_parameter, RawPoolParams};
use crate::registry::PoolParam;
use crate::state::{MarginPoolObject, PoolParameters};
use bastion_core::{Address, CoinType, ObjectId, Result};
use bastion_gateway::ReadGateway;
use tracing::{debug, warn};

/// Fetch and decode the full parameter bundle for one pool.
///
/// One simulation round trip covers the readable parameters and one
/// object fetch covers the curve configuration; the two run concurrently.
/// Passing a supplier cap additionally reads the caller's own position;
/// without one the user fields stay zero.
pub async fn fetch_pool_parameters<G>(
    gateway: &G,
    target: &PoolTarget,
    sender: &Address,
    supplier_cap: Option<&ObjectId>,
) -> Result<PoolParameters>
where
    G: ReadGateway + ?Sized,
{
    let (batch, appended) = build_parameter_batch(target, supplier_cap)?;
    debug!(
        pool = %target.pool_id,
        asset = %target.asset.symbol,
        calls = batch.len(),
        "fetching margin pool parameters"
    );

    // Independent round trips
    let (sim, object) = tokio::join!(
        gateway.simulate_reads(sender, &batch),
        gateway.get_object(&target.pool_id),
    );

    let raw = decode_results(&sim?, &appended)?;
    let pool = MarginPoolObject::from_json(&target.pool_id, object?)?;

    Ok(assemble_parameters(&raw, &pool, &target.asset))
}

/// Assemble the total parameter bundle from decoded raw values and the
/// fetched pool object.
///
/// Total over the registry: parameters that produced no value are zero.
/// The pool's decoded interest rate feeds the supply-APR derivation
/// directly instead of being recomputed from the curve.
pub fn assemble_parameters(
    raw: &RawPoolParams,
    pool: &MarginPoolObject,
    asset: &AssetMetadata,
) -> PoolParameters {
    let human = |param: PoolParam| format_parameter(param, raw.raw_or_zero(param), asset);

    let curve = InterestCurve::derive(
        &pool.config.interest_config,
        &pool.config.margin_pool_config,
        &pool.state,
        raw.raw_or_zero(PoolParam::InterestRate),
    );

    PoolParameters {
        asset: asset.clone(),
        supply_cap: human(PoolParam::SupplyCap),
        max_utilization_rate: human(PoolParam::MaxUtilizationRate),
        protocol_spread: human(PoolParam::ProtocolSpread),
        min_borrow: human(PoolParam::MinBorrow),
        interest_rate: human(PoolParam::InterestRate),
        total_supply: human(PoolParam::TotalSupply),
        supply_shares: human(PoolParam::SupplyShares),
        total_borrow: human(PoolParam::TotalBorrow),
        borrow_shares: human(PoolParam::BorrowShares),
        last_update_timestamp: raw.raw_or_zero(PoolParam::LastUpdateTimestamp),
        user_supply_shares: human(PoolParam::UserSupplyShares),
        user_supply_amount: human(PoolParam::UserSupplyAmount),
        curve,
    }
}

/// Fetch base parameter bundles for many pools, skipping failures.
///
/// Per-pool errors are logged and reported in that pool's slot; one bad
/// pool never takes the whole snapshot down.
pub async fn fetch_pool_snapshot<G>(
    gateway: &G,
    targets: &[PoolTarget],
    sender: &Address,
) -> Vec<(CoinType, Result<PoolParameters>)>
where
    G: ReadGateway + ?Sized,
{
    let mut snapshot = Vec::with_capacity(targets.len());
    for target in targets {
        let result = fetch_pool_parameters(gateway, target, sender, None).await;
        if let Err(e) = &result {
            warn!(
                pool = %target.pool_id,
                asset = %target.asset.symbol,
                error = %e,
                "skipping pool in snapshot"
            );
        }
        snapshot.push((target.asset.coin_type.clone(), result));
    }
    snapshot
}
