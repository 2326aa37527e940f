//! Positional result decoding and unit conversion
//!
//! Walks the slots a parameter read occupies in simulation results and
//! decodes each present return value as a little-endian u64, exactly.
//! An absent slot leaves its parameter unset; a payload of the wrong
//! width is an error, since dropping it silently would mask ABI drift.

use crate::calculator::normalize;
use crate::calls::AppendedCalls;
use crate::config::AssetMetadata;
use crate::registry::{PoolParam, Unit};
use bastion_core::ProtocolError;
use bastion_gateway::SimulationResults;

/// Raw decoded parameter values, indexed by the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPoolParams {
    values: [Option<u64>; PoolParam::COUNT],
}

impl RawPoolParams {
    pub fn get(&self, param: PoolParam) -> Option<u64> {
        self.values[param.index()]
    }

    /// Raw value, zero when the parameter is absent or was never requested
    pub fn raw_or_zero(&self, param: PoolParam) -> u64 {
        self.get(param).unwrap_or(0)
    }

    pub fn set(&mut self, param: PoolParam, value: u64) {
        self.values[param.index()] = Some(value);
    }

    /// Number of parameters holding a decoded value
    pub fn decoded_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Decode the slots occupied by `appended` out of simulation results.
///
/// Slot `first_index + i` belongs to `params()[i]`; that positional
/// binding is the whole contract between batcher and decoder. Slots
/// outside the occupied range are never touched, so caller-added calls
/// in the same batch cannot leak into the decoded values.
pub fn decode_results(
    results: &SimulationResults,
    appended: &AppendedCalls,
) -> Result<RawPoolParams, ProtocolError> {
    let mut raw = RawPoolParams::default();

    for (offset, param) in appended.params().iter().enumerate() {
        let slot = appended.first_index() + offset;
        if let Some(bytes) = results.value_at(slot) {
            raw.set(*param, decode_u64_le(*param, bytes)?);
        }
        // An absent slot simply omits the parameter
    }

    Ok(raw)
}

fn decode_u64_le(param: PoolParam, bytes: &[u8]) -> Result<u64, ProtocolError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| ProtocolError::ReturnDecode {
        param: param.move_function(),
        message: format!("expected 8 bytes, got {}", bytes.len()),
    })?;
    Ok(u64::from_le_bytes(arr))
}

/// Convert a raw parameter value into its human-readable number.
///
/// Rates divide by `RATE_SCALE`, amounts by the asset's token scalar,
/// and timestamps pass through as plain integers.
pub fn format_parameter(param: PoolParam, raw: u64, asset: &AssetMetadata) -> f64 {
    match param.unit() {
        Unit::Rate => normalize(raw),
        Unit::AssetAmount => raw as f64 / asset.scalar as f64,
        Unit::Timestamp => raw as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calls::{append_parameter_calls, build_parameter_batch};
    use crate::config::PoolTarget;
    use crate::registry::BASE_PARAMS;
    use bastion_core::{CoinType, ObjectId};
    use bastion_gateway::ReadBatch;

    fn sample_target() -> PoolTarget {
        PoolTarget {
            package: ObjectId::new("0xpkg"),
            pool_id: ObjectId::new("0xpool"),
            asset: AssetMetadata::new("SUI", CoinType::new("0x2::sui::SUI"), 9),
        }
    }

    fn le_bytes(value: u64) -> Option<Vec<u8>> {
        Some(value.to_le_bytes().to_vec())
    }

    #[test]
    fn test_decode_binds_values_positionally() {
        let (_batch, appended) = build_parameter_batch(&sample_target(), None).unwrap();

        // Give slot i the value 1000 + i
        let slots: Vec<Option<Vec<u8>>> =
            (0..BASE_PARAMS.len() as u64).map(|i| le_bytes(1000 + i)).collect();
        let results = SimulationResults::new(slots);

        let raw = decode_results(&results, &appended).unwrap();
        assert_eq!(raw.decoded_count(), BASE_PARAMS.len());
        for (i, param) in BASE_PARAMS.iter().enumerate() {
            assert_eq!(raw.get(*param), Some(1000 + i as u64));
        }
    }

    #[test]
    fn test_decode_skips_absent_slots() {
        let (_batch, appended) = build_parameter_batch(&sample_target(), None).unwrap();

        let mut slots: Vec<Option<Vec<u8>>> =
            (0..BASE_PARAMS.len() as u64).map(|i| le_bytes(i)).collect();
        slots[2] = None; // protocol_spread produced no value

        let raw = decode_results(&SimulationResults::new(slots), &appended).unwrap();
        assert_eq!(raw.decoded_count(), BASE_PARAMS.len() - 1);
        assert_eq!(raw.get(PoolParam::ProtocolSpread), None);
        assert_eq!(raw.raw_or_zero(PoolParam::ProtocolSpread), 0);
    }

    #[test]
    fn test_decode_preserves_full_precision() {
        let (_batch, appended) = build_parameter_batch(&sample_target(), None).unwrap();

        let big = u64::MAX - 3;
        let mut slots = vec![None; BASE_PARAMS.len()];
        slots[0] = le_bytes(big);

        let raw = decode_results(&SimulationResults::new(slots), &appended).unwrap();
        assert_eq!(raw.get(PoolParam::SupplyCap), Some(big));
    }

    #[test]
    fn test_decode_rejects_wrong_width() {
        let (_batch, appended) = build_parameter_batch(&sample_target(), None).unwrap();

        let mut slots = vec![None; BASE_PARAMS.len()];
        slots[3] = Some(vec![1, 2, 3]); // min_borrow came back 3 bytes wide

        let err = decode_results(&SimulationResults::new(slots), &appended).unwrap_err();
        assert_eq!(err.error_code(), "return_decode");
        let text = err.to_string();
        assert!(text.contains("min_borrow"));
        assert!(text.contains("3"));
    }

    #[test]
    fn test_decode_respects_batch_offset() {
        let target = sample_target();
        let mut batch = ReadBatch::new();

        // Caller occupies slots 0..2 with unrelated calls
        for _ in 0..2 {
            batch.push(bastion_gateway::ReadCall {
                package: ObjectId::new("0xother"),
                module: "oracle".to_string(),
                function: "price".to_string(),
                type_args: vec![],
                args: vec![],
            });
        }
        let appended =
            append_parameter_calls(&mut batch, &target, &[PoolParam::TotalSupply], None).unwrap();

        // Caller slots hold garbage widths; ours holds a real value
        let results = SimulationResults::new(vec![
            Some(vec![9]),
            None,
            le_bytes(1_500_000_000),
        ]);

        let raw = decode_results(&results, &appended).unwrap();
        assert_eq!(raw.get(PoolParam::TotalSupply), Some(1_500_000_000));
        assert_eq!(raw.decoded_count(), 1);
    }

    #[test]
    fn test_format_rate_and_amount_and_timestamp() {
        let asset = AssetMetadata::new("SUI", CoinType::new("0x2::sui::SUI"), 9);

        // Rate: RATE_SCALE == 1.0
        assert_eq!(
            format_parameter(PoolParam::InterestRate, 1_000_000_000, &asset),
            1.0
        );
        // Amount: 1.5 units of a 9-decimal asset
        assert_eq!(
            format_parameter(PoolParam::TotalSupply, 1_500_000_000, &asset),
            1.5
        );
        // Timestamp: plain integer
        assert_eq!(
            format_parameter(PoolParam::LastUpdateTimestamp, 1_700_000_000_000, &asset),
            1_700_000_000_000.0
        );
    }

    #[test]
    fn test_format_uses_asset_scalar() {
        let usdc = AssetMetadata::new("USDC", CoinType::new("0xa::usdc::USDC"), 6);
        assert_eq!(
            format_parameter(PoolParam::MinBorrow, 2_500_000, &usdc),
            2.5
        );
    }
}
