//! Read-call batching for pool parameters
//!
//! Appends one read call per requested parameter, in registry order, and
//! records the index range occupied so the decoder can find the results
//! even in a batch the caller has extended with unrelated calls.

use crate::config::PoolTarget;
use crate::constants::contract::MARGIN_POOL_MODULE;
use crate::registry::{PoolParam, BASE_PARAMS, SUPPLIER_PARAMS};
use bastion_core::{ObjectId, ProtocolError};
use bastion_gateway::{CallArg, ReadBatch, ReadCall};

/// Index range and key order a parameter read occupies inside a batch
#[derive(Debug, Clone)]
pub struct AppendedCalls {
    first_index: usize,
    params: Vec<PoolParam>,
}

impl AppendedCalls {
    /// Index of the first occupied result slot
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// Requested parameters, in call order
    pub fn params(&self) -> &[PoolParam] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Append one read call per parameter to `batch`, in the given order.
///
/// Each call targets the pool's package and module, carries the asset's
/// coin type as its type argument and the pool object as its first
/// argument; credential-gated parameters additionally pass the supplier
/// cap. Requesting a credential-gated parameter without a supplier cap
/// fails fast and leaves the batch untouched, so the configuration error
/// surfaces before any network interaction.
pub fn append_parameter_calls(
    batch: &mut ReadBatch,
    target: &PoolTarget,
    params: &[PoolParam],
    supplier_cap: Option<&ObjectId>,
) -> Result<AppendedCalls, ProtocolError> {
    if supplier_cap.is_none() {
        if let Some(param) = params.iter().find(|p| p.requires_credential()) {
            return Err(ProtocolError::MissingCredential {
                param: param.move_function(),
            });
        }
    }

    let first_index = batch.len();
    for param in params {
        let mut args = vec![CallArg::Object(target.pool_id.clone())];
        if param.requires_credential() {
            // Checked above
            if let Some(cap) = supplier_cap {
                args.push(CallArg::Object(cap.clone()));
            }
        }

        batch.push(ReadCall {
            package: target.package.clone(),
            module: MARGIN_POOL_MODULE.to_string(),
            function: param.move_function().to_string(),
            type_args: vec![target.asset.coin_type.clone()],
            args,
        });
    }

    Ok(AppendedCalls {
        first_index,
        params: params.to_vec(),
    })
}

/// Build the standard full batch: every base parameter, plus the
/// credential-gated ones when a supplier cap is given.
pub fn build_parameter_batch(
    target: &PoolTarget,
    supplier_cap: Option<&ObjectId>,
) -> Result<(ReadBatch, AppendedCalls), ProtocolError> {
    let mut params: Vec<PoolParam> = BASE_PARAMS.to_vec();
    if supplier_cap.is_some() {
        params.extend(SUPPLIER_PARAMS);
    }

    let mut batch = ReadBatch::new();
    let appended = append_parameter_calls(&mut batch, target, &params, supplier_cap)?;
    Ok((batch, appended))
}
