//! bastion-gateway: Chain read abstractions for Bastion
//!
//! This crate defines the seam between protocol logic and whatever RPC
//! client actually talks to the chain. Protocol crates compose batches of
//! read calls and interpret their results; a `ReadGateway` implementation
//! owns the wire format, endpoint selection, timeouts, and retries.

pub mod batch;

use async_trait::async_trait;
use bastion_core::{Address, GatewayError, ObjectId};

pub use batch::{CallArg, ReadBatch, ReadCall};

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Return values of a simulated batch, positionally aligned with its calls.
///
/// `None` at a position means the call produced no return value. That is
/// absence, not failure; failures surface as `GatewayError` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationResults {
    return_values: Vec<Option<Vec<u8>>>,
}

impl SimulationResults {
    pub fn new(return_values: Vec<Option<Vec<u8>>>) -> Self {
        Self { return_values }
    }

    /// Return bytes for the call at `index`, if that call produced any
    pub fn value_at(&self, index: usize) -> Option<&[u8]> {
        self.return_values.get(index).and_then(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.return_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.return_values.is_empty()
    }
}

/// Read-side gateway to the chain.
///
/// Two rules bind every implementation:
/// - `simulate_reads` executes the batch in a dry-run context and MUST
///   report results in call order, one slot per call. Nothing is ever
///   submitted on-chain.
/// - Errors surface verbatim as `GatewayError`. The toolkit neither
///   retries nor reinterprets them.
#[async_trait]
pub trait ReadGateway: Send + Sync {
    /// Execute the batch in a dry-run context, returning per-call values
    async fn simulate_reads(
        &self,
        sender: &Address,
        batch: &ReadBatch,
    ) -> Result<SimulationResults>;

    /// Fetch an object's decoded field tree as JSON.
    ///
    /// Numeric leaf fields may arrive either as JSON numbers or as decimal
    /// strings; chain encoders commonly widen 64/128-bit integers to
    /// strings, and consumers must accept both forms.
    async fn get_object(&self, object_id: &ObjectId) -> Result<serde_json::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_present_and_absent() {
        let results = SimulationResults::new(vec![
            Some(vec![1, 2, 3]),
            None,
            Some(vec![]),
        ]);

        assert_eq!(results.value_at(0), Some(&[1u8, 2, 3][..]));
        assert_eq!(results.value_at(1), None);
        // An empty return value is still a value
        assert_eq!(results.value_at(2), Some(&[][..]));
    }

    #[test]
    fn test_value_at_out_of_range() {
        let results = SimulationResults::new(vec![Some(vec![0])]);
        assert_eq!(results.value_at(5), None);
    }

    #[test]
    fn test_len_counts_slots_not_values() {
        let results = SimulationResults::new(vec![None, None, Some(vec![7])]);
        assert_eq!(results.len(), 3);
        assert!(!results.is_empty());
    }
}
