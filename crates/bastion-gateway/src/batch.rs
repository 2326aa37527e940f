//! Read-call batch model shared between protocol code and callers.
//!
//! A `ReadBatch` is an ordered, append-only list of read-only contract
//! calls. Order is load-bearing: simulation results come back positionally,
//! so whoever appends calls must remember the indices they occupy. The
//! batch is a shared composition surface, and callers may append unrelated
//! calls of their own before submitting it.

use bastion_core::{CoinType, ObjectId};
use serde::{Deserialize, Serialize};

/// Argument to a read call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// Reference to an on-chain object
    Object(ObjectId),
    /// Raw serialized value
    Pure(Vec<u8>),
}

/// A single read-only contract call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    pub type_args: Vec<CoinType>,
    pub args: Vec<CallArg>,
}

/// Ordered, append-only batch of read calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadBatch {
    calls: Vec<ReadCall>,
}

impl ReadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call, returning the index its result will occupy
    pub fn push(&mut self, call: ReadCall) -> usize {
        self.calls.push(call);
        self.calls.len() - 1
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn calls(&self) -> &[ReadCall] {
        &self.calls
    }
}
