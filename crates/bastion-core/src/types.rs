//! Core type definitions for Bastion

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Object ID (32 bytes, hex-encoded, optional 0x prefix)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse and validate an object id (64 hex chars, optional 0x prefix)
    pub fn parse(s: &str) -> Result<Self, Error> {
        validate_hex32("object id", s)?;
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Account address (32 bytes, hex-encoded, optional 0x prefix)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse and validate an address (64 hex chars, optional 0x prefix)
    pub fn parse(s: &str) -> Result<Self, Error> {
        validate_hex32("address", s)?;
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fully-qualified coin type tag (`<package>::<module>::<Name>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinType(pub String);

impl CoinType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse and validate a coin type tag (three non-empty `::` segments)
    pub fn parse(s: &str) -> Result<Self, Error> {
        let segments: Vec<&str> = s.split("::").collect();
        if segments.len() != 3 || segments.iter().any(|seg| seg.is_empty()) {
            return Err(Error::InvalidId {
                value: s.to_string(),
                reason: "expected <package>::<module>::<Name>".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CoinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Millisecond unix timestamp as reported by the chain clock
pub type TimestampMs = u64;

fn validate_hex32(kind: &str, s: &str) -> Result<(), Error> {
    let raw = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(raw).map_err(|e| Error::InvalidId {
        value: s.to_string(),
        reason: format!("{kind} is not hex: {e}"),
    })?;
    if bytes.len() != 32 {
        return Err(Error::InvalidId {
            value: s.to_string(),
            reason: format!("{kind} must be 32 bytes, got {}", bytes.len()),
        });
    }
    Ok(())
}
