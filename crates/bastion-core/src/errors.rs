//! Error types for Bastion

use thiserror::Error;

/// Core errors that can occur in Bastion
#[derive(Debug, Error)]
pub enum Error {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid identifier {value:?}: {reason}")]
    InvalidId { value: String, reason: String },
}

/// Transport failures surfaced by `ReadGateway` implementations.
///
/// These pass through the toolkit verbatim. Nothing here triggers a retry
/// or a reinterpretation; callers see exactly what the transport reported.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Gateway unreachable at {url}")]
    Unreachable { url: String },

    #[error("Gateway returned error: {message}")]
    Rpc { message: String },

    #[error("Object not found: {object_id}")]
    ObjectNotFound { object_id: String },

    #[error("Simulation rejected: {message}")]
    Simulation { message: String },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

/// Protocol-specific errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Parameter {param} requires a supplier credential, none was provided")]
    MissingCredential { param: &'static str },

    #[error("Failed to decode return value for {param}: {message}")]
    ReturnDecode { param: &'static str, message: String },

    #[error("Malformed pool object {object_id}: {message}")]
    MalformedPoolObject { object_id: String, message: String },
}

/// Result type alias for Bastion operations
pub type Result<T> = std::result::Result<T, Error>;

impl ProtocolError {
    /// Get a stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "missing_credential",
            Self::ReturnDecode { .. } => "return_decode",
            Self::MalformedPoolObject { .. } => "malformed_pool_object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_codes() {
        let err = ProtocolError::MissingCredential {
            param: "user_supply_shares",
        };
        assert_eq!(err.error_code(), "missing_credential");

        let err = ProtocolError::ReturnDecode {
            param: "supply_cap",
            message: "expected 8 bytes, got 3".into(),
        };
        assert_eq!(err.error_code(), "return_decode");
    }

    #[test]
    fn test_error_display_carries_context() {
        let err = Error::from(ProtocolError::MalformedPoolObject {
            object_id: "0xabc".into(),
            message: "missing field `base_rate`".into(),
        });
        let text = err.to_string();
        assert!(text.contains("0xabc"));
        assert!(text.contains("base_rate"));
    }

    #[test]
    fn test_gateway_error_passthrough() {
        let err = Error::from(GatewayError::Rpc {
            message: "backend said no".into(),
        });
        assert!(err.to_string().contains("backend said no"));
    }
}
