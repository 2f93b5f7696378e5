//! Error types for the zkSync wallet
//!
//! Collaborators (providers, signers) report failures as `eyre` reports. The
//! wallet surface wraps them in [`WalletError`] so callers can tell which
//! stage failed and for which operation.

use alloy::primitives::Address;
use thiserror::Error;

pub use eyre::{eyre, Context, Report};

/// Errors returned by the wallet, the call plan compiler and the pipeline
#[derive(Error, Debug)]
pub enum WalletError {
    /// Missing chain identity, bad RPC URL or malformed setup input.
    /// Always detected before any network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport or RPC failure from the L2 provider or the base-chain client
    #[error("provider call `{operation}` failed")]
    Provider {
        operation: &'static str,
        #[source]
        source: Report,
    },

    /// The provider could not estimate the transaction
    #[error("failed to estimate gas")]
    Estimation {
        #[source]
        source: Report,
    },

    /// ABI encoding of a token call failed or the token descriptor is malformed
    #[error("failed to encode call: {0}")]
    Encoding(String),

    /// The signing capability itself failed
    #[error("failed to sign transaction digest")]
    Signing {
        #[source]
        source: Report,
    },

    /// A signature was requested for an address the signer does not own
    #[error("signer {signer} is not authorized to sign for {requested}")]
    UnauthorizedSigner { requested: Address, signer: Address },
}

impl WalletError {
    /// Wrap a collaborator failure with the RPC operation it came from
    pub fn provider(operation: &'static str, source: impl Into<Report>) -> Self {
        Self::Provider {
            operation,
            source: source.into(),
        }
    }
}

/// Result type for wallet operations
pub type Result<T, E = WalletError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_names_operation() {
        let err = WalletError::provider("zks_getBridgeContracts", eyre!("connection refused"));
        assert_eq!(
            err.to_string(),
            "provider call `zks_getBridgeContracts` failed"
        );

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_unauthorized_message() {
        let err = WalletError::UnauthorizedSigner {
            requested: Address::repeat_byte(0x22),
            signer: Address::repeat_byte(0x11),
        };
        let msg = err.to_string();
        assert!(msg.contains("0x1111111111111111111111111111111111111111"));
        assert!(msg.contains("0x2222222222222222222222222222222222222222"));
    }
}
