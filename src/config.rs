//! Network configuration for the zkSync wallet

use crate::constants::{
    DEFAULT_ERGS_PER_PUBDATA_LIMIT, ZKSYNC_MAINNET_CHAIN_ID, ZKSYNC_TESTNET_CHAIN_ID,
};
use alloy::primitives::U256;
use eyre::{Context, Result};

/// Wallet configuration: L2 chain identity, base-chain endpoint and fee limits
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// zkSync chain ID used in transaction digests. Transfers fail with a
    /// configuration error while this is unset.
    pub l2_chain_id: Option<u64>,
    /// Base chain (L1) RPC endpoint read by `Wallet::connect_eth_provider`
    pub l1_rpc_url: Option<String>,
    /// Ergs the account is willing to pay per byte of published data
    pub ergs_per_pubdata_limit: U256,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            l2_chain_id: None,
            l1_rpc_url: None,
            ergs_per_pubdata_limit: U256::from(DEFAULT_ERGS_PER_PUBDATA_LIMIT),
        }
    }
}

impl NetworkConfig {
    /// Create an empty configuration (no chain ID, no L1 endpoint)
    pub fn new() -> Self {
        Self::default()
    }

    /// zkSync Era mainnet configuration
    pub fn mainnet() -> Self {
        Self::new().with_chain_id(ZKSYNC_MAINNET_CHAIN_ID)
    }

    /// zkSync Era testnet configuration
    pub fn testnet() -> Self {
        Self::new().with_chain_id(ZKSYNC_TESTNET_CHAIN_ID)
    }

    /// Build a configuration from `ZKSYNC_CHAIN_ID` and `ETH_RPC_URL`.
    ///
    /// Both variables are optional; a present but unparsable chain ID is an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(chain_id) = std::env::var("ZKSYNC_CHAIN_ID") {
            let chain_id = chain_id
                .trim()
                .parse()
                .with_context(|| format!("Invalid ZKSYNC_CHAIN_ID: {chain_id}"))?;
            config.l2_chain_id = Some(chain_id);
        }

        if let Ok(url) = std::env::var("ETH_RPC_URL") {
            config.l1_rpc_url = Some(url);
        }

        Ok(config)
    }

    /// Set the L2 chain ID
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.l2_chain_id = Some(chain_id);
        self
    }

    /// Set the base chain RPC endpoint
    pub fn with_l1_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.l1_rpc_url = Some(rpc_url.into());
        self
    }

    /// Override the per-pubdata ergs limit
    pub fn with_ergs_per_pubdata_limit(mut self, limit: U256) -> Self {
        self.ergs_per_pubdata_limit = limit;
        self
    }
}
