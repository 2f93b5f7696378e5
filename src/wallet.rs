//! Wallet - main entry point for the SDK

use crate::config::NetworkConfig;
use crate::error::{Result, WalletError};
use crate::eth::EthProvider;
use crate::pipeline;
use crate::provider::ZkProvider;
use crate::signer::{TransactionAuthorizer, ZkSigner};
use crate::types::{BlockTag, BridgeContracts, CallPlan, Token, TransferRequest, ZkTransaction};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// zkSync account: a signer bound to a provider
///
/// Nonces are not reserved between calls. Two concurrent transfers that both
/// leave the nonce unset will read the same committed count and one of them
/// will be rejected by the network.
pub struct Wallet<S, P> {
    signer: Arc<S>,
    provider: P,
    config: NetworkConfig,
    bridge_contracts: OnceCell<BridgeContracts>,
}

impl<S: ZkSigner, P: ZkProvider> Wallet<S, P> {
    /// Create a new Wallet
    pub fn new(signer: S, provider: P, config: NetworkConfig) -> Self {
        Self::with_shared_signer(Arc::new(signer), provider, config)
    }

    /// Create a Wallet around a signer that is also used elsewhere
    pub fn with_shared_signer(signer: Arc<S>, provider: P, config: NetworkConfig) -> Self {
        Self {
            signer,
            provider,
            config,
            bridge_contracts: OnceCell::new(),
        }
    }

    /// Get the signer's address
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the network configuration
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ========== Account State ==========

    /// ETH balance at the committed block
    pub async fn balance(&self) -> Result<U256> {
        self.token_balance(&Token::Native).await
    }

    /// Balance of `token` at the committed block
    pub async fn token_balance(&self, token: &Token) -> Result<U256> {
        self.provider
            .get_balance(self.address(), BlockTag::Committed, token)
            .await
            .map_err(|source| WalletError::provider("eth_getBalance", source))
    }

    /// Transaction count at the committed block
    pub async fn nonce(&self) -> Result<U256> {
        self.provider
            .get_transaction_count(self.address(), BlockTag::Committed)
            .await
            .map_err(|source| WalletError::provider("eth_getTransactionCount", source))
    }

    // ========== Transfers ==========

    /// Transfer ETH or a token
    ///
    /// # Arguments
    ///
    /// * `request` - Recipient, amount and optional token, fee token and nonce
    ///
    /// # Returns
    ///
    /// Hash of the submitted transaction
    pub async fn transfer(&self, request: TransferRequest) -> Result<TxHash> {
        let chain_id = self.config.l2_chain_id.ok_or_else(|| {
            WalletError::Configuration("zkSync chain ID is not configured".to_string())
        })?;

        let plan = CallPlan::compile(&request)?;

        let nonce = match request.nonce {
            Some(nonce) => nonce,
            None => self.nonce().await?,
        };
        debug!(
            "Transfer of {} {} to {} compiled to call on {}",
            request.amount,
            request.token.as_ref().map(Token::symbol).unwrap_or("ETH"),
            request.to,
            plan.to
        );

        let tx = ZkTransaction::function_call(
            self.address(),
            &plan,
            self.config.ergs_per_pubdata_limit,
        );
        let authorizer = TransactionAuthorizer::new(Arc::clone(&self.signer), chain_id);

        pipeline::estimate_and_send(&self.provider, &authorizer, tx, nonce).await
    }

    // ========== Bridges ==========

    /// Default bridge contracts, fetched on first use and cached for the
    /// lifetime of this wallet. A failed lookup is retried on the next call.
    pub async fn bridge_contracts(&self) -> Result<BridgeContracts> {
        self.bridge_contracts
            .get_or_try_init(|| async {
                let bridges = self
                    .provider
                    .get_bridge_contracts()
                    .await
                    .map_err(|source| WalletError::provider("zks_getBridgeContracts", source))?;
                debug!("Cached bridge contracts: {:?}", bridges);
                Ok::<_, WalletError>(bridges)
            })
            .await
            .copied()
    }
}

impl<S: ZkSigner + 'static, P: ZkProvider> Wallet<S, P> {
    /// Connect to the base chain endpoint in [`NetworkConfig::l1_rpc_url`]
    pub async fn connect_eth_provider(&self) -> Result<EthProvider<S>> {
        let rpc_url = self.config.l1_rpc_url.as_deref().ok_or_else(|| {
            WalletError::Configuration("L1 RPC URL is not configured".to_string())
        })?;
        self.create_eth_provider(rpc_url).await
    }

    /// Connect to the base chain at `rpc_url` and bind the default bridges
    ///
    /// Reads the L1 chain ID, derives a transaction authorizer for this
    /// wallet's signer on that chain and resolves the bridge addresses.
    pub async fn create_eth_provider(&self, rpc_url: &str) -> Result<EthProvider<S>> {
        let url: Url = rpc_url
            .parse()
            .map_err(|e| WalletError::Configuration(format!("invalid L1 RPC URL {rpc_url}: {e}")))?;

        let reader = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url.clone());
        let chain_id = reader
            .get_chain_id()
            .await
            .map_err(|source| WalletError::provider("eth_chainId", source))?;

        let authorizer = TransactionAuthorizer::new(Arc::clone(&self.signer), chain_id);
        let bridges = self.bridge_contracts().await?;
        info!(
            "Connected to L1 chain {} (ETH bridge {}, ERC20 bridge {})",
            chain_id, bridges.l1_eth_default_bridge, bridges.l1_erc20_default_bridge
        );

        Ok(EthProvider::new(url, authorizer, &bridges))
    }
}
