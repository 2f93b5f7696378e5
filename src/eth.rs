//! Base chain (L1) handle bound to the zkSync default bridges

use crate::constants::{ETH_ADDRESS, RECEIPT_MAX_ATTEMPTS, RECEIPT_POLL_INTERVAL_SECS};
use crate::contracts::{IL1ERC20Bridge, IL1EthBridge, IERC20};
use crate::error::{Result, WalletError};
use crate::signer::{TransactionAuthorizer, ZkSigner};
use crate::types::{BridgeContracts, Token};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use alloy::transports::http::reqwest::Url;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// L1 provider that signs through a wallet's [`TransactionAuthorizer`]
///
/// Created by [`Wallet::create_eth_provider`](crate::Wallet::create_eth_provider).
pub struct EthProvider<S> {
    /// Provider with wallet filler - handles nonce, gas, chain_id and signing
    provider: DynProvider,
    authorizer: TransactionAuthorizer<S>,
    eth_bridge: IL1EthBridge::IL1EthBridgeInstance<DynProvider>,
    erc20_bridge: IL1ERC20Bridge::IL1ERC20BridgeInstance<DynProvider>,
}

impl<S: ZkSigner + 'static> EthProvider<S> {
    /// Bind the bridges at `bridges` over an HTTP provider for `url`
    pub fn new(url: Url, authorizer: TransactionAuthorizer<S>, bridges: &BridgeContracts) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(authorizer.clone())
            .connect_http(url)
            .erased();

        let eth_bridge = IL1EthBridge::new(bridges.l1_eth_default_bridge, provider.clone());
        let erc20_bridge = IL1ERC20Bridge::new(bridges.l1_erc20_default_bridge, provider.clone());

        Self {
            provider,
            authorizer,
            eth_bridge,
            erc20_bridge,
        }
    }

    /// Get the signer's address
    pub fn address(&self) -> Address {
        self.authorizer.address()
    }

    /// L1 chain ID transactions are signed for
    pub fn chain_id(&self) -> u64 {
        self.authorizer.chain_id()
    }

    pub fn eth_bridge_address(&self) -> Address {
        *self.eth_bridge.address()
    }

    pub fn erc20_bridge_address(&self) -> Address {
        *self.erc20_bridge.address()
    }

    // ========== Balances ==========

    /// L1 balance of `token`
    pub async fn balance(&self, token: &Token) -> Result<U256> {
        match token {
            Token::Native => self
                .provider
                .get_balance(self.address())
                .await
                .map_err(|source| WalletError::provider("eth_getBalance", source)),
            Token::Erc20(info) => IERC20::new(info.l1_address, self.provider.clone())
                .balanceOf(self.address())
                .call()
                .await
                .map_err(|source| WalletError::provider("balanceOf", source)),
        }
    }

    // ========== Deposits ==========

    /// Approve the ERC20 bridge to spend `amount` of `token` (unlimited if `None`)
    pub async fn approve_deposit(&self, token: &Token, amount: Option<U256>) -> Result<TxHash> {
        let l1_token = match token {
            Token::Native => {
                return Err(WalletError::Configuration(
                    "ETH deposits do not need an approval".to_string(),
                ))
            }
            Token::Erc20(info) => info.l1_address,
        };

        let pending = IERC20::new(l1_token, self.provider.clone())
            .approve(self.erc20_bridge_address(), amount.unwrap_or(U256::MAX))
            .send()
            .await
            .map_err(|source| WalletError::provider("approve", source))?;

        Ok(*pending.tx_hash())
    }

    /// Deposit `amount` of `token` to `l2_receiver` (defaults to this account)
    ///
    /// Token deposits first raise the bridge allowance if it is too low and
    /// wait for that approval to be mined.
    pub async fn deposit(
        &self,
        token: &Token,
        amount: U256,
        l2_receiver: Option<Address>,
    ) -> Result<TxHash> {
        let receiver = l2_receiver.unwrap_or_else(|| self.address());

        let pending = match token {
            Token::Native => self
                .eth_bridge
                .deposit(receiver, ETH_ADDRESS, amount)
                .value(amount)
                .send()
                .await
                .map_err(|source| WalletError::provider("deposit", source))?,
            Token::Erc20(info) => {
                self.ensure_bridge_allowance(info.l1_address, amount).await?;
                self.erc20_bridge
                    .deposit(receiver, info.l1_address, amount)
                    .send()
                    .await
                    .map_err(|source| WalletError::provider("deposit", source))?
            }
        };

        let tx_hash = *pending.tx_hash();
        info!(
            "Deposited {} {} to {} on L2 (tx {})",
            amount,
            token.symbol(),
            receiver,
            tx_hash
        );
        Ok(tx_hash)
    }

    /// Check and ensure the ERC20 bridge allowance
    async fn ensure_bridge_allowance(&self, l1_token: Address, amount: U256) -> Result<()> {
        let erc20 = IERC20::new(l1_token, self.provider.clone());
        let allowance = erc20
            .allowance(self.address(), self.erc20_bridge_address())
            .call()
            .await
            .map_err(|source| WalletError::provider("allowance", source))?;

        if allowance < amount {
            // Approve max uint256 for convenience
            erc20
                .approve(self.erc20_bridge_address(), U256::MAX)
                .send()
                .await
                .map_err(|source| WalletError::provider("approve", source))?
                .get_receipt()
                .await
                .map_err(|source| WalletError::provider("approve", source))?;
        }

        Ok(())
    }

    // ========== Utility Methods ==========

    /// Waits for an L1 transaction to be confirmed and returns the receipt
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt> {
        let poll_interval = Duration::from_secs(RECEIPT_POLL_INTERVAL_SECS);

        for _ in 0..RECEIPT_MAX_ATTEMPTS {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|source| WalletError::provider("eth_getTransactionReceipt", source))?;

            if let Some(receipt) = receipt {
                return Ok(receipt);
            }

            tokio::time::sleep(poll_interval).await;
        }

        Err(WalletError::provider(
            "eth_getTransactionReceipt",
            eyre::eyre!("receipt not found after timeout: {}", tx_hash),
        ))
    }
}

impl<S: ZkSigner> fmt::Debug for EthProvider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthProvider")
            .field("address", &self.authorizer.address())
            .field("chain_id", &self.authorizer.chain_id())
            .field("eth_bridge", self.eth_bridge.address())
            .field("erc20_bridge", self.erc20_bridge.address())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockProvider, MockSigner};
    use std::sync::Arc;

    const OWNER: Address = Address::repeat_byte(0x11);

    fn eth_provider(signer: Arc<MockSigner>) -> EthProvider<MockSigner> {
        let url: Url = "http://127.0.0.1:1".parse().unwrap();
        let authorizer = TransactionAuthorizer::new(signer, 1);
        EthProvider::new(url, authorizer, &MockProvider::new().bridges())
    }

    #[tokio::test]
    async fn test_binds_bridge_addresses() {
        let provider = eth_provider(Arc::new(MockSigner::new(OWNER)));
        let bridges = MockProvider::new().bridges();

        assert_eq!(provider.address(), OWNER);
        assert_eq!(provider.chain_id(), 1);
        assert_eq!(provider.eth_bridge_address(), bridges.l1_eth_default_bridge);
        assert_eq!(provider.erc20_bridge_address(), bridges.l1_erc20_default_bridge);
    }

    #[tokio::test]
    async fn test_debug_shows_account_and_bridges() {
        let provider = eth_provider(Arc::new(MockSigner::new(OWNER)));
        let bridges = MockProvider::new().bridges();

        let debug = format!("{provider:?}");
        assert!(debug.starts_with("EthProvider"));
        assert!(debug.contains(&format!("{OWNER:?}")));
        assert!(debug.contains(&format!("{:?}", bridges.l1_eth_default_bridge)));
        assert!(debug.contains(&format!("{:?}", bridges.l1_erc20_default_bridge)));
    }

    #[tokio::test]
    async fn test_native_approval_rejected_offline() {
        let signer = Arc::new(MockSigner::new(OWNER));
        let provider = eth_provider(signer.clone());

        let err = provider
            .approve_deposit(&Token::Native, None)
            .await
            .unwrap_err();

        assert!(matches!(err, WalletError::Configuration(_)));
        assert_eq!(signer.calls(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_node_is_provider_error() {
        let provider = eth_provider(Arc::new(MockSigner::new(OWNER)));

        let err = provider.balance(&Token::Native).await.unwrap_err();
        assert!(matches!(
            err,
            WalletError::Provider { operation: "eth_getBalance", .. }
        ));
    }
}
