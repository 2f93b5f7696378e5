//! zkSync RPC provider abstraction
//!
//! The wallet does not own a transport. Anything that can answer these five
//! calls (an HTTP JSON-RPC client, a test double, a relay) can back a
//! [`Wallet`](crate::Wallet).

use crate::types::{BlockTag, BridgeContracts, GasEstimate, SignedTransaction, Token, ZkTransaction};
use alloy::primitives::{Address, TxHash, U256};
use eyre::Result;
use std::future::Future;

/// Trait for the zkSync RPC calls the wallet depends on
pub trait ZkProvider: Send + Sync {
    /// Balance of `token` held by `address` at `block` (`eth_getBalance`)
    fn get_balance(
        &self,
        address: Address,
        block: BlockTag,
        token: &Token,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// Number of transactions sent by `address` at `block` (`eth_getTransactionCount`)
    fn get_transaction_count(
        &self,
        address: Address,
        block: BlockTag,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// Gas limit and price for an unsigned call (`eth_estimateGas`)
    fn estimate_gas(&self, tx: &ZkTransaction) -> impl Future<Output = Result<GasEstimate>> + Send;

    /// Default bridge addresses (`zks_getBridgeContracts`)
    fn get_bridge_contracts(&self) -> impl Future<Output = Result<BridgeContracts>> + Send;

    /// Encode and broadcast a signed transaction, returning its hash
    fn send_transaction(&self, tx: SignedTransaction) -> impl Future<Output = Result<TxHash>> + Send;
}
