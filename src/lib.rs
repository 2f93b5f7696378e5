//! zkSync wallet SDK for Rust
//!
//! A wallet for the zkSync rollup: it builds, fee-estimates, signs and submits
//! transfers, and binds the L1 bridge contracts for deposits.
//!
//! # Features
//!
//! - ETH and ERC20 transfers through one call path
//! - Fees payable in any token
//! - Signing behind a digest-only [`ZkSigner`] capability
//! - L1 deposits through the default bridges
//!
//! # Example
//!
//! ```rust,ignore
//! use zksync_wallet::{LocalSigner, NetworkConfig, TransferRequest, Wallet};
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let signer = LocalSigner::from_private_key("0x...")?;
//!     // `provider` is any `ZkProvider` implementation
//!     let wallet = Wallet::new(signer, provider, NetworkConfig::mainnet());
//!
//!     let tx_hash = wallet
//!         .transfer(TransferRequest::new("0x...".parse()?, U256::from(1_000_000u64)))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod contracts;
pub mod error;
pub mod eth;
pub mod pipeline;
pub mod provider;
pub mod signer;
pub mod types;
pub mod wallet;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::NetworkConfig;
pub use error::{Result, WalletError};
pub use eth::EthProvider;
pub use provider::ZkProvider;
pub use signer::{LocalSigner, TransactionAuthorizer, ZkSigner};
pub use types::{
    BlockTag, BridgeContracts, CallPlan, Eip712Meta, Eip712Transaction, GasEstimate,
    SignedTransaction, Token, TokenInfo, TransferRequest, ZkTransaction,
};
pub use wallet::Wallet;
