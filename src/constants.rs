//! Protocol constants and precision helpers for zkSync

use alloy::primitives::{address, Address, U256};

/// Pseudo-address zkSync uses for the native asset (ETH) on L2
pub const ETH_ADDRESS: Address = address!("0000000000000000000000000000000000000000");

/// ETH has 18 decimals
pub const ETH_DECIMALS: u8 = 18;

/// EIP-2718 type byte of zkSync EIP-712 transactions
pub const EIP712_TX_TYPE: u8 = 0x71;

/// Default limit of ergs the account pays per byte of published data
pub const DEFAULT_ERGS_PER_PUBDATA_LIMIT: u64 = 160_000;

/// EIP-712 domain name used for transaction digests
pub const EIP712_DOMAIN_NAME: &str = "zkSync";

/// EIP-712 domain version used for transaction digests
pub const EIP712_DOMAIN_VERSION: &str = "2";

/// zkSync Era mainnet chain ID
pub const ZKSYNC_MAINNET_CHAIN_ID: u64 = 324;

/// zkSync Era testnet chain ID
pub const ZKSYNC_TESTNET_CHAIN_ID: u64 = 280;

/// Polling interval while waiting for L1 receipts
pub const RECEIPT_POLL_INTERVAL_SECS: u64 = 2;

/// Number of receipt polls before giving up (2 minutes)
pub const RECEIPT_MAX_ATTEMPTS: u32 = 60;

/// Scale a floating point value to U256 with specified decimals
///
/// Rounds to the nearest base unit. Amounts beyond f64 precision (about 15
/// significant digits) are approximate.
pub fn scale_to_decimals(value: f64, decimals: u8) -> U256 {
    let multiplier = 10f64.powi(decimals as i32);
    let scaled = (value * multiplier).round() as u128;
    U256::from(scaled)
}

/// Unscale a U256 value to floating point with specified decimals
pub fn unscale_from_decimals(value: U256, decimals: u8) -> f64 {
    let divisor = 10f64.powi(decimals as i32);
    let value_u128: u128 = value.try_into().unwrap_or(u128::MAX);
    value_u128 as f64 / divisor
}
