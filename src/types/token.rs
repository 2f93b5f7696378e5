//! Asset descriptors and block tags

use crate::constants::{scale_to_decimals, unscale_from_decimals, ETH_ADDRESS, ETH_DECIMALS};
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ERC20 token deployed on both layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Token contract on the base chain
    pub l1_address: Address,
    /// Token contract on zkSync
    pub l2_address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// Asset moved by a transfer or used to pay fees
///
/// zkSync identifies ETH by a pseudo-address rather than a contract, so the
/// native variant carries no address of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Token {
    /// Native ETH
    #[default]
    Native,
    /// ERC20 token contract
    Erc20(TokenInfo),
}

impl Token {
    /// Native ETH
    pub fn eth() -> Self {
        Self::Native
    }

    /// ERC20 token with its L1 and L2 contract addresses
    pub fn erc20(
        l1_address: Address,
        l2_address: Address,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self::Erc20(TokenInfo {
            l1_address,
            l2_address,
            symbol: symbol.into(),
            decimals,
        })
    }

    /// Build a descriptor from raw addresses as returned by an RPC token
    /// list, mapping the ETH pseudo-address to [`Token::Native`]
    pub fn from_addresses(
        l1_address: Address,
        l2_address: Address,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        if l2_address == ETH_ADDRESS {
            Self::Native
        } else {
            Self::erc20(l1_address, l2_address, symbol, decimals)
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// Address of the asset on the base chain
    pub fn l1_address(&self) -> Address {
        match self {
            Self::Native => ETH_ADDRESS,
            Self::Erc20(info) => info.l1_address,
        }
    }

    /// Address of the asset on zkSync
    pub fn l2_address(&self) -> Address {
        match self {
            Self::Native => ETH_ADDRESS,
            Self::Erc20(info) => info.l2_address,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Native => "ETH",
            Self::Erc20(info) => &info.symbol,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Self::Native => ETH_DECIMALS,
            Self::Erc20(info) => info.decimals,
        }
    }

    /// Convert a human amount (e.g. `1.5`) to base units of this token
    pub fn parse_amount(&self, amount: f64) -> U256 {
        scale_to_decimals(amount, self.decimals())
    }

    /// Convert base units of this token to a human amount
    pub fn format_amount(&self, amount: U256) -> f64 {
        unscale_from_decimals(amount, self.decimals())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("ETH"),
            Self::Erc20(info) => write!(f, "{} ({})", info.symbol, info.l2_address),
        }
    }
}

/// Finality level for state reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// Included in a block committed to L1, not yet proven
    #[default]
    Committed,
    /// Proven and executed on L1
    Finalized,
    Latest,
    Pending,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Committed => "committed",
            Self::Finalized => "finalized",
            Self::Latest => "latest",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
