//! Transfer requests and their compilation into canonical on-chain calls

use crate::constants::ETH_ADDRESS;
use crate::contracts::IERC20;
use crate::error::{Result, WalletError};
use crate::types::Token;
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;

/// Parameters for a value transfer on zkSync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Recipient of the funds
    pub to: Address,
    /// Amount in base units of `token`
    pub amount: U256,
    /// Asset to move (defaults to ETH)
    pub token: Option<Token>,
    /// Asset used to pay fees (defaults to ETH)
    pub fee_token: Option<Token>,
    /// Explicit nonce (defaults to the committed transaction count)
    pub nonce: Option<U256>,
}

impl TransferRequest {
    /// Transfer `amount` wei of ETH to `to`
    pub fn new(to: Address, amount: U256) -> Self {
        Self {
            to,
            amount,
            token: None,
            fee_token: None,
            nonce: None,
        }
    }

    /// Transfer a token instead of ETH
    pub fn with_token(mut self, token: Token) -> Self {
        self.token = Some(token);
        self
    }

    /// Pay fees in a token instead of ETH
    pub fn with_fee_token(mut self, fee_token: Token) -> Self {
        self.fee_token = Some(fee_token);
        self
    }

    /// Use an explicit nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Canonical call shape a transfer compiles to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPlan {
    /// Recipient for ETH, token contract for ERC20
    pub to: Address,
    /// Wei attached to the call (zero for token transfers)
    pub value: U256,
    /// Calldata (empty for ETH transfers)
    pub data: Bytes,
    /// L2 address of the fee token
    pub fee_token: Address,
}

impl CallPlan {
    /// Compile a transfer request.
    ///
    /// ETH transfers become a plain value call to the recipient. Token
    /// transfers become a zero-value call to the token contract carrying
    /// `transfer(recipient, amount)`.
    pub fn compile(request: &TransferRequest) -> Result<Self> {
        let fee_token = request
            .fee_token
            .as_ref()
            .map(Token::l2_address)
            .unwrap_or(ETH_ADDRESS);

        match request.token.as_ref() {
            None | Some(Token::Native) => Ok(Self {
                to: request.to,
                value: request.amount,
                data: Bytes::new(),
                fee_token,
            }),
            Some(Token::Erc20(info)) => {
                if info.l2_address == ETH_ADDRESS {
                    return Err(WalletError::Encoding(format!(
                        "token {} has no L2 contract address",
                        info.symbol
                    )));
                }

                let call = IERC20::transferCall {
                    to: request.to,
                    amount: request.amount,
                };

                Ok(Self {
                    to: info.l2_address,
                    value: U256::ZERO,
                    data: Bytes::from(call.abi_encode()),
                    fee_token,
                })
            }
        }
    }

    /// Whether the plan calls a contract rather than moving ETH directly
    pub fn is_contract_call(&self) -> bool {
        !self.data.is_empty()
    }
}
