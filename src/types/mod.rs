//! Wallet value types: tokens, transfer requests, call plans and transactions

pub mod bridge;
pub mod token;
pub mod transaction;
pub mod transfer;

pub use bridge::BridgeContracts;
pub use token::{BlockTag, Token, TokenInfo};
pub use transaction::{
    Eip712Meta, Eip712Transaction, GasEstimate, SignedTransaction, ZkTransaction,
};
pub use transfer::{CallPlan, TransferRequest};
