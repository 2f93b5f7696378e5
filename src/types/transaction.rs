//! Transaction shapes across the estimate, finalize and submit stages

use crate::constants::{EIP712_DOMAIN_NAME, EIP712_DOMAIN_VERSION, EIP712_TX_TYPE};
use crate::types::CallPlan;
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::sol_types::{Eip712Domain, SolStruct};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

mod typed {
    alloy::sol! {
        /// zkSync EIP-712 transaction struct
        struct Transaction {
            uint8 txType;
            uint256 to;
            uint256 value;
            bytes data;
            uint256 feeToken;
            uint256 ergsLimit;
            uint256 ergsPerPubdataByteLimit;
            uint256 ergsPrice;
            uint256 nonce;
        }
    }
}

fn address_word(address: Address) -> U256 {
    U256::from_be_slice(address.as_slice())
}

/// zkSync-specific transaction fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Meta {
    /// L2 address of the token fees are paid in
    pub fee_token: Address,
    /// Ergs the account pays per byte of published data
    pub ergs_per_pubdata: U256,
}

/// Unsigned function-call skeleton sent to `eth_estimateGas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZkTransaction {
    pub from: Address,
    pub to: Address,
    #[serde(rename = "gas")]
    pub gas_limit: U256,
    pub gas_price: U256,
    pub value: U256,
    pub data: Bytes,
    pub eip712_meta: Eip712Meta,
}

impl ZkTransaction {
    /// Function call from `from` executing `plan`, with gas left for the provider to estimate
    pub fn function_call(from: Address, plan: &CallPlan, ergs_per_pubdata: U256) -> Self {
        Self {
            from,
            to: plan.to,
            gas_limit: U256::ZERO,
            gas_price: U256::ZERO,
            value: plan.value,
            data: plan.data.clone(),
            eip712_meta: Eip712Meta {
                fee_token: plan.fee_token,
                ergs_per_pubdata,
            },
        }
    }
}

/// Fee estimate returned by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    pub gas_limit: U256,
    pub gas_price: U256,
}

/// Finalized, unsigned zkSync transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip712Transaction {
    pub nonce: U256,
    pub to: Address,
    pub value: U256,
    pub gas_limit: U256,
    pub gas_price: U256,
    pub data: Bytes,
    pub chain_id: u64,
    pub meta: Eip712Meta,
}

impl Eip712Transaction {
    /// Combine an estimated call with its nonce and chain
    pub fn new(call: ZkTransaction, nonce: U256, estimate: GasEstimate, chain_id: u64) -> Self {
        Self {
            nonce,
            to: call.to,
            value: call.value,
            gas_limit: estimate.gas_limit,
            gas_price: estimate.gas_price,
            data: call.data,
            chain_id,
            meta: call.eip712_meta,
        }
    }

    /// EIP-712 domain the digest is computed under
    pub fn domain(&self) -> Eip712Domain {
        Eip712Domain::new(
            Some(Cow::Borrowed(EIP712_DOMAIN_NAME)),
            Some(Cow::Borrowed(EIP712_DOMAIN_VERSION)),
            Some(U256::from(self.chain_id)),
            None,
            None,
        )
    }

    /// The 32-byte digest an account signs to authorize this transaction
    pub fn signing_hash(&self) -> B256 {
        self.typed().eip712_signing_hash(&self.domain())
    }

    fn typed(&self) -> typed::Transaction {
        typed::Transaction {
            txType: EIP712_TX_TYPE,
            to: address_word(self.to),
            value: self.value,
            data: self.data.clone(),
            feeToken: address_word(self.meta.fee_token),
            ergsLimit: self.gas_limit,
            ergsPerPubdataByteLimit: self.meta.ergs_per_pubdata,
            ergsPrice: self.gas_price,
            nonce: self.nonce,
        }
    }
}

/// Transaction plus the signature authorizing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Account the signature belongs to
    pub from: Address,
    pub transaction: Eip712Transaction,
    pub signature: Signature,
    /// Digest the signature covers
    pub digest: B256,
}

impl SignedTransaction {
    /// Recover the address that produced the signature
    pub fn recover_signer(&self) -> eyre::Result<Address> {
        Ok(self.signature.recover_address_from_prehash(&self.digest)?)
    }
}
