//! Signing capability and the authorization boundary around it
//!
//! Key material never leaves a [`ZkSigner`]: the rest of the crate only sees
//! an address and the ability to sign a 32-byte digest. The
//! [`TransactionAuthorizer`] turns that capability into transaction signing
//! for one identity, on L2 (EIP-712 digests) and on L1 (as an alloy
//! `NetworkWallet`).

mod local;

pub use local::LocalSigner;

use crate::error::WalletError;
use crate::types::{Eip712Transaction, SignedTransaction};
use alloy::consensus::{
    SignableTransaction, Signed, Transaction as _, TxEnvelope, TypedTransaction,
};
use alloy::network::{Ethereum, NetworkWallet};
use alloy::primitives::{Address, Signature, B256};
use eyre::Result;
use std::fmt;
use std::sync::Arc;

/// Trait for an account that can sign digests
///
/// Implementations may block on hardware or a remote service inside
/// `sign_hash`; the wallet awaits it like any other round trip.
pub trait ZkSigner: Send + Sync {
    /// Returns the signer's address
    fn address(&self) -> Address;

    /// Signs a 32-byte digest
    fn sign_hash(&self, hash: B256) -> impl std::future::Future<Output = Result<Signature>> + Send;
}

/// Signs transactions on behalf of exactly one [`ZkSigner`] on one chain
pub struct TransactionAuthorizer<S> {
    signer: Arc<S>,
    address: Address,
    chain_id: u64,
}

impl<S: ZkSigner> TransactionAuthorizer<S> {
    pub fn new(signer: Arc<S>, chain_id: u64) -> Self {
        let address = signer.address();
        Self {
            signer,
            address,
            chain_id,
        }
    }

    /// Address this authorizer signs for
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign `digest` as `from`.
    ///
    /// Fails with [`WalletError::UnauthorizedSigner`] without touching the
    /// signer when `from` is not the signer's address.
    pub async fn sign_hash_for(&self, from: Address, digest: B256) -> crate::Result<Signature> {
        if from != self.address {
            return Err(WalletError::UnauthorizedSigner {
                requested: from,
                signer: self.address,
            });
        }

        self.signer
            .sign_hash(digest)
            .await
            .map_err(|source| WalletError::Signing { source })
    }

    /// Sign a finalized zkSync transaction as `from`
    pub async fn sign_transaction(
        &self,
        from: Address,
        transaction: Eip712Transaction,
    ) -> crate::Result<SignedTransaction> {
        if transaction.chain_id != self.chain_id {
            return Err(WalletError::Configuration(format!(
                "transaction chain {} does not match signer chain {}",
                transaction.chain_id, self.chain_id
            )));
        }

        let digest = transaction.signing_hash();
        let signature = self.sign_hash_for(from, digest).await?;

        Ok(SignedTransaction {
            from,
            transaction,
            signature,
            digest,
        })
    }
}

impl<S> Clone for TransactionAuthorizer<S> {
    fn clone(&self) -> Self {
        Self {
            signer: Arc::clone(&self.signer),
            address: self.address,
            chain_id: self.chain_id,
        }
    }
}

impl<S> fmt::Debug for TransactionAuthorizer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionAuthorizer")
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

// Lets alloy providers sign base-chain transactions (bridge deposits,
// approvals) through the same address check.
impl<S: ZkSigner + 'static> NetworkWallet<Ethereum> for TransactionAuthorizer<S> {
    fn default_signer_address(&self) -> Address {
        self.address
    }

    fn has_signer_for(&self, address: &Address) -> bool {
        *address == self.address
    }

    fn signer_addresses(&self) -> impl Iterator<Item = Address> {
        std::iter::once(self.address)
    }

    async fn sign_transaction_from(
        &self,
        sender: Address,
        tx: TypedTransaction,
    ) -> alloy::signers::Result<TxEnvelope> {
        if let Some(chain_id) = tx.chain_id() {
            if chain_id != self.chain_id {
                return Err(alloy::signers::Error::TransactionChainIdMismatch {
                    signer: self.chain_id,
                    tx: chain_id,
                });
            }
        }

        match tx {
            TypedTransaction::Legacy(tx) => Ok(self.sign_l1(sender, tx).await?.into()),
            TypedTransaction::Eip2930(tx) => Ok(self.sign_l1(sender, tx).await?.into()),
            TypedTransaction::Eip1559(tx) => Ok(self.sign_l1(sender, tx).await?.into()),
            TypedTransaction::Eip4844(tx) => Ok(self.sign_l1(sender, tx).await?.into()),
            TypedTransaction::Eip7702(tx) => Ok(self.sign_l1(sender, tx).await?.into()),
        }
    }
}

impl<S: ZkSigner> TransactionAuthorizer<S> {
    async fn sign_l1<T: SignableTransaction<Signature>>(
        &self,
        sender: Address,
        tx: T,
    ) -> alloy::signers::Result<Signed<T>> {
        let signature = self
            .sign_hash_for(sender, tx.signature_hash())
            .await
            .map_err(alloy::signers::Error::other)?;

        Ok(tx.into_signed(signature))
    }
}
