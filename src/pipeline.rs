//! Estimate, finalize and submit a zkSync transaction
//!
//! The three stages run strictly in order. A failure in any stage returns
//! immediately, so nothing reaches the provider's broadcast path unless the
//! transaction was both estimated and signed.

use crate::error::{Result, WalletError};
use crate::provider::ZkProvider;
use crate::signer::{TransactionAuthorizer, ZkSigner};
use crate::types::{Eip712Transaction, ZkTransaction};
use alloy::primitives::{TxHash, U256};
use tracing::{debug, info};

/// Run the full pipeline for `tx` with `nonce`, signing as `tx.from`
pub async fn estimate_and_send<P, S>(
    provider: &P,
    authorizer: &TransactionAuthorizer<S>,
    tx: ZkTransaction,
    nonce: U256,
) -> Result<TxHash>
where
    P: ZkProvider,
    S: ZkSigner,
{
    let estimate = provider
        .estimate_gas(&tx)
        .await
        .map_err(|source| WalletError::Estimation { source })?;
    debug!(
        "Estimated gas limit {} at price {} for call to {}",
        estimate.gas_limit, estimate.gas_price, tx.to
    );

    let from = tx.from;
    let transaction = Eip712Transaction::new(tx, nonce, estimate, authorizer.chain_id());
    let signed = authorizer.sign_transaction(from, transaction).await?;
    debug!("Signed transaction digest {}", signed.digest);

    let tx_hash = provider
        .send_transaction(signed)
        .await
        .map_err(|source| WalletError::provider("eth_sendRawTransaction", source))?;
    info!("Submitted zkSync transaction {} (nonce {})", tx_hash, nonce);

    Ok(tx_hash)
}
