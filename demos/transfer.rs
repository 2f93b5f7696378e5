//! Offline transfer preparation
//!
//! Run with: cargo run --example transfer
//!
//! Requires PRIVATE_KEY environment variable. Compiles an ETH and a token
//! transfer into call plans and signs the finalized ETH transfer locally.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use zksync_wallet::{
    CallPlan, Eip712Transaction, GasEstimate, LocalSigner, NetworkConfig, Token,
    TransactionAuthorizer, TransferRequest, ZkSigner, ZkTransaction,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let private_key = std::env::var("PRIVATE_KEY")
        .map_err(|_| eyre::eyre!("PRIVATE_KEY must be set"))?;

    let config = NetworkConfig::from_env()?;
    let chain_id = config.l2_chain_id.unwrap_or(zksync_wallet::constants::ZKSYNC_TESTNET_CHAIN_ID);
    let signer = Arc::new(LocalSigner::from_private_key(&private_key)?);

    println!("Wallet address: {}", signer.address());

    let recipient = Address::repeat_byte(0xaa);
    let eth_transfer = TransferRequest::new(recipient, Token::eth().parse_amount(0.01));
    let token = Token::from_addresses(
        Address::repeat_byte(0x01),
        Address::repeat_byte(0x02),
        "USDC",
        6,
    );
    let token_transfer =
        TransferRequest::new(recipient, token.parse_amount(25.0)).with_token(token);

    for request in [&eth_transfer, &token_transfer] {
        let plan = CallPlan::compile(request)?;
        println!(
            "to={} value={} calldata={} bytes fee_token={}",
            plan.to,
            plan.value,
            plan.data.len(),
            plan.fee_token
        );
    }

    let plan = CallPlan::compile(&eth_transfer)?;
    let call = ZkTransaction::function_call(signer.address(), &plan, config.ergs_per_pubdata_limit);
    let estimate = GasEstimate {
        gas_limit: U256::from(300_000u64),
        gas_price: U256::from(250_000_000u64),
    };
    let transaction = Eip712Transaction::new(call, U256::ZERO, estimate, chain_id);

    let authorizer = TransactionAuthorizer::new(Arc::clone(&signer), chain_id);
    let signed = authorizer
        .sign_transaction(signer.address(), transaction)
        .await?;

    println!("Digest:    {}", signed.digest);
    println!("Recovered: {}", signed.recover_signer()?);

    Ok(())
}
