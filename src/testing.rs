//! In-memory test doubles for the signer and provider seams

use crate::constants::ETH_ADDRESS;
use crate::provider::ZkProvider;
use crate::signer::ZkSigner;
use crate::types::{
    BlockTag, BridgeContracts, CallPlan, Eip712Transaction, GasEstimate, SignedTransaction, Token,
    ZkTransaction,
};
use alloy::primitives::{address, b256, Address, Bytes, Signature, TxHash, B256, U256};
use eyre::{eyre, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// First anvil development key
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address of [`TEST_PRIVATE_KEY`]
pub const TEST_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

/// Finalized ETH transfer on `chain_id`
pub fn eip712_transaction(chain_id: u64) -> Eip712Transaction {
    let plan = CallPlan {
        to: Address::repeat_byte(0xaa),
        value: U256::from(100u64),
        data: Bytes::new(),
        fee_token: ETH_ADDRESS,
    };
    let call = ZkTransaction::function_call(TEST_ADDRESS, &plan, U256::from(160_000u64));
    Eip712Transaction::new(call, U256::from(1u64), MockProvider::ESTIMATE, chain_id)
}

/// Signer that counts invocations and returns a fixed signature
pub struct MockSigner {
    address: Address,
    fail: bool,
    calls: AtomicUsize,
}

impl MockSigner {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(address: Address) -> Self {
        Self {
            fail: true,
            ..Self::new(address)
        }
    }

    /// Number of times `sign_hash` reached the signer
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ZkSigner for MockSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_hash(&self, _hash: B256) -> Result<Signature> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(eyre!("hardware wallet disconnected"));
        }
        Ok(Signature::new(U256::from(1u64), U256::from(2u64), false))
    }
}

/// Provider double with canned answers, failure switches and call counters
pub struct MockProvider {
    nonce: U256,
    balance: U256,
    bridges: BridgeContracts,
    fail_balance: bool,
    fail_nonce: bool,
    fail_estimate: bool,
    fail_send: bool,
    bridge_failures: AtomicUsize,
    nonce_calls: AtomicUsize,
    estimate_calls: AtomicUsize,
    bridge_calls: AtomicUsize,
    send_calls: AtomicUsize,
    reads: Mutex<Vec<(Address, BlockTag, Option<Token>)>>,
    estimated: Mutex<Vec<ZkTransaction>>,
    sent: Mutex<Vec<SignedTransaction>>,
}

impl MockProvider {
    pub const TX_HASH: TxHash =
        b256!("00000000000000000000000000000000000000000000000000000000000000ff");

    pub const ESTIMATE: GasEstimate = GasEstimate {
        gas_limit: U256::from_limbs([21_000, 0, 0, 0]),
        gas_price: U256::from_limbs([250_000_000, 0, 0, 0]),
    };

    pub fn new() -> Self {
        Self {
            nonce: U256::ZERO,
            balance: U256::ZERO,
            bridges: BridgeContracts {
                l1_erc20_default_bridge: Address::repeat_byte(0xe1),
                l2_erc20_default_bridge: Address::repeat_byte(0xe2),
                l1_eth_default_bridge: Address::repeat_byte(0xd1),
                l2_eth_default_bridge: Address::repeat_byte(0xd2),
            },
            fail_balance: false,
            fail_nonce: false,
            fail_estimate: false,
            fail_send: false,
            bridge_failures: AtomicUsize::new(0),
            nonce_calls: AtomicUsize::new(0),
            estimate_calls: AtomicUsize::new(0),
            bridge_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            reads: Mutex::new(Vec::new()),
            estimated: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = U256::from(nonce);
        self
    }

    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    pub fn fail_balance(mut self) -> Self {
        self.fail_balance = true;
        self
    }

    pub fn fail_nonce(mut self) -> Self {
        self.fail_nonce = true;
        self
    }

    pub fn fail_estimate(mut self) -> Self {
        self.fail_estimate = true;
        self
    }

    pub fn fail_send(mut self) -> Self {
        self.fail_send = true;
        self
    }

    /// Fail the next `times` bridge lookups
    pub fn fail_bridges(self, times: usize) -> Self {
        self.bridge_failures.store(times, Ordering::SeqCst);
        self
    }

    pub fn bridges(&self) -> BridgeContracts {
        self.bridges
    }

    pub fn nonce_calls(&self) -> usize {
        self.nonce_calls.load(Ordering::SeqCst)
    }

    pub fn estimate_calls(&self) -> usize {
        self.estimate_calls.load(Ordering::SeqCst)
    }

    pub fn bridge_calls(&self) -> usize {
        self.bridge_calls.load(Ordering::SeqCst)
    }

    pub fn send_calls(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }

    /// Balance and nonce reads as `(address, block, token)`
    pub fn reads(&self) -> Vec<(Address, BlockTag, Option<Token>)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn estimated(&self) -> Vec<ZkTransaction> {
        self.estimated.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<SignedTransaction> {
        self.sent.lock().unwrap().clone()
    }
}

impl ZkProvider for MockProvider {
    async fn get_balance(&self, address: Address, block: BlockTag, token: &Token) -> Result<U256> {
        self.reads
            .lock()
            .unwrap()
            .push((address, block, Some(token.clone())));
        if self.fail_balance {
            return Err(eyre!("connection reset"));
        }
        Ok(self.balance)
    }

    async fn get_transaction_count(&self, address: Address, block: BlockTag) -> Result<U256> {
        self.nonce_calls.fetch_add(1, Ordering::SeqCst);
        self.reads.lock().unwrap().push((address, block, None));
        if self.fail_nonce {
            return Err(eyre!("connection reset"));
        }
        Ok(self.nonce)
    }

    async fn estimate_gas(&self, tx: &ZkTransaction) -> Result<GasEstimate> {
        self.estimate_calls.fetch_add(1, Ordering::SeqCst);
        self.estimated.lock().unwrap().push(tx.clone());
        if self.fail_estimate {
            return Err(eyre!("execution reverted"));
        }
        Ok(Self::ESTIMATE)
    }

    async fn get_bridge_contracts(&self) -> Result<BridgeContracts> {
        self.bridge_calls.fetch_add(1, Ordering::SeqCst);
        // let concurrent callers pile up on the cell before this one resolves
        tokio::task::yield_now().await;

        let remaining = self.bridge_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.bridge_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(eyre!("zks_getBridgeContracts timed out"));
        }
        Ok(self.bridges)
    }

    async fn send_transaction(&self, tx: SignedTransaction) -> Result<TxHash> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_send {
            return Err(eyre!("nonce too low"));
        }
        self.sent.lock().unwrap().push(tx);
        Ok(Self::TX_HASH)
    }
}
