//! Bridge contract addresses reported by `zks_getBridgeContracts`

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Default bridge contracts connecting zkSync to its base chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeContracts {
    /// L1 side of the ERC20 bridge
    pub l1_erc20_default_bridge: Address,
    /// L2 side of the ERC20 bridge
    pub l2_erc20_default_bridge: Address,
    /// L1 side of the ETH bridge
    pub l1_eth_default_bridge: Address,
    /// L2 side of the ETH bridge
    pub l2_eth_default_bridge: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rpc_response() {
        let json = r#"{
            "l1Erc20DefaultBridge": "0x57891966931eb4bb6fb81430e6ce0a03aabde063",
            "l2Erc20DefaultBridge": "0x11f943b2c77b743ab90f4a0ae7d5a4e7fca3e102",
            "l1EthDefaultBridge": "0x0000000000000000000000000000000000000001",
            "l2EthDefaultBridge": "0x0000000000000000000000000000000000000002"
        }"#;

        let bridges: BridgeContracts = serde_json::from_str(json).unwrap();
        assert_eq!(
            bridges.l1_erc20_default_bridge,
            "0x57891966931eb4bb6fb81430e6ce0a03aabde063"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(bridges.l1_eth_default_bridge, Address::with_last_byte(1));
        assert_eq!(bridges.l2_eth_default_bridge, Address::with_last_byte(2));
    }
}
