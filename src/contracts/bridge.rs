//! L1 bridge contract bindings
//!
//! Both default bridges lock funds on the base chain and mint the matching
//! balance for `_l2Receiver` on zkSync.

use alloy::sol;

sol! {
    /// Default bridge for native ETH deposits
    #[sol(rpc)]
    interface IL1EthBridge {
        /// Deposit ETH; `_l1Token` must be the ETH sentinel and `msg.value == _amount`
        function deposit(
            address _l2Receiver,
            address _l1Token,
            uint256 _amount
        ) external payable returns (bytes32 txHash);

        /// L2 address of the counterpart bridge
        function l2Bridge() external view returns (address);

        event DepositInitiated(address indexed from, address indexed to, address indexed l1Token, uint256 amount);
    }

    /// Default bridge for ERC20 deposits
    #[sol(rpc)]
    interface IL1ERC20Bridge {
        /// Deposit an ERC20 token previously approved to this bridge
        function deposit(
            address _l2Receiver,
            address _l1Token,
            uint256 _amount
        ) external payable returns (bytes32 txHash);

        /// L2 address of the counterpart bridge
        function l2Bridge() external view returns (address);

        /// L2 token address bridged from `_l1Token`
        function l2TokenAddress(address _l1Token) external view returns (address);

        event DepositInitiated(address indexed from, address indexed to, address indexed l1Token, uint256 amount);
    }
}
