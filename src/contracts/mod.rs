//! Contract bindings used by the wallet

pub mod bridge;
pub mod erc20;

pub use bridge::*;
pub use erc20::*;
