//! Solidity bindings and the narrow interfaces the commands use to reach them
//!
//! The commands are written against [`Chain`], [`Vault`], [`Strategy`] and
//! [`Token`] rather than against generated bindings directly, so they can be
//! driven by an in-memory double in tests.

#![allow(async_fn_in_trait)]
#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy::{
    primitives::{Address, Bytes, U256},
    sol,
};

use crate::errors::ScriptError;

sol! {
    #[sol(rpc)]
    interface IWaultVault {
        function setStrategy(address _strategy) external;
        function setWaultRewardFactors(uint256 _waultRewardPerBlock, uint256 _startBlock, uint256 _endBlock) external;
        function setWaultRewardMode(bool _flag) external;
        function balance() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function getPricePerFullShare() external view returns (uint256);
        function claimable(address _user) external view returns (uint256);
        function waultRewardPerBlock() external view returns (uint256);
        function lastRewardBlock() external view returns (uint256);
        function accWaultPerShare() external view returns (uint256);
    }

    #[sol(rpc)]
    interface IWaultStrategy {
        function balanceOf() external view returns (uint256);
    }

    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
    }
}

/// The vault: holds deposits, issues shares and distributes rewards
pub trait Vault {
    /// The vault's address
    fn address(&self) -> Address;

    /// Point the vault at its strategy
    async fn set_strategy(&self, strategy: Address) -> Result<(), ScriptError>;
    /// Set a linear reward schedule over `[start_block, end_block]`
    async fn set_reward_factors(
        &self,
        reward_per_block: U256,
        start_block: u64,
        end_block: u64,
    ) -> Result<(), ScriptError>;
    /// Enable or disable reward distribution
    async fn set_reward_mode(&self, enabled: bool) -> Result<(), ScriptError>;

    /// The total underlying balance tracked by the vault
    async fn balance(&self) -> Result<U256, ScriptError>;
    /// The share balance of `holder`
    async fn balance_of(&self, holder: Address) -> Result<U256, ScriptError>;
    /// The total supply of shares
    async fn total_supply(&self) -> Result<U256, ScriptError>;
    /// The underlying value of one share, scaled by `10^18`
    async fn price_per_full_share(&self) -> Result<U256, ScriptError>;
    /// The reward `holder` may currently claim
    async fn claimable(&self, holder: Address) -> Result<U256, ScriptError>;
    /// The reward emitted per block
    async fn reward_per_block(&self) -> Result<U256, ScriptError>;
    /// The block rewards were last accrued at
    async fn last_reward_block(&self) -> Result<U256, ScriptError>;
    /// The accumulated reward per share
    async fn acc_reward_per_share(&self) -> Result<U256, ScriptError>;
}

/// The strategy deploying the vault's funds
pub trait Strategy {
    /// The strategy's address
    fn address(&self) -> Address;

    /// The underlying balance under management
    async fn balance_of_underlying(&self) -> Result<U256, ScriptError>;
}

/// A fungible token
pub trait Token {
    /// The token's address
    fn address(&self) -> Address;

    /// The token balance of `holder`
    async fn balance_of(&self, holder: Address) -> Result<U256, ScriptError>;
}

/// A node connection with a signer attached
pub trait Chain {
    /// The vault handle type
    type Vault: Vault;
    /// The strategy handle type
    type Strategy: Strategy;
    /// The token handle type
    type Token: Token;

    /// The address of the signer
    fn signer_address(&self) -> Address;
    /// The native currency balance of `address`
    async fn native_balance(&self, address: Address) -> Result<U256, ScriptError>;
    /// The current block height
    async fn block_number(&self) -> Result<u64, ScriptError>;
    /// Publish a contract from its creation code, returning its address once included
    async fn deploy_contract(&self, deploy_code: Bytes) -> Result<Address, ScriptError>;

    /// Bind a vault handle at `address`
    fn vault(&self, address: Address) -> Self::Vault;
    /// Bind a strategy handle at `address`
    fn strategy(&self, address: Address) -> Self::Strategy;
    /// Bind a token handle at `address`
    fn token(&self, address: Address) -> Self::Token;
}
