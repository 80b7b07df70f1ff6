//! The node-backed implementation of the contract interfaces

use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes, U256},
    providers::{DynProvider, Provider},
};
use alloy_contract::RawCallBuilder;

use crate::{
    contracts::{
        Chain, IERC20::IERC20Instance, IWaultStrategy::IWaultStrategyInstance,
        IWaultVault::IWaultVaultInstance, Strategy, Token, Vault,
    },
    errors::ScriptError,
    utils::{call_helper, wait_for_tx_success},
};

/// The provider type, with the signer's wallet attached
pub type Wallet = DynProvider<Ethereum>;
/// A vault binding using the default generics
pub type VaultInstance = IWaultVaultInstance<Wallet>;
/// A strategy binding using the default generics
pub type StrategyInstance = IWaultStrategyInstance<Wallet>;
/// A token binding using the default generics
pub type TokenInstance = IERC20Instance<Wallet>;

/// A connection to a node through which the signer submits transactions
#[derive(Clone)]
pub struct EvmChain {
    /// The wallet-enabled provider
    provider: Wallet,
    /// The signer's address
    signer: Address,
}

impl EvmChain {
    /// Wrap a provider whose wallet signs as `signer`
    pub fn new(provider: Wallet, signer: Address) -> Self {
        Self { provider, signer }
    }

    /// The underlying provider
    pub fn provider(&self) -> &Wallet {
        &self.provider
    }
}

impl Chain for EvmChain {
    type Vault = VaultInstance;
    type Strategy = StrategyInstance;
    type Token = TokenInstance;

    fn signer_address(&self) -> Address {
        self.signer
    }

    async fn native_balance(&self, address: Address) -> Result<U256, ScriptError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| ScriptError::Rpc(e.to_string()))
    }

    async fn block_number(&self) -> Result<u64, ScriptError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ScriptError::Rpc(e.to_string()))
    }

    async fn deploy_contract(&self, deploy_code: Bytes) -> Result<Address, ScriptError> {
        RawCallBuilder::new_raw_deploy(self.provider.clone(), deploy_code)
            .deploy()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))
    }

    fn vault(&self, address: Address) -> VaultInstance {
        IWaultVaultInstance::new(address, self.provider.clone())
    }

    fn strategy(&self, address: Address) -> StrategyInstance {
        IWaultStrategyInstance::new(address, self.provider.clone())
    }

    fn token(&self, address: Address) -> TokenInstance {
        IERC20Instance::new(address, self.provider.clone())
    }
}

// The generated bindings expose methods with the same names as the trait
// methods, so calls below are fully qualified.

impl Vault for VaultInstance {
    fn address(&self) -> Address {
        *IWaultVaultInstance::address(self)
    }

    async fn set_strategy(&self, strategy: Address) -> Result<(), ScriptError> {
        wait_for_tx_success(self.setStrategy(strategy)).await?;
        Ok(())
    }

    async fn set_reward_factors(
        &self,
        reward_per_block: U256,
        start_block: u64,
        end_block: u64,
    ) -> Result<(), ScriptError> {
        let tx = self.setWaultRewardFactors(
            reward_per_block,
            U256::from(start_block),
            U256::from(end_block),
        );
        wait_for_tx_success(tx).await?;
        Ok(())
    }

    async fn set_reward_mode(&self, enabled: bool) -> Result<(), ScriptError> {
        wait_for_tx_success(self.setWaultRewardMode(enabled)).await?;
        Ok(())
    }

    async fn balance(&self) -> Result<U256, ScriptError> {
        call_helper(IWaultVaultInstance::balance(self)).await
    }

    async fn balance_of(&self, holder: Address) -> Result<U256, ScriptError> {
        call_helper(self.balanceOf(holder)).await
    }

    async fn total_supply(&self) -> Result<U256, ScriptError> {
        call_helper(self.totalSupply()).await
    }

    async fn price_per_full_share(&self) -> Result<U256, ScriptError> {
        call_helper(self.getPricePerFullShare()).await
    }

    async fn claimable(&self, holder: Address) -> Result<U256, ScriptError> {
        call_helper(IWaultVaultInstance::claimable(self, holder)).await
    }

    async fn reward_per_block(&self) -> Result<U256, ScriptError> {
        call_helper(self.waultRewardPerBlock()).await
    }

    async fn last_reward_block(&self) -> Result<U256, ScriptError> {
        call_helper(self.lastRewardBlock()).await
    }

    async fn acc_reward_per_share(&self) -> Result<U256, ScriptError> {
        call_helper(self.accWaultPerShare()).await
    }
}

impl Strategy for StrategyInstance {
    fn address(&self) -> Address {
        *IWaultStrategyInstance::address(self)
    }

    async fn balance_of_underlying(&self) -> Result<U256, ScriptError> {
        call_helper(self.balanceOf()).await
    }
}

impl Token for TokenInstance {
    fn address(&self) -> Address {
        *IERC20Instance::address(self)
    }

    async fn balance_of(&self, holder: Address) -> Result<U256, ScriptError> {
        call_helper(self.balanceOf(holder)).await
    }
}
