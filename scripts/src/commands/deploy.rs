//! Deploy the vault & strategy, wire them together and start the reward schedule

use std::{io::Write, time::Duration};

use alloy::primitives::{Address, I256, U256};
use tracing::{info, warn};

use crate::{
    accounting::balance_delta,
    artifacts::ContractArtifact,
    config::NetworkConfig,
    contracts::{Chain, Vault},
    errors::ScriptError,
    units::format_ether,
    utils::{pause, report_line},
};

/// Where a contract used by the deployment comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractSource {
    /// Publish a fresh instance from the given artifact
    Deploy(ContractArtifact),
    /// Reuse the instance at the configured address
    Attach,
}

/// The inputs of a deployment run
#[derive(Debug, Clone)]
pub struct DeployParams {
    /// Where the vault comes from
    pub vault: ContractSource,
    /// Where the strategy comes from
    pub strategy: ContractSource,
    /// The reward emitted per block, in raw units
    pub reward_per_block: U256,
    /// The length of the reward window, in blocks
    pub reward_blocks: u64,
    /// Whether to switch reward distribution off after scheduling it
    pub disable_reward_mode: bool,
    /// A pause between consecutive transactions
    pub step_delay: Duration,
}

/// The block range a reward schedule covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardWindow {
    /// The first rewarded block
    pub start_block: u64,
    /// The last rewarded block
    pub end_block: u64,
}

impl RewardWindow {
    /// A window of `length` blocks beginning at `start_block`
    pub fn starting_at(start_block: u64, length: u64) -> Result<Self, ScriptError> {
        let end_block = start_block
            .checked_add(length)
            .ok_or(ScriptError::Overflow)?;
        Ok(Self {
            start_block,
            end_block,
        })
    }
}

/// The outcome of a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// The vault's address
    pub vault: Address,
    /// The strategy's address
    pub strategy: Address,
    /// The scheduled reward window
    pub reward_window: RewardWindow,
    /// The signer's native balance spent, in wei
    pub cost: I256,
}

/// Deploy (or attach to) the vault and strategy, point the vault at the
/// strategy and set its reward schedule.
///
/// Nothing is rolled back on failure: re-running after a partial failure
/// publishes fresh instances for every contract sourced with
/// [`ContractSource::Deploy`].
pub async fn deploy<C: Chain>(
    chain: &C,
    config: &NetworkConfig,
    params: &DeployParams,
    out: &mut impl Write,
) -> Result<DeployReport, ScriptError> {
    let deployer = chain.signer_address();
    report_line(out, "Deploying contracts with the account", deployer)?;

    let before_balance = chain.native_balance(deployer).await?;
    report_line(out, "Account balance", before_balance)?;

    // --- Contracts --- //

    let vault_address = match &params.vault {
        ContractSource::Deploy(artifact) => {
            deploy_vault(chain, artifact, config.token_address()?).await?
        }
        ContractSource::Attach => {
            let address = config.vault_address()?;
            warn!("Attaching to existing vault at {address:#x}");
            address
        }
    };
    report_line(out, "Vault", vault_address)?;
    let vault = chain.vault(vault_address);

    let strategy_address = match &params.strategy {
        ContractSource::Deploy(artifact) => {
            pause(params.step_delay, "before strategy deployment").await;
            deploy_strategy(chain, artifact, vault_address).await?
        }
        ContractSource::Attach => {
            let address = config.strategy_address()?;
            warn!("Attaching to existing strategy at {address:#x}");
            address
        }
    };
    report_line(out, "Strategy", strategy_address)?;

    // --- Wiring --- //

    pause(params.step_delay, "before setting strategy").await;
    wire_up(&vault, strategy_address).await?;

    pause(params.step_delay, "before setting reward factors").await;
    let block = chain.block_number().await?;
    let reward_window = RewardWindow::starting_at(block, params.reward_blocks)?;
    configure_rewards(&vault, params.reward_per_block, reward_window).await?;
    report_line(
        out,
        "Reward schedule",
        format!(
            "{} per block over blocks {}..={}",
            format_ether(params.reward_per_block)?,
            reward_window.start_block,
            reward_window.end_block
        ),
    )?;

    if params.disable_reward_mode {
        pause(params.step_delay, "before disabling reward mode").await;
        warn!("Disabling reward distribution");
        vault.set_reward_mode(false).await?;
    }

    // --- Cost --- //

    let after_balance = chain.native_balance(deployer).await?;
    let cost = balance_delta(before_balance, after_balance)?;
    report_line(out, "Deployment cost", cost)?;

    Ok(DeployReport {
        vault: vault_address,
        strategy: strategy_address,
        reward_window,
        cost,
    })
}

/// Publish a new vault over `token`
pub async fn deploy_vault<C: Chain>(
    chain: &C,
    artifact: &ContractArtifact,
    token: Address,
) -> Result<Address, ScriptError> {
    info!("Deploying {} for token {token:#x}...", artifact.name);
    chain.deploy_contract(artifact.deploy_code((token,))).await
}

/// Publish a new strategy over `vault`
pub async fn deploy_strategy<C: Chain>(
    chain: &C,
    artifact: &ContractArtifact,
    vault: Address,
) -> Result<Address, ScriptError> {
    info!("Deploying {} for vault {vault:#x}...", artifact.name);
    chain.deploy_contract(artifact.deploy_code((vault,))).await
}

/// Point `vault` at `strategy`
pub async fn wire_up<V: Vault>(vault: &V, strategy: Address) -> Result<(), ScriptError> {
    info!("Setting strategy address...");
    vault.set_strategy(strategy).await
}

/// Set a linear reward schedule of `reward_per_block` over `window`
pub async fn configure_rewards<V: Vault>(
    vault: &V,
    reward_per_block: U256,
    window: RewardWindow,
) -> Result<(), ScriptError> {
    info!("Setting reward factors...");
    vault
        .set_reward_factors(reward_per_block, window.start_block, window.end_block)
        .await
}
