//! Print a snapshot of the vault & strategy accounting

use std::io::Write;

use alloy::primitives::{Address, I256, U256};
use tracing::info;

use crate::{
    accounting::{balance_delta, claimed, earned},
    config::NetworkConfig,
    contracts::{Chain, Strategy, Token, Vault},
    errors::ScriptError,
    units::{format_ether, format_signed_ether},
    utils::report_line,
};

/// The accounting snapshot taken by [`inspect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    /// The block height at the start of the snapshot
    pub block_number: u64,
    /// The underlying token held by the strategy
    pub strategy_token_balance: U256,
    /// The reward token held by the vault, i.e. undistributed rewards
    pub vault_reward_balance: U256,
    /// The vault's reward rate, raw
    pub reward_per_block: U256,
    /// The block the vault last accrued rewards at, raw
    pub last_reward_block: U256,
    /// The vault's accumulated reward per share, raw
    pub acc_reward_per_share: U256,
    /// The total supply of vault shares
    pub total_supply: U256,
    /// The underlying balance tracked by the strategy
    pub strategy_underlying: U256,
    /// The underlying balance tracked by the vault
    pub vault_balance: U256,
    /// The vault balance in excess of the share supply
    pub claimed: U256,
    /// The price of one share, scaled by `10^18`
    pub price_per_share: U256,
    /// The inspected holder
    pub holder: Address,
    /// The holder's share balance
    pub holder_balance: U256,
    /// The holder's unrealized earnings
    pub earned: I256,
    /// The reward the holder may claim
    pub claimable: U256,
    /// The signer's native balance spent while inspecting, in wei
    pub cost: I256,
}

/// Read the vault, strategy and token state in a fixed order, printing each
/// value as soon as it is retrieved.
///
/// All addresses are resolved before the first remote call.
pub async fn inspect<C: Chain>(
    chain: &C,
    config: &NetworkConfig,
    holder: Address,
    out: &mut impl Write,
) -> Result<InspectionReport, ScriptError> {
    let token = chain.token(config.token_address()?);
    let reward_token = chain.token(config.reward_token_address()?);
    let vault = chain.vault(config.vault_address()?);
    let strategy = chain.strategy(config.strategy_address()?);
    report_line(out, "Vault", vault.address())?;
    report_line(out, "Strategy", strategy.address())?;

    let signer = chain.signer_address();
    let before_balance = chain.native_balance(signer).await?;
    info!("Inspecting as {signer:#x}");

    let block_number = chain.block_number().await?;
    report_line(out, "Block number", block_number)?;

    // --- Token balances --- //

    let strategy_token_balance = token.balance_of(strategy.address()).await?;
    report_line(out, "Strategy token balance", format_ether(strategy_token_balance)?)?;
    let vault_reward_balance = reward_token.balance_of(vault.address()).await?;
    report_line(out, "Vault reward balance", format_ether(vault_reward_balance)?)?;

    // --- Reward accounting --- //

    let reward_per_block = vault.reward_per_block().await?;
    report_line(out, "Reward per block", reward_per_block)?;
    let last_reward_block = vault.last_reward_block().await?;
    report_line(out, "Last reward block", last_reward_block)?;
    let acc_reward_per_share = vault.acc_reward_per_share().await?;
    report_line(out, "Accumulated reward per share", acc_reward_per_share)?;

    // --- Share accounting --- //

    let total_supply = vault.total_supply().await?;
    report_line(out, "Total supply", format_ether(total_supply)?)?;
    let strategy_underlying = strategy.balance_of_underlying().await?;
    report_line(out, "Strategy underlying balance", format_ether(strategy_underlying)?)?;
    let vault_balance = vault.balance().await?;
    report_line(out, "Vault balance", format_ether(vault_balance)?)?;
    let claimed = claimed(vault_balance, total_supply);
    report_line(out, "Claimed", format_ether(claimed)?)?;
    let price_per_share = vault.price_per_full_share().await?;
    report_line(out, "Price per share", format_ether(price_per_share)?)?;

    // --- Holder --- //

    let holder_balance = vault.balance_of(holder).await?;
    report_line(
        out,
        "Holder balance",
        format!("{} ({holder})", format_ether(holder_balance)?),
    )?;
    let earned = earned(holder_balance, price_per_share)?;
    report_line(out, "Earned", format_signed_ether(earned)?)?;
    let claimable = vault.claimable(holder).await?;
    report_line(out, "Claimable", format_ether(claimable)?)?;

    let after_balance = chain.native_balance(signer).await?;
    let cost = balance_delta(before_balance, after_balance)?;
    report_line(out, "Inspection cost", cost)?;

    Ok(InspectionReport {
        block_number,
        strategy_token_balance,
        vault_reward_balance,
        reward_per_block,
        last_reward_block,
        acc_reward_per_share,
        total_supply,
        strategy_underlying,
        vault_balance,
        claimed,
        price_per_share,
        holder,
        holder_balance,
        earned,
        claimable,
        cost,
    })
}
