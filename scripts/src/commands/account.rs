//! Report the signer's balance and the chain height

use std::io::Write;

use alloy::primitives::{Address, U256};
use tracing::info;

use crate::{contracts::Chain, errors::ScriptError, units::format_ether, utils::report_line};

/// The signer's account as seen by the node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    /// The signer's address
    pub address: Address,
    /// The signer's native balance, in wei
    pub balance: U256,
    /// The current block height
    pub block_number: u64,
}

/// Print the signer's address, its balance in wei and in ether, and the
/// current block height, in that order
pub async fn report_account<C: Chain>(
    chain: &C,
    out: &mut impl Write,
) -> Result<AccountReport, ScriptError> {
    info!("Reporting signer account");

    let address = chain.signer_address();
    report_line(out, "Account", address)?;

    let balance = chain.native_balance(address).await?;
    report_line(out, "Account balance (wei)", balance)?;
    report_line(out, "Account balance (ether)", format_ether(balance)?)?;

    let block_number = chain.block_number().await?;
    report_line(out, "Block number", block_number)?;

    Ok(AccountReport {
        address,
        balance,
        block_number,
    })
}
