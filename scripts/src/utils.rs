//! Utilities for the vault scripts

use std::{fmt::Display, io::Write, str::FromStr, time::Duration};

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_contract::{CallBuilder, CallDecoder};
use tracing::info;

use crate::{chain::EvmChain, errors::ScriptError};

/// Sets up the client with which to instantiate contracts, signing with
/// `priv_key` and talking to the node at `rpc_url`.
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<EvmChain, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key.trim())
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let address = signer.address();

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("Connected to chain {chain_id} as {address:#x}");

    Ok(EvmChain::new(DynProvider::new(provider), address))
}

// ----------------
// | Transactions |
// ----------------

/// Send a transaction, wait for its receipt and ensure it was successful
pub async fn wait_for_tx_success<P, D>(
    tx: CallBuilder<P, D>,
) -> Result<TransactionReceipt, ScriptError>
where
    P: Provider,
    D: CallDecoder,
{
    let receipt = tx
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    Ok(receipt)
}

/// Send a call and return the result
pub async fn call_helper<P, D>(call: CallBuilder<P, D>) -> Result<D::CallOutput, ScriptError>
where
    P: Provider,
    D: CallDecoder,
{
    call.call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
}

// -----------
// | Helpers |
// -----------

/// Suspend for `delay` without blocking the runtime, skipping zero delays
pub async fn pause(delay: Duration, reason: &str) {
    if delay.is_zero() {
        return;
    }

    info!("Wait {} ms... ({reason})", delay.as_millis());
    tokio::time::sleep(delay).await;
}

/// Write one `label: value` line of a report
pub fn report_line(
    out: &mut impl Write,
    label: &str,
    value: impl Display,
) -> Result<(), ScriptError> {
    writeln!(out, "{label}: {value}")?;
    Ok(())
}
