//! Definitions of CLI arguments and commands for the vault scripts

use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::{
    artifacts::ContractArtifact,
    commands::{deploy, inspect, report_account, ContractSource, DeployParams},
    config::{parse_address, Network, NetworkConfig},
    constants::{
        DEFAULT_REWARD_BLOCKS, DEFAULT_REWARD_PER_BLOCK, DEFAULT_STRATEGY_ARTIFACT,
        DEFAULT_VAULT_ARTIFACT,
    },
    errors::ScriptError,
    units::parse_ether,
    utils::setup_client,
};

/// Deploy, configure and inspect the vault & strategy contracts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the signer
    #[arg(long = "pkey", env = "PKEY", hide_env_values = true)]
    pub priv_key: String,

    /// Network selector, `mainnet` picks the `*_MAIN` variables,
    /// anything else the `*_TEST` variables
    #[arg(long, env = "NETWORK")]
    pub network: Option<String>,

    /// Network RPC URL, overrides `URL_MAIN` / `URL_TEST`
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Resolve the configuration, connect and run the selected command,
    /// writing the report to stdout
    pub async fn run(self) -> Result<(), ScriptError> {
        let network = Network::from_flag(self.network.as_deref());
        let config = NetworkConfig::from_env(network).with_rpc_url(self.rpc_url);
        info!("Using {network} configuration");

        let chain = setup_client(&self.priv_key, config.rpc_url()?).await?;
        let mut out = io::stdout().lock();

        match self.command {
            Command::Account => {
                report_account(&chain, &mut out).await?;
            }
            Command::Deploy(args) => {
                let params = args.into_params()?;
                deploy(&chain, &config, &params, &mut out).await?;
            }
            Command::Inspect(args) => {
                let holder = parse_address(&args.holder)?;
                inspect(&chain, &config, holder, &mut out).await?;
            }
        }

        Ok(())
    }
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Print the signer's balance and the current block height
    Account,
    /// Deploy the vault & strategy and configure their reward schedule
    Deploy(DeployArgs),
    /// Print a snapshot of the deployed vault & strategy accounting
    Inspect(InspectArgs),
}

/// Whether to publish a contract or reuse the configured one
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// Publish a fresh instance
    Deploy,
    /// Reuse the address from the network configuration
    Attach,
}

/// Deploy the vault & strategy
///
/// The vault is constructed over the network's token, the strategy over the
/// vault. Once both exist the vault is pointed at the strategy and given a
/// reward schedule starting at the current block.
#[derive(Args)]
pub struct DeployArgs {
    /// Publish a new vault or attach to `VAULT_MAIN` / `VAULT_TEST`
    #[arg(long, value_enum, default_value_t = SourceMode::Deploy)]
    pub vault_source: SourceMode,

    /// Publish a new strategy or attach to `STRATEGY_MAIN` / `STRATEGY_TEST`
    #[arg(long, value_enum, default_value_t = SourceMode::Deploy)]
    pub strategy_source: SourceMode,

    /// Compiled vault artifact
    #[arg(long, default_value = DEFAULT_VAULT_ARTIFACT)]
    pub vault_artifact: PathBuf,

    /// Compiled strategy artifact
    #[arg(long, default_value = DEFAULT_STRATEGY_ARTIFACT)]
    pub strategy_artifact: PathBuf,

    /// Reward emitted per block, in whole tokens
    #[arg(long, default_value = DEFAULT_REWARD_PER_BLOCK)]
    pub reward_per_block: String,

    /// Length of the reward window, in blocks
    #[arg(long, default_value_t = DEFAULT_REWARD_BLOCKS)]
    pub reward_blocks: u64,

    /// Switch reward distribution off once the schedule is set
    #[arg(long)]
    pub disable_reward_mode: bool,

    /// Milliseconds to wait between transactions
    #[arg(long, default_value_t = 0)]
    pub step_delay_ms: u64,
}

impl DeployArgs {
    /// Load artifacts and parse amounts into deployment parameters
    pub fn into_params(self) -> Result<DeployParams, ScriptError> {
        Ok(DeployParams {
            vault: source(self.vault_source, &self.vault_artifact)?,
            strategy: source(self.strategy_source, &self.strategy_artifact)?,
            reward_per_block: parse_ether(&self.reward_per_block)?,
            reward_blocks: self.reward_blocks,
            disable_reward_mode: self.disable_reward_mode,
            step_delay: Duration::from_millis(self.step_delay_ms),
        })
    }
}

/// Build a contract source, reading the artifact only when deploying
fn source(mode: SourceMode, artifact: &Path) -> Result<ContractSource, ScriptError> {
    match mode {
        SourceMode::Deploy => Ok(ContractSource::Deploy(ContractArtifact::from_file(
            artifact,
        )?)),
        SourceMode::Attach => Ok(ContractSource::Attach),
    }
}

/// Inspect the deployed vault & strategy
#[derive(Args)]
pub struct InspectArgs {
    /// The share holder whose balance and rewards are reported
    #[arg(long, env = "HOLDER")]
    pub holder: String,
}
