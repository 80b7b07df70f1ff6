//! Network selection and the per-network configuration record
//!
//! Every value is read once, at startup, from one of two complete sets of
//! environment variables: `<PREFIX>_MAIN` for the production network and
//! `<PREFIX>_TEST` for the test network. Values are kept as raw strings and
//! only validated when a command asks for them.

use std::{
    env,
    fmt::{self, Display},
    str::FromStr,
};

use alloy::primitives::Address;

use crate::{
    constants::{
        MAINNET_FLAG, MAINNET_SUFFIX, REWARD_TOKEN_VAR_PREFIX, STRATEGY_VAR_PREFIX,
        TESTNET_SUFFIX, TOKEN_VAR_PREFIX, URL_VAR_PREFIX, VAULT_VAR_PREFIX,
    },
    errors::ScriptError,
};

/// The network a run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// The production network
    Mainnet,
    /// The test network
    Testnet,
}

impl Network {
    /// Select the network from the value of the network flag.
    ///
    /// Only the exact value `mainnet` selects the production network.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(MAINNET_FLAG) => Network::Mainnet,
            _ => Network::Testnet,
        }
    }

    /// The environment variable name for `prefix` on this network
    pub fn var_name(&self, prefix: &str) -> String {
        let suffix = match self {
            Network::Mainnet => MAINNET_SUFFIX,
            Network::Testnet => TESTNET_SUFFIX,
        };
        format!("{prefix}_{suffix}")
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// The endpoint and contract addresses of one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The network these values were resolved for
    pub network: Network,
    /// The node's RPC URL
    pub rpc_url: Option<String>,
    /// The vault's underlying token
    pub token: Option<String>,
    /// The token the vault pays rewards in
    pub reward_token: Option<String>,
    /// A previously deployed vault
    pub vault: Option<String>,
    /// A previously deployed strategy
    pub strategy: Option<String>,
}

impl NetworkConfig {
    /// Resolve the configuration of `network` through `lookup`
    pub fn resolve<F>(network: Network, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |prefix: &str| lookup(&network.var_name(prefix));
        Self {
            network,
            rpc_url: get(URL_VAR_PREFIX),
            token: get(TOKEN_VAR_PREFIX),
            reward_token: get(REWARD_TOKEN_VAR_PREFIX),
            vault: get(VAULT_VAR_PREFIX),
            strategy: get(STRATEGY_VAR_PREFIX),
        }
    }

    /// Resolve the configuration of `network` from the process environment
    pub fn from_env(network: Network) -> Self {
        Self::resolve(network, |key| env::var(key).ok())
    }

    /// Replace the RPC URL, if an override is given
    pub fn with_rpc_url(mut self, rpc_url: Option<String>) -> Self {
        if rpc_url.is_some() {
            self.rpc_url = rpc_url;
        }
        self
    }

    /// The node's RPC URL
    pub fn rpc_url(&self) -> Result<&str, ScriptError> {
        self.rpc_url
            .as_deref()
            .ok_or_else(|| self.missing(URL_VAR_PREFIX))
    }

    /// The address of the vault's underlying token
    pub fn token_address(&self) -> Result<Address, ScriptError> {
        self.address(&self.token, TOKEN_VAR_PREFIX)
    }

    /// The address of the reward token
    pub fn reward_token_address(&self) -> Result<Address, ScriptError> {
        self.address(&self.reward_token, REWARD_TOKEN_VAR_PREFIX)
    }

    /// The address of the configured vault
    pub fn vault_address(&self) -> Result<Address, ScriptError> {
        self.address(&self.vault, VAULT_VAR_PREFIX)
    }

    /// The address of the configured strategy
    pub fn strategy_address(&self) -> Result<Address, ScriptError> {
        self.address(&self.strategy, STRATEGY_VAR_PREFIX)
    }

    /// Parse a configured address, naming the variable it came from on failure
    fn address(&self, value: &Option<String>, prefix: &str) -> Result<Address, ScriptError> {
        let raw = value.as_deref().ok_or_else(|| self.missing(prefix))?;
        parse_address(raw).map_err(|e| {
            ScriptError::InvalidAddress(format!("{}={raw}: {e}", self.network.var_name(prefix)))
        })
    }

    /// The error for an unset variable
    fn missing(&self, prefix: &str) -> ScriptError {
        ScriptError::MissingConfig(self.network.var_name(prefix))
    }
}

/// Parse a hex address
pub fn parse_address(raw: &str) -> Result<Address, ScriptError> {
    Address::from_str(raw.trim()).map_err(|e| ScriptError::InvalidAddress(e.to_string()))
}
