//! Definitions of errors that can occur during the execution of the vault scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the vault scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// A configuration value required by the command was not set
    MissingConfig(String),
    /// A configured value could not be parsed as an address
    InvalidAddress(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method or sending a transaction
    ContractInteraction(String),
    /// Error querying chain state through the provider
    Rpc(String),
    /// Error converting between raw and decimal token amounts
    UnitConversion(String),
    /// 256-bit arithmetic over- or underflowed
    Overflow,
    /// Error writing the report
    Output(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::MissingConfig(s) => write!(f, "missing configuration value: {}", s),
            ScriptError::InvalidAddress(s) => write!(f, "invalid address: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::Rpc(s) => write!(f, "error querying node: {}", s),
            ScriptError::UnitConversion(s) => write!(f, "error converting amount: {}", s),
            ScriptError::Overflow => write!(f, "arithmetic overflow"),
            ScriptError::Output(s) => write!(f, "error writing output: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Output(e.to_string())
    }
}
