//! Loading compiled contract artifacts for deployment

use std::{fs, path::Path};

use alloy::primitives::{hex::FromHex, Bytes};
use alloy_sol_types::{abi::TokenSeq, SolType, SolValue};
use serde_json::Value;

use crate::{constants::BYTECODE_KEY, errors::ScriptError};

/// The creation code of a compiled contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifact {
    /// The contract's name, for logging
    pub name: String,
    /// The creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Read a Hardhat-style JSON artifact, i.e. an object with a hex `bytecode` field
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {e}", path.display())))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_json(name, &contents)
    }

    /// Parse an artifact from its JSON contents
    pub fn from_json(name: impl Into<String>, contents: &str) -> Result<Self, ScriptError> {
        let name = name.into();
        let json: Value = serde_json::from_str(contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;

        let code = json
            .get(BYTECODE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ScriptError::ArtifactParsing(format!("{name}: missing `{BYTECODE_KEY}` field"))
            })?;
        let bytecode = Bytes::from_hex(code)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{name}: {e}")))?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{name}: empty bytecode, is the contract abstract?"
            )));
        }

        Ok(Self { name, bytecode })
    }

    /// The creation code followed by the ABI-encoded constructor arguments
    pub fn deploy_code<A: SolValue>(&self, constructor_args: A) -> Bytes
    where
        for<'a> <A::SolType as SolType>::Token<'a>: TokenSeq<'a>,
    {
        let mut code = self.bytecode.to_vec();
        code.extend(constructor_args.abi_encode_params());
        code.into()
    }
}
