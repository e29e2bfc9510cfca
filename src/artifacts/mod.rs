//! Compiled contract artifacts
//!
//! Loads the hardhat artifact (`<Name>.json`) that the contract build pipeline
//! produces. The artifact supplies the ABI and the runtime bytecode placed in
//! genesis.
//!
//! # Format
//!
//! ```json
//! {
//!   "contractName": "Marionette",
//!   "abi": [ ... ],
//!   "bytecode": "0x6080...",
//!   "deployedBytecode": "0x6080..."
//! }
//! ```

use crate::errors::{GeneratorError, Result};
use crate::onchain::function_selector;
use alloy_json_abi::{ContractObject, JsonAbi};
use alloy_primitives::Bytes;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A compiled contract: name, ABI and runtime code
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Contract name (artifact file stem)
    pub name: String,
    /// Parsed ABI
    pub abi: JsonAbi,
    /// Runtime bytecode, placed in genesis as account code
    pub deployed_bytecode: Bytes,
}

impl ContractArtifact {
    /// Load `<dir>/<name>.json`.
    pub fn from_dir(dir: impl AsRef<Path>, contract_name: &str) -> Result<Self> {
        Self::from_hardhat_artifact(&dir.as_ref().join(format!("{contract_name}.json")))
    }

    /// Load a hardhat artifact. The contract is named after the file stem.
    pub fn from_hardhat_artifact(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GeneratorError::ArtifactNotFound { path: path.to_path_buf() });
        }
        let contents = fs::read_to_string(path)
            .map_err(|source| GeneratorError::ArtifactRead { path: path.to_path_buf(), source })?;
        let object: ContractObject = serde_json::from_str(&contents)
            .map_err(|source| GeneratorError::MalformedArtifact { path: path.to_path_buf(), source })?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let deployed_bytecode = match object.deployed_bytecode {
            Some(code) if !code.is_empty() => code,
            _ => return Err(GeneratorError::MissingBytecode { contract: name }),
        };

        debug!(
            contract = %name,
            path = %path.display(),
            code_size = deployed_bytecode.len(),
            "Loaded contract artifact"
        );

        Ok(Self { name, abi: object.abi.unwrap_or_default(), deployed_bytecode })
    }

    /// Whether the ABI declares a function with the given canonical signature.
    ///
    /// Matching is done on selectors, so `hasRole(bytes32,address)` matches
    /// regardless of parameter names.
    pub fn declares_function(&self, signature: &str) -> bool {
        let wanted = function_selector(signature);
        self.abi.functions().any(|function| function.selector().0 == wanted)
    }

    /// Fail unless every signature is declared by the ABI.
    pub fn require_functions(&self, signatures: &[&str]) -> Result<()> {
        for signature in signatures {
            if !self.declares_function(signature) {
                return Err(GeneratorError::MissingFunction {
                    contract: self.name.clone(),
                    signature: (*signature).to_string(),
                });
            }
        }
        Ok(())
    }
}
