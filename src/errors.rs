use alloy_primitives::Address;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading artifacts or generating predeployed allocations
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required input address was not supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Artifact file does not exist
    #[error("Artifact not found: {}", path.display())]
    ArtifactNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Artifact file exists but could not be read
    #[error("Failed to read artifact {}", path.display())]
    ArtifactRead {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Artifact is not valid JSON or lacks required fields
    #[error("Malformed artifact {}: {source}", path.display())]
    MalformedArtifact {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Artifact carries no runtime bytecode (interface, abstract contract or stripped build)
    #[error("Artifact for {contract} has no deployed bytecode")]
    MissingBytecode {
        /// Contract name from the artifact
        contract: String,
    },

    /// Artifact ABI does not expose a function the generator relies on
    #[error("Contract {contract} does not declare {signature}")]
    MissingFunction {
        /// Contract name from the artifact
        contract: String,
        /// Canonical function signature, e.g. `hasRole(bytes32,address)`
        signature: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read configuration {}", path.display())]
    ConfigRead {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or has invalid values
    #[error("Invalid configuration {}: {source}", path.display())]
    MalformedConfig {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Two accounts of one allocation were assigned the same address
    #[error("Address {address} is assigned to more than one predeployed account")]
    AddressCollision {
        /// The contested address
        address: Address,
    },
}

/// Result alias for generator operations
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
