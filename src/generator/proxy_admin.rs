use super::access_control::write_address;
use super::{PredeployedContract, Storage};
use crate::artifacts::ContractArtifact;
use crate::errors::Result;
use crate::onchain::proxy_admin_slots;
use alloy_primitives::Address;
use std::path::Path;

/// Artifact name of OpenZeppelin's ProxyAdmin.
pub const PROXY_ADMIN_CONTRACT_NAME: &str = "ProxyAdmin";

/// Generates a ProxyAdmin owned by a given address
///
/// Storage layout:
///   slot 0: `_owner` (Ownable)
#[derive(Debug, Clone)]
pub struct ProxyAdminGenerator {
    artifact: ContractArtifact,
}

impl ProxyAdminGenerator {
    /// Wrap an already-loaded ProxyAdmin artifact.
    pub fn new(artifact: ContractArtifact) -> Self {
        Self { artifact }
    }

    /// Load `ProxyAdmin.json` from an artifacts directory.
    pub fn from_artifacts_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(ContractArtifact::from_dir(dir, PROXY_ADMIN_CONTRACT_NAME)?))
    }
}

impl PredeployedContract for ProxyAdminGenerator {
    /// Owner address
    type Args = Address;

    fn artifact(&self) -> &ContractArtifact {
        &self.artifact
    }

    fn generate_storage(&self, _contract_address: Address, owner: &Address) -> Result<Storage> {
        let mut storage = Storage::new();
        write_address(&mut storage, proxy_admin_slots::OWNER, *owner);
        Ok(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{write_artifact, TempDir};
    use crate::onchain::{read_owner, AllocationStorageReader};
    use alloy_primitives::address;

    #[test]
    fn test_proxy_admin_owner() {
        let dir = TempDir::new().unwrap();
        write_artifact(dir.path(), "ProxyAdmin", serde_json::json!([]), "0x6080");
        let generator = ProxyAdminGenerator::from_artifacts_dir(dir.path()).unwrap();

        let proxy_admin = address!("d200000000000000000000000000000000000001");
        let owner = address!("d200000000000000000000000000000000000002");
        let alloc = generator.generate_allocation(proxy_admin, &owner).unwrap();

        assert_eq!(alloc.len(), 1);
        let reader = AllocationStorageReader::new(&alloc);
        assert_eq!(read_owner(&reader, proxy_admin), Some(owner));
    }
}
