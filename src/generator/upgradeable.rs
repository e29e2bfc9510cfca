use super::addresses::MARIONETTE_IMPLEMENTATION_ADDRESS;
use super::marionette::MarionetteGenerator;
use super::{contract_account, Allocation, PredeployedContract};
use crate::artifacts::ContractArtifact;
use crate::errors::{GeneratorError, Result};
use crate::onchain::{eip1967_slots, encode_address};
use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, U256};
use std::path::Path;
use tracing::info;

/// Artifact name of OpenZeppelin's TransparentUpgradeableProxy.
pub const PROXY_CONTRACT_NAME: &str = "TransparentUpgradeableProxy";

/// Places an implementation generator behind a transparent EIP-1967 proxy.
///
/// The proxy account carries the implementation's storage (the proxy is what
/// gets initialized on a live network) plus the EIP-1967 implementation and
/// admin slots. The implementation account carries only code.
#[derive(Debug, Clone)]
pub struct UpgradeableGenerator<G> {
    implementation: G,
    proxy: ContractArtifact,
    implementation_address: Address,
    balance: U256,
}

/// Upgradeable Marionette: Marionette logic behind a transparent proxy
pub type UpgradeableMarionetteGenerator = UpgradeableGenerator<MarionetteGenerator>;

impl<G: PredeployedContract> UpgradeableGenerator<G> {
    /// Create a generator from an implementation generator and the proxy artifact.
    pub fn new(implementation: G, proxy: ContractArtifact, implementation_address: Address) -> Self {
        Self { implementation, proxy, implementation_address, balance: U256::ZERO }
    }

    /// Builder method to set the proxy's initial balance
    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    /// Builder method to place the implementation at a different address
    pub fn with_implementation_address(mut self, address: Address) -> Self {
        self.implementation_address = address;
        self
    }

    /// Address the implementation bytecode is placed at.
    pub fn implementation_address(&self) -> Address {
        self.implementation_address
    }

    /// The wrapped implementation generator.
    pub fn implementation(&self) -> &G {
        &self.implementation
    }

    /// Build the proxy account at `proxy_address`.
    pub fn generate_proxy(
        &self,
        proxy_address: Address,
        proxy_admin: Address,
        args: &G::Args,
    ) -> Result<GenesisAccount> {
        let mut storage = self.implementation.generate_storage(proxy_address, args)?;
        storage.insert(eip1967_slots::IMPLEMENTATION, encode_address(self.implementation_address));
        storage.insert(eip1967_slots::ADMIN, encode_address(proxy_admin));
        Ok(contract_account(&self.proxy, storage, self.balance))
    }

    /// Build the proxy and implementation accounts.
    ///
    /// Fails with [`GeneratorError::AddressCollision`] when the implementation
    /// would be placed at the proxy address.
    pub fn generate_allocation(
        &self,
        proxy_address: Address,
        proxy_admin: Address,
        args: &G::Args,
    ) -> Result<Allocation> {
        if self.implementation_address == proxy_address {
            return Err(GeneratorError::AddressCollision { address: proxy_address });
        }
        let proxy = self.generate_proxy(proxy_address, proxy_admin, args)?;
        let implementation =
            contract_account(self.implementation.artifact(), Default::default(), U256::ZERO);

        info!(
            proxy = %proxy_address,
            implementation = %self.implementation_address,
            admin = %proxy_admin,
            "Generated upgradeable allocation"
        );

        let mut alloc = Allocation::new();
        alloc.insert(proxy_address, proxy);
        alloc.insert(self.implementation_address, implementation);
        Ok(alloc)
    }
}

impl UpgradeableMarionetteGenerator {
    /// Load Marionette and TransparentUpgradeableProxy artifacts from a directory.
    ///
    /// The implementation is placed at [`MARIONETTE_IMPLEMENTATION_ADDRESS`].
    pub fn from_artifacts_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let implementation = MarionetteGenerator::from_artifacts_dir(dir)?;
        let proxy = ContractArtifact::from_dir(dir, PROXY_CONTRACT_NAME)?;
        Ok(Self::new(implementation, proxy, MARIONETTE_IMPLEMENTATION_ADDRESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{write_default_artifacts, TempDir};
    use crate::generator::{MarionetteArgs, MARIONETTE_ADDRESS};
    use crate::onchain::{
        is_initialized, read_proxy_admin, read_proxy_implementation, AllocationStorageReader,
    };
    use alloy_primitives::address;

    const PROXY_ADMIN: Address = address!("d200000000000000000000000000000000000001");

    fn args() -> MarionetteArgs {
        MarionetteArgs::new()
            .with_owner(address!("d200000000000000000000000000000000000002"))
            .with_ima(address!("d200000000000000000000000000000000000003"))
            .with_schain_owner(address!("d200000000000000000000000000000000000000"))
    }

    #[test]
    fn test_allocation_has_proxy_and_implementation() {
        let dir = TempDir::new().unwrap();
        write_default_artifacts(dir.path());
        let generator = UpgradeableMarionetteGenerator::from_artifacts_dir(dir.path()).unwrap();

        let alloc = generator.generate_allocation(MARIONETTE_ADDRESS, PROXY_ADMIN, &args()).unwrap();
        assert_eq!(alloc.len(), 2);

        let proxy = &alloc[&MARIONETTE_ADDRESS];
        assert_eq!(proxy.code.as_ref(), Some(&generator.proxy.deployed_bytecode));

        let implementation = &alloc[&MARIONETTE_IMPLEMENTATION_ADDRESS];
        assert_eq!(
            implementation.code.as_ref(),
            Some(&generator.implementation().artifact().deployed_bytecode)
        );
        assert!(implementation.storage.is_none());
    }

    #[test]
    fn test_eip1967_slots() {
        let dir = TempDir::new().unwrap();
        write_default_artifacts(dir.path());
        let generator = UpgradeableMarionetteGenerator::from_artifacts_dir(dir.path()).unwrap();

        let alloc = generator.generate_allocation(MARIONETTE_ADDRESS, PROXY_ADMIN, &args()).unwrap();
        let reader = AllocationStorageReader::new(&alloc);

        assert_eq!(
            read_proxy_implementation(&reader, MARIONETTE_ADDRESS),
            Some(MARIONETTE_IMPLEMENTATION_ADDRESS)
        );
        assert_eq!(read_proxy_admin(&reader, MARIONETTE_ADDRESS), Some(PROXY_ADMIN));
        assert!(is_initialized(&reader, MARIONETTE_ADDRESS));
        assert!(!is_initialized(&reader, MARIONETTE_IMPLEMENTATION_ADDRESS));
    }

    #[test]
    fn test_custom_implementation_address_and_balance() {
        let dir = TempDir::new().unwrap();
        write_default_artifacts(dir.path());
        let implementation_address = address!("00000000000000000000000000000000000000bb");
        let generator = UpgradeableMarionetteGenerator::from_artifacts_dir(dir.path())
            .unwrap()
            .with_implementation_address(implementation_address)
            .with_balance(U256::from(1000));

        let alloc = generator.generate_allocation(MARIONETTE_ADDRESS, PROXY_ADMIN, &args()).unwrap();
        assert!(alloc.contains_key(&implementation_address));
        assert_eq!(alloc[&MARIONETTE_ADDRESS].balance, U256::from(1000));
        assert_eq!(alloc[&implementation_address].balance, U256::ZERO);
    }

    #[test]
    fn test_implementation_at_proxy_address_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_default_artifacts(dir.path());
        let generator = UpgradeableMarionetteGenerator::from_artifacts_dir(dir.path())
            .unwrap()
            .with_implementation_address(MARIONETTE_ADDRESS);

        let err = generator
            .generate_allocation(MARIONETTE_ADDRESS, PROXY_ADMIN, &args())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::AddressCollision { address } if address == MARIONETTE_ADDRESS));
    }

    #[test]
    fn test_missing_argument_propagates() {
        let dir = TempDir::new().unwrap();
        write_default_artifacts(dir.path());
        let generator = UpgradeableMarionetteGenerator::from_artifacts_dir(dir.path()).unwrap();

        let err = generator
            .generate_allocation(MARIONETTE_ADDRESS, PROXY_ADMIN, &MarionetteArgs::new())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::MissingArgument("owner")));
    }

    #[test]
    fn test_missing_proxy_artifact() {
        let dir = TempDir::new().unwrap();
        write_default_artifacts(dir.path());
        std::fs::remove_file(dir.path().join("TransparentUpgradeableProxy.json")).unwrap();

        let err = UpgradeableMarionetteGenerator::from_artifacts_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::ArtifactNotFound { .. }));
    }
}
