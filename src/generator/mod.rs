//! Predeployed contract generators
//!
//! Each generator turns a compiled artifact plus a few addresses into genesis
//! `alloc` entries whose storage matches what the contract would hold after a
//! live deployment and initialization.

pub mod access_control;
pub mod addresses;
pub mod marionette;
pub mod proxy_admin;
pub mod upgradeable;

pub use access_control::{setup_role, write_address, write_uint256, RolesSlots};
pub use addresses::{MARIONETTE_ADDRESS, MARIONETTE_IMPLEMENTATION_ADDRESS};
pub use marionette::{
    marionette_storage, MarionetteArgs, MarionetteGenerator, MarionetteRoles, DEFAULT_ADMIN_ROLE,
    IMA_ROLE, PUPPETEER_ROLE,
};
pub use proxy_admin::ProxyAdminGenerator;
pub use upgradeable::{UpgradeableGenerator, UpgradeableMarionetteGenerator};

use crate::artifacts::ContractArtifact;
use crate::errors::{GeneratorError, Result};
use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;

/// Contract storage: slot -> value
pub type Storage = BTreeMap<B256, B256>;

/// Genesis allocation: address -> account
pub type Allocation = BTreeMap<Address, GenesisAccount>;

/// Nonce given to predeployed contract accounts, as if created by a transaction.
pub const CONTRACT_NONCE: u64 = 1;

/// A contract that can be placed directly into genesis.
pub trait PredeployedContract {
    /// Inputs needed to compute the contract's initial storage
    type Args;

    /// The compiled artifact whose runtime bytecode becomes account code.
    fn artifact(&self) -> &ContractArtifact;

    /// Storage the contract would hold at `contract_address` after initialization.
    fn generate_storage(&self, contract_address: Address, args: &Self::Args) -> Result<Storage>;

    /// Build the genesis account for `contract_address`.
    fn generate(&self, contract_address: Address, args: &Self::Args) -> Result<GenesisAccount> {
        let storage = self.generate_storage(contract_address, args)?;
        Ok(contract_account(self.artifact(), storage, U256::ZERO))
    }

    /// Build a single-entry allocation for `contract_address`.
    fn generate_allocation(&self, contract_address: Address, args: &Self::Args) -> Result<Allocation> {
        let mut alloc = Allocation::new();
        alloc.insert(contract_address, self.generate(contract_address, args)?);
        Ok(alloc)
    }
}

/// Add the accounts of `other` to `alloc`, refusing to replace an existing account.
pub fn merge_allocation(alloc: &mut Allocation, other: Allocation) -> Result<()> {
    for (address, account) in other {
        if alloc.contains_key(&address) {
            return Err(GeneratorError::AddressCollision { address });
        }
        alloc.insert(address, account);
    }
    Ok(())
}

/// Genesis account holding `artifact`'s runtime code and the given storage.
///
/// Empty storage is emitted as `None` so the account serializes without a
/// `storage` field.
pub(crate) fn contract_account(
    artifact: &ContractArtifact,
    storage: Storage,
    balance: U256,
) -> GenesisAccount {
    GenesisAccount {
        balance,
        nonce: Some(CONTRACT_NONCE),
        code: Some(artifact.deployed_bytecode.clone()),
        storage: (!storage.is_empty()).then_some(storage),
        private_key: None,
    }
}
