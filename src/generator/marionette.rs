use super::access_control::{setup_role, write_uint256, RolesSlots};
use super::{PredeployedContract, Storage};
use crate::artifacts::ContractArtifact;
use crate::errors::{GeneratorError, Result};
use crate::onchain::{marionette_slots, selectors};
use alloy_primitives::{b256, Address, B256, U256};
use std::path::Path;
use tracing::info;

/// Artifact name of the Marionette implementation.
pub const MARIONETTE_CONTRACT_NAME: &str = "Marionette";

/// `DEFAULT_ADMIN_ROLE = 0x00`
pub const DEFAULT_ADMIN_ROLE: B256 = B256::ZERO;
/// `IMA_ROLE = keccak256("IMA_ROLE")`
pub const IMA_ROLE: B256 =
    b256!("18f7915ceb1a15dd0c3170ef6d30ba89e0bcb07f4fb55858579385663709107e");
/// `PUPPETEER_ROLE = keccak256("PUPPETEER_ROLE")`
pub const PUPPETEER_ROLE: B256 =
    b256!("dbe8b307f60c9ed0e3764e9100b17f1d4c5fd58ba7889d208d166f481302d4cf");

/// slot 0: `_initialized`, `_initializing`
pub const INITIALIZED_SLOT: U256 = marionette_slots::INITIALIZED;
/// slot 101: `_roles`
pub const ROLES_SLOT: U256 = marionette_slots::ROLES;
/// slot 151: `_roleMembers`
pub const ROLE_MEMBERS_SLOT: U256 = marionette_slots::ROLE_MEMBERS;

const ROLES_SLOTS: RolesSlots = RolesSlots { roles: ROLES_SLOT, role_members: ROLE_MEMBERS_SLOT };

/// Functions the artifact must expose for the generated storage to be meaningful.
const REQUIRED_FUNCTIONS: &[&str] = &[
    selectors::HAS_ROLE,
    selectors::GET_ROLE_ADMIN,
    selectors::GET_ROLE_MEMBER,
    selectors::GET_ROLE_MEMBER_COUNT,
    selectors::IMA_ROLE,
    selectors::PUPPETEER_ROLE,
];

/// The four addresses that fully determine Marionette's initial storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarionetteRoles {
    /// The Marionette contract itself (holds `DEFAULT_ADMIN_ROLE`)
    pub marionette: Address,
    /// Owner (first `PUPPETEER_ROLE` member)
    pub owner: Address,
    /// IMA message proxy (holds `IMA_ROLE`)
    pub ima: Address,
    /// sChain owner (second `PUPPETEER_ROLE` member)
    pub schain_owner: Address,
}

impl MarionetteRoles {
    /// Members of `PUPPETEER_ROLE`, in grant order.
    pub fn puppeteers(&self) -> [Address; 2] {
        [self.owner, self.schain_owner]
    }
}

/// Storage of an initialized Marionette.
///
/// Returns a map in the genesis storage format:
/// ```json
/// {
///   "0x0000000000000000000000000000000000000000000000000000000000000000":
///   "0x0000000000000000000000000000000000000000000000000000000000000001"
/// }
/// ```
pub fn marionette_storage(roles: &MarionetteRoles) -> Storage {
    let mut storage = Storage::new();
    write_uint256(&mut storage, INITIALIZED_SLOT, U256::from(1));
    setup_role(&mut storage, ROLES_SLOTS, DEFAULT_ADMIN_ROLE, &[roles.marionette]);
    setup_role(&mut storage, ROLES_SLOTS, IMA_ROLE, &[roles.ima]);
    setup_role(&mut storage, ROLES_SLOTS, PUPPETEER_ROLE, &roles.puppeteers());
    storage
}

/// Possibly incomplete Marionette inputs, validated at generation time.
///
/// `marionette` may be left unset; it then defaults to the address the
/// contract is being generated for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarionetteArgs {
    /// Override for the contract's own address
    pub marionette: Option<Address>,
    /// Owner address
    pub owner: Option<Address>,
    /// IMA address
    pub ima: Option<Address>,
    /// sChain owner address
    pub schain_owner: Option<Address>,
}

impl MarionetteArgs {
    /// Create empty arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the contract's own address
    pub fn with_marionette(mut self, marionette: Address) -> Self {
        self.marionette = Some(marionette);
        self
    }

    /// Builder method to set the owner
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Builder method to set the IMA address
    pub fn with_ima(mut self, ima: Address) -> Self {
        self.ima = Some(ima);
        self
    }

    /// Builder method to set the sChain owner
    pub fn with_schain_owner(mut self, schain_owner: Address) -> Self {
        self.schain_owner = Some(schain_owner);
        self
    }

    /// Resolve into complete roles, failing on the first missing address.
    pub fn resolve(&self, contract_address: Address) -> Result<MarionetteRoles> {
        Ok(MarionetteRoles {
            marionette: self.marionette.unwrap_or(contract_address),
            owner: self.owner.ok_or(GeneratorError::MissingArgument("owner"))?,
            ima: self.ima.ok_or(GeneratorError::MissingArgument("ima"))?,
            schain_owner: self.schain_owner.ok_or(GeneratorError::MissingArgument("schain_owner"))?,
        })
    }
}

/// Generates a non-upgradeable Marionette instance
#[derive(Debug, Clone)]
pub struct MarionetteGenerator {
    artifact: ContractArtifact,
}

impl MarionetteGenerator {
    /// Wrap an already-loaded artifact, checking that it exposes the role getters.
    pub fn new(artifact: ContractArtifact) -> Result<Self> {
        artifact.require_functions(REQUIRED_FUNCTIONS)?;
        Ok(Self { artifact })
    }

    /// Load `Marionette.json` from an artifacts directory.
    pub fn from_artifacts_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(ContractArtifact::from_dir(dir, MARIONETTE_CONTRACT_NAME)?)
    }
}

impl PredeployedContract for MarionetteGenerator {
    type Args = MarionetteArgs;

    fn artifact(&self) -> &ContractArtifact {
        &self.artifact
    }

    fn generate_storage(&self, contract_address: Address, args: &MarionetteArgs) -> Result<Storage> {
        let roles = args.resolve(contract_address)?;
        let storage = marionette_storage(&roles);
        info!(
            contract = %contract_address,
            owner = %roles.owner,
            ima = %roles.ima,
            schain_owner = %roles.schain_owner,
            slots = storage.len(),
            "Generated Marionette storage"
        );
        Ok(storage)
    }
}
