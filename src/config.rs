use crate::errors::{GeneratorError, Result};
use crate::generator::{
    merge_allocation, Allocation, MarionetteArgs, PredeployedContract, ProxyAdminGenerator,
    UpgradeableMarionetteGenerator, MARIONETTE_ADDRESS, MARIONETTE_IMPLEMENTATION_ADDRESS,
};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default directory holding `Marionette.json` and the proxy artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Inputs for generating the Marionette allocation.
///
/// Loaded from a camelCase JSON file and/or CLI flags:
/// ```json
/// {
///   "owner": "0xd200000000000000000000000000000000000002",
///   "schainOwner": "0xd200000000000000000000000000000000000000",
///   "ima": "0xd200000000000000000000000000000000000003",
///   "proxyAdmin": "0xd200000000000000000000000000000000000001"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationConfig {
    /// Marionette owner (puppeteer)
    pub owner: Option<Address>,
    /// sChain owner (puppeteer)
    pub schain_owner: Option<Address>,
    /// IMA message proxy
    pub ima: Option<Address>,
    /// Admin of the transparent proxy
    pub proxy_admin: Option<Address>,
    /// Proxy address override (default: [`MARIONETTE_ADDRESS`])
    pub marionette_address: Option<Address>,
    /// Implementation address override (default: [`MARIONETTE_IMPLEMENTATION_ADDRESS`])
    pub implementation_address: Option<Address>,
    /// Initial balance of the Marionette proxy, in wei
    pub balance: Option<U256>,
    /// Directory with the compiled artifacts
    pub artifacts_dir: Option<PathBuf>,
    /// Also emit a ProxyAdmin at `proxyAdmin`, owned by `owner` (default: false)
    pub include_proxy_admin: Option<bool>,
}

impl AllocationConfig {
    /// Load a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| GeneratorError::ConfigRead { path: path.to_path_buf(), source })?;
        serde_json::from_str(&contents)
            .map_err(|source| GeneratorError::MalformedConfig { path: path.to_path_buf(), source })
    }

    /// Overlay `other` on top of `self`: every value set in `other` wins.
    pub fn merge(self, other: AllocationConfig) -> Self {
        Self {
            owner: other.owner.or(self.owner),
            schain_owner: other.schain_owner.or(self.schain_owner),
            ima: other.ima.or(self.ima),
            proxy_admin: other.proxy_admin.or(self.proxy_admin),
            marionette_address: other.marionette_address.or(self.marionette_address),
            implementation_address: other.implementation_address.or(self.implementation_address),
            balance: other.balance.or(self.balance),
            artifacts_dir: other.artifacts_dir.or(self.artifacts_dir),
            include_proxy_admin: other.include_proxy_admin.or(self.include_proxy_admin),
        }
    }

    /// Builder method to set the owner
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Builder method to set the sChain owner
    pub fn with_schain_owner(mut self, schain_owner: Address) -> Self {
        self.schain_owner = Some(schain_owner);
        self
    }

    /// Builder method to set the IMA address
    pub fn with_ima(mut self, ima: Address) -> Self {
        self.ima = Some(ima);
        self
    }

    /// Builder method to set the proxy admin
    pub fn with_proxy_admin(mut self, proxy_admin: Address) -> Self {
        self.proxy_admin = Some(proxy_admin);
        self
    }

    /// Builder method to set the artifacts directory
    pub fn with_artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = Some(dir.into());
        self
    }

    /// Builder method to emit (or not) the ProxyAdmin account
    pub fn with_include_proxy_admin(mut self, include: bool) -> Self {
        self.include_proxy_admin = Some(include);
        self
    }

    /// Whether the ProxyAdmin account is emitted.
    pub fn include_proxy_admin(&self) -> bool {
        self.include_proxy_admin.unwrap_or(false)
    }

    /// Proxy address, defaulting to the canonical Marionette address.
    pub fn marionette_address(&self) -> Address {
        self.marionette_address.unwrap_or(MARIONETTE_ADDRESS)
    }

    /// Implementation address, defaulting to the canonical one.
    pub fn implementation_address(&self) -> Address {
        self.implementation_address.unwrap_or(MARIONETTE_IMPLEMENTATION_ADDRESS)
    }

    /// Artifacts directory, defaulting to [`DEFAULT_ARTIFACTS_DIR`].
    pub fn artifacts_dir(&self) -> PathBuf {
        self.artifacts_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR))
    }

    /// Marionette generator arguments from the configured addresses.
    pub fn marionette_args(&self) -> MarionetteArgs {
        MarionetteArgs {
            marionette: None,
            owner: self.owner,
            ima: self.ima,
            schain_owner: self.schain_owner,
        }
    }

    /// Generate the full allocation: proxy, implementation and optional ProxyAdmin.
    ///
    /// Fails with [`GeneratorError::AddressCollision`] if two of these accounts
    /// are configured at the same address.
    pub fn generate(&self) -> Result<Allocation> {
        let proxy_admin = self.proxy_admin.ok_or(GeneratorError::MissingArgument("proxy_admin"))?;
        let artifacts_dir = self.artifacts_dir();

        let generator = UpgradeableMarionetteGenerator::from_artifacts_dir(&artifacts_dir)?
            .with_implementation_address(self.implementation_address())
            .with_balance(self.balance.unwrap_or(U256::ZERO));
        let mut alloc =
            generator.generate_allocation(self.marionette_address(), proxy_admin, &self.marionette_args())?;

        if self.include_proxy_admin() {
            let owner = self.owner.ok_or(GeneratorError::MissingArgument("owner"))?;
            let proxy_admin_generator = ProxyAdminGenerator::from_artifacts_dir(&artifacts_dir)?;
            merge_allocation(&mut alloc, proxy_admin_generator.generate_allocation(proxy_admin, &owner)?)?;
        }

        info!(accounts = alloc.len(), "Allocation ready");
        Ok(alloc)
    }
}
