use crate::config::AllocationConfig;
use crate::errors::Result;
use alloy_primitives::{Address, U256};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the allocation generator
#[derive(Parser, Debug)]
#[command(
    name = "marionette-alloc",
    about = "Generate the genesis allocation of the predeployed Marionette contract"
)]
pub struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing Marionette.json and TransparentUpgradeableProxy.json
    #[arg(long, env = "MARIONETTE_ARTIFACTS_DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Marionette owner, granted PUPPETEER_ROLE
    #[arg(long, env = "MARIONETTE_OWNER")]
    pub owner: Option<Address>,

    /// sChain owner, granted PUPPETEER_ROLE after the owner
    #[arg(long, env = "MARIONETTE_SCHAIN_OWNER")]
    pub schain_owner: Option<Address>,

    /// IMA message proxy, granted IMA_ROLE
    #[arg(long, env = "MARIONETTE_IMA")]
    pub ima: Option<Address>,

    /// Admin of the transparent proxy (EIP-1967 admin slot)
    #[arg(long, env = "MARIONETTE_PROXY_ADMIN")]
    pub proxy_admin: Option<Address>,

    /// Override the Marionette proxy address
    #[arg(long)]
    pub marionette_address: Option<Address>,

    /// Override the Marionette implementation address
    #[arg(long)]
    pub implementation_address: Option<Address>,

    /// Initial balance of the Marionette proxy in wei
    #[arg(long)]
    pub balance: Option<U256>,

    /// Emit a ProxyAdmin at --proxy-admin, owned by --owner
    /// (`--with-proxy-admin` or `--with-proxy-admin=false`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub with_proxy_admin: Option<bool>,

    /// Write the allocation to this file instead of stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Emit logs as JSON instead of human-readable output
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Configuration from flags alone.
    fn overrides(&self) -> AllocationConfig {
        AllocationConfig {
            owner: self.owner,
            schain_owner: self.schain_owner,
            ima: self.ima,
            proxy_admin: self.proxy_admin,
            marionette_address: self.marionette_address,
            implementation_address: self.implementation_address,
            balance: self.balance,
            artifacts_dir: self.artifacts_dir.clone(),
            include_proxy_admin: self.with_proxy_admin,
        }
    }

    /// Load `--config` if given and overlay the flags on top of it.
    pub fn resolve_config(&self) -> Result<AllocationConfig> {
        let base = match &self.config {
            Some(path) => AllocationConfig::from_file(path)?,
            None => AllocationConfig::default(),
        };
        Ok(base.merge(self.overrides()))
    }
}
