//! Artifact fixtures shared by unit and integration tests.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Temporary directory removed on drop (std only, no tempfile crate)
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Create a fresh, uniquely named directory under the system temp dir.
    pub fn new() -> Result<Self, std::io::Error> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let mut path = std::env::temp_dir();
        path.push(format!(
            "marionette_test_{}_{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn function(name: &str, inputs: &[&str]) -> Value {
    let inputs: Vec<_> = inputs
        .iter()
        .enumerate()
        .map(|(i, ty)| json!({ "internalType": ty, "name": format!("arg{i}"), "type": ty }))
        .collect();
    json!({
        "inputs": inputs,
        "name": name,
        "outputs": [],
        "stateMutability": "view",
        "type": "function"
    })
}

/// ABI exposing the getters a Marionette build is expected to have.
pub fn marionette_abi() -> Value {
    json!([
        function("hasRole", &["bytes32", "address"]),
        function("getRoleAdmin", &["bytes32"]),
        function("getRoleMember", &["bytes32", "uint256"]),
        function("getRoleMemberCount", &["bytes32"]),
        function("IMA_ROLE", &[]),
        function("PUPPETEER_ROLE", &[]),
        function("initialize", &["address", "address"]),
        {
            "anonymous": false,
            "inputs": [],
            "name": "EtherReceived",
            "type": "event"
        }
    ])
}

/// Write a hardhat artifact `<dir>/<name>.json` with the given ABI and runtime code.
pub fn write_artifact(dir: &Path, name: &str, abi: Value, deployed: &str) {
    let artifact = json!({
        "_format": "hh-sol-artifact-1",
        "contractName": name,
        "sourceName": format!("contracts/{name}.sol"),
        "abi": abi,
        "bytecode": "0x6080604052",
        "deployedBytecode": deployed,
        "linkReferences": {},
        "deployedLinkReferences": {}
    });
    std::fs::write(dir.join(format!("{name}.json")), artifact.to_string()).unwrap();
}

/// Write the three artifacts the full allocation needs.
pub fn write_default_artifacts(dir: &Path) {
    write_artifact(dir, "Marionette", marionette_abi(), "0x608060405260043610");
    write_artifact(dir, "TransparentUpgradeableProxy", json!([]), "0x60806040523661001357");
    write_artifact(dir, "ProxyAdmin", json!([]), "0x6080604052600436106100");
}
