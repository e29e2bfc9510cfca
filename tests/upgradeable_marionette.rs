//! End-to-end checks of the upgradeable Marionette allocation.
//!
//! The role getters are evaluated directly against the generated storage, the
//! same way `hasRole` / `getRoleMember` / `getRoleMemberCount` would evaluate
//! them on a node started from this genesis.

use alloy_genesis::GenesisAccount;
use alloy_primitives::{address, Address, B256, U256};
use marionette_predeployed::generator::{
    merge_allocation, ProxyAdminGenerator, DEFAULT_ADMIN_ROLE, IMA_ROLE, PUPPETEER_ROLE,
};
use marionette_predeployed::onchain::{
    get_role_admin, get_role_member, get_role_member_count, has_role, is_initialized,
    read_owner, read_proxy_admin, read_proxy_implementation, AllocationStorageReader,
};
use marionette_predeployed::test_utils::{write_default_artifacts, TempDir};
use marionette_predeployed::{
    Allocation, MarionetteArgs, PredeployedContract, UpgradeableMarionetteGenerator,
    MARIONETTE_ADDRESS, MARIONETTE_IMPLEMENTATION_ADDRESS,
};
use std::collections::BTreeMap;
use std::path::Path;

const SCHAIN_OWNER_ADDRESS: Address = address!("d200000000000000000000000000000000000000");
const PROXY_ADMIN_ADDRESS: Address = address!("d200000000000000000000000000000000000001");
const OWNER_ADDRESS: Address = address!("D200000000000000000000000000000000000002");
const IMA_ADDRESS: Address = address!("d200000000000000000000000000000000000003");

fn prepare_genesis_alloc(dir: &Path) -> Allocation {
    write_default_artifacts(dir);
    let upgradeable_marionette_generator =
        UpgradeableMarionetteGenerator::from_artifacts_dir(dir).unwrap();
    let proxy_admin_generator = ProxyAdminGenerator::from_artifacts_dir(dir).unwrap();

    let args = MarionetteArgs::new()
        .with_owner(OWNER_ADDRESS)
        .with_schain_owner(SCHAIN_OWNER_ADDRESS)
        .with_ima(IMA_ADDRESS);

    let mut alloc = upgradeable_marionette_generator
        .generate_allocation(MARIONETTE_ADDRESS, PROXY_ADMIN_ADDRESS, &args)
        .unwrap();
    merge_allocation(
        &mut alloc,
        proxy_admin_generator
            .generate_allocation(PROXY_ADMIN_ADDRESS, &OWNER_ADDRESS)
            .unwrap(),
    )
    .unwrap();
    alloc
}

#[test]
fn test_default_admin_role() {
    let dir = TempDir::new().unwrap();
    let alloc = prepare_genesis_alloc(dir.path());
    let marionette = AllocationStorageReader::new(&alloc);

    assert_eq!(get_role_member_count(&marionette, MARIONETTE_ADDRESS, DEFAULT_ADMIN_ROLE), 1);
    assert_eq!(
        get_role_member(&marionette, MARIONETTE_ADDRESS, DEFAULT_ADMIN_ROLE, 0),
        Some(MARIONETTE_ADDRESS)
    );
    assert!(has_role(&marionette, MARIONETTE_ADDRESS, DEFAULT_ADMIN_ROLE, MARIONETTE_ADDRESS));
}

#[test]
fn test_ima_role() {
    let dir = TempDir::new().unwrap();
    let alloc = prepare_genesis_alloc(dir.path());
    let marionette = AllocationStorageReader::new(&alloc);

    assert_eq!(get_role_member_count(&marionette, MARIONETTE_ADDRESS, IMA_ROLE), 1);
    assert_eq!(get_role_member(&marionette, MARIONETTE_ADDRESS, IMA_ROLE, 0), Some(IMA_ADDRESS));
    assert!(has_role(&marionette, MARIONETTE_ADDRESS, IMA_ROLE, IMA_ADDRESS));
}

#[test]
fn test_puppeteer_role() {
    let dir = TempDir::new().unwrap();
    let alloc = prepare_genesis_alloc(dir.path());
    let marionette = AllocationStorageReader::new(&alloc);

    assert_eq!(get_role_member_count(&marionette, MARIONETTE_ADDRESS, PUPPETEER_ROLE), 2);

    assert_eq!(
        get_role_member(&marionette, MARIONETTE_ADDRESS, PUPPETEER_ROLE, 0),
        Some(OWNER_ADDRESS)
    );
    assert!(has_role(&marionette, MARIONETTE_ADDRESS, PUPPETEER_ROLE, OWNER_ADDRESS));

    assert_eq!(
        get_role_member(&marionette, MARIONETTE_ADDRESS, PUPPETEER_ROLE, 1),
        Some(SCHAIN_OWNER_ADDRESS)
    );
    assert!(has_role(&marionette, MARIONETTE_ADDRESS, PUPPETEER_ROLE, SCHAIN_OWNER_ADDRESS));
}

#[test]
fn test_role_admins_are_default_admin() {
    let dir = TempDir::new().unwrap();
    let alloc = prepare_genesis_alloc(dir.path());
    let marionette = AllocationStorageReader::new(&alloc);

    for role in [DEFAULT_ADMIN_ROLE, IMA_ROLE, PUPPETEER_ROLE] {
        assert_eq!(get_role_admin(&marionette, MARIONETTE_ADDRESS, role), DEFAULT_ADMIN_ROLE);
    }
}

#[test]
fn test_proxy_wiring() {
    let dir = TempDir::new().unwrap();
    let alloc = prepare_genesis_alloc(dir.path());
    let reader = AllocationStorageReader::new(&alloc);

    assert_eq!(alloc.len(), 3);
    assert!(is_initialized(&reader, MARIONETTE_ADDRESS));
    assert_eq!(
        read_proxy_implementation(&reader, MARIONETTE_ADDRESS),
        Some(MARIONETTE_IMPLEMENTATION_ADDRESS)
    );
    assert_eq!(read_proxy_admin(&reader, MARIONETTE_ADDRESS), Some(PROXY_ADMIN_ADDRESS));
    assert_eq!(read_owner(&reader, PROXY_ADMIN_ADDRESS), Some(OWNER_ADDRESS));
}

#[test]
fn test_allocation_json_format() {
    let dir = TempDir::new().unwrap();
    let alloc = prepare_genesis_alloc(dir.path());

    let json = serde_json::to_value(&alloc).unwrap();
    let (_, proxy) = json
        .as_object()
        .unwrap()
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(&MARIONETTE_ADDRESS.to_string()))
        .unwrap();
    let storage = proxy["storage"].as_object().unwrap();

    // 16 Marionette slots + EIP-1967 implementation + admin
    assert_eq!(storage.len(), 18);
    assert_eq!(
        storage["0x0000000000000000000000000000000000000000000000000000000000000000"],
        "0x0000000000000000000000000000000000000000000000000000000000000001"
    );

    // The fragment parses back as a standard genesis alloc
    let parsed: BTreeMap<Address, GenesisAccount> = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, alloc);
    let slot0 = parsed[&MARIONETTE_ADDRESS].storage.as_ref().unwrap()[&B256::ZERO];
    assert_eq!(U256::from_be_bytes(slot0.0), U256::from(1));
}
