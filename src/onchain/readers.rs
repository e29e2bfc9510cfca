use super::helpers::{
    address_key, decode_address, decode_bool, decode_u64, dynamic_array_base_slot, mapping_slot,
};
use super::slots::{eip1967_slots, marionette_slots, proxy_admin_slots, role_layout};
use super::StorageReader;
use alloy_primitives::{Address, B256, U256};

/// Slot of `_roles[role]` (the `RoleData` struct).
fn role_data_slot(role: B256) -> U256 {
    mapping_slot(role, marionette_slots::ROLES)
}

/// Slot of `_roleMembers[role]` (the `AddressSet` struct).
fn role_members_slot(role: B256) -> U256 {
    mapping_slot(role, marionette_slots::ROLE_MEMBERS)
}

/// Equivalent of `hasRole(role, account)`.
///
/// Reads `_roles[role].members[account]`.
pub fn has_role(reader: &impl StorageReader, contract: Address, role: B256, account: Address) -> bool {
    let members = role_data_slot(role) + role_layout::MEMBERS_OFFSET;
    reader
        .read_storage(contract, mapping_slot(address_key(account), members))
        .map(decode_bool)
        .unwrap_or(false)
}

/// Equivalent of `getRoleAdmin(role)`.
///
/// An unset admin reads as zero, which is `DEFAULT_ADMIN_ROLE`.
pub fn get_role_admin(reader: &impl StorageReader, contract: Address, role: B256) -> B256 {
    reader
        .read_storage(contract, role_data_slot(role) + role_layout::ADMIN_ROLE_OFFSET)
        .unwrap_or(B256::ZERO)
}

/// Equivalent of `getRoleMemberCount(role)`.
pub fn get_role_member_count(reader: &impl StorageReader, contract: Address, role: B256) -> u64 {
    reader
        .read_storage(contract, role_members_slot(role) + role_layout::VALUES_OFFSET)
        .map(decode_u64)
        .unwrap_or(0)
}

/// Equivalent of `getRoleMember(role, index)`.
///
/// Returns `None` where the live contract would revert (index out of bounds).
pub fn get_role_member(
    reader: &impl StorageReader,
    contract: Address,
    role: B256,
    index: u64,
) -> Option<Address> {
    if index >= get_role_member_count(reader, contract, role) {
        return None;
    }
    let values = role_members_slot(role) + role_layout::VALUES_OFFSET;
    let slot = dynamic_array_base_slot(values) + U256::from(index);
    reader.read_storage(contract, slot).map(decode_address)
}

/// Read every member of a role, in set order.
pub fn get_role_members(reader: &impl StorageReader, contract: Address, role: B256) -> Vec<Address> {
    let count = get_role_member_count(reader, contract, role);
    (0..count)
        .filter_map(|i| get_role_member(reader, contract, role, i))
        .collect()
}

/// Read the 1-based position of `account` in the role's member set
/// (`_roleMembers[role]._inner._indexes[account]`), 0 if absent.
pub fn role_member_index(
    reader: &impl StorageReader,
    contract: Address,
    role: B256,
    account: Address,
) -> u64 {
    let indexes = role_members_slot(role) + role_layout::INDEXES_OFFSET;
    reader
        .read_storage(contract, mapping_slot(address_key(account), indexes))
        .map(decode_u64)
        .unwrap_or(0)
}

/// Check whether `initialize` has already run (`_initialized != 0`).
pub fn is_initialized(reader: &impl StorageReader, contract: Address) -> bool {
    reader
        .read_storage(contract, marionette_slots::INITIALIZED)
        .map(decode_bool)
        .unwrap_or(false)
}

/// Read the implementation address behind an EIP-1967 proxy.
pub fn read_proxy_implementation(reader: &impl StorageReader, proxy: Address) -> Option<Address> {
    reader
        .read_storage(proxy, U256::from_be_bytes(eip1967_slots::IMPLEMENTATION.0))
        .map(decode_address)
}

/// Read the admin address of an EIP-1967 proxy.
pub fn read_proxy_admin(reader: &impl StorageReader, proxy: Address) -> Option<Address> {
    reader
        .read_storage(proxy, U256::from_be_bytes(eip1967_slots::ADMIN.0))
        .map(decode_address)
}

/// Read the owner of an Ownable contract (ProxyAdmin).
pub fn read_owner(reader: &impl StorageReader, contract: Address) -> Option<Address> {
    reader
        .read_storage(contract, proxy_admin_slots::OWNER)
        .map(decode_address)
}

