//! OpenZeppelin `AccessControlEnumerableUpgradeable` storage encoding.
//!
//! Storage layout reference (Solidity):
//!
//! ```text
//! mapping(bytes32 => RoleData) _roles;                       // slots.roles
//!     struct RoleData {
//!         mapping(address => bool) members;                  // +0
//!         bytes32 adminRole;                                 // +1
//!     }
//! mapping(bytes32 => AddressSet) _roleMembers;               // slots.role_members
//!     struct Set {
//!         bytes32[] _values;                                 // +0
//!         mapping(bytes32 => uint256) _indexes;              // +1 (1-based)
//!     }
//! ```

use super::Storage;
use crate::onchain::role_layout::{INDEXES_OFFSET, MEMBERS_OFFSET, VALUES_OFFSET};
use crate::onchain::{
    address_key, dynamic_array_base_slot, encode_address, encode_u256, mapping_slot, slot_key,
};
use alloy_primitives::{Address, B256, U256};
use tracing::debug;

/// Base slots of the two role mappings in a concrete contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolesSlots {
    /// Slot of `_roles`
    pub roles: U256,
    /// Slot of `_roleMembers`
    pub role_members: U256,
}

/// Write a uint256 value into a slot.
pub fn write_uint256(storage: &mut Storage, slot: U256, value: U256) {
    storage.insert(slot_key(slot), encode_u256(value));
}

/// Write an address (left-padded) into a slot.
pub fn write_address(storage: &mut Storage, slot: U256, addr: Address) {
    storage.insert(slot_key(slot), encode_address(addr));
}

/// Grant `role` to `accounts`, writing the same slots `_grantRole` would.
///
/// Repeated accounts are granted once, keeping the position of their first
/// occurrence. An empty account list writes nothing.
pub fn setup_role(storage: &mut Storage, slots: RolesSlots, role: B256, accounts: &[Address]) {
    let mut members: Vec<Address> = Vec::with_capacity(accounts.len());
    for account in accounts {
        if !members.contains(account) {
            members.push(*account);
        }
    }
    if members.is_empty() {
        return;
    }

    // _roles[role].members[account] = true
    let member_flags = mapping_slot(role, slots.roles) + MEMBERS_OFFSET;
    for member in &members {
        write_uint256(storage, mapping_slot(address_key(*member), member_flags), U256::from(1));
    }

    // _roleMembers[role]._inner._values / _indexes
    let set_slot = mapping_slot(role, slots.role_members);
    let values_slot = set_slot + VALUES_OFFSET;
    let indexes_slot = set_slot + INDEXES_OFFSET;
    write_uint256(storage, values_slot, U256::from(members.len()));

    let values_base = dynamic_array_base_slot(values_slot);
    for (i, member) in members.iter().enumerate() {
        write_address(storage, values_base + U256::from(i), *member);
        write_uint256(storage, mapping_slot(address_key(*member), indexes_slot), U256::from(i + 1));
    }

    debug!(%role, members = ?members, "Role granted in storage");
}
