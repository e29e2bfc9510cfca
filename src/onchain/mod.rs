//! Contract storage readers
//!
//! Reads role membership and proxy wiring straight out of contract storage,
//! using the same slot arithmetic the Solidity compiler uses. The readers
//! mirror the contract's view functions (`hasRole`, `getRoleMember`,
//! `getRoleMemberCount`, ...), so a generated allocation can be checked
//! without starting a node:
//!
//!   generate_allocation(...) → AllocationStorageReader
//!   ↓
//!   has_role / get_role_member / get_role_member_count
//!   ↓
//!   same answers a live, transaction-initialized contract would give
//!
//! Storage layout must match the generator's pre-population and the Solidity contracts.

pub mod helpers;
pub mod providers;
pub mod readers;
pub mod selectors;
pub mod slots;

// Re-export the StorageReader trait and key types at module level
pub use helpers::{
    address_key, decode_address, decode_bool, decode_u64, dynamic_array_base_slot, encode_address,
    encode_u256, encode_u64, mapping_slot, slot_key,
};
pub use providers::AllocationStorageReader;
pub use readers::{
    get_role_admin, get_role_member, get_role_member_count, get_role_members, has_role,
    is_initialized, read_owner, read_proxy_admin, read_proxy_implementation, role_member_index,
};
pub use selectors::function_selector;
pub use slots::{eip1967_slots, marionette_slots, proxy_admin_slots, role_layout};

use alloy_primitives::{Address, B256, U256};

/// Trait for reading contract storage slots.
///
/// In tests and tooling: implemented by AllocationStorageReader (reads from a genesis alloc)
pub trait StorageReader {
    /// Read a storage slot value from a contract address.
    /// Returns None if the contract or slot doesn't exist.
    fn read_storage(&self, address: Address, slot: U256) -> Option<B256>;
}
