/// Marionette contract storage layout.
///
/// Inherited from OpenZeppelin upgradeable contracts:
///
/// ```text
/// Initializable                        0:        _initialized, _initializing
/// ContextUpgradeable                   1..=50:   __gap
/// ERC165Upgradeable                    51..=100: __gap
/// AccessControlUpgradeable             101:      _roles
///                                      102..=150: __gap
/// AccessControlEnumerableUpgradeable   151:      _roleMembers
///                                      152..=200: __gap
/// Marionette                           201..
/// ```
pub mod marionette_slots {
    use alloy_primitives::U256;

    /// slot 0: `_initialized` (uint8) packed with `_initializing` (bool)
    pub const INITIALIZED: U256 = U256::from_limbs([0, 0, 0, 0]);
    /// slot 101: `_roles` (mapping(bytes32 => RoleData))
    pub const ROLES: U256 = U256::from_limbs([101, 0, 0, 0]);
    /// slot 151: `_roleMembers` (mapping(bytes32 => EnumerableSet.AddressSet))
    pub const ROLE_MEMBERS: U256 = U256::from_limbs([151, 0, 0, 0]);
}

/// Field offsets inside the structs that the role mappings point to.
pub mod role_layout {
    use alloy_primitives::U256;

    /// `RoleData.members` (mapping(address => bool))
    pub const MEMBERS_OFFSET: U256 = U256::from_limbs([0, 0, 0, 0]);
    /// `RoleData.adminRole` (bytes32)
    pub const ADMIN_ROLE_OFFSET: U256 = U256::from_limbs([1, 0, 0, 0]);
    /// `Set._values` (bytes32[])
    pub const VALUES_OFFSET: U256 = U256::from_limbs([0, 0, 0, 0]);
    /// `Set._indexes` (mapping(bytes32 => uint256))
    pub const INDEXES_OFFSET: U256 = U256::from_limbs([1, 0, 0, 0]);
}

/// EIP-1967 proxy storage slots.
pub mod eip1967_slots {
    use alloy_primitives::{b256, B256};

    /// `bytes32(uint256(keccak256("eip1967.proxy.implementation")) - 1)`
    pub const IMPLEMENTATION: B256 =
        b256!("360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");
    /// `bytes32(uint256(keccak256("eip1967.proxy.admin")) - 1)`
    pub const ADMIN: B256 =
        b256!("b53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");
}

/// ProxyAdmin (Ownable) storage layout.
pub mod proxy_admin_slots {
    use alloy_primitives::U256;

    /// slot 0: `_owner` (address)
    pub const OWNER: U256 = U256::from_limbs([0, 0, 0, 0]);
}
