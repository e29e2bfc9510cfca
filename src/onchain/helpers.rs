use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the base slot for a Solidity dynamic array's data.
///
/// For `bytes32[] _values` whose length lives at slot `p`:
///   base = keccak256(abi.encode(p))
///   _values[0] lives at base + 0
///   _values[1] lives at base + 1
///   etc.
pub fn dynamic_array_base_slot(array_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(B256::from(array_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// Compute the storage slot for a Solidity `mapping(K => V)` entry whose key
/// is already ABI-encoded to 32 bytes.
///
///   slot = keccak256(abi.encode(key, mapping_slot))
pub fn mapping_slot(key: B256, mapping_slot: U256) -> U256 {
    let mut hasher = Keccak256::new();
    hasher.update(key.as_slice());
    hasher.update(B256::from(mapping_slot.to_be_bytes()).as_slice());
    U256::from_be_bytes(hasher.finalize().0)
}

/// ABI-encode an address as a 32-byte mapping key (left-padded with zeros).
///
/// The same encoding is used for `bytes32(uint256(uint160(addr)))`, which is
/// how `EnumerableSet.AddressSet` stores its members.
pub fn address_key(addr: Address) -> B256 {
    encode_address(addr)
}

/// Decode an address from a B256 storage value (left-padded with zeros).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// Decode a u64 from a B256 storage value.
pub fn decode_u64(value: B256) -> u64 {
    U256::from_be_bytes(value.0).as_limbs()[0]
}

/// Decode a bool from a B256 storage value.
pub fn decode_bool(value: B256) -> bool {
    value[31] != 0
}

/// Encode a u64 value into a B256 storage value.
pub fn encode_u64(value: u64) -> B256 {
    encode_u256(U256::from(value))
}

/// Encode a U256 value into a B256 storage value.
pub fn encode_u256(value: U256) -> B256 {
    B256::from(value.to_be_bytes())
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}

/// Convert a numeric slot into the `B256` key used by genesis storage maps.
pub fn slot_key(slot: U256) -> B256 {
    B256::from(slot.to_be_bytes())
}
