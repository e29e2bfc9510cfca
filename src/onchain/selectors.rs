use alloy_primitives::keccak256;

/// Compute the Solidity function selector (first 4 bytes of keccak256(signature)).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

// AccessControlEnumerable getters
/// `hasRole(bytes32,address)`
pub const HAS_ROLE: &str = "hasRole(bytes32,address)";
/// `getRoleAdmin(bytes32)`
pub const GET_ROLE_ADMIN: &str = "getRoleAdmin(bytes32)";
/// `getRoleMember(bytes32,uint256)`
pub const GET_ROLE_MEMBER: &str = "getRoleMember(bytes32,uint256)";
/// `getRoleMemberCount(bytes32)`
pub const GET_ROLE_MEMBER_COUNT: &str = "getRoleMemberCount(bytes32)";

// Marionette role constant getters
/// `IMA_ROLE()`
pub const IMA_ROLE: &str = "IMA_ROLE()";
/// `PUPPETEER_ROLE()`
pub const PUPPETEER_ROLE: &str = "PUPPETEER_ROLE()";
