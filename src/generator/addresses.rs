use alloy_primitives::{address, Address};

/// Marionette proxy address - the address users and IMA talk to.
///
/// Storage (roles, initialization flag, EIP-1967 slots) lives here.
pub const MARIONETTE_ADDRESS: Address = address!("d2c0deface000000000000000000000000000000");

/// Marionette implementation address - holds the logic bytecode behind the proxy.
pub const MARIONETTE_IMPLEMENTATION_ADDRESS: Address =
    address!("d2c0deface000000000000000000000000000001");
