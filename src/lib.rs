//! # Marionette predeployed - genesis allocations for the Marionette contract
//!
//! Computes the code and storage that let a network start with Marionette
//! already deployed behind an upgradeable proxy and its access-control roles
//! already granted, instead of deploying and initializing it by transaction.

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod onchain;
pub mod output;

/// Artifact fixtures for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::{GeneratorError, Result};
pub use generator::{
    marionette_storage, Allocation, MarionetteArgs, MarionetteGenerator, MarionetteRoles,
    PredeployedContract, Storage, UpgradeableMarionetteGenerator, MARIONETTE_ADDRESS,
    MARIONETTE_IMPLEMENTATION_ADDRESS,
};
