//! Colored console output for the allocation generator.
//!
//! Everything goes to stderr so that stdout carries only the allocation JSON.
//! Color scheme: blue+bold headers, cyan values, green success,
//! dimmed secondary text.

use crate::config::AllocationConfig;
use crate::generator::Allocation;
use alloy_primitives::Address;
use colored::Colorize;
use std::path::Path;

// ── Helpers ────────────────────────────────────────────────────────

/// Format an optional address, showing `<unset>` when missing.
pub fn format_address(addr: Option<Address>) -> String {
    match addr {
        Some(addr) => format!("{addr}"),
        None => "<unset>".to_string(),
    }
}

/// Count the non-empty storage slots across an allocation.
pub fn storage_slot_count(alloc: &Allocation) -> usize {
    alloc
        .values()
        .filter_map(|account| account.storage.as_ref())
        .map(|storage| storage.len())
        .sum()
}

// ── Banner & Inputs ────────────────────────────────────────────────

/// Print the banner with the target addresses.
pub fn print_banner(config: &AllocationConfig) {
    eprintln!();
    eprintln!("{}", "=== Marionette predeployed ===".blue().bold());
    eprintln!("  Proxy:          {}", format!("{}", config.marionette_address()).cyan());
    eprintln!("  Implementation: {}", format!("{}", config.implementation_address()).cyan());
    eprintln!("  Artifacts:      {}", config.artifacts_dir().display().to_string().dimmed());
}

/// Print the role holders that will be written.
pub fn print_roles(config: &AllocationConfig) {
    eprintln!("{}", "Roles:".blue().bold());
    eprintln!(
        "  {} {}",
        "DEFAULT_ADMIN_ROLE:".dimmed(),
        format!("{}", config.marionette_address()).cyan()
    );
    eprintln!("  {} {}", "IMA_ROLE:          ".dimmed(), format_address(config.ima).cyan());
    eprintln!(
        "  {} {}, {}",
        "PUPPETEER_ROLE:    ".dimmed(),
        format_address(config.owner).cyan(),
        format_address(config.schain_owner).cyan()
    );
    eprintln!("  {} {}", "Proxy admin:       ".dimmed(), format_address(config.proxy_admin).cyan());
}

// ── Result ─────────────────────────────────────────────────────────

/// Print a summary of the generated allocation.
pub fn print_allocation_summary(alloc: &Allocation) {
    eprintln!(
        "  {} {} accounts, {} storage slots",
        "OK".green().bold(),
        alloc.len().to_string().cyan(),
        storage_slot_count(alloc).to_string().cyan()
    );
}

/// Print where the allocation was written.
pub fn print_written(path: &Path) {
    eprintln!("  {} Allocation written to {}", "OK".green().bold(), path.display().to_string().cyan());
}
