use marionette_predeployed::cli::Cli;
use marionette_predeployed::output;

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

/// Main entry point for the allocation generator
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (stderr, RUST_LOG filter, warn by default)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = cli.resolve_config().wrap_err("failed to load configuration")?;

    output::print_banner(&config);
    output::print_roles(&config);

    let alloc = config.generate().wrap_err("failed to generate Marionette allocation")?;
    output::print_allocation_summary(&alloc);

    let json = serde_json::to_string_pretty(&alloc)?;
    match &cli.out {
        Some(path) => {
            std::fs::write(path, json)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            output::print_written(path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
