use clap::Parser;
use listing_sniper::adapter::inbound::cli::command::{Cli, Commands};
use listing_sniper::adapter::inbound::cli::output::{self, OutputConfig};
use listing_sniper::adapter::inbound::cli::{address, buy, listing};
use listing_sniper::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    // Both alloy and reqwest pull in rustls; pin the ring provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    output::configure(OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
    });

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(config = %cli.config.display(), "listing-sniper starting");

    let result = match &cli.command {
        Commands::Buy(args) => buy::execute(&config, args).await,
        Commands::Listing => listing::execute(&config).await,
        Commands::Address => address::execute(&config),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
