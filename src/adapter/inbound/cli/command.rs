//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Buy a marketplace-listed NFT through the strategy contract
#[derive(Parser, Debug)]
#[command(name = "listing-sniper")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Buy the configured token at its best listing
    Buy(BuyArgs),

    /// Show the best listing for the configured token
    Listing,

    /// Show the buyer wallet address
    Address,
}

#[derive(Args, Debug, Default)]
pub struct BuyArgs {
    /// Fetch and encode, but do not submit the transaction
    #[arg(long)]
    pub dry_run: bool,
}
