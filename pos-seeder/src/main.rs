mod api;
mod cli;
mod config;
mod import;
mod services;

use anyhow::Result;
use clap::Parser;

use cli::commands::parse::handle_parse_command;
use cli::commands::seed::{handle_seed_item, handle_seed_purchase, handle_seed_sales};
use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Parse(args) => handle_parse_command(args),
        Commands::SeedItem(args) => handle_seed_item(args, config_path).await,
        Commands::SeedPurchase(args) => handle_seed_purchase(args, config_path).await,
        Commands::SeedSales(args) => handle_seed_sales(args, config_path).await,
    }
}
