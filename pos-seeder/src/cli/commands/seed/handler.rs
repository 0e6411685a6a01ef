//! Seed command handlers

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use super::{SalesSeedCommands, SeedCommands};
use crate::api::{PosApi, PosClient};
use crate::config::Config;
use crate::import::{read_items_excel, read_purchase_excel, read_sales_excel};
use crate::services::{SeedReport, seed_items, seed_purchases, seed_sales};

async fn connect(config_path: Option<&Path>) -> Result<PosClient> {
    let config = Config::load(config_path)?;
    let password = config.password_or_prompt()?;
    PosClient::login(&config, &password)
        .await
        .with_context(|| format!("Failed to log in to {}", config.api_url))
}

fn print_report(what: &str, report: &SeedReport) {
    let failed = if report.failed > 0 {
        report.failed.to_string().red().bold()
    } else {
        report.failed.to_string().normal()
    };
    println!(
        "{} ({} total): {} succeeded, {} failed, {} skipped",
        what.bold(),
        report.total(),
        report.succeeded.to_string().green(),
        failed,
        report.skipped.to_string().yellow()
    );
}

pub async fn handle_seed_item(args: SeedCommands, config_path: Option<&Path>) -> Result<()> {
    let items = read_items_excel(&args.file)?;

    if args.dry_run {
        println!("Would create {} items", items.len().to_string().cyan());
        return Ok(());
    }

    let client = connect(config_path).await?;
    let report = seed_items(&client, &items).await;
    print_report("Items", &report);
    Ok(())
}

pub async fn handle_seed_purchase(args: SeedCommands, config_path: Option<&Path>) -> Result<()> {
    let document = read_purchase_excel(&args.file)?;
    log::info!(
        "Read {} purchases from {}",
        document.entries.len(),
        args.file.display()
    );

    if args.dry_run {
        for entry in &document.entries {
            println!(
                "{}  {} items  total {}",
                entry.header.nomor.as_deref().unwrap_or("(no number)").cyan(),
                entry.items.len(),
                entry
                    .summary
                    .as_ref()
                    .and_then(|s| s.total)
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
        }
        println!("Would post {} purchases", document.entries.len());
        return Ok(());
    }

    let client = connect(config_path).await?;
    let branch = client
        .first_branch()
        .await
        .context("Failed to fetch branch")?;
    log::info!("Posting to branch {} ({})", branch.name, branch.id);

    let report = seed_purchases(&client, &branch, &document).await;
    print_report("Purchases", &report);
    Ok(())
}

pub async fn handle_seed_sales(args: SalesSeedCommands, config_path: Option<&Path>) -> Result<()> {
    let document = read_sales_excel(&args.seed.file)?;
    log::info!(
        "Read {} sales from {}",
        document.entries.len(),
        args.seed.file.display()
    );

    if args.seed.dry_run {
        for entry in &document.entries {
            println!("{}  {} lines", entry.header.nomor.cyan(), entry.items.len());
        }
        println!("Would post up to {} sales", document.entries.len());
        return Ok(());
    }

    let tanggal = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    let client = connect(config_path).await?;
    let branch = client
        .first_branch()
        .await
        .context("Failed to fetch branch")?;
    let catalog = client
        .all_items()
        .await
        .context("Failed to fetch item catalog")?;
    log::info!(
        "Posting to branch {} ({}); catalog has {} items",
        branch.name,
        branch.id,
        catalog.len()
    );

    let report = seed_sales(&client, &branch, &catalog, &document, &tanggal).await;
    print_report("Sales", &report);
    Ok(())
}
