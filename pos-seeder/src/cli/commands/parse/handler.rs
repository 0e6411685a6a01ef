//! Parse command handler

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;

use super::{ExportKind, ParseCommands};
use crate::import::{read_items_excel, read_purchase_excel, read_sales_excel};

pub fn handle_parse_command(args: ParseCommands) -> Result<()> {
    let json = match args.kind {
        ExportKind::Items => to_json(&read_items_excel(&args.file)?, args.compact)?,
        ExportKind::Purchases => to_json(&read_purchase_excel(&args.file)?, args.compact)?,
        ExportKind::Sales => to_json(&read_sales_excel(&args.file)?, args.compact)?,
    };

    match args.output {
        Some(output_path) => {
            fs::write(&output_path, &json)
                .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;
            eprintln!(
                "Results saved to: {}",
                output_path.display().to_string().bright_green()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    if compact {
        serde_json::to_string(value).context("Failed to format JSON output")
    } else {
        serde_json::to_string_pretty(value).context("Failed to format JSON output")
    }
}
