//! List command - show registered cache warmers

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::PrewarmResult;
use crate::ui::{self, UiContext};
use crate::warmer::{default_warmers, WarmerRegistry};
use console::style;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WarmerRow {
    name: String,
    optional: bool,
}

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> PrewarmResult<()> {
    let registry = WarmerRegistry::build(default_warmers(config))?;

    let mut rows: Vec<WarmerRow> = Vec::with_capacity(registry.len());
    for name in registry.names() {
        let warmer = registry.get(name)?;
        rows.push(WarmerRow {
            name: name.to_string(),
            optional: warmer.is_optional(),
        });
    }

    match args.format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Plain => print_plain(&rows),
    }

    Ok(())
}

fn print_table(rows: &[WarmerRow]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Cache Warmers");

    println!(
        "{:<20} {:<10}",
        style("NAME").bold(),
        style("OPTIONAL").bold()
    );
    println!("{}", "-".repeat(30));

    for row in rows {
        let optional = if row.optional {
            style("yes").yellow()
        } else {
            style("no").dim()
        };
        println!("{:<20} {:<10}", row.name, optional);
    }

    println!();
    println!("{} warmer(s)", rows.len());
}

fn print_json(rows: &[WarmerRow]) -> PrewarmResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(rows: &[WarmerRow]) {
    for row in rows {
        println!("{}", row.name);
    }
}
