//! `cardmend stats` command - link-format and card-type breakdowns

use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{load_dataset, valid_link_count};

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Dataset snapshot to analyze
    pub input: PathBuf,
}

pub fn run(args: StatsArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(&args.input).into_diagnostic()?;

    let total_links: usize = dataset.values().map(|c| c.connections.len()).sum();
    let valid_links = valid_link_count(&dataset);
    let slug_links = total_links - valid_links;

    let mut empty_connections = 0usize;
    let mut types: BTreeMap<String, usize> = BTreeMap::new();
    for card in dataset.values() {
        if card.connections.is_empty() {
            empty_connections += 1;
        }
        let t = card.primary_type.clone().unwrap_or_else(|| "UNKNOWN".to_string());
        *types.entry(t).or_insert(0) += 1;
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Dataset Statistics").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Cards:              {}", style(dataset.len()).cyan());
    println!("  Total connections:  {}", style(total_links).cyan());
    println!("  Valid id links:     {}", style(valid_links).green());
    if total_links > 0 {
        println!(
            "  Slug links:         {} ({:.1}%)",
            style(slug_links).yellow(),
            slug_links as f64 / total_links as f64 * 100.0
        );
    }
    println!("  Empty connections:  {}", style(empty_connections).dim());

    if !global.quiet && !types.is_empty() {
        let mut ranked: Vec<(&String, &usize)> = types.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        println!();
        println!("{}", style("Cards by primaryType:").bold());
        for (t, count) in ranked {
            println!("  {:<14} {}", t, style(count).cyan());
        }
    }

    Ok(())
}
