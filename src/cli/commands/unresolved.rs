//! `cardmend unresolved` command - most frequent unresolved slugs
//!
//! Ranks every connection target that is not a well-formed identifier by
//! occurrence count, so the curator can spend override effort where it
//! pays off most.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::core::{load_dataset, CardId};

#[derive(clap::Args, Debug)]
pub struct UnresolvedArgs {
    /// Dataset snapshot to scan
    pub input: PathBuf,

    /// Maximum number of slugs to list
    #[arg(long, short = 'n', default_value_t = 50)]
    pub limit: usize,
}

pub fn run(args: UnresolvedArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(&args.input).into_diagnostic()?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for card in dataset.values() {
        for conn in &card.connections {
            if !CardId::is_valid(&conn.to) {
                *counts.entry(conn.to.clone()).or_insert(0) += 1;
            }
        }
    }

    // Sort by frequency descending, then lexically for a stable listing
    let mut ranked: Vec<(&String, &usize)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!(
        "{} {} unique unresolved slug(s)",
        style("→").blue(),
        style(counts.len()).cyan()
    );

    if counts.is_empty() {
        println!(
            "{} Every connection targets a valid identifier",
            style("✓").green().bold()
        );
        return Ok(());
    }

    if !global.quiet {
        println!();
        println!("{}", style(format!("Top {} unresolved:", args.limit)).bold());
        for (slug, count) in ranked.iter().take(args.limit) {
            println!("  ({}) {}", style(count).yellow(), truncate_str(slug, 70));
        }
    }

    Ok(())
}
