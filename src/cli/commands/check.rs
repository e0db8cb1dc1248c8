//! `cardmend check` command - dataset/index consistency report
//!
//! Completeness is judged against the index's main entries only:
//! sub-entries are never expected to have their own cards.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::core::{load_dataset, load_index, IndexEntry};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Dataset snapshot to check
    pub input: PathBuf,

    /// Reference index file
    #[arg(long, short = 'i')]
    pub index: PathBuf,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let index = load_index(&args.index).into_diagnostic()?;
    let dataset = load_dataset(&args.input).into_diagnostic()?;

    let main_entries: BTreeMap<&str, &IndexEntry> = index
        .iter()
        .filter(|e| e.is_main_entry())
        .map(|e| (e.id.as_str(), e))
        .collect();

    let missing: Vec<&IndexEntry> = main_entries
        .iter()
        .filter(|(id, _)| !dataset.contains_key(**id))
        .map(|(_, e)| *e)
        .collect();

    let extra: Vec<(&String, &str)> = dataset
        .iter()
        .filter(|(id, _)| !main_entries.contains_key(id.as_str()))
        .map(|(id, card)| (id, card.title.as_deref().unwrap_or("(untitled)")))
        .collect();

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Consistency Report").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Index main entries:  {}", style(main_entries.len()).cyan());
    println!("  Extracted cards:     {}", style(dataset.len()).cyan());

    if missing.is_empty() && extra.is_empty() {
        println!();
        println!(
            "{} Perfect match: all identifiers align",
            style("✓").green().bold()
        );
        return Ok(());
    }

    println!("  Missing entries:     {}", style(missing.len()).yellow());
    println!("  Extra cards:         {}", style(extra.len()).yellow());

    if !missing.is_empty() {
        // Per-letter breakdown shows which alphabetical transcript
        // sections were truncated hardest
        let mut by_letter: BTreeMap<char, usize> = BTreeMap::new();
        for entry in &missing {
            let letter = entry
                .term
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?');
            *by_letter.entry(letter).or_insert(0) += 1;
        }

        println!();
        println!("{}", style("Missing counts by letter:").bold());
        for (letter, count) in &by_letter {
            println!("  {}: {} missing", letter, count);
        }
    }

    if !extra.is_empty() && !global.quiet {
        println!();
        println!("{}", style("Extra/unexpected cards:").bold());
        for (id, title) in &extra {
            println!("  - {}: {}", style(id).cyan(), truncate_str(title, 60));
        }
    }

    Ok(())
}
