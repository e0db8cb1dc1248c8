//! `cardmend compare` command - regression check between snapshots
//!
//! Resolution must never degrade a dataset: valid-identifier links must
//! not decrease between stages, and no card may lose connections. Run
//! after each pipeline stage with the previous stage's output as BEFORE.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{load_dataset, valid_link_count};

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Snapshot from the earlier pipeline stage
    pub before: PathBuf,

    /// Snapshot from the later pipeline stage
    pub after: PathBuf,
}

pub fn run(args: CompareArgs, global: &GlobalOpts) -> Result<()> {
    let before = load_dataset(&args.before).into_diagnostic()?;
    let after = load_dataset(&args.after).into_diagnostic()?;

    let valid_before = valid_link_count(&before);
    let valid_after = valid_link_count(&after);

    // Cards that lost connections between stages
    let mut degraded = 0usize;
    for (id, before_card) in &before {
        if let Some(after_card) = after.get(id) {
            if after_card.connections.len() < before_card.connections.len() {
                degraded += 1;
                if !global.quiet && degraded <= 5 {
                    println!(
                        "{} {} lost connections: {} -> {}",
                        style("✗").red(),
                        style(id).cyan(),
                        before_card.connections.len(),
                        after_card.connections.len()
                    );
                }
            }
        }
    }

    let dropped_cards = before.keys().filter(|id| !after.contains_key(*id)).count();

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Snapshot Comparison").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "  Cards:        {} -> {}",
        style(before.len()).cyan(),
        style(after.len()).cyan()
    );
    println!(
        "  Valid links:  {} -> {}",
        style(valid_before).cyan(),
        style(valid_after).cyan()
    );

    let mut failures = Vec::new();
    if valid_after < valid_before {
        failures.push(format!(
            "valid links decreased from {} to {}",
            valid_before, valid_after
        ));
    }
    if degraded > 0 {
        failures.push(format!("{} card(s) lost connections", degraded));
    }
    if dropped_cards > 0 {
        failures.push(format!("{} card(s) disappeared", dropped_cards));
    }

    println!();
    if failures.is_empty() {
        println!(
            "{} No regressions between snapshots",
            style("✓").green().bold()
        );
        Ok(())
    } else {
        Err(miette::miette!("regression check failed: {}", failures.join("; ")))
    }
}
