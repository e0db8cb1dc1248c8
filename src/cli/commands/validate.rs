//! `cardmend validate` command - schema compliance report

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::load_raw;
use crate::schema::validate_snapshot;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Dataset snapshot to check
    pub input: PathBuf,

    /// Exit non-zero when any card is non-compliant
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let data = load_raw(&args.input).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Validating {} card(s) in {}\n",
            style("→").blue(),
            data.len(),
            args.input.display()
        );
    }

    let report = validate_snapshot(&data);

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Total cards:    {}", style(report.total).cyan());
    println!("  Compliant:      {}", style(report.valid).green());
    println!("  Non-compliant:  {}", style(report.invalid).red());

    if report.invalid > 0 && !global.quiet {
        println!();
        println!("{}", style("Issues (first 10 cards):").bold());
        for (id, issues) in &report.sample_issues {
            println!("{} {}", style("✗").red(), style(id).cyan());
            for issue in issues {
                println!("    {}", style(&issue.message).yellow());
            }
        }
    }

    if report.invalid == 0 {
        println!();
        println!(
            "{} All cards follow the schema structure!",
            style("✓").green().bold()
        );
    }

    // Schema drift is data-level: reported, counted, fatal only on request
    if args.strict && report.invalid > 0 {
        return Err(miette::miette!(
            "validation failed: {} card(s) non-compliant",
            report.invalid
        ));
    }

    Ok(())
}
