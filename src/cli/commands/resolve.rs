//! `cardmend resolve` command - run the link-resolution pipeline

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{
    build_overrides, load_dataset, load_index, resolve, save_dataset, valid_link_count,
    LookupTable, ResolveOptions, DEFAULT_SIMILARITY_CUTOFF,
};

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Dataset snapshot to repair
    pub input: PathBuf,

    /// Reference index file
    #[arg(long, short = 'i')]
    pub index: PathBuf,

    /// Output snapshot path (default: rewrite input in place)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Enable the fuzzy (approximate-match) tier
    #[arg(long)]
    pub fuzzy: bool,

    /// Similarity acceptance cutoff for the fuzzy tier (0-1)
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_CUTOFF)]
    pub cutoff: f64,

    /// Manual override, as SLUG=TERM where TERM is an index term name (repeatable)
    #[arg(long = "override", value_name = "SLUG=TERM")]
    pub overrides: Vec<String>,

    /// Compute and report statistics without writing the output snapshot
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_override(spec: &str) -> Result<(String, String)> {
    let (slug, term) = spec
        .split_once('=')
        .ok_or_else(|| miette::miette!("invalid override '{}': expected SLUG=TERM", spec))?;
    Ok((slug.to_string(), term.to_string()))
}

pub fn run(args: ResolveArgs, global: &GlobalOpts) -> Result<()> {
    let mappings = args
        .overrides
        .iter()
        .map(|s| parse_override(s))
        .collect::<Result<Vec<_>>>()?;

    // Fatal failures all happen here, before any output is written
    let index = load_index(&args.index).into_diagnostic()?;
    let dataset = load_dataset(&args.input).into_diagnostic()?;

    let (overrides, warnings) = build_overrides(&mappings, &index);
    for warning in &warnings {
        println!("{} {}", style("!").yellow(), warning);
    }

    let mut table = LookupTable::from_index_default(&index);
    table.augment(&dataset);

    if !global.quiet {
        println!(
            "{} Built lookup table with {} keys from {} index entries and {} cards",
            style("→").blue(),
            style(table.len()).cyan(),
            index.len(),
            dataset.len()
        );
    }

    let opts = ResolveOptions {
        fuzzy: args.fuzzy,
        cutoff: args.cutoff,
        overrides,
    };
    let valid_before = valid_link_count(&dataset);
    let (repaired, stats) = resolve(&dataset, &table, &opts);
    let valid_after = valid_link_count(&repaired);

    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Resolution Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Total links:      {}", style(stats.total_links).cyan());
    println!("  Already valid:    {}", style(stats.already_valid).green());
    println!("  Exact fixed:      {}", style(stats.exact_fixed).green());
    if args.fuzzy {
        println!("  Fuzzy fixed:      {}", style(stats.fuzzy_fixed).green());
    }
    if !opts.overrides.is_empty() {
        println!("  Manually fixed:   {}", style(stats.manual_fixed).green());
    }
    println!("  Unresolved:       {}", style(stats.unresolved).yellow());

    if global.verbose && !stats.fuzzy_samples.is_empty() {
        println!();
        println!("{}", style("Fuzzy matches (sample):").bold());
        for s in &stats.fuzzy_samples {
            println!(
                "  {} -> {} ({}, score {:.3})",
                s.slug,
                s.matched_key,
                style(&s.id).cyan(),
                s.score
            );
        }
    }

    if !global.quiet && !stats.unresolved_samples.is_empty() {
        println!();
        println!("{}", style("Unresolved (sample):").bold());
        for slug in &stats.unresolved_samples {
            println!("  - {}", slug);
        }
    }

    // Regression guard between pipeline stages
    if valid_after < valid_before {
        return Err(miette::miette!(
            "resolution decreased valid links from {} to {}; output not written",
            valid_before,
            valid_after
        ));
    }

    if args.dry_run {
        println!();
        println!("{} Dry run: no output written", style("→").blue());
        return Ok(());
    }

    let output = args.output.as_ref().unwrap_or(&args.input);
    save_dataset(output, &repaired).into_diagnostic()?;
    println!();
    println!(
        "{} Wrote {} cards to {} ({} links fixed)",
        style("✓").green(),
        repaired.len(),
        output.display(),
        stats.fixed_total()
    );

    Ok(())
}
