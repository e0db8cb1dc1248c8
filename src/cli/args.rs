//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    check::CheckArgs, compare::CompareArgs, resolve::ResolveArgs, stats::StatsArgs,
    unresolved::UnresolvedArgs, validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "cardmend")]
#[command(author, version, about = "Knowledge-card dataset repair")]
#[command(
    long_about = "A batch toolkit for repairing and cross-linking knowledge-card datasets recovered from truncated model-output transcripts."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (per-link fuzzy decisions, full samples)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve connection slugs against the reference index
    Resolve(ResolveArgs),

    /// Report schema compliance for a dataset snapshot
    Validate(ValidateArgs),

    /// Check dataset coverage against the index main entries
    Check(CheckArgs),

    /// List the most frequent unresolved slugs
    Unresolved(UnresolvedArgs),

    /// Show link-format and card-type statistics
    Stats(StatsArgs),

    /// Regression check between two pipeline snapshots
    Compare(CompareArgs),
}
