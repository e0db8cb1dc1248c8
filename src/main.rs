use clap::Parser;
use miette::Result;

use cardmend::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Resolve(args) => cardmend::cli::commands::resolve::run(args, &global),
        Commands::Validate(args) => cardmend::cli::commands::validate::run(args, &global),
        Commands::Check(args) => cardmend::cli::commands::check::run(args, &global),
        Commands::Unresolved(args) => cardmend::cli::commands::unresolved::run(args, &global),
        Commands::Stats(args) => cardmend::cli::commands::stats::run(args, &global),
        Commands::Compare(args) => cardmend::cli::commands::compare::run(args, &global),
    }
}
