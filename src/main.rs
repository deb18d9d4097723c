//! CLI entry point for running the search engines over character maps

use clap::Parser;
use searchkit::io::cli::{Cli, CommandRunner};

// Allow print for the command report
#[allow(clippy::print_stdout)]
fn main() -> searchkit::Result<()> {
    let cli = Cli::parse();
    cli.install_logging();

    for line in CommandRunner::new(cli).run()? {
        println!("{line}");
    }
    Ok(())
}
