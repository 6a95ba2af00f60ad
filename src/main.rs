//! Omni command-line frontend.

use clap::Parser;
use omni::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    omni::logging::init(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
