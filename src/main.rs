mod cli;
mod criu;
mod inspect;
mod metadata;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use inspect::DisplayOptions;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { directory, show_mounts, print_stats, full_paths } => {
            inspect::run_inspect(&directory, &DisplayOptions { show_mounts, print_stats, full_paths })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
