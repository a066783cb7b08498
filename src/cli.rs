use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cpview")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Container checkpoint inspection tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect an extracted container checkpoint directory
    #[command(arg_required_else_help = true)]
    Inspect {
        /// Checkpoint directory (already extracted)
        #[arg(short, long)]
        directory: String,

        /// Show an overview of the checkpoint's mounts
        #[arg(long)]
        show_mounts: bool,

        /// Print CRIU dump statistics
        #[arg(long)]
        print_stats: bool,

        /// Show mount source paths in full instead of shortened
        #[arg(long)]
        full_paths: bool,
    },
}
