use banner_miner_core::cli::{MineCmd, run_mine};
use banner_miner_core::logging::init_logging;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "banner-miner",
    version,
    about = "Banner impression and landing page counts from access logs"
)]
struct Cli {
    /// Path to a TOML config file (layout, delimiter, store)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: MineCmd,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = run_mine(cli.command, cli.config.as_deref()) {
        error!(error = %e, "Run failed");
        eprintln!("banner-miner: {e:#}");
        std::process::exit(1);
    }
}
