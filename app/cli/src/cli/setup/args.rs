use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Create or refresh the configuration file", long_about = None)]
pub struct SetupArgs {
    /// Configuration file to write (defaults to the discovered one, or ethcrawler.conf next to the executable)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
