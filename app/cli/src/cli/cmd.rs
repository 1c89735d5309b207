use clap::{Parser, Subcommand};

use crate::cli::fetch::args::Args;
use crate::cli::setup::args::SetupArgs;

#[derive(Parser, Debug)]
#[command(name = "eth-crawler")]
#[command(about = "Download the ERC20 token transfer history of an address", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch all transfers of an address and save them
    Fetch(Args),
    /// Create or refresh the configuration file
    Setup(SetupArgs),
}
