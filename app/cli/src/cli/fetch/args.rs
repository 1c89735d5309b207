use std::path::PathBuf;

use chain::explorer::ETHERSCAN_API_URL;
use clap::Parser;
use engine::args::{DEFAULT_PAGE_SIZE, PAGE_CEILING, REQUEST_DELAY_MS};

use crate::cli::config::{API_KEY_VAR, CONTRACT_VAR};
use crate::cli::read::CliOutputFormat;

#[derive(Parser, Debug)]
#[command(about = "Fetch the ERC20 transfer history of an address", long_about = None)]
pub struct Args {
    /// Holder address, 0x followed by 40 hex characters (prompted for when missing)
    #[arg(short, long)]
    pub address: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = CliOutputFormat::Both)]
    pub format: CliOutputFormat,

    /// Path to a .env or .conf configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Explorer API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Token contract address
    #[arg(long, env = CONTRACT_VAR)]
    pub contract: Option<String>,

    /// Explorer API endpoint
    #[arg(long, default_value = ETHERSCAN_API_URL)]
    pub base_url: String,

    /// Transfers requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u64).range(1..=PAGE_CEILING))]
    pub page_size: u64,

    /// Delay between two page requests in milliseconds
    #[arg(long, default_value_t = REQUEST_DELAY_MS)]
    pub delay_ms: u64,

    /// Token decimals used for the spreadsheet token column
    #[arg(long, default_value_t = 6)]
    pub decimals: u8,

    /// Directory receiving the output files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Treat a "No transactions found" answer as an empty page instead of an error
    #[arg(long)]
    pub empty_ok: bool,
}
