mod cli {
    pub mod fetch {
        pub mod args;
        pub mod run;
    }
    pub mod setup {
        pub mod args;
        pub mod run;
    }
    pub mod cmd;
    pub mod config;
    pub mod prompt;
    pub mod read;
}

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match &cli.command {
        Command::Fetch(args) => cli::fetch::run::start(args).await,
        Command::Setup(args) => cli::setup::run::start(args),
    }
}

fn init_tracing() {
    // RUST_LOG overrides the default `info` level. Logs go to stderr, stdout
    // is left to prompts and the final summary.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
