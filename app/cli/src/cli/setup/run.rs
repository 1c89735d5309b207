use eyre::Result;

use crate::cli::config::{self, FileConfig};
use crate::cli::prompt;
use crate::cli::setup::args::SetupArgs;

pub fn start(args: &SetupArgs) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => config::find_config_file().unwrap_or_else(config::default_path),
    };

    let existing = if path.is_file() { config::load(&path)? } else { FileConfig::default() };

    let api_key = prompt::prompt_api_key()?;
    let updated = FileConfig {
        api_key: Some(api_key),
        contract: Some(
            existing.contract.unwrap_or_else(|| config::DEFAULT_USDT_CONTRACT.to_string()),
        ),
    };
    config::save(&path, &updated)?;

    println!("Configuration written to `{}`", path.display());
    Ok(())
}
