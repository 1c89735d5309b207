use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use alloy::primitives::Address;
use chain::explorer::ExplorerClient;
use engine::{args::PAGE_CEILING, fetcher, source::explorer::ExplorerSource};
use eyre::{Result, WrapErr, bail};
use reqwest::Url;
use store::{
    output::{sheet, text},
    transfer::adapter::format_transfers,
};

use crate::cli::config::{self, FileConfig};
use crate::cli::fetch::args::Args;
use crate::cli::{prompt, read};

/// API credentials after merging flags, environment, config file and prompts.
struct Settings {
    api_key: String,
    contract: Address,
}

pub async fn start(args: &Args) -> Result<()> {
    let address = match &args.address {
        Some(address) => address.clone(),
        None => prompt::prompt_address()?,
    };
    let address = read::parse_address(&address)?;

    let settings = resolve_settings(args, &mut io::stdin().lock(), &mut io::stdout())?;
    let base_url = Url::parse(&args.base_url)
        .wrap_err_with(|| format!("Invalid explorer URL `{}`", args.base_url))?;

    tracing::info!("Fetching transactions for address: {address}");

    let source = ExplorerSource { client: ExplorerClient::new(base_url, settings.api_key) };
    let engine_args = engine::args::Args {
        contract: settings.contract,
        address,
        page_size: args.page_size,
        page_ceiling: PAGE_CEILING,
        request_delay: Duration::from_millis(args.delay_ms),
        empty_is_ok: args.empty_ok,
    };

    let records =
        fetcher::fetch_all(&engine_args, &source).await.wrap_err("Error fetching transfers")?;
    let transfers = format_transfers(&records).wrap_err("Error formatting transfers")?;

    let file_stem = format!("{address:#x}");
    let mut failures = Vec::new();

    if args.format.wants_text() {
        let path = output_path(&args.output_dir, &file_stem, "txt");
        match text::write_text(&path, &transfers) {
            Ok(()) => println!("Transactions saved to `{}`", path.display()),
            Err(e) => {
                tracing::error!("Error saving text file: {e:?}");
                failures.push(path);
            }
        }
    }

    if args.format.wants_sheet() {
        let path = output_path(&args.output_dir, &file_stem, "xlsx");
        match sheet::write_sheet(&path, &transfers, args.decimals) {
            Ok(()) => println!("Transactions saved to `{}`", path.display()),
            Err(e) => {
                tracing::error!("Error saving spreadsheet: {e:?}");
                failures.push(path);
            }
        }
    }

    if !failures.is_empty() {
        let paths: Vec<_> = failures.iter().map(|path| path.display().to_string()).collect();
        bail!("Could not write {}", paths.join(", "));
    }

    println!("Operation completed: {} transactions", transfers.len());
    Ok(())
}

fn output_path(dir: &Path, file_stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{file_stem}.{extension}"))
}

/// Flag or environment first, then the configuration file. A missing API key
/// is prompted for and written back, and so is a missing contract in an
/// existing file.
fn resolve_settings<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> Result<Settings> {
    let path = match &args.config {
        Some(path) if !path.is_file() => {
            bail!("Specified config file not found: {}", path.display())
        }
        Some(path) => Some(path.clone()),
        None => config::find_config_file(),
    };

    let stored = match &path {
        Some(path) => {
            tracing::info!("Found configuration file: {}", path.display());
            config::load(path)?
        }
        None => FileConfig::default(),
    };

    let mut prompted_key = None;
    let api_key = match args.api_key.clone().or_else(|| stored.api_key.clone()) {
        Some(api_key) => api_key,
        None => {
            match &path {
                Some(path) => tracing::warn!("API key not found in {}", path.display()),
                None => tracing::warn!("Configuration file not found. Setting up for first use."),
            }
            let api_key = prompt::ask_api_key(input, output)?;
            prompted_key = Some(api_key.clone());
            api_key
        }
    };

    let missing_contract = path.is_some() && stored.contract.is_none();
    if prompted_key.is_some() || missing_contract {
        let target = path.clone().unwrap_or_else(config::default_path);
        let updated = FileConfig {
            api_key: stored.api_key.clone().or(prompted_key),
            contract: stored.contract.clone(),
        };
        config::save(&target, &updated)?;
    }

    let contract = args
        .contract
        .clone()
        .or(stored.contract)
        .unwrap_or_else(|| config::DEFAULT_USDT_CONTRACT.to_string());
    let contract = read::parse_address(&contract).wrap_err("Invalid token contract")?;

    Ok(Settings { api_key, contract })
}
