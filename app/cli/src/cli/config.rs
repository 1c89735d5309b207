use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

pub const DEFAULT_USDT_CONTRACT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";
pub const ENV_FILE_NAME: &str = ".env";
pub const CONF_FILE_NAME: &str = "ethcrawler.conf";
pub const API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
pub const CONTRACT_VAR: &str = "USDT_CONTRACT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Env,
    Conf,
}

impl ConfigFormat {
    pub fn of(path: &Path) -> Self {
        let is_env = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".env"));
        if is_env { ConfigFormat::Env } else { ConfigFormat::Conf }
    }
}

/// Settings stored in a configuration file. Blank values count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub contract: Option<String>,
}

/// Candidate files, by priority: next to the executable first, then the
/// working directory, `.conf` before `.env` in each.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = executable_dir() {
        paths.push(dir.join(CONF_FILE_NAME));
        paths.push(dir.join(ENV_FILE_NAME));
    }
    paths.push(PathBuf::from(CONF_FILE_NAME));
    paths.push(PathBuf::from(ENV_FILE_NAME));
    paths
}

pub fn find_config_file() -> Option<PathBuf> {
    search_paths().into_iter().find(|path| path.is_file())
}

/// Where a new configuration file is created.
pub fn default_path() -> PathBuf {
    match executable_dir() {
        Some(dir) => dir.join(CONF_FILE_NAME),
        None => PathBuf::from(CONF_FILE_NAME),
    }
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe().ok()?.parent().map(Path::to_path_buf)
}

/// Reads `KEY=VALUE` lines without touching the process environment.
pub fn load(path: &Path) -> Result<FileConfig> {
    let mut config = FileConfig::default();

    let entries = dotenvy::from_path_iter(path)
        .wrap_err_with(|| format!("Error reading config file {}", path.display()))?;
    for entry in entries {
        let (key, value) =
            entry.wrap_err_with(|| format!("Error parsing config file {}", path.display()))?;
        let value = Some(value.trim().to_string()).filter(|value| !value.is_empty());
        match key.as_str() {
            API_KEY_VAR => config.api_key = value,
            CONTRACT_VAR => config.contract = value,
            _ => {}
        }
    }

    Ok(config)
}

pub fn render(format: ConfigFormat, config: &FileConfig) -> String {
    let api_key = config.api_key.as_deref().unwrap_or_default();
    let contract = config.contract.as_deref().unwrap_or(DEFAULT_USDT_CONTRACT);
    match format {
        ConfigFormat::Env => format!("{API_KEY_VAR}={api_key}\n{CONTRACT_VAR}={contract}\n"),
        ConfigFormat::Conf => format!(
            "# EthCrawler configuration file\n\n\
             # Etherscan API key\n{API_KEY_VAR}={api_key}\n\n\
             # Token contract address (USDT by default)\n{CONTRACT_VAR}={contract}\n"
        ),
    }
}

pub fn save(path: &Path, config: &FileConfig) -> Result<()> {
    fs::write(path, render(ConfigFormat::of(path), config))
        .wrap_err_with(|| format!("Error saving configuration to {}", path.display()))?;
    tracing::info!("Configuration saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(ConfigFormat::of(Path::new(".env")), ConfigFormat::Env);
        assert_eq!(ConfigFormat::of(Path::new("/opt/crawler/prod.env")), ConfigFormat::Env);
        assert_eq!(ConfigFormat::of(Path::new("ethcrawler.conf")), ConfigFormat::Conf);
        assert_eq!(ConfigFormat::of(Path::new("settings")), ConfigFormat::Conf);
    }

    #[test]
    fn test_search_paths_end_in_working_directory() {
        let paths = search_paths();

        assert_eq!(
            &paths[paths.len() - 2..],
            &[PathBuf::from(CONF_FILE_NAME), PathBuf::from(ENV_FILE_NAME)]
        );
    }

    #[test]
    fn test_load_conf_with_comments() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONF_FILE_NAME);
        fs::write(
            &path,
            "# crawler\n\nETHERSCAN_API_KEY=KEY123\nOTHER=1\n# USDT\nUSDT_CONTRACT=0xabc\n",
        )?;

        let config = load(&path)?;

        assert_eq!(config.api_key.as_deref(), Some("KEY123"));
        assert_eq!(config.contract.as_deref(), Some("0xabc"));
        Ok(())
    }

    #[test]
    fn test_load_accepts_spaces_around_equals() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONF_FILE_NAME);
        fs::write(&path, "ETHERSCAN_API_KEY = KEY123\nUSDT_CONTRACT = 0xabc\n")?;

        let config = load(&path)?;

        assert_eq!(config.api_key.as_deref(), Some("KEY123"));
        assert_eq!(config.contract.as_deref(), Some("0xabc"));
        Ok(())
    }

    #[test]
    fn test_load_treats_blank_as_missing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(ENV_FILE_NAME);
        fs::write(&path, "ETHERSCAN_API_KEY=\n")?;

        assert_eq!(load(&path)?, FileConfig::default());
        Ok(())
    }

    #[test]
    fn test_save_and_reload_both_formats() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = FileConfig { api_key: Some("KEY123".to_string()), contract: None };

        for name in [ENV_FILE_NAME, CONF_FILE_NAME] {
            let path = dir.path().join(name);
            save(&path, &config)?;

            let reloaded = load(&path)?;
            assert_eq!(reloaded.api_key.as_deref(), Some("KEY123"));
            assert_eq!(reloaded.contract.as_deref(), Some(DEFAULT_USDT_CONTRACT));
        }

        let env = fs::read_to_string(dir.path().join(ENV_FILE_NAME))?;
        assert!(!env.contains('#'));
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        assert!(load(&dir.path().join("absent.conf")).is_err());
    }
}
