use std::str::FromStr;

use alloy::primitives::Address;
use clap::ValueEnum;
use eyre::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    Text,
    Sheet,
    Both,
}

impl CliOutputFormat {
    pub fn wants_text(&self) -> bool {
        matches!(self, CliOutputFormat::Text | CliOutputFormat::Both)
    }

    pub fn wants_sheet(&self) -> bool {
        matches!(self, CliOutputFormat::Sheet | CliOutputFormat::Both)
    }
}

/// `0x` followed by exactly 40 hex characters, any case.
pub fn is_valid_address(input: &str) -> bool {
    input
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

pub fn parse_address(input: &str) -> Result<Address> {
    let input = input.trim();
    if !is_valid_address(input) {
        bail!("`{input}` is not an address: expected 0x followed by 40 hex characters");
    }
    Ok(Address::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_address("0xdac17f958d2ee523a2206206994597c13d831ec7"));
        assert!(is_valid_address("0xdAC17F958D2ee523a2206206994597C13D831ec7"));
        assert!(is_valid_address("0xDAC17F958D2EE523A2206206994597C13D831EC7"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("dac17f958d2ee523a2206206994597c13d831ec7"));
        assert!(!is_valid_address("0Xdac17f958d2ee523a2206206994597c13d831ec7"));
        assert!(!is_valid_address("0xdac17f958d2ee523a2206206994597c13d831ec"));
        assert!(!is_valid_address("0xdac17f958d2ee523a2206206994597c13d831ec70"));
        assert!(!is_valid_address("0xgac17f958d2ee523a2206206994597c13d831ec7"));
    }

    #[test]
    fn test_parse_address_ignores_case_and_padding() -> Result<()> {
        let lower = parse_address("0xdac17f958d2ee523a2206206994597c13d831ec7")?;
        let mixed = parse_address("  0xDAC17F958D2EE523A2206206994597C13D831EC7\n")?;

        assert_eq!(lower, mixed);
        assert!(parse_address("0x1234").is_err());
        Ok(())
    }

    #[test]
    fn test_output_format() {
        assert!(CliOutputFormat::Both.wants_text() && CliOutputFormat::Both.wants_sheet());
        assert!(CliOutputFormat::Text.wants_text() && !CliOutputFormat::Text.wants_sheet());
        assert!(!CliOutputFormat::Sheet.wants_text() && CliOutputFormat::Sheet.wants_sheet());
    }
}
