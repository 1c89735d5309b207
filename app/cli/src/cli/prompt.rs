use std::io::{self, BufRead, Write};

use eyre::{Result, bail};

use crate::cli::read;

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for an answer");
    }
    Ok(line.trim().to_string())
}

/// Asks until a well formed address is entered.
pub fn ask_address<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let address = ask(input, output, "Please enter an Ethereum address (starting with 0x): ")?;
        if read::is_valid_address(&address) {
            return Ok(address);
        }
        writeln!(
            output,
            "Invalid Ethereum address format. Address should start with 0x followed by 40 hex characters."
        )?;
    }
}

/// Asks until a non-empty API key is entered.
pub fn ask_api_key<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        let api_key = ask(input, output, "Please enter your Etherscan API key: ")?;
        if !api_key.is_empty() {
            return Ok(api_key);
        }
        writeln!(output, "API key cannot be empty. Please try again.")?;
    }
}

pub fn prompt_address() -> Result<String> {
    ask_address(&mut io::stdin().lock(), &mut io::stdout())
}

pub fn prompt_api_key() -> Result<String> {
    ask_api_key(&mut io::stdin().lock(), &mut io::stdout())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_ask_address_retries_until_valid() -> Result<()> {
        let mut input = Cursor::new("nope\n0x1234\n0xdac17f958d2ee523a2206206994597c13d831ec7\n");
        let mut output = Vec::new();

        let address = ask_address(&mut input, &mut output)?;

        assert_eq!(address, "0xdac17f958d2ee523a2206206994597c13d831ec7");
        let transcript = String::from_utf8(output)?;
        assert_eq!(transcript.matches("Invalid Ethereum address format").count(), 2);
        Ok(())
    }

    #[test]
    fn test_ask_api_key_rejects_blank() -> Result<()> {
        let mut input = Cursor::new("   \nABC123\n");
        let mut output = Vec::new();

        assert_eq!(ask_api_key(&mut input, &mut output)?, "ABC123");
        Ok(())
    }

    #[test]
    fn test_closed_input_fails() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(ask_api_key(&mut input, &mut output).is_err());
    }
}
