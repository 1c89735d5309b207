use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;
use crate::transfer::model::FormattedTransfer;

/// Writes one `DATE | FROM | TO | VALUE | HASH` line per transfer.
pub fn write_text(path: &Path, transfers: &[FormattedTransfer]) -> Result<(), OutputError> {
    let io_error = |source: std::io::Error| OutputError::Io { path: path.to_path_buf(), source };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    for transfer in transfers {
        writeln!(writer, "{transfer}").map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    tracing::info!("Wrote {} transactions to {}", transfers.len(), path.display());
    Ok(())
}
