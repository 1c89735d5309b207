use std::num::ParseIntError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid timestamp `{value}` in transfer {hash}")]
    Timestamp {
        value: String,
        hash: String,
        #[source]
        source: ParseIntError,
    },

    #[error("timestamp {value} in transfer {hash} is out of range")]
    TimestampRange { value: i64, hash: String },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write spreadsheet {}", .path.display())]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
