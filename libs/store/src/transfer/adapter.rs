use chain::transfer::TransferRecord;

use crate::error::FormatError;
use crate::transfer::model::FormattedTransfer;
use crate::utils;

impl TryFrom<&TransferRecord> for FormattedTransfer {
    type Error = FormatError;

    fn try_from(record: &TransferRecord) -> Result<Self, FormatError> {
        let timestamp: i64 = record.timestamp.parse().map_err(|source| FormatError::Timestamp {
            value: record.timestamp.clone(),
            hash: record.hash.clone(),
            source,
        })?;
        let date = utils::format_timestamp(timestamp).ok_or_else(|| {
            FormatError::TimestampRange { value: timestamp, hash: record.hash.clone() }
        })?;

        Ok(Self {
            date,
            from: record.from.clone(),
            to: record.to.clone(),
            value: record.value.clone(),
            hash: record.hash.clone(),
            timestamp,
        })
    }
}

/// Formats every record, in order. The first bad timestamp fails the whole batch.
pub fn format_transfers(records: &[TransferRecord]) -> Result<Vec<FormattedTransfer>, FormatError> {
    records.iter().map(FormattedTransfer::try_from).collect()
}
