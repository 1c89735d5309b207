use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::error::OutputError;
use crate::transfer::model::FormattedTransfer;
use crate::utils;

pub const SHEET_NAME: &str = "USDT Transactions";

pub const HEADER: [&str; 6] =
    ["Date", "From", "To", "Value (base units)", "Value (tokens)", "Hash"];

const COLUMN_WIDTHS: [f64; 6] = [20.0, 45.0, 45.0, 20.0, 15.0, 70.0];

const TOKEN_COLUMN: u16 = 4;

const PROGRESS_EVERY: usize = 5000;

/// Writes the transfers as an xlsx workbook with a single sheet.
///
/// `decimals` scales the base unit value into the numeric token column. A
/// value that is not a decimal integer leaves that cell empty.
pub fn write_sheet(
    path: &Path,
    transfers: &[FormattedTransfer],
    decimals: u8,
) -> Result<(), OutputError> {
    tracing::info!("Creating spreadsheet with {} transactions...", transfers.len());

    let mut workbook = Workbook::new();
    fill_sheet(workbook.add_worksheet(), transfers, decimals)
        .and_then(|_| workbook.save(path))
        .map_err(|source| OutputError::Xlsx { path: path.to_path_buf(), source })?;

    tracing::info!("Wrote {} transactions to {}", transfers.len(), path.display());
    Ok(())
}

fn fill_sheet(
    sheet: &mut Worksheet,
    transfers: &[FormattedTransfer],
    decimals: u8,
) -> Result<(), XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_background_color(Color::RGB(0xDDEBF7))
        .set_border_bottom(FormatBorder::Thin);
    let token_format = Format::new().set_num_format(token_number_format(decimals));

    sheet.set_name(SHEET_NAME)?;
    for (col, title) in (0u16..).zip(HEADER) {
        sheet.write_string_with_format(0, col, title, &header_format)?;
    }

    for (i, transfer) in transfers.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;

        sheet.write_string(row, 0, &transfer.date)?;
        sheet.write_string(row, 1, &transfer.from)?;
        sheet.write_string(row, 2, &transfer.to)?;
        sheet.write_string(row, 3, &transfer.value)?;
        if let Some(tokens) = token_amount(&transfer.value, decimals) {
            sheet.write_number_with_format(row, TOKEN_COLUMN, tokens, &token_format)?;
        }
        sheet.write_string(row, 5, &transfer.hash)?;

        if i > 0 && i % PROGRESS_EVERY == 0 {
            tracing::info!("Processed {i} of {} transactions...", transfers.len());
        }
    }

    for (col, width) in (0u16..).zip(COLUMN_WIDTHS) {
        sheet.set_column_width(col, width)?;
    }
    let last_row = u32::try_from(transfers.len()).map_err(|_| XlsxError::RowColumnLimitError)?;
    sheet.autofilter(0, 0, last_row, HEADER.len() as u16 - 1)?;
    sheet.set_freeze_panes(1, 0)?;

    Ok(())
}

/// `#,##0.000000` for 6 decimals, `#,##0` for none.
pub fn token_number_format(decimals: u8) -> String {
    match decimals {
        0 => "#,##0".to_string(),
        n => format!("#,##0.{}", "0".repeat(n as usize)),
    }
}

fn token_amount(value: &str, decimals: u8) -> Option<f64> {
    utils::base_units_to_tokens(value, decimals)?.parse().ok()
}
