#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::Read;
    use std::path::Path;

    use eyre::Result;
    use store::{
        error::OutputError,
        output::{
            sheet::{HEADER, SHEET_NAME, token_number_format, write_sheet},
            text::write_text,
        },
        transfer::model::FormattedTransfer,
    };

    fn transfers() -> Vec<FormattedTransfer> {
        vec![
            FormattedTransfer {
                date: "2023-11-14 22:13:20".to_string(),
                from: "0x01".to_string(),
                to: "0x02".to_string(),
                value: "2500000".to_string(),
                hash: "0xaa".to_string(),
                timestamp: 1_700_000_000,
            },
            FormattedTransfer {
                date: "2023-11-14 22:13:21".to_string(),
                from: "0x02".to_string(),
                to: "0x03".to_string(),
                value: "garbage".to_string(),
                hash: "0xbb".to_string(),
                timestamp: 1_700_000_001,
            },
        ]
    }

    #[test]
    fn test_write_text() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.txt");

        write_text(&path, &transfers())?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "2023-11-14 22:13:20 | FROM: 0x01 | TO: 0x02 | VALUE: 2500000 | HASH: 0xaa\n\
             2023-11-14 22:13:21 | FROM: 0x02 | TO: 0x03 | VALUE: garbage | HASH: 0xbb\n"
        );
        Ok(())
    }

    /// Reads one part of the xlsx package back as text.
    fn read_part(path: &Path, name: &str) -> Result<String> {
        let mut archive = zip::ZipArchive::new(File::open(path)?)?;
        let mut content = String::new();
        archive.by_name(name)?.read_to_string(&mut content)?;
        Ok(content)
    }

    #[test]
    fn test_write_sheet() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.xlsx");

        write_sheet(&path, &transfers(), 6)?;

        let workbook = read_part(&path, "xl/workbook.xml")?;
        assert!(workbook.contains(&format!("name=\"{SHEET_NAME}\"")));

        let strings = read_part(&path, "xl/sharedStrings.xml")?;
        for expected in HEADER.iter().chain(&["0x01", "0xaa", "2500000", "garbage"]) {
            assert!(strings.contains(expected), "missing {expected}");
        }

        let sheet = read_part(&path, "xl/worksheets/sheet1.xml")?;
        assert!(sheet.contains("<v>2.5</v>"));
        assert!(sheet.contains("state=\"frozen\""));
        assert!(sheet.contains("<autoFilter ref=\"A1:F3\"/>"));
        // no token cell for the unparseable value
        assert!(!sheet.contains("r=\"E3\""));

        let styles = read_part(&path, "xl/styles.xml")?;
        assert!(styles.contains("formatCode=\"#,##0.000000\""));
        Ok(())
    }

    #[test]
    fn test_write_empty_sheet_keeps_header() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.xlsx");

        write_sheet(&path, &[], 6)?;

        let strings = read_part(&path, "xl/sharedStrings.xml")?;
        assert!(strings.contains("Value (tokens)"));
        let sheet = read_part(&path, "xl/worksheets/sheet1.xml")?;
        assert!(sheet.contains("<autoFilter ref=\"A1:F1\"/>"));
        Ok(())
    }

    #[test]
    fn test_token_number_format_follows_decimals() {
        assert_eq!(token_number_format(6), "#,##0.000000");
        assert_eq!(token_number_format(2), "#,##0.00");
        assert_eq!(token_number_format(0), "#,##0");
    }

    #[test]
    fn test_write_sheet_into_missing_directory_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("report.xlsx");

        let err = write_sheet(&path, &transfers(), 6).unwrap_err();

        assert!(matches!(err, OutputError::Xlsx { .. }));
        assert!(err.to_string().contains("report.xlsx"));
        Ok(())
    }

    #[test]
    fn test_write_into_missing_directory_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("report.txt");

        let err = write_text(&path, &transfers()).unwrap_err();

        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("report.txt"));
        Ok(())
    }
}
