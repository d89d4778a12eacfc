//! XLSX workbook writer.

use std::io::Write;
use std::path::Path;

use log::debug;
use rust_xlsxwriter::{Format, Workbook};
use tempfile::NamedTempFile;

use super::row::{header_row, record_row};
use crate::config::SHEET_NAME;
use crate::error_handling::ExportError;
use crate::models::DomainRecord;

/// Writes `records` to a new workbook at `output`.
///
/// The workbook has a single sheet named `Sheet1` with a bold header row
/// followed by one row per record, in the given order. The file is assembled
/// in memory, written to a temporary file next to `output` and then renamed
/// over it, so `output` is either left untouched or fully written.
///
/// # Arguments
///
/// * `records` - Resolved domains, one row each
/// * `output` - Path of the workbook to create or replace
/// * `separator` - Joins multiple values of one record type within a cell
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns `ExportError` if the workbook cannot be built (e.g. more rows than
/// a worksheet holds) or the file cannot be written.
pub fn write_workbook(
    records: &[DomainRecord],
    output: &Path,
    separator: &str,
) -> Result<usize, ExportError> {
    debug!("Starting write result to excel file {}", output.display());

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    // Text format on the domain column keeps a blank domain cell in the sheet
    let domain_format = Format::new().set_num_format("@");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in header_row().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        // Past u32::MAX the writer reports its own row limit error
        let row = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let cells = record_row(record, separator);

        // The domain cell is always written so every record has a row
        if record.domain.is_empty() {
            worksheet.write_blank(row, 0, &domain_format)?;
        } else {
            worksheet.write_string_with_format(row, 0, &record.domain, &domain_format)?;
        }

        for (col, cell) in cells.iter().enumerate().skip(1) {
            if cell.is_empty() {
                continue;
            }
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    let buffer = workbook.save_to_buffer()?;
    save_replacing(&buffer, output)?;

    debug!(
        "Wrote {} rows to {}",
        records.len(),
        output.display()
    );
    Ok(records.len())
}

fn save_replacing(bytes: &[u8], output: &Path) -> Result<(), ExportError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    file.write_all(bytes).map_err(|source| ExportError::Io {
        path: file.path().to_path_buf(),
        source,
    })?;
    file.persist(output).map_err(|source| ExportError::Persist {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Reader, Xlsx};

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook should open");
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
        let range = workbook
            .worksheet_range(SHEET_NAME)
            .expect("sheet should exist");
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_write_workbook_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.xlsx");
        let mut first = DomainRecord::new("example.com");
        first.a = vec!["93.184.216.34".to_string(), "93.184.216.35".to_string()];
        let second = DomainRecord::new("nonexistent-domain-xyz.invalid");

        let written = write_workbook(&[first, second], &output, ", ").unwrap();
        assert_eq!(written, 2);

        let rows = read_rows(&output);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["domain", "A", "AAAA", "CNAME"]);
        assert_eq!(
            rows[1],
            vec!["example.com", "93.184.216.34, 93.184.216.35", "", ""]
        );
        assert_eq!(rows[2], vec!["nonexistent-domain-xyz.invalid", "", "", ""]);
    }

    #[test]
    fn test_write_workbook_header_only_for_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("empty.xlsx");

        assert_eq!(write_workbook(&[], &output, ", ").unwrap(), 0);

        let rows = read_rows(&output);
        assert_eq!(rows, vec![header_row()]);
    }

    /// Raw worksheet XML; calamine leaves value-less cells out of its ranges.
    fn sheet_xml(path: &Path) -> String {
        let file = std::fs::File::open(path).expect("workbook should open");
        let mut archive = zip::ZipArchive::new(file).expect("workbook should be a zip archive");
        let mut sheet = archive
            .by_name("xl/worksheets/sheet1.xml")
            .expect("sheet part should exist");
        let mut xml = String::new();
        std::io::Read::read_to_string(&mut sheet, &mut xml).unwrap();
        xml
    }

    #[test]
    fn test_write_workbook_keeps_row_for_blank_domain() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("blank.xlsx");
        let records = [DomainRecord::new("a.example"), DomainRecord::new("")];

        assert_eq!(write_workbook(&records, &output, ", ").unwrap(), 2);

        let rows = read_rows(&output);
        assert_eq!(rows[1][0], "a.example");

        let xml = sheet_xml(&output);
        assert!(xml.contains(r#"<dimension ref="A1:D3"/>"#), "{xml}");
        assert!(xml.contains(r#"<c r="A3""#), "{xml}");
    }

    #[test]
    fn test_write_workbook_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.xlsx");
        std::fs::write(&output, b"stale").unwrap();

        write_workbook(&[DomainRecord::new("example.com")], &output, ", ").unwrap();

        let rows = read_rows(&output);
        assert_eq!(rows.len(), 2);
        // Only the output file is left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_workbook_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("out.xlsx");

        let result = write_workbook(&[], &output, ", ");
        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(!output.exists());
    }
}
