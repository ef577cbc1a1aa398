//! Export of the collected records as CSV or an Excel workbook.

use crate::error::Result;
use crate::results::BusinessRecord;
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the records to `path`, as a workbook if it ends in `.xlsx`, as CSV otherwise
pub fn write_table<P: AsRef<Path>>(records: &[BusinessRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let is_workbook = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if is_workbook {
        write_xlsx(records, path)
    } else {
        write_csv(records, path)
    }
}

/// Writes the header row and one row per record
///
/// The header is written even when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[BusinessRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(BusinessRecord::COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.as_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the records to it
pub fn write_csv<P: AsRef<Path>>(records: &[BusinessRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_records(file, records)?;
    ::log::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Creates (or overwrites) the workbook at `path` with a single sheet of records
pub fn write_xlsx<P: AsRef<Path>>(records: &[BusinessRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in BusinessRecord::COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.as_row().iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    workbook.save(path)?;
    ::log::info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
