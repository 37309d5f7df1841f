#![cfg(feature = "xlsx")]

//! Spreadsheet workbook export (feature `xlsx`).

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportResult;
use crate::types::Work;

use super::ExportOptions;
use super::row::{Cell, ExportRow, XLSX_HEADERS};

/// Build the workbook for `works`: one sheet, a bold header row, then one row per work.
pub fn build_workbook(works: &[Work], options: &ExportOptions) -> ExportResult<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&options.sheet_name)?;

    for (col, name) in XLSX_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, work) in works.iter().enumerate() {
        let row = (i + 1) as u32;
        let flat = ExportRow::from_work(work);
        for (col, cell) in flat.cells().into_iter().enumerate() {
            match cell {
                Cell::Text(s) => sheet.write_string(row, col as u16, s)?,
                Cell::Number(n) => sheet.write_number(row, col as u16, n as f64)?,
            };
        }
    }
    sheet.autofit();

    Ok(workbook)
}

/// Write the workbook for `works` to `writer`.
pub fn export_xlsx<W: Write>(
    works: &[Work],
    mut writer: W,
    options: &ExportOptions,
) -> ExportResult<()> {
    let mut workbook = build_workbook(works, options)?;
    let bytes = workbook.save_to_buffer()?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
