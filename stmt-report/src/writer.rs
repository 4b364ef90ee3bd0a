//! Multi-sheet workbook output: one sheet per named result set, row order
//! preserved within each sheet.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};
use stmt_core::{ClassifiedResult, StatementError, StatementResult, StatementRow};

/// Column headers of every output sheet, matching `StatementRow` plus the
/// enriched sub-fields.
const SHEET_HEADERS: [&str; 10] = [
    "Transaction Date",
    "Value Date",
    "Description",
    "Deposit",
    "Withdrawal",
    "Balance",
    "C1",
    "C2",
    "C3",
    "C4",
];

const DATE_DISPLAY: &str = "%d/%m/%Y";

/// Excel caps sheet names at 31 chars and rejects a handful of characters.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
            other => other,
        })
        .collect();
    cleaned.chars().take(31).collect()
}

fn write_err(path: &Path, e: XlsxError) -> StatementError {
    StatementError::Write {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Serialize every result set into one workbook at `path`, sheets in result
/// order. Fails with `WriteError` if the destination cannot be created.
pub fn write_workbook(path: &Path, result: &ClassifiedResult) -> StatementResult<()> {
    let mut workbook = Workbook::new();

    for (name, table) in result.iter() {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(sanitize_sheet_name(name))
            .map_err(|e| write_err(path, e))?;

        for (col, header) in SHEET_HEADERS.iter().enumerate() {
            sheet
                .write_string(0, col as u16, *header)
                .map_err(|e| write_err(path, e))?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            write_row(sheet, (i + 1) as u32, row).map_err(|e| write_err(path, e))?;
        }
    }

    workbook.save(path).map_err(|e| write_err(path, e))
}

fn write_row(
    sheet: &mut rust_xlsxwriter::Worksheet,
    r: u32,
    row: &StatementRow,
) -> Result<(), XlsxError> {
    sheet.write_string(r, 0, row.txn_date.format(DATE_DISPLAY).to_string())?;
    if let Some(vd) = row.value_date {
        sheet.write_string(r, 1, vd.format(DATE_DISPLAY).to_string())?;
    }
    sheet.write_string(r, 2, &row.description)?;
    sheet.write_number(r, 3, row.deposit)?;
    sheet.write_number(r, 4, row.withdrawal)?;
    if let Some(balance) = row.balance {
        sheet.write_number(r, 5, balance)?;
    }
    for (i, field) in row.remark_fields.iter().take(4).enumerate() {
        sheet.write_string(r, (6 + i) as u16, field)?;
    }
    Ok(())
}
