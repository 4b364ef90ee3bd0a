//! Loaders: xlsx workbook (bank statements) and double-quoted CSV
//! (credit-card exports with a variable trailing footer).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use stmt_core::{FormatSpec, SourceFormat, StatementError, StatementResult};
use tracing::warn;

use crate::grid::{Cell, RawTable};

fn unreadable(path: &Path, reason: impl ToString) -> StatementError {
    StatementError::UnreadableFile {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::text(s),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::text(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| Cell::Date(d.date()))
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s),
        Data::Error(_) => Cell::Empty,
    }
}

/// Read the first worksheet of an xlsx export. The first non-empty row is
/// taken as the header row; everything below it is data.
pub fn load_workbook(path: &Path) -> StatementResult<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| unreadable(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| unreadable(path, "workbook has no sheets"))?
        .map_err(|e| unreadable(path, e))?;

    let mut grid = range.rows().map(|row| {
        row.iter().map(cell_from_data).collect::<Vec<Cell>>()
    });

    let headers = grid
        .by_ref()
        .find(|row| row.iter().any(|c| !c.is_empty()))
        .ok_or_else(|| unreadable(path, "sheet contains no data"))?
        .into_iter()
        .map(|c| match c {
            Cell::Text(s) => s,
            Cell::Number(n) => n.to_string(),
            Cell::Date(d) => d.to_string(),
            Cell::Empty => String::new(),
        })
        .collect();

    Ok(RawTable::new(headers, grid.collect()))
}

/// Read a credit-card CSV export. Lines with fewer quoted fields than the
/// format expects are trailing summary/footer noise and are dropped before
/// the parser ever sees them; a short line never fails the file.
pub fn load_credit_card_csv(path: &Path, spec: &FormatSpec) -> StatementResult<RawTable> {
    let content = std::fs::read_to_string(path).map_err(|e| unreadable(path, e))?;
    parse_credit_card_lines(&content, spec, path)
}

fn parse_credit_card_lines(
    content: &str,
    spec: &FormatSpec,
    path: &Path,
) -> StatementResult<RawTable> {
    let mut kept = Vec::new();
    let mut dropped = 0usize;
    for line in content.lines() {
        if line.split("\",\"").count() >= spec.min_quoted_fields {
            kept.push(line);
        } else if !line.trim().is_empty() {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!(
            "{}: dropped {dropped} malformed line(s) before parsing",
            path.display()
        );
    }
    if kept.is_empty() {
        return Err(unreadable(path, "no parseable lines"));
    }

    let joined = kept.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(joined.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| unreadable(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| unreadable(path, e))?;
        let mut row: Vec<Cell> = record.iter().map(Cell::text).collect();
        row.resize(headers.len(), Cell::Empty);
        rows.push(row);
    }

    Ok(RawTable::new(headers, rows))
}

/// Dispatch to the right loader for the format tag.
pub fn load_statement(path: &Path, spec: &FormatSpec) -> StatementResult<RawTable> {
    match spec.format {
        SourceFormat::Icici | SourceFormat::Pnb => load_workbook(path),
        SourceFormat::CreditCard => load_credit_card_csv(path, spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CC_EXPORT: &str = concat!(
        "\"Date\",\"Sr.No.\",\"Transaction Details\",\"Reward Point Header\",\"Intl.Amount\",\"Amount(in Rs)\",\"BillingAmountSign\"\n",
        "\"02/04/2023\",\"1\",\"AMAZON RETAIL\",\"\",\"\",\"1,249.00\",\"Dr\"\n",
        "\"05/04/2023\",\"2\",\"PAYMENT RECEIVED\",\"\",\"\",\"5,000.00\",\"Cr\"\n",
        "\"Total\",\"\",\"6,249.00\"\n",
        "statement generated on 30/04/2023\n",
    );

    fn cc_spec() -> FormatSpec {
        FormatSpec::for_format(SourceFormat::CreditCard)
    }

    #[test]
    fn test_footer_lines_dropped_before_parsing() {
        let table =
            parse_credit_card_lines(CC_EXPORT, &cc_spec(), Path::new("stmt.csv")).unwrap();
        assert_eq!(table.headers.len(), 7);
        // Only the two real transaction rows survive.
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], Cell::Text("AMAZON RETAIL".to_string()));
    }

    #[test]
    fn test_rows_padded_to_header_width() {
        let table =
            parse_credit_card_lines(CC_EXPORT, &cc_spec(), Path::new("stmt.csv")).unwrap();
        for row in &table.rows {
            assert_eq!(row.len(), table.headers.len());
        }
    }

    #[test]
    fn test_all_footer_file_is_unreadable() {
        let err = parse_credit_card_lines(
            "Total,123\nend of statement\n",
            &cc_spec(),
            Path::new("footer.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, StatementError::UnreadableFile { .. }));
    }

    #[test]
    fn test_load_credit_card_csv_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cc.csv");
        std::fs::write(&path, CC_EXPORT).unwrap();

        let table = load_credit_card_csv(&path, &cc_spec()).unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_missing_workbook_is_unreadable() {
        let err = load_workbook(Path::new("/nonexistent/statement.xlsx")).unwrap_err();
        assert!(matches!(err, StatementError::UnreadableFile { .. }));
    }
}
