//! Grid cleaning: empty/sparse drops, amount coercion, date parsing, and
//! projection into the typed `StatementTable`.
//!
//! Statement exports routinely carry stray formatting columns, padding rows,
//! and locale-formatted numbers ("1,234.56 Cr."), so cleaning is driven by
//! per-format thresholds from `FormatSpec` rather than by a schema.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use stmt_core::{FormatSpec, StatementError, StatementResult, StatementRow, StatementTable};

use crate::grid::{Cell, RawTable};

/// Run the full cleaning pipeline and project the result into a
/// `StatementTable`. Every surviving row has a parsed date and numeric
/// amounts.
pub fn clean(mut table: RawTable, spec: &FormatSpec) -> StatementResult<StatementTable> {
    drop_sparse_columns(&mut table, 1);
    drop_sparse_rows(&mut table, 1);
    drop_sparse_columns(&mut table, spec.col_threshold);
    drop_sparse_rows(&mut table, spec.row_threshold);
    coerce_amounts(&mut table, spec)?;
    parse_dates(&mut table, spec)?;
    project(table, spec)
}

/// Keep columns with at least `threshold` populated cells. A threshold of 1
/// drops only all-empty columns.
fn drop_sparse_columns(table: &mut RawTable, threshold: usize) {
    if threshold == 0 {
        return;
    }
    let keep: Vec<bool> = (0..table.headers.len())
        .map(|i| table.column_populated(i) >= threshold)
        .collect();
    retain_indexed(&mut table.headers, &keep);
    for row in &mut table.rows {
        retain_indexed(row, &keep);
    }
}

/// Keep rows with at least `threshold` populated cells.
fn drop_sparse_rows(table: &mut RawTable, threshold: usize) {
    if threshold == 0 {
        return;
    }
    table.rows.retain(|row| RawTable::row_populated(row) >= threshold);
}

fn retain_indexed<T>(items: &mut Vec<T>, keep: &[bool]) {
    let mut i = 0;
    items.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
}

static AMOUNT_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|Cr\.|Dr\.").unwrap());

/// Coerce the format's amount columns to numbers: strip thousands separators
/// and trailing debit/credit markers, default empty cells to zero. Residual
/// non-numeric text is a `TypeCoercion` error naming column and value.
fn coerce_amounts(table: &mut RawTable, spec: &FormatSpec) -> StatementResult<()> {
    for name in spec.amount_columns() {
        let Some(col) = table.column_index(name) else {
            continue; // projection reports the missing column
        };
        for row in &mut table.rows {
            row[col] = match &row[col] {
                Cell::Empty => Cell::Number(0.0),
                Cell::Number(n) => Cell::Number(*n),
                Cell::Text(s) => {
                    let stripped = AMOUNT_STRIP.replace_all(s, "");
                    let trimmed = stripped.trim();
                    let value = trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| StatementError::TypeCoercion {
                            column: name.to_string(),
                            value: s.clone(),
                        })?;
                    Cell::Number(value)
                }
                Cell::Date(_) => {
                    return Err(StatementError::TypeCoercion {
                        column: name.to_string(),
                        value: "date".to_string(),
                    });
                }
            };
        }
    }
    Ok(())
}

/// Parse the format's date columns with its explicit pattern. Already-typed
/// date cells pass through; anything else must match the pattern.
fn parse_dates(table: &mut RawTable, spec: &FormatSpec) -> StatementResult<()> {
    let optional: Option<&str> = spec.value_date_column.as_deref();
    for name in spec.date_columns() {
        let Some(col) = table.column_index(name) else {
            continue;
        };
        let is_optional = optional == Some(name);
        for row in &mut table.rows {
            row[col] = match &row[col] {
                Cell::Date(d) => Cell::Date(*d),
                Cell::Empty if is_optional => Cell::Empty,
                Cell::Text(s) => {
                    let date = NaiveDate::parse_from_str(s, &spec.date_pattern).map_err(|_| {
                        StatementError::DateParse {
                            column: name.to_string(),
                            value: s.clone(),
                            pattern: spec.date_pattern.clone(),
                        }
                    })?;
                    Cell::Date(date)
                }
                other => {
                    return Err(StatementError::DateParse {
                        column: name.to_string(),
                        value: match other {
                            Cell::Number(n) => n.to_string(),
                            _ => String::new(),
                        },
                        pattern: spec.date_pattern.clone(),
                    });
                }
            };
        }
    }
    Ok(())
}

fn require_column(table: &RawTable, name: &str, spec: &FormatSpec) -> StatementResult<usize> {
    table
        .column_index(name)
        .ok_or_else(|| StatementError::MissingColumn {
            column: name.to_string(),
            format: spec.format.label().to_string(),
        })
}

fn project(table: RawTable, spec: &FormatSpec) -> StatementResult<StatementTable> {
    let date_col = require_column(&table, &spec.date_column, spec)?;
    let desc_col = require_column(&table, &spec.description_column, spec)?;
    let value_date_col = match &spec.value_date_column {
        Some(name) => Some(require_column(&table, name, spec)?),
        None => None,
    };
    let deposit_col = match &spec.deposit_column {
        Some(name) => Some(require_column(&table, name, spec)?),
        None => None,
    };
    let withdrawal_col = match &spec.withdrawal_column {
        Some(name) => Some(require_column(&table, name, spec)?),
        None => None,
    };
    let balance_col = match &spec.balance_column {
        Some(name) => Some(require_column(&table, name, spec)?),
        None => None,
    };
    let amount_col = match &spec.amount_column {
        Some(name) => Some(require_column(&table, name, spec)?),
        None => None,
    };
    let sign_col = spec
        .sign_column
        .as_ref()
        .and_then(|name| table.column_index(name));

    let mut out = StatementTable::new(spec.format);
    for row in &table.rows {
        let txn_date = row[date_col].as_date().ok_or_else(|| {
            StatementError::DateParse {
                column: spec.date_column.clone(),
                value: String::new(),
                pattern: spec.date_pattern.clone(),
            }
        })?;

        let (mut deposit, mut withdrawal) = (
            deposit_col.and_then(|c| row[c].as_number()).unwrap_or(0.0),
            withdrawal_col.and_then(|c| row[c].as_number()).unwrap_or(0.0),
        );
        // Single signed-amount layouts (credit card): the marker column says
        // which side the amount lands on.
        if let Some(c) = amount_col {
            let amount = row[c].as_number().unwrap_or(0.0);
            let is_credit = sign_col
                .and_then(|s| row[s].as_text())
                .is_some_and(|s| s.to_lowercase().starts_with("cr"));
            if is_credit {
                deposit = amount;
            } else {
                withdrawal = amount;
            }
        }

        out.rows.push(StatementRow {
            txn_date,
            value_date: value_date_col.and_then(|c| row[c].as_date()),
            description: row[desc_col].as_text().unwrap_or("").to_string(),
            deposit,
            withdrawal,
            balance: balance_col.and_then(|c| row[c].as_number()),
            format: spec.format,
            remark_fields: Vec::new(),
        });
    }
    Ok(out)
}
