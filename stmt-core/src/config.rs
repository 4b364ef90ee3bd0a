//! Per-format configuration. Export layouts are not self-describing, so
//! column names and drop thresholds are empirically tuned per format and kept
//! here as data rather than as separate code paths.

use serde::{Deserialize, Serialize};

use crate::table::SourceFormat;

/// Column names, cleaning thresholds, and classification keywords for one
/// statement layout. All fields are plain data so callers can override any
/// of them when a bank changes its export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSpec {
    pub format: SourceFormat,
    pub date_column: String,
    pub value_date_column: Option<String>,
    pub description_column: String,
    pub deposit_column: Option<String>,
    pub withdrawal_column: Option<String>,
    pub balance_column: Option<String>,
    /// Single signed amount column (credit-card layout).
    pub amount_column: Option<String>,
    /// Debit/credit marker column paired with `amount_column`.
    pub sign_column: Option<String>,
    /// Chrono pattern for every date column in this layout.
    pub date_pattern: String,
    /// Keep a column only if it has at least this many populated cells.
    pub col_threshold: usize,
    /// Keep a row only if it has at least this many populated cells.
    pub row_threshold: usize,
    /// Narration separator characters normalized to `/` before splitting.
    pub separators: Vec<char>,
    /// First-subfield codes counted as bank transfers.
    pub transfer_codes: Vec<String>,
    /// Lowercased keywords excluding a credit from the non-sweep set.
    pub exclude_keywords: Vec<String>,
    /// Lowercased keywords selecting the interest-estimate subset.
    pub interest_keywords: Vec<String>,
    /// Credit-card CSV lines with fewer quoted fields are footer noise and
    /// are dropped before parsing.
    pub min_quoted_fields: usize,
}

impl FormatSpec {
    pub fn for_format(format: SourceFormat) -> FormatSpec {
        match format {
            SourceFormat::Icici => FormatSpec {
                format,
                date_column: "Transaction Date".into(),
                value_date_column: Some("Value Date".into()),
                description_column: "Transaction Remarks".into(),
                deposit_column: Some("Deposit Amount (INR )".into()),
                withdrawal_column: Some("Withdrawal Amount (INR )".into()),
                balance_column: Some("Balance (INR )".into()),
                amount_column: None,
                sign_column: None,
                date_pattern: "%d/%m/%Y".into(),
                col_threshold: 10,
                row_threshold: 5,
                separators: vec!['-', ':'],
                transfer_codes: vec!["NEFT".into(), "ACH".into()],
                exclude_keywords: Vec::new(),
                interest_keywords: Vec::new(),
                min_quoted_fields: 0,
            },
            SourceFormat::Pnb => FormatSpec {
                format,
                date_column: "Transaction Date".into(),
                value_date_column: None,
                description_column: "Narration".into(),
                deposit_column: Some("Deposit".into()),
                withdrawal_column: Some("Withdrawal".into()),
                balance_column: Some("Balance".into()),
                amount_column: None,
                sign_column: None,
                date_pattern: "%d/%m/%Y".into(),
                col_threshold: 3,
                row_threshold: 4,
                separators: vec![':'],
                transfer_codes: vec!["NEFT".into(), "ACH".into()],
                exclude_keywords: vec![
                    "sweep".into(),
                    "proceeds".into(),
                    "tax".into(),
                    "repayment credit".into(),
                ],
                interest_keywords: vec!["tax".into()],
                min_quoted_fields: 0,
            },
            SourceFormat::CreditCard => FormatSpec {
                format,
                date_column: "Date".into(),
                value_date_column: None,
                description_column: "Transaction Details".into(),
                deposit_column: None,
                withdrawal_column: None,
                balance_column: None,
                amount_column: Some("Amount(in Rs)".into()),
                sign_column: Some("BillingAmountSign".into()),
                date_pattern: "%d/%m/%Y".into(),
                // Footer noise is removed by the pre-parse line filter.
                col_threshold: 0,
                row_threshold: 0,
                separators: Vec::new(),
                transfer_codes: Vec::new(),
                exclude_keywords: Vec::new(),
                interest_keywords: Vec::new(),
                min_quoted_fields: 6,
            },
        }
    }

    /// Columns that must be coerced to numeric during cleaning.
    pub fn amount_columns(&self) -> Vec<&str> {
        [
            self.deposit_column.as_deref(),
            self.withdrawal_column.as_deref(),
            self.balance_column.as_deref(),
            self.amount_column.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Columns that must parse as dates during cleaning.
    pub fn date_columns(&self) -> Vec<&str> {
        [Some(self.date_column.as_str()), self.value_date_column.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Columns the projection into `StatementRow` cannot do without.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut cols = vec![self.date_column.as_str(), self.description_column.as_str()];
        cols.extend(self.amount_columns());
        cols
    }
}

/// Empirical constants for the fixed-deposit interest approximation, kept
/// from the original report: deposits arrive in multiples of the denomination
/// step and the rate factor is an assumed pre-tax growth rate. Any value
/// computed from these is an approximation, not an authoritative figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestParams {
    pub denomination_step: f64,
    pub rate_factor: f64,
}

impl Default for InterestParams {
    fn default() -> Self {
        Self {
            denomination_step: 5000.0,
            rate_factor: 1.028,
        }
    }
}
