//! Named classification filters. Each filter is a pure function from table
//! to table; filters are independent and may overlap (a row can land in more
//! than one result set). None of them touch amount or date fields.

use stmt_core::{ClassifiedResult, FormatSpec, SourceFormat, StatementTable};

fn contains_any(description: &str, keywords: &[String]) -> bool {
    let lower = description.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw.as_str()))
}

/// Rows with a positive deposit.
pub fn net_credits(table: &StatementTable) -> StatementTable {
    table.filter(|r| r.deposit > 0.0)
}

/// Net-credit rows whose first enriched sub-field is a transfer-type code
/// (NEFT, ACH, ...). Requires the enricher to have run.
pub fn transfer_credits(table: &StatementTable, codes: &[String]) -> StatementTable {
    net_credits(table).filter(|r| {
        r.remark_code()
            .is_some_and(|c| codes.iter().any(|code| code == c))
    })
}

/// Net-credit rows whose narration matches none of the exclusion keywords
/// (sweeps, redemption proceeds, tax credits, loan repayment credits).
pub fn non_sweep_credits(table: &StatementTable, exclude: &[String]) -> StatementTable {
    net_credits(table).filter(|r| !contains_any(&r.description, exclude))
}

/// Net-credit rows whose narration matches an interest keyword; feeds the
/// fixed-deposit interest approximation.
pub fn interest_credits(table: &StatementTable, keywords: &[String]) -> StatementTable {
    net_credits(table).filter(|r| contains_any(&r.description, keywords))
}

/// Assemble the result sets for one format under the sheet names the report
/// has always used, so output is stable across runs for a given mode.
pub fn report_sets(table: &StatementTable, spec: &FormatSpec) -> ClassifiedResult {
    let mut result = ClassifiedResult::default();
    match spec.format {
        SourceFormat::Icici => {
            result.push("ICICI", table.clone());
            result.push("IC_NetCredit", net_credits(table));
            result.push("IC_NEFT_ACH", transfer_credits(table, &spec.transfer_codes));
        }
        SourceFormat::Pnb => {
            result.push("PNB", table.clone());
            result.push("OBC_NetCredit", net_credits(table));
            result.push(
                "OBC_nonSweep",
                non_sweep_credits(table, &spec.exclude_keywords),
            );
            result.push(
                "OBC_FDInt",
                interest_credits(table, &spec.interest_keywords),
            );
        }
        SourceFormat::CreditCard => {
            result.push("out", table.clone());
        }
    }
    result
}
