//! Narration enrichment: normalize the format's separator characters to one
//! delimiter and split out up to 4 sub-fields as classification keys. The
//! original description column is never altered.

use stmt_core::{FormatSpec, StatementTable};

/// Number of sub-fields split out of a narration; anything past the last
/// separator stays concatenated in the final field.
pub const MAX_REMARK_FIELDS: usize = 4;

/// Replace every configured separator with `/`.
pub fn normalize_separators(text: &str, separators: &[char]) -> String {
    text.chars()
        .map(|c| if separators.contains(&c) { '/' } else { c })
        .collect()
}

/// Split a narration into at most [`MAX_REMARK_FIELDS`] sub-fields. Missing
/// sub-fields are absent, not empty-filled, so a narration with no separator
/// yields a single field. Idempotent: splitting already-normalized text
/// again produces the same fields.
pub fn split_remarks(text: &str, separators: &[char]) -> Vec<String> {
    normalize_separators(text, separators)
        .splitn(MAX_REMARK_FIELDS, '/')
        .map(|s| s.trim().to_string())
        .collect()
}

/// Fill `remark_fields` for every row. Never changes the row count or the
/// description text.
pub fn enrich(table: &mut StatementTable, spec: &FormatSpec) {
    for row in &mut table.rows {
        row.remark_fields = split_remarks(&row.description, &spec.separators);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stmt_core::{SourceFormat, StatementRow};

    const ICICI_SEPS: &[char] = &['-', ':'];

    #[test]
    fn test_normalizes_hyphen_and_colon() {
        assert_eq!(
            normalize_separators("NEFT-SALARY:ACME", ICICI_SEPS),
            "NEFT/SALARY/ACME"
        );
    }

    #[test]
    fn test_split_keeps_overflow_in_last_field() {
        let fields = split_remarks("UPI-123456-user@bank-PAYMENT-extra-bits", ICICI_SEPS);
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "UPI");
        assert_eq!(fields[3], "PAYMENT/extra/bits");
    }

    #[test]
    fn test_missing_subfields_stay_absent() {
        let fields = split_remarks("NEFT-SALARY", ICICI_SEPS);
        assert_eq!(fields, vec!["NEFT", "SALARY"]);

        let fields = split_remarks("CASH DEPOSIT", ICICI_SEPS);
        assert_eq!(fields, vec!["CASH DEPOSIT"]);
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let once = normalize_separators("NEFT-SALARY-ACME", ICICI_SEPS);
        let twice = normalize_separators(&once, ICICI_SEPS);
        assert_eq!(once, twice);
        assert_eq!(
            split_remarks(&once, ICICI_SEPS),
            split_remarks(&twice, ICICI_SEPS)
        );
    }

    #[test]
    fn test_pnb_only_normalizes_colon() {
        let spec = FormatSpec::for_format(SourceFormat::Pnb);
        let fields = split_remarks("SWEEP-TRF:FD:12345", &spec.separators);
        assert_eq!(fields, vec!["SWEEP-TRF", "FD", "12345"]);
    }

    #[test]
    fn test_enrich_preserves_rows_and_description() {
        let spec = FormatSpec::for_format(SourceFormat::Icici);
        let mut table = StatementTable::new(SourceFormat::Icici);
        table.rows.push(StatementRow {
            txn_date: NaiveDate::from_ymd_opt(2023, 4, 10).unwrap(),
            value_date: None,
            description: "NEFT-SALARY-ACME".into(),
            deposit: 1500.0,
            withdrawal: 0.0,
            balance: Some(1500.0),
            format: SourceFormat::Icici,
            remark_fields: Vec::new(),
        });

        enrich(&mut table, &spec);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].description, "NEFT-SALARY-ACME");
        assert_eq!(table.rows[0].remark_code(), Some("NEFT"));
        assert_eq!(
            table.rows[0].remark_fields,
            vec!["NEFT", "SALARY", "ACME"]
        );

        // running it again yields the same sub-fields
        let before = table.rows[0].remark_fields.clone();
        enrich(&mut table, &spec);
        assert_eq!(table.rows[0].remark_fields, before);
    }
}
