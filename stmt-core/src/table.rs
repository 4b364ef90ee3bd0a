use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which export layout a statement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    #[serde(rename = "icici")]
    Icici,
    #[serde(rename = "pnb")]
    Pnb,
    #[serde(rename = "cc")]
    CreditCard,
}

impl SourceFormat {
    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Icici => "ICICI",
            SourceFormat::Pnb => "PNB",
            SourceFormat::CreditCard => "CC",
        }
    }
}

/// One cleaned transaction, normalized across source formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub txn_date: NaiveDate,
    /// Value date where the export carries one (ICICI does, PNB/CC don't).
    pub value_date: Option<NaiveDate>,
    /// Free-text narration/remarks as exported, with surrounding whitespace
    /// trimmed; the text itself is never rewritten.
    pub description: String,
    pub deposit: f64,
    pub withdrawal: f64,
    /// Running balance (credit-card exports have none).
    pub balance: Option<f64>,
    pub format: SourceFormat,
    /// Sub-fields split out of the description by the enricher; empty until
    /// enrichment runs, at most 4 afterwards.
    #[serde(default)]
    pub remark_fields: Vec<String>,
}

impl StatementRow {
    /// First enriched sub-field, typically a transfer-type code (NEFT, ACH).
    pub fn remark_code(&self) -> Option<&str> {
        self.remark_fields.first().map(|s| s.as_str())
    }
}

/// Ordered rows from one source format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    pub format: SourceFormat,
    pub rows: Vec<StatementRow>,
}

impl StatementTable {
    pub fn new(format: SourceFormat) -> Self {
        Self {
            format,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append another table's rows, keeping supply order.
    pub fn concat(&mut self, other: StatementTable) {
        self.rows.extend(other.rows);
    }

    /// Pure subset selection: rows satisfying the predicate, order preserved.
    pub fn filter(&self, pred: impl Fn(&StatementRow) -> bool) -> StatementTable {
        StatementTable {
            format: self.format,
            rows: self.rows.iter().filter(|r| pred(r)).cloned().collect(),
        }
    }
}

/// Named result sets, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    sets: Vec<(String, StatementTable)>,
}

impl ClassifiedResult {
    pub fn push(&mut self, name: impl Into<String>, table: StatementTable) {
        self.sets.push((name.into(), table));
    }

    pub fn get(&self, name: &str) -> Option<&StatementTable> {
        self.sets.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatementTable)> {
        self.sets.iter().map(|(n, t)| (n.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
