//! stmt-ingest: statement loading (xlsx / quoted CSV), grid cleaning, and
//! narration enrichment.

pub mod cleaner;
pub mod enrich;
pub mod grid;
pub mod loader;

pub use cleaner::clean;
pub use enrich::enrich;
pub use grid::{Cell, RawTable};
pub use loader::{load_credit_card_csv, load_statement, load_workbook};
