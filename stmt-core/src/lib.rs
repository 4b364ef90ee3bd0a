//! stmt-core: core types for the statement summary generator — table model,
//! per-format configuration, and error taxonomy.

pub mod config;
pub mod error;
pub mod table;

pub use config::{FormatSpec, InterestParams};
pub use error::{StatementError, StatementResult};
pub use table::{ClassifiedResult, SourceFormat, StatementRow, StatementTable};
