//! stmt-report: classification filters, fixed-deposit interest estimation,
//! and the multi-sheet workbook writer.

pub mod classify;
pub mod interest;
pub mod writer;

pub use classify::{interest_credits, net_credits, non_sweep_credits, report_sets, transfer_credits};
pub use interest::{estimate_interest, estimate_principal, total_estimated_interest};
pub use writer::write_workbook;
