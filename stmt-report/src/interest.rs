//! Fixed-deposit interest approximation for credits matched by the interest
//! keywords. The constants live in `InterestParams`; the estimate is an
//! empirical heuristic, never an authoritative figure.

use stmt_core::{InterestParams, StatementTable};

/// Estimate the pre-tax principal behind a credited deposit: back out the
/// rate factor, then round half-up to a tenth of the denomination step.
pub fn estimate_principal(deposit: f64, params: &InterestParams) -> f64 {
    let step = params.denomination_step;
    step * (deposit / params.rate_factor / step * 10.0 + 0.5).floor() / 10.0
}

/// Approximate interest earned on one deposit.
pub fn estimate_interest(deposit: f64, params: &InterestParams) -> f64 {
    deposit - estimate_principal(deposit, params)
}

/// Sum of the per-row interest estimates over a result set.
pub fn total_estimated_interest(table: &StatementTable, params: &InterestParams) -> f64 {
    table
        .rows
        .iter()
        .map(|r| estimate_interest(r.deposit, params))
        .sum()
}
