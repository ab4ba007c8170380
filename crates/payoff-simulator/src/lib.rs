//! On-demand numeric simulators for one selected candidate.
//!
//! Two independent pure functions: the expiry intrinsic-value payoff curve
//! and a short-horizon delta/gamma scenario P&L table. Neither performs
//! I/O or keeps state; a new selection simply recomputes from scratch.

pub mod payoff;
pub mod scenario;

pub use payoff::{breakeven, payoff_curve};
pub use scenario::{scenario_table, SCENARIO_MOVES_PCT};

/// Round to two decimal places for display series
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
