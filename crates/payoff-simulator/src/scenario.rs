use reco_core::ScenarioRow;

use crate::round2;

/// Fixed relative underlying moves, in percent
pub const SCENARIO_MOVES_PCT: [f64; 9] = [-2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0];

/// Short-horizon scenario P&L table.
///
/// Fast approximation contract: estimated option price is the second-order
/// Taylor expansion `P0 + Δ·ΔS + ½·Γ·ΔS²`. Time decay and volatility
/// changes are deliberately excluded, so this can later be swapped for a
/// full pricer without touching review or ranking logic.
///
/// Returns an empty table when spot, entry, or current price is missing
/// or non-positive; the caller surfaces that as "insufficient data".
pub fn scenario_table(
    spot: Option<f64>,
    entry: Option<f64>,
    current_price: Option<f64>,
    delta: Option<f64>,
    gamma: Option<f64>,
) -> Vec<ScenarioRow> {
    let (Some(spot), Some(entry), Some(current)) = (spot, entry, current_price) else {
        return Vec::new();
    };
    if !(spot.is_finite() && spot > 0.0)
        || !(entry.is_finite() && entry > 0.0)
        || !(current.is_finite() && current > 0.0)
    {
        return Vec::new();
    }

    let delta = delta.unwrap_or(0.0);
    let gamma = gamma.unwrap_or(0.0);

    SCENARIO_MOVES_PCT
        .iter()
        .map(|&move_pct| {
            let ds = spot * move_pct / 100.0;
            let estimated = current + delta * ds + 0.5 * gamma * ds * ds;
            let pnl = estimated - entry;
            ScenarioRow {
                move_pct,
                underlying: round2(spot + ds),
                estimated_price: round2(estimated),
                pnl: round2(pnl),
                pnl_pct: round2(pnl / entry * 100.0),
            }
        })
        .collect()
}
