use reco_core::{OptionSide, PayoffPoint};

use crate::round2;

/// Number of evenly spaced samples across the price window
const SAMPLES: usize = 121;

/// Half-width of the ATR-derived window, in ATR multiples
const ATR_WINDOW_MULT: f64 = 2.2;

/// Half-width of the fallback window as a fraction of the anchor price
const PCT_WINDOW: f64 = 0.10;

/// Expiry payoff curve for a long option.
///
/// Window priority: ±`ATR_WINDOW_MULT`·ATR about the spot when both are
/// known, else ±10% of spot, else ±10% of strike; the lower bound is
/// clamped at 0. Returns an empty series when strike or premium is not a
/// finite positive number — the caller renders that as "insufficient
/// data", never as a failure.
pub fn payoff_curve(
    side: OptionSide,
    strike: f64,
    spot: Option<f64>,
    premium: f64,
    atr_points: Option<f64>,
) -> Vec<PayoffPoint> {
    if !(strike.is_finite() && strike > 0.0 && premium.is_finite() && premium > 0.0) {
        return Vec::new();
    }

    let spot = spot.filter(|s| s.is_finite() && *s > 0.0);
    let atr = atr_points.filter(|a| a.is_finite() && *a > 0.0);

    let (lo, hi) = match (spot, atr) {
        (Some(s0), Some(a)) => (s0 - ATR_WINDOW_MULT * a, s0 + ATR_WINDOW_MULT * a),
        (Some(s0), None) => ((1.0 - PCT_WINDOW) * s0, (1.0 + PCT_WINDOW) * s0),
        (None, _) => ((1.0 - PCT_WINDOW) * strike, (1.0 + PCT_WINDOW) * strike),
    };
    let lo = lo.max(0.0);

    let step = (hi - lo) / (SAMPLES - 1) as f64;
    (0..SAMPLES)
        .map(|i| {
            let s = lo + step * i as f64;
            let intrinsic = match side {
                OptionSide::Ce => (s - strike).max(0.0),
                OptionSide::Pe => (strike - s).max(0.0),
            };
            PayoffPoint {
                underlying: round2(s),
                pnl: round2(intrinsic - premium),
            }
        })
        .collect()
}

/// Breakeven underlying price at expiry: strike + premium for a call,
/// strike − premium for a put
pub fn breakeven(side: OptionSide, strike: f64, premium: f64) -> f64 {
    match side {
        OptionSide::Ce => strike + premium,
        OptionSide::Pe => strike - premium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atr_window_and_at_the_money_loss() {
        let curve = payoff_curve(
            OptionSide::Ce,
            24500.0,
            Some(24500.0),
            120.0,
            Some(220.0),
        );

        assert_eq!(curve.len(), 121);
        // Window = spot ± 2.2 * 220 = [24016, 24984]
        assert_relative_eq!(curve[0].underlying, 24016.0, epsilon = 0.01);
        assert_relative_eq!(curve[120].underlying, 24984.0, epsilon = 0.01);

        // At S = 24500 (the midpoint) the call is at the money: loss = premium
        let mid = &curve[60];
        assert_relative_eq!(mid.underlying, 24500.0, epsilon = 0.01);
        assert_relative_eq!(mid.pnl, -120.0, epsilon = 0.01);
    }

    #[test]
    fn test_breakeven() {
        assert_relative_eq!(breakeven(OptionSide::Ce, 24500.0, 120.0), 24620.0);
        assert_relative_eq!(breakeven(OptionSide::Pe, 24500.0, 120.0), 24380.0);
    }

    #[test]
    fn test_spot_fallback_window_without_atr() {
        let curve = payoff_curve(OptionSide::Ce, 24500.0, Some(24000.0), 120.0, None);
        assert_relative_eq!(curve[0].underlying, 21600.0, epsilon = 0.01);
        assert_relative_eq!(curve[120].underlying, 26400.0, epsilon = 0.01);
    }

    #[test]
    fn test_strike_fallback_window_without_spot() {
        // ATR alone is not enough to anchor a window
        let curve = payoff_curve(OptionSide::Pe, 1000.0, None, 20.0, Some(50.0));
        assert_relative_eq!(curve[0].underlying, 900.0, epsilon = 0.01);
        assert_relative_eq!(curve[120].underlying, 1100.0, epsilon = 0.01);
    }

    #[test]
    fn test_lower_bound_clamped_at_zero() {
        let curve = payoff_curve(OptionSide::Pe, 100.0, Some(50.0), 5.0, Some(100.0));
        assert!(curve.first().unwrap().underlying >= 0.0);
    }

    #[test]
    fn test_put_payoff_shape() {
        let curve = payoff_curve(OptionSide::Pe, 1000.0, Some(1000.0), 30.0, None);
        // Deep downside: intrinsic = 1000 - 900 = 100, pnl = 70
        assert_relative_eq!(curve[0].underlying, 900.0, epsilon = 0.01);
        assert_relative_eq!(curve[0].pnl, 70.0, epsilon = 0.01);
        // Upside expires worthless: pnl = -premium
        assert_relative_eq!(curve[120].pnl, -30.0, epsilon = 0.01);
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_series() {
        assert!(payoff_curve(OptionSide::Ce, 0.0, Some(24500.0), 120.0, None).is_empty());
        assert!(payoff_curve(OptionSide::Ce, -1.0, Some(24500.0), 120.0, None).is_empty());
        assert!(payoff_curve(OptionSide::Ce, f64::NAN, Some(24500.0), 120.0, None).is_empty());
        assert!(payoff_curve(OptionSide::Ce, 24500.0, Some(24500.0), 0.0, None).is_empty());
        assert!(payoff_curve(OptionSide::Ce, 24500.0, None, f64::INFINITY, None).is_empty());
    }

    #[test]
    fn test_values_rounded_to_two_decimals() {
        let curve = payoff_curve(OptionSide::Ce, 333.0, Some(333.33), 7.77, None);
        for p in curve {
            assert_relative_eq!(p.underlying, (p.underlying * 100.0).round() / 100.0);
            assert_relative_eq!(p.pnl, (p.pnl * 100.0).round() / 100.0);
        }
    }
}
