//! Declarative review rule table.
//!
//! Rules are evaluated in the order they appear in [`RULES`]; the first
//! failure supplies the single rejection reason. Keeping precedence in one
//! slice makes it reproducible and makes adding a rule a data change.

use reco_core::Candidate;

use crate::thresholds::ModeThresholds;

pub(crate) enum RuleOutcome {
    Pass,
    /// Rejection reason embedding the observed value and the threshold
    Fail(String),
    /// A field this rule needs is absent; the rule fails as
    /// "insufficient data for <rule>"
    Missing,
}

pub(crate) struct Rule {
    pub name: &'static str,
    pub check: fn(&Candidate, &ModeThresholds) -> RuleOutcome,
}

/// Fixed precedence: confidence → DTE → IV → theta → liquidity → risk/reward
pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "confidence",
        check: check_confidence,
    },
    Rule {
        name: "days to expiry",
        check: check_dte,
    },
    Rule {
        name: "implied volatility",
        check: check_iv,
    },
    Rule {
        name: "theta decay",
        check: check_theta,
    },
    Rule {
        name: "liquidity",
        check: check_liquidity,
    },
    Rule {
        name: "risk/reward",
        check: check_risk_reward,
    },
];

fn check_confidence(c: &Candidate, t: &ModeThresholds) -> RuleOutcome {
    let conf = match c.confidence.or(c.p_up) {
        Some(v) if v.is_finite() => v,
        _ => return RuleOutcome::Missing,
    };
    if conf < t.min_confidence {
        RuleOutcome::Fail(format!(
            "confidence {:.2} below {:.2} threshold",
            conf, t.min_confidence
        ))
    } else {
        RuleOutcome::Pass
    }
}

fn check_dte(c: &Candidate, t: &ModeThresholds) -> RuleOutcome {
    let dte = match c.diagnostics.dte {
        Some(v) => v,
        None => return RuleOutcome::Missing,
    };
    if dte < t.min_dte {
        RuleOutcome::Fail(format!(
            "DTE {} below minimum {} (theta cliff risk)",
            dte, t.min_dte
        ))
    } else {
        RuleOutcome::Pass
    }
}

fn check_iv(c: &Candidate, t: &ModeThresholds) -> RuleOutcome {
    let iv = match c.diagnostics.iv {
        Some(v) if v.is_finite() => v,
        _ => return RuleOutcome::Missing,
    };
    if iv > t.max_iv {
        RuleOutcome::Fail(format!(
            "implied volatility {:.1}% exceeds {:.1}% threshold",
            iv, t.max_iv
        ))
    } else {
        RuleOutcome::Pass
    }
}

fn check_theta(c: &Candidate, t: &ModeThresholds) -> RuleOutcome {
    let (theta, entry) = match (c.diagnostics.theta_per_day, c.entry) {
        (Some(th), Some(e)) if e > 0.0 => (th, e),
        _ => return RuleOutcome::Missing,
    };
    let theta_pct = theta.abs() / entry;
    if theta_pct > t.max_theta_pct {
        RuleOutcome::Fail(format!(
            "theta decay {:.1}% of entry per day exceeds {:.1}% threshold",
            theta_pct * 100.0,
            t.max_theta_pct * 100.0
        ))
    } else {
        RuleOutcome::Pass
    }
}

fn check_liquidity(c: &Candidate, t: &ModeThresholds) -> RuleOutcome {
    // A zero floor disables the liquidity filter entirely
    if t.min_open_interest <= 0.0 {
        return RuleOutcome::Pass;
    }
    let oi = match c.diagnostics.open_interest {
        Some(v) => v,
        None => return RuleOutcome::Missing,
    };
    if oi < t.min_open_interest {
        RuleOutcome::Fail(format!(
            "open interest {:.0} below minimum {:.0} (liquidity risk)",
            oi, t.min_open_interest
        ))
    } else {
        RuleOutcome::Pass
    }
}

fn check_risk_reward(c: &Candidate, t: &ModeThresholds) -> RuleOutcome {
    let rr = c.diagnostics.risk_reward.or_else(|| derived_risk_reward(c));
    let rr = match rr {
        Some(v) if v.is_finite() => v,
        _ => return RuleOutcome::Missing,
    };
    if rr < t.min_risk_reward {
        RuleOutcome::Fail(format!(
            "risk/reward {:.2} below minimum {:.2}",
            rr, t.min_risk_reward
        ))
    } else {
        RuleOutcome::Pass
    }
}

/// (T1 − entry) / (entry − stop), when the candidate carries its own levels
fn derived_risk_reward(c: &Candidate) -> Option<f64> {
    let entry = c.entry?;
    let stop = c.stop_loss?;
    let target = c.target_1?;
    let risk = entry - stop;
    if risk <= 0.0 {
        return None;
    }
    Some((target - entry) / risk)
}
