pub mod rules;
pub mod thresholds;

pub use thresholds::{ModeThresholds, ReviewProfiles};

use reco_core::{Candidate, ReviewDecision};
use rules::{RuleOutcome, RULES};

/// Rule-based reviewer for option trade candidates.
///
/// Pure classification: every candidate gets exactly one decision, so the
/// approved and rejected sets partition the batch. A malformed candidate
/// is rejected with an explicit insufficient-data reason, never a panic.
#[derive(Debug, Clone, Default)]
pub struct Reviewer {
    profiles: ReviewProfiles,
}

impl Reviewer {
    pub fn new() -> Self {
        Self {
            profiles: ReviewProfiles::default(),
        }
    }

    pub fn with_profiles(profiles: ReviewProfiles) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &ReviewProfiles {
        &self.profiles
    }

    /// Review one candidate under its own mode's thresholds
    pub fn review(&self, candidate: &Candidate) -> ReviewDecision {
        let key = candidate.key();

        // Structural completeness comes before any threshold rule: a
        // candidate without a tradable contract cannot pass review.
        if let Some(reason) = contract_defect(candidate) {
            tracing::debug!(key = %key, %reason, "candidate rejected");
            return ReviewDecision::rejected(key, reason);
        }

        let thresholds = self.profiles.for_mode(candidate.mode);
        for rule in RULES {
            let reason = match (rule.check)(candidate, thresholds) {
                RuleOutcome::Pass => continue,
                RuleOutcome::Fail(reason) => reason,
                RuleOutcome::Missing => format!("insufficient data for {}", rule.name),
            };
            tracing::debug!(key = %key, rule = rule.name, %reason, "candidate rejected");
            return ReviewDecision::rejected(key, reason);
        }

        ReviewDecision::approved(key)
    }

    /// Review a batch in input order
    pub fn review_batch(&self, candidates: &[Candidate]) -> Vec<ReviewDecision> {
        candidates.iter().map(|c| self.review(c)).collect()
    }
}

fn contract_defect(c: &Candidate) -> Option<String> {
    match c.strike {
        None => return Some("insufficient data: missing strike".to_string()),
        Some(s) if !s.is_finite() || s <= 0.0 => {
            return Some(format!("invalid strike {}", s));
        }
        _ => {}
    }
    if c.side.is_none() {
        return Some("insufficient data: missing side".to_string());
    }
    if c.expiry.is_none() {
        return Some("insufficient data: missing expiry".to_string());
    }
    None
}
