//! Recommendation pipeline: resolve → review → rank → invalidate.
//!
//! Candidates are evaluated in parallel (review and symbol resolution have
//! no ordering dependency); the merge back into one report is an
//! order-preserving collect, so the output is deterministic regardless of
//! which worker finished first.

use option_reviewer::{Reviewer, ReviewProfiles};
use rayon::prelude::*;
use reco_core::{
    Candidate, PayoffPoint, QuoteSnapshot, RankedEntry, ReviewDecision, ScenarioRow,
};
use serde::{Deserialize, Serialize};

/// Partitioned result of one as-of run, handed to reporting/UI
/// collaborators. Approved and rejected partition the input batch; the
/// ranked list merges both with display confidence and expired flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoReport {
    pub as_of: String,
    pub approved: Vec<RankedEntry>,
    pub rejected: Vec<RankedEntry>,
    pub ranked: Vec<RankedEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct RecoPipeline {
    reviewer: Reviewer,
}

impl RecoPipeline {
    pub fn new() -> Self {
        Self {
            reviewer: Reviewer::new(),
        }
    }

    pub fn with_profiles(profiles: ReviewProfiles) -> Self {
        Self {
            reviewer: Reviewer::with_profiles(profiles),
        }
    }

    /// Run one as-of batch. `today` is the caller's effective date for
    /// sell-by invalidation; nothing here reads a wall clock.
    pub fn run(&self, candidates: Vec<Candidate>, today: &str) -> RecoReport {
        tracing::info!(count = candidates.len(), today, "reviewing candidate batch");

        let reviewed: Vec<(Candidate, Option<ReviewDecision>, Option<String>)> = candidates
            .into_par_iter()
            .map(|candidate| {
                let symbol = symbol_resolver::resolve_candidate(&candidate);
                let decision = self.reviewer.review(&candidate);
                (candidate, Some(decision), symbol)
            })
            .collect();

        let mut ranked = ranking_engine::rank(reviewed);
        expiry_invalidator::invalidate_batch(&mut ranked, today);

        let approved: Vec<RankedEntry> =
            ranked.iter().filter(|e| e.tier == 2).cloned().collect();
        let rejected: Vec<RankedEntry> =
            ranked.iter().filter(|e| e.tier != 2).cloned().collect();

        tracing::info!(
            approved = approved.len(),
            rejected = rejected.len(),
            "review complete"
        );

        RecoReport {
            as_of: today.to_string(),
            approved,
            rejected,
            ranked,
        }
    }
}

/// Expiry payoff curve for one selected candidate. Empty when the
/// candidate is missing side, strike, or entry premium.
pub fn payoff_for(candidate: &Candidate) -> Vec<PayoffPoint> {
    let (Some(side), Some(strike), Some(entry)) =
        (candidate.side, candidate.strike, candidate.entry)
    else {
        return Vec::new();
    };
    payoff_simulator::payoff_curve(
        side,
        strike,
        candidate.diagnostics.spot,
        entry,
        candidate.diagnostics.atr_points,
    )
}

/// Breakeven underlying at expiry, when the contract is complete
pub fn breakeven_for(candidate: &Candidate) -> Option<f64> {
    Some(payoff_simulator::breakeven(
        candidate.side?,
        candidate.strike?,
        candidate.entry?,
    ))
}

/// Scenario P&L table for one selected candidate plus a live quote.
///
/// The current price is the live last-traded price when the quote is
/// good, else the candidate's entry premium; greeks come from the quote
/// first, then the diagnostics bag.
pub fn scenario_for(candidate: &Candidate, quote: &QuoteSnapshot) -> Vec<ScenarioRow> {
    let live = if quote.ok { quote.ltp } else { None };
    let current = live.or(candidate.entry);
    let delta = quote.delta.or(candidate.diagnostics.delta);
    let gamma = quote.gamma.or(candidate.diagnostics.gamma);

    payoff_simulator::scenario_table(
        candidate.diagnostics.spot,
        candidate.entry,
        current,
        delta,
        gamma,
    )
}
