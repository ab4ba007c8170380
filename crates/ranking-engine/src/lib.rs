//! Deterministic ordering of reviewed candidates.
//!
//! Primary key: tier (approved=2, no-decision=1, rejected=0), descending.
//! Secondary key: ranking score, descending. Ties keep original input
//! order via a stable sort, so the result never depends on which parallel
//! review finished first.

use reco_core::{Candidate, RankedEntry, ReviewDecision};

/// Tier bucket for an optional decision
pub fn tier(decision: Option<&ReviewDecision>) -> u8 {
    match decision {
        Some(d) if d.is_approved() => 2,
        None => 1,
        Some(_) => 0,
    }
}

/// Rendering-only confidence: forced to 0 for rejected entries while the
/// stored candidate confidence stays untouched for downstream analytics
pub fn display_confidence(candidate: &Candidate, decision: Option<&ReviewDecision>) -> f64 {
    match decision {
        Some(d) if !d.is_approved() => 0.0,
        _ => candidate.score(),
    }
}

/// Build ranked entries from (candidate, decision, symbol) triples and
/// sort them into the display order
pub fn rank(
    reviewed: Vec<(Candidate, Option<ReviewDecision>, Option<String>)>,
) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = reviewed
        .into_iter()
        .map(|(candidate, decision, symbol)| {
            let tier = tier(decision.as_ref());
            let display_confidence = display_confidence(&candidate, decision.as_ref());
            let display_action = candidate.action;
            RankedEntry {
                candidate,
                decision,
                symbol,
                tier,
                display_confidence,
                expired: false,
                display_action,
            }
        })
        .collect();

    // sort_by is stable: equal keys preserve input order
    entries.sort_by(|a, b| {
        b.tier.cmp(&a.tier).then_with(|| {
            b.candidate
                .score()
                .partial_cmp(&a.candidate.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    entries
}
