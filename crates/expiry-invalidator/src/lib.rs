//! Sell-by invalidation.
//!
//! The caller passes an explicit "effective today" date on every call;
//! nothing here reads a wall clock, so any historical as-of date replays
//! identically in tests.

use reco_core::{RankedEntry, TradeAction};

/// `YYYY-MM-DD` → the integer formed by concatenating its digits
/// (20251218). Comparing these integers sidesteps lexical/locale date
/// comparison bugs. `None` for anything that is not an 8-digit date.
pub fn date_ordinal(date: &str) -> Option<u64> {
    let digits: String = date.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return None;
    }
    digits.parse().ok()
}

/// Strictly after the sell-by day: the sell-by day itself is still valid.
///
/// Unparsable dates are treated as not expired; staleness flagging must
/// never discard a candidate.
pub fn is_expired(today: &str, sell_by: &str) -> bool {
    match (date_ordinal(today), date_ordinal(sell_by)) {
        (Some(t), Some(s)) => t > s,
        _ => false,
    }
}

/// Flag an entry as expired relative to `today`, coercing its display
/// action to HOLD while preserving the proposer's action in the
/// diagnostics bag. Expired entries are retained, never dropped.
pub fn invalidate(entry: &mut RankedEntry, today: &str) {
    let Some(sell_by) = entry.candidate.sell_by.clone() else {
        return;
    };
    if !is_expired(today, &sell_by) {
        return;
    }
    entry.expired = true;
    entry.candidate.diagnostics.original_action = Some(entry.candidate.action);
    entry.display_action = TradeAction::Hold;
}

/// Invalidate a whole ranked batch in place
pub fn invalidate_batch(entries: &mut [RankedEntry], today: &str) {
    for entry in entries.iter_mut() {
        invalidate(entry, today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reco_core::Candidate;

    fn entry(sell_by: Option<&str>) -> RankedEntry {
        let mut c = Candidate::new("NIFTY");
        c.action = TradeAction::Buy;
        c.sell_by = sell_by.map(str::to_string);
        RankedEntry {
            candidate: c,
            decision: None,
            symbol: None,
            tier: 1,
            display_confidence: 0.5,
            expired: false,
            display_action: TradeAction::Buy,
        }
    }

    #[test]
    fn test_date_ordinal() {
        assert_eq!(date_ordinal("2025-12-18"), Some(20251218));
        assert_eq!(date_ordinal("2025-1-18"), None);
        assert_eq!(date_ordinal("not a date"), None);
    }

    #[test]
    fn test_sell_by_day_itself_still_valid() {
        assert!(!is_expired("2025-12-18", "2025-12-18"));
        assert!(is_expired("2025-12-19", "2025-12-18"));
        assert!(!is_expired("2025-12-17", "2025-12-18"));
    }

    #[test]
    fn test_year_boundary() {
        assert!(is_expired("2026-01-01", "2025-12-31"));
        assert!(!is_expired("2025-12-31", "2026-01-01"));
    }

    #[test]
    fn test_expired_entry_retained_with_hold_display() {
        let mut e = entry(Some("2025-12-18"));
        invalidate(&mut e, "2025-12-19");

        assert!(e.expired);
        assert_eq!(e.display_action, TradeAction::Hold);
        // The proposer's action survives in the diagnostics bag
        assert_eq!(e.candidate.action, TradeAction::Buy);
        assert_eq!(
            e.candidate.diagnostics.original_action,
            Some(TradeAction::Buy)
        );
    }

    #[test]
    fn test_valid_entry_untouched() {
        let mut e = entry(Some("2025-12-18"));
        invalidate(&mut e, "2025-12-18");

        assert!(!e.expired);
        assert_eq!(e.display_action, TradeAction::Buy);
        assert!(e.candidate.diagnostics.original_action.is_none());
    }

    #[test]
    fn test_missing_or_bad_sell_by_never_expires() {
        let mut none = entry(None);
        invalidate(&mut none, "2025-12-19");
        assert!(!none.expired);

        let mut bad = entry(Some("soon"));
        invalidate(&mut bad, "2025-12-19");
        assert!(!bad.expired);
    }

    #[test]
    fn test_batch_invalidation() {
        let mut entries = vec![entry(Some("2025-12-18")), entry(Some("2025-12-31"))];
        invalidate_batch(&mut entries, "2025-12-19");
        assert!(entries[0].expired);
        assert!(!entries[1].expired);
    }
}
