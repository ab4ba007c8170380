//! Canonical exchange symbol resolution.
//!
//! The canonical identifier is `TICKER + DDMONYY + STRIKE + SIDE`
//! (e.g. `NIFTY06JAN2624500CE`) and is the join key between the review
//! pipeline and the live quote feed, so it must be byte-identical for the
//! two accepted expiry spellings of the same logical date.

use chrono::NaiveDate;
use reco_core::{Candidate, OptionSide};

/// Strip any trailing `.`-separated exchange suffix (`.NS`, `.BO`, ...)
/// and upper-case the ticker
pub fn normalize_ticker(ticker: &str) -> String {
    ticker
        .trim()
        .split('.')
        .next()
        .unwrap_or("")
        .to_ascii_uppercase()
}

/// Normalize an expiry token to upper-case `DDMONYY`.
///
/// Accepts ISO `YYYY-MM-DD` or `DD-MON-YYYY`; anything else is `None`.
pub fn normalize_expiry(expiry: &str) -> Option<String> {
    let raw = expiry.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%b-%Y"))
        .ok()?;
    Some(date.format("%d%b%y").to_string().to_ascii_uppercase())
}

/// Key used for case-insensitive quote-feed lookups
pub fn quote_key(symbol: &str) -> String {
    normalize_ticker(symbol)
}

/// Resolve one contract to its canonical identifier.
///
/// Returns `None` (unresolvable) when any input is missing or the expiry
/// matches neither supported format; never panics.
pub fn resolve(
    ticker: &str,
    strike: Option<f64>,
    side: Option<OptionSide>,
    expiry: Option<&str>,
) -> Option<String> {
    let ticker = normalize_ticker(ticker);
    if ticker.is_empty() {
        return None;
    }

    let strike = strike.filter(|s| s.is_finite() && *s > 0.0)?;
    let side = side?;
    let expiry = normalize_expiry(expiry?)?;

    Some(format!(
        "{}{}{}{}",
        ticker,
        expiry,
        strike.round() as i64,
        side.as_str()
    ))
}

/// Resolve a candidate's contract fields
pub fn resolve_candidate(candidate: &Candidate) -> Option<String> {
    resolve(
        &candidate.underlying,
        candidate.strike,
        candidate.side,
        candidate.expiry.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_expiry_spellings_resolve_identically() {
        let iso = resolve("NIFTY", Some(26100.0), Some(OptionSide::Ce), Some("2026-01-06"));
        let mon = resolve("NIFTY", Some(26100.0), Some(OptionSide::Ce), Some("06-JAN-2026"));

        assert_eq!(iso.as_deref(), Some("NIFTY06JAN2626100CE"));
        assert_eq!(iso, mon);
    }

    #[test]
    fn test_exchange_suffix_stripped_and_upcased() {
        let sym = resolve(
            "adanient.NS",
            Some(2280.0),
            Some(OptionSide::Ce),
            Some("2026-02-24"),
        );
        assert_eq!(sym.as_deref(), Some("ADANIENT24FEB262280CE"));
    }

    #[test]
    fn test_strike_rounded_to_nearest_integer() {
        let sym = resolve(
            "NIFTY",
            Some(24500.4),
            Some(OptionSide::Pe),
            Some("2026-01-06"),
        );
        assert_eq!(sym.as_deref(), Some("NIFTY06JAN2624500PE"));
    }

    #[test]
    fn test_missing_or_bad_inputs_are_unresolvable() {
        assert!(resolve("NIFTY", None, Some(OptionSide::Ce), Some("2026-01-06")).is_none());
        assert!(resolve("NIFTY", Some(24500.0), None, Some("2026-01-06")).is_none());
        assert!(resolve("NIFTY", Some(24500.0), Some(OptionSide::Ce), None).is_none());
        assert!(resolve("NIFTY", Some(24500.0), Some(OptionSide::Ce), Some("Jan 6 2026")).is_none());
        assert!(resolve("", Some(24500.0), Some(OptionSide::Ce), Some("2026-01-06")).is_none());
        assert!(resolve("NIFTY", Some(-1.0), Some(OptionSide::Ce), Some("2026-01-06")).is_none());
        assert!(resolve("NIFTY", Some(f64::NAN), Some(OptionSide::Ce), Some("2026-01-06")).is_none());
    }

    #[test]
    fn test_resolution_is_idempotent_over_its_own_output_ticker() {
        // Resolving a ticker that is already normalized must not change it
        assert_eq!(normalize_ticker("NIFTY"), "NIFTY");
        assert_eq!(normalize_ticker(&normalize_ticker("nifty.NS")), "NIFTY");
    }

    #[test]
    fn test_quote_key_is_case_insensitive() {
        assert_eq!(
            quote_key("nifty06jan2626100ce.NS"),
            quote_key("NIFTY06JAN2626100CE")
        );
    }

    #[test]
    fn test_candidate_without_side_is_unresolvable() {
        let mut c = Candidate::new("NIFTY");
        c.strike = Some(24500.0);
        c.expiry = Some("2026-01-06".to_string());
        assert!(resolve_candidate(&c).is_none());
    }
}
