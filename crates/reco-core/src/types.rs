use serde::{Deserialize, Serialize};
use std::fmt;

/// Option side designator (call / put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    #[serde(rename = "CE")]
    Ce,
    #[serde(rename = "PE")]
    Pe,
}

impl OptionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Ce => "CE",
            OptionSide::Pe => "PE",
        }
    }

    /// Parse from a ticker-style token, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CE" => Some(OptionSide::Ce),
            "PE" => Some(OptionSide::Pe),
            _ => None,
        }
    }
}

/// Proposed trade action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl Default for TradeAction {
    fn default() -> Self {
        TradeAction::Hold
    }
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "BUY",
            TradeAction::Sell => "SELL",
            TradeAction::Hold => "HOLD",
        }
    }
}

/// Review strictness profile selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewMode {
    Strict,
    Opportunistic,
    Speculative,
}

impl Default for ReviewMode {
    fn default() -> Self {
        ReviewMode::Strict
    }
}

impl ReviewMode {
    pub fn name(&self) -> &'static str {
        match self {
            ReviewMode::Strict => "strict",
            ReviewMode::Opportunistic => "opportunistic",
            ReviewMode::Speculative => "speculative",
        }
    }
}

/// Per-candidate diagnostics bag filled in by the external proposer.
///
/// Every field is optional: the review rules treat an absent field as a
/// failure of the rule that needs it, never as a panic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Implied volatility, annualized percent (e.g. 45.0 = 45%)
    #[serde(default)]
    pub iv: Option<f64>,

    /// Theta decay in premium points per day (sign ignored by the reviewer)
    #[serde(default)]
    pub theta_per_day: Option<f64>,

    /// Days to expiry from the as-of date
    #[serde(default)]
    pub dte: Option<i64>,

    #[serde(default)]
    pub delta: Option<f64>,

    #[serde(default)]
    pub gamma: Option<f64>,

    /// Average true range of the underlying, in price points
    #[serde(default)]
    pub atr_points: Option<f64>,

    /// Reference spot of the underlying at proposal time
    #[serde(default)]
    pub spot: Option<f64>,

    /// Open interest, the liquidity proxy used by the reviewer
    #[serde(default)]
    pub open_interest: Option<f64>,

    /// Risk/reward ratio as computed by the proposer
    #[serde(default)]
    pub risk_reward: Option<f64>,

    /// Set by the invalidator when an expired entry's display action is
    /// coerced to HOLD; holds the action the proposer originally emitted
    #[serde(default)]
    pub original_action: Option<TradeAction>,
}

/// One trade candidate as handed over by the external proposer.
///
/// Strike, side and expiry are optional so a malformed candidate is
/// representable; it then flows through the pipeline and collects a
/// rejection instead of raising anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub underlying: String,

    #[serde(default)]
    pub strike: Option<f64>,

    #[serde(default)]
    pub side: Option<OptionSide>,

    /// Expiry date token; either `DD-MON-YYYY` or ISO `YYYY-MM-DD`
    #[serde(default)]
    pub expiry: Option<String>,

    #[serde(default)]
    pub action: TradeAction,

    /// Entry premium
    #[serde(default)]
    pub entry: Option<f64>,

    /// Stop-loss premium
    #[serde(default)]
    pub stop_loss: Option<f64>,

    /// First target premium
    #[serde(default)]
    pub target_1: Option<f64>,

    /// Second target premium
    #[serde(default)]
    pub target_2: Option<f64>,

    /// Proposer confidence in [0, 1]
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Externally-supplied probability score, used for ranking when
    /// confidence is absent
    #[serde(default)]
    pub p_up: Option<f64>,

    #[serde(default)]
    pub mode: ReviewMode,

    /// Last actionable date, ISO `YYYY-MM-DD`
    #[serde(default)]
    pub sell_by: Option<String>,

    #[serde(default)]
    pub diagnostics: Diagnostics,
}

impl Candidate {
    /// Bare candidate with every optional field unset
    pub fn new(underlying: impl Into<String>) -> Self {
        Self {
            underlying: underlying.into(),
            strike: None,
            side: None,
            expiry: None,
            action: TradeAction::default(),
            entry: None,
            stop_loss: None,
            target_1: None,
            target_2: None,
            confidence: None,
            p_up: None,
            mode: ReviewMode::default(),
            sell_by: None,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Natural identity key: underlying + strike + side + expiry
    pub fn key(&self) -> CandidateKey {
        CandidateKey {
            underlying: self.underlying.clone(),
            strike: self.strike.map_or_else(|| "NA".to_string(), |s| s.to_string()),
            side: self
                .side
                .map_or_else(|| "NA".to_string(), |s| s.as_str().to_string()),
            expiry: self.expiry.clone().unwrap_or_else(|| "NA".to_string()),
        }
    }

    /// Ranking score: confidence when present, else the external
    /// probability score, else 0. Clamped to [0, 1].
    pub fn score(&self) -> f64 {
        self.confidence
            .or(self.p_up)
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}

/// Identity key joining pipeline stages to one candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateKey {
    pub underlying: String,
    pub strike: String,
    pub side: String,
    pub expiry: String,
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.underlying, self.strike, self.side, self.expiry
        )
    }
}

/// Review verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Rejected,
}

/// Outcome of the rule-based review for one candidate. Produced once,
/// never mutated; the reason is present iff the verdict is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDecision {
    pub key: CandidateKey,
    pub verdict: Verdict,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ReviewDecision {
    pub fn approved(key: CandidateKey) -> Self {
        Self {
            key,
            verdict: Verdict::Approved,
            reason: None,
        }
    }

    pub fn rejected(key: CandidateKey, reason: impl Into<String>) -> Self {
        Self {
            key,
            verdict: Verdict::Rejected,
            reason: Some(reason.into()),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.verdict == Verdict::Approved
    }
}

/// One candidate enriched with everything the reporting layer displays.
/// Recomputed on every pipeline run; the embedded candidate is untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    pub candidate: Candidate,

    #[serde(default)]
    pub decision: Option<ReviewDecision>,

    /// Canonical exchange symbol, when resolvable
    #[serde(default)]
    pub symbol: Option<String>,

    /// Primary sort key: approved=2, no-decision=1, rejected=0
    pub tier: u8,

    /// Rendering-only confidence: 0 when rejected, else the stored score
    pub display_confidence: f64,

    pub expired: bool,

    /// Action shown to the user; HOLD when expired
    pub display_action: TradeAction,
}

/// Read-only live quote snapshot, owned by the external polling collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub ok: bool,

    /// Last traded price
    #[serde(default)]
    pub ltp: Option<f64>,

    #[serde(default)]
    pub delta: Option<f64>,

    #[serde(default)]
    pub gamma: Option<f64>,
}

impl QuoteSnapshot {
    /// The shape returned for a symbol the feed does not know
    pub fn miss() -> Self {
        Self {
            ok: false,
            ltp: None,
            delta: None,
            gamma: None,
        }
    }
}

/// One sample of the expiry payoff curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub underlying: f64,
    pub pnl: f64,
}

/// One row of the short-horizon scenario P&L table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    /// Relative underlying move in percent (e.g. -1.5)
    pub move_pct: f64,
    pub underlying: f64,
    pub estimated_price: f64,
    pub pnl: f64,
    pub pnl_pct: f64,
}
