use anyhow::{Context, Result};
use reco_core::ReviewMode;
use serde::{Deserialize, Serialize};

/// Threshold table for one review mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeThresholds {
    /// Confidence floor in [0, 1]
    pub min_confidence: f64,

    /// Minimum days to expiry (theta cliff guard)
    pub min_dte: i64,

    /// Maximum implied volatility, percent
    pub max_iv: f64,

    /// Maximum theta decay as a fraction of entry price per day
    pub max_theta_pct: f64,

    /// Open interest floor; 0 disables the liquidity rule
    pub min_open_interest: f64,

    /// Minimum risk/reward ratio
    pub min_risk_reward: f64,
}

/// Named threshold profiles, one per review mode.
///
/// Plain data: adding a mode or loosening a bound is a config change,
/// not a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewProfiles {
    pub strict: ModeThresholds,
    pub opportunistic: ModeThresholds,
    pub speculative: ModeThresholds,
}

impl Default for ReviewProfiles {
    fn default() -> Self {
        Self {
            strict: ModeThresholds {
                min_confidence: 0.35,
                min_dte: 5,
                max_iv: 60.0,
                max_theta_pct: 0.08,
                min_open_interest: 500.0,
                min_risk_reward: 1.5,
            },
            opportunistic: ModeThresholds {
                min_confidence: 0.28,
                min_dte: 2,
                max_iv: 80.0,
                max_theta_pct: 0.12,
                min_open_interest: 250.0,
                min_risk_reward: 1.2,
            },
            speculative: ModeThresholds {
                min_confidence: 0.22,
                min_dte: 1,
                max_iv: 100.0,
                max_theta_pct: 0.15,
                min_open_interest: 0.0,
                min_risk_reward: 1.0,
            },
        }
    }
}

impl ReviewProfiles {
    pub fn for_mode(&self, mode: ReviewMode) -> &ModeThresholds {
        match mode {
            ReviewMode::Strict => &self.strict,
            ReviewMode::Opportunistic => &self.opportunistic,
            ReviewMode::Speculative => &self.speculative,
        }
    }

    /// Load profiles from a JSON document supplied by the config layer
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing review threshold profiles")
    }
}
