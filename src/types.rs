use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw stats pasted from the profile overview page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RaidStats {
    #[serde(rename = "totalRaids")]
    pub total_raids: f64,
    #[serde(rename = "extractionRatePercent")]
    pub extraction_rate_percent: f64,
    #[serde(rename = "totalEarnedMillions")]
    pub total_earned_millions: f64,
}

impl RaidStats {
    /// Extraction rate as a probability.
    pub fn win_rate(&self) -> f64 {
        self.extraction_rate_percent / 100.0
    }

    /// Total earnings in koen.
    pub fn total_earned(&self) -> f64 {
        self.total_earned_millions * 1_000_000.0
    }

    /// Expected number of extracted raids.
    pub fn wins(&self) -> f64 {
        self.total_raids * self.win_rate()
    }
}

/// Input combinations rejected before any core math runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("extraction rate / total raids combo is invalid")]
    NoWins,
    #[error("extraction rate must be strictly between 0 and 100")]
    ExtractionRateOutOfRange,
    #[error("total earned must be positive")]
    NonPositiveEarnings,
    #[error("raid count for simulation must be between 1 and 100000")]
    NumRaidsOutOfRange,
}

/// Metrics derived from raw stats, displayed and fed to the simulator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DerivedMetrics {
    #[serde(rename = "winRate")]
    pub win_rate: f64,
    pub wins: f64,
    #[serde(rename = "avgWin")]
    pub avg_win: f64,
    /// Average loss per death at which long-term expectancy is zero (negative koen).
    #[serde(rename = "breakEvenLoss")]
    pub break_even_loss: f64,
    #[serde(rename = "breakEvenRR")]
    pub break_even_rr: f64,
}

/// Illustrative loss scenarios simulated against the player's stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioKind {
    TooExpensive,
    BreakEven,
    Efficient,
}

impl ScenarioKind {
    pub fn all() -> [Self; 3] {
        [Self::TooExpensive, Self::BreakEven, Self::Efficient]
    }

    /// Multiplier applied to the break-even loss magnitude for this scenario.
    pub fn loss_multiplier(&self) -> f64 {
        match self {
            Self::TooExpensive => 1.5,
            Self::BreakEven => 1.0,
            Self::Efficient => 0.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TooExpensive => "Example: Too Expensive",
            Self::BreakEven => "Example: Break-even",
            Self::Efficient => "Example: Efficient",
        }
    }
}

/// One simulated cumulative-profit path.
#[derive(Debug, Clone, Serialize)]
pub struct EquityPath {
    pub scenario: ScenarioKind,
    /// Per-death loss used for this path (negative koen).
    #[serde(rename = "avgLoss")]
    pub avg_loss: f64,
    pub label: String,
    pub equity: Vec<f64>,
}

/// Shared application state
pub struct AppState {
    pub num_raids: usize,
}
