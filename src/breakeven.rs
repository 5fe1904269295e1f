//! Break-even loadout math.
//!
//! The break-even loss is the average koen a player can lose per death and
//! still sit at zero expectancy per raid:
//!
//! ```text
//! win_rate * avg_win + (1 - win_rate) * avg_loss = 0
//! ```

use crate::types::{DerivedMetrics, RaidStats, StatsError};

/// Break-even average loss per losing raid (negative koen).
///
/// Assumes `win_rate` is strictly inside (0, 1); [`derive_metrics`] enforces
/// that before this runs.
pub fn break_even_loss(win_rate: f64, avg_win: f64) -> f64 {
    -(win_rate * avg_win) / (1.0 - win_rate)
}

/// Reward-to-risk ratio at the break-even point.
pub fn break_even_rr(avg_win: f64, break_even_loss: f64) -> f64 {
    avg_win / break_even_loss.abs()
}

/// Validate raw stats and derive the displayed metrics.
pub fn derive_metrics(stats: &RaidStats) -> Result<DerivedMetrics, StatsError> {
    // An extraction rate of exactly 100% would put a zero in the denominator
    // of the break-even formula, so the open interval is required.
    if stats.extraction_rate_percent <= 0.0 || stats.extraction_rate_percent >= 100.0 {
        return Err(StatsError::ExtractionRateOutOfRange);
    }
    if stats.total_earned_millions <= 0.0 {
        return Err(StatsError::NonPositiveEarnings);
    }
    let wins = stats.wins();
    if wins <= 0.0 {
        return Err(StatsError::NoWins);
    }

    let win_rate = stats.win_rate();
    let avg_win = stats.total_earned() / wins;
    let loss = break_even_loss(win_rate, avg_win);

    Ok(DerivedMetrics {
        win_rate,
        wins,
        avg_win,
        break_even_loss: loss,
        break_even_rr: break_even_rr(avg_win, loss),
    })
}
