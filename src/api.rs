use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::breakeven::derive_metrics;
use crate::simulation::simulate_scenarios;
use crate::types::{AppState, DerivedMetrics, EquityPath, RaidStats, StatsError};

/// Upper bound on raids per simulated path accepted over HTTP.
pub const MAX_NUM_RAIDS: usize = 100_000;

/// Request body for the calculate endpoint
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(flatten)]
    pub stats: RaidStats,
    #[serde(rename = "numRaids")]
    pub num_raids: Option<usize>,
}

/// Response for a successful calculation
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub metrics: DerivedMetrics,
    /// Win vs loss proportions for the pie chart.
    #[serde(rename = "rateSplit")]
    pub rate_split: RateSplit,
    pub paths: Vec<EquityPath>,
    #[serde(rename = "numRaids")]
    pub num_raids: usize,
}

#[derive(Debug, Serialize)]
pub struct RateSplit {
    pub win: f64,
    pub loss: f64,
}

/// POST /api/calculate - derive break-even metrics and run the example simulations
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> impl IntoResponse {
    let num_raids = req.num_raids.unwrap_or(state.num_raids);

    match compute(&req.stats, num_raids) {
        Ok(resp) => {
            info!(
                "break-even {:.0} koen at {:.1}% extraction, {} raids simulated",
                resp.metrics.break_even_loss,
                resp.metrics.win_rate * 100.0,
                num_raids
            );
            (StatusCode::OK, Json(serde_json::json!(resp)))
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": e.to_string()})),
        ),
    }
}

/// Full calculation behind the handler: validate, derive, simulate.
///
/// Stateless; every call draws fresh paths from `thread_rng`.
pub fn compute(stats: &RaidStats, num_raids: usize) -> Result<CalculateResponse, StatsError> {
    if num_raids == 0 || num_raids > MAX_NUM_RAIDS {
        return Err(StatsError::NumRaidsOutOfRange);
    }

    let metrics = derive_metrics(stats)?;

    let mut rng = rand::thread_rng();
    let paths = simulate_scenarios(&metrics, num_raids, &mut rng);

    Ok(CalculateResponse {
        metrics,
        rate_split: RateSplit {
            win: metrics.win_rate,
            loss: 1.0 - metrics.win_rate,
        },
        paths,
        num_raids,
    })
}
