// Library crate - exports the break-even math, equity simulator, and API surface

pub mod types;
pub mod breakeven;
pub mod simulation;
pub mod api;

// Re-export commonly used types
pub use types::*;
pub use breakeven::{break_even_loss, break_even_rr, derive_metrics};
pub use simulation::{simulate_equity, simulate_scenarios, DEFAULT_NUM_RAIDS};
