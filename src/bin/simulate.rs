// Terminal report for the break-even calculation, no web UI needed.
//
// cargo run --bin simulate -- --total-raids 1200 --extraction-rate 38.5 --total-earned-millions 450

use anyhow::{bail, Result};
use clap::Parser;

use loadout_breakeven::breakeven::derive_metrics;
use loadout_breakeven::simulation::{simulate_scenarios, DEFAULT_NUM_RAIDS};
use loadout_breakeven::types::RaidStats;

#[derive(Parser, Debug)]
#[command(author, version, about = "Break-even loadout report on stdout")]
struct Args {
    /// Total raids from the profile overview page
    #[arg(long)]
    total_raids: f64,

    /// Extraction rate percent, e.g. 38.5
    #[arg(long)]
    extraction_rate: f64,

    /// Total earned in millions of koen
    #[arg(long)]
    total_earned_millions: f64,

    /// Raids per simulated equity path
    #[arg(long, default_value_t = DEFAULT_NUM_RAIDS)]
    num_raids: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stats = RaidStats {
        total_raids: args.total_raids,
        extraction_rate_percent: args.extraction_rate,
        total_earned_millions: args.total_earned_millions,
    };

    let metrics = match derive_metrics(&stats) {
        Ok(m) => m,
        Err(e) => bail!("invalid stats: {}", e),
    };

    println!("\n{}", "=".repeat(60));
    println!("BREAK-EVEN LOADOUT REPORT");
    println!("{}", "=".repeat(60));
    println!("Win Rate: {:.2}%", metrics.win_rate * 100.0);
    println!(
        "Average Win: {:.0} koen ({:.2}M)",
        metrics.avg_win,
        metrics.avg_win / 1e6
    );
    println!(
        "Break-even Loss: {:.0} koen ({:.2}M)",
        metrics.break_even_loss,
        metrics.break_even_loss.abs() / 1e6
    );
    println!("Break-even R:R: {:.2} : 1", metrics.break_even_rr);
    println!();
    println!(
        "Losing loadouts under {:.2}M keep you profitable long-term;",
        metrics.break_even_loss.abs() / 1e6
    );
    println!("above that you are bleeding koen over time.");

    let mut rng = rand::thread_rng();
    let paths = simulate_scenarios(&metrics, args.num_raids, &mut rng);

    println!("\n{}", "-".repeat(60));
    println!("EQUITY SIMULATIONS ({} raids each)", args.num_raids);
    println!("{}", "-".repeat(60));
    for path in &paths {
        let final_pnl = path.equity.last().copied().unwrap_or(0.0);
        let low = path.equity.iter().copied().fold(f64::INFINITY, f64::min);
        println!(
            "  {:42} final {:>9.2}M  low {:>9.2}M",
            path.label,
            final_pnl / 1e6,
            low / 1e6
        );
    }
    println!("{}", "-".repeat(60));

    Ok(())
}
