//! Sweep one lever across all of its slider stops
//!
//! Holds the other levers at their defaults (or the values given) and writes
//! one CSV row per stop.
//!
//! Usage: cargo run --bin sweep_levers -- --lever employees --output sweep.csv

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scenario_planner::projection::{clamp_employees, sweep_all_steps, write_sweep_csv};
use scenario_planner::{BaseMetrics, Lever, ScenarioInput};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LeverArg {
    Employees,
    MarketingSpend,
    PriceIncrease,
    AdditionalRevenue,
}

impl From<LeverArg> for Lever {
    fn from(arg: LeverArg) -> Self {
        match arg {
            LeverArg::Employees => Lever::Employees,
            LeverArg::MarketingSpend => Lever::MarketingSpend,
            LeverArg::PriceIncrease => Lever::PriceIncrease,
            LeverArg::AdditionalRevenue => Lever::AdditionalRevenue,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Evaluate every slider stop of one scenario lever")]
struct Args {
    /// Lever to sweep
    #[arg(long, value_enum)]
    lever: LeverArg,

    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    employees: i64,

    #[arg(long, default_value_t = 50_000.0, allow_negative_numbers = true)]
    marketing_spend: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    price_increase: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    additional_revenue: f64,

    /// CSV file with base metrics; built-in figures are used when omitted
    #[arg(long)]
    base_metrics: Option<PathBuf>,

    #[arg(long, default_value = "lever_sweep.csv")]
    output: PathBuf,
}

impl Args {
    /// Levers held fixed during the sweep, clamped into their domains
    fn scenario_input(&self) -> ScenarioInput {
        ScenarioInput {
            employees: clamp_employees(self.employees),
            marketing_spend: self.marketing_spend,
            price_increase_pct: self.price_increase,
            additional_revenue: self.additional_revenue,
        }
        .clamped()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let base = match &args.base_metrics {
        Some(path) => BaseMetrics::from_csv_path(path)
            .with_context(|| format!("failed to load base metrics from {}", path.display()))?,
        None => BaseMetrics::default_pricing(),
    };

    let input = args.scenario_input();

    let lever = Lever::from(args.lever);
    let points = sweep_all_steps(&base, &input, lever);

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_sweep_csv(file, &points)?;

    let first_profitable = points.iter().find(|p| p.result.is_profitable());
    println!("Swept {} over {} values in {:?}", lever, points.len(), start.elapsed());
    match first_profitable {
        Some(point) => println!("  First profitable value: {}", point.value),
        None => println!("  No profitable value in range"),
    }
    println!("Output written to {}", args.output.display());

    Ok(())
}
