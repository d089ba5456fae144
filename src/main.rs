//! Scenario Planner CLI
//!
//! Runs one what-if scenario and prints the projection, optionally writing
//! the JSON report to disk.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use scenario_planner::format::{format_inr, format_money, format_percentage, FormatOptions};
use scenario_planner::projection::clamp_employees;
use scenario_planner::{export_file_name, BaseMetrics, ScenarioInput, ScenarioPlanner};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scenario_planner", version, about = "What-if planner for revenue, burn and runway")]
struct Args {
    /// Headcount (1-20)
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    employees: i64,

    /// Monthly marketing spend in rupees (0-200000)
    #[arg(long, default_value_t = 50_000.0, allow_negative_numbers = true)]
    marketing_spend: f64,

    /// Price change in percent (-20 to 50)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    price_increase: f64,

    /// Extra monthly revenue in rupees (0-500000)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    additional_revenue: f64,

    /// CSV file with base metrics; built-in figures are used when omitted
    #[arg(long)]
    base_metrics: Option<PathBuf>,

    /// Write the JSON report
    #[arg(long)]
    export: bool,

    /// Directory for the exported report
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Args {
    /// Lever values from the command line, clamped into their domains
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

    let base = match &args.base_metrics {
        Some(path) => BaseMetrics::from_csv_path(path)
            .with_context(|| format!("failed to load base metrics from {}", path.display()))?,
        None => BaseMetrics::default_pricing(),
    };

    let mut planner = ScenarioPlanner::with_base_metrics(base);
    planner.set_input(args.scenario_input());

    let input = planner.input();
    let result = planner.current_result();
    let breakdown = planner.breakdown();

    println!("CFO Helper - Scenario Planner");
    println!("=============================\n");

    println!("Scenario:");
    println!("  Employees:          {} ({}/month)", input.employees,
        format_inr(breakdown.employee_expense, FormatOptions::compact()));
    println!("  Marketing Spend:    {}", format_inr(input.marketing_spend, FormatOptions::compact()));
    println!("  Price Increase:     {}", format_percentage(input.price_increase_pct, 1));
    println!("  Additional Revenue: {}", format_inr(input.additional_revenue, FormatOptions::compact()));
    println!();

    println!("Results:");
    println!("  Total Revenue:      {}", format_money(result.total_revenue));
    println!("  Total Expenses:     {}", format_money(result.total_expenses));
    println!("  Monthly Profit:     {}", format_money(result.projected_profit));
    println!("  Monthly Burn:       {}", format_money(result.monthly_burn));
    println!("  Runway:             {}", result.runway_months);
    println!("  Break-even Month:   {}", result.break_even_month);
    println!();

    println!("Metrics:");
    for card in planner.metric_cards() {
        let growth = card
            .growth
            .map(|g| format!(" ({:?} {})", card.tone, format_percentage(g.abs(), 1)))
            .unwrap_or_default();
        let trend = card.trend.map(|t| format!(" [{}]", t.label())).unwrap_or_default();
        println!("  {:<20} {:>16}{}{}", card.title, card.value.display(), growth, trend);
    }
    println!();

    let insights = planner.insights();
    println!("Quick Insights:");
    println!("  Hiring Impact:  {}", insights.hiring_impact);
    println!("  Revenue Growth: {}", insights.revenue_growth);
    println!("  Break-even:     {}", insights.break_even);

    if args.export {
        let timestamp = Utc::now();
        let bytes = planner.export_snapshot_at(timestamp)?;
        let path = args.out_dir.join(export_file_name(timestamp));
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\nReport written to: {}", path.display());
    }

    println!("\n{} scenarios tested", planner.evaluation_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_scenario_is_one_evaluation() {
        let args = Args::parse_from([
            "scenario_planner",
            "--employees", "8",
            "--marketing-spend", "0",
            "--price-increase", "-5",
            "--additional-revenue", "100000",
        ]);

        let mut planner = ScenarioPlanner::new();
        planner.set_input(args.scenario_input());

        // Initial projection plus the command-line scenario
        assert_eq!(planner.evaluation_count(), 2);
        assert_eq!(planner.input().employees, 8);
        assert_eq!(planner.input().price_increase_pct, -5.0);
        assert_eq!(planner.input().additional_revenue, 100_000.0);
    }

    #[test]
    fn test_out_of_range_arguments_are_clamped() {
        let args = Args::parse_from(["scenario_planner", "--employees", "-3", "--marketing-spend", "-5000"]);
        let input = args.scenario_input();
        assert_eq!(input.employees, 1);
        assert_eq!(input.marketing_spend, 0.0);
    }
}
