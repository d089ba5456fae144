//! Scenario state controller
//!
//! Owns the live lever settings for a planning session and keeps the
//! projection in step with them: every write clamps, recomputes and bumps
//! the evaluation counter before returning.

use crate::assumptions::BaseMetrics;
use crate::error::Result;
use crate::export::{export_file_name, ScenarioReport};
use crate::projection::{
    clamp_employees, metric_cards, project_detailed, quick_insights, Lever, MetricCard,
    ProjectionBreakdown, QuickInsights, ScenarioInput, ScenarioResult,
};
use chrono::{DateTime, Utc};

/// Live what-if session
///
/// # Example
/// ```
/// use scenario_planner::ScenarioPlanner;
///
/// let mut planner = ScenarioPlanner::new();
/// planner.set_employees(8);
/// planner.set_price_increase(10.0);
/// println!("Profit: {:.2}", planner.current_result().projected_profit);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioPlanner {
    base: BaseMetrics,
    input: ScenarioInput,
    result: ScenarioResult,
    breakdown: ProjectionBreakdown,
    evaluations: u64,
}

impl ScenarioPlanner {
    /// Start a session with the built-in base metrics and default levers
    pub fn new() -> Self {
        Self::with_base_metrics(BaseMetrics::default_pricing())
    }

    /// Start a session against specific base metrics
    ///
    /// The initial projection counts as the first evaluation.
    pub fn with_base_metrics(base: BaseMetrics) -> Self {
        let input = ScenarioInput::default();
        let (result, breakdown) = project_detailed(&input, &base);
        let planner = Self {
            base,
            input,
            result,
            breakdown,
            evaluations: 1,
        };
        log::debug!("Initial scenario: {:?} -> {:?}", planner.input, planner.result);
        planner
    }

    pub fn set_employees(&mut self, employees: i64) {
        self.input.employees = clamp_employees(employees);
        self.recompute();
    }

    pub fn set_marketing_spend(&mut self, amount: f64) {
        self.input.marketing_spend = Lever::MarketingSpend.clamp(amount);
        self.recompute();
    }

    /// Price change in percent, -20 to 50
    pub fn set_price_increase(&mut self, pct: f64) {
        self.input.price_increase_pct = Lever::PriceIncrease.clamp(pct);
        self.recompute();
    }

    pub fn set_additional_revenue(&mut self, amount: f64) {
        self.input.additional_revenue = Lever::AdditionalRevenue.clamp(amount);
        self.recompute();
    }

    /// Set any lever by name
    pub fn set_lever(&mut self, lever: Lever, value: f64) {
        self.input = self.input.with_lever(lever, value);
        self.recompute();
    }

    /// Replace all levers at once, recomputing a single time
    pub fn set_input(&mut self, input: ScenarioInput) {
        self.input = input.clamped();
        self.recompute();
    }

    /// Restore the default levers
    pub fn reset(&mut self) {
        self.set_input(ScenarioInput::default());
    }

    pub fn current_result(&self) -> &ScenarioResult {
        &self.result
    }

    pub fn breakdown(&self) -> &ProjectionBreakdown {
        &self.breakdown
    }

    pub fn input(&self) -> &ScenarioInput {
        &self.input
    }

    pub fn base_metrics(&self) -> &BaseMetrics {
        &self.base
    }

    /// Number of projections run this session, including the initial one
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    pub fn metric_cards(&self) -> Vec<MetricCard> {
        metric_cards(&self.result, &self.base)
    }

    pub fn insights(&self) -> QuickInsights {
        quick_insights(&self.input, &self.result, &self.base)
    }

    /// Snapshot of the current scenario as JSON bytes, stamped now
    pub fn export_snapshot(&self) -> Result<Vec<u8>> {
        self.export_snapshot_at(Utc::now())
    }

    /// Snapshot stamped with a given time
    pub fn export_snapshot_at(&self, timestamp: DateTime<Utc>) -> Result<Vec<u8>> {
        let bytes = self.report_at(timestamp).to_json_bytes()?;
        log::info!("Exported scenario snapshot ({} bytes) as {}", bytes.len(), export_file_name(timestamp));
        Ok(bytes)
    }

    /// Report record for the current scenario
    pub fn report_at(&self, timestamp: DateTime<Utc>) -> ScenarioReport {
        ScenarioReport::new(&self.input, &self.result, timestamp)
    }

    fn recompute(&mut self) {
        let (result, breakdown) = project_detailed(&self.input, &self.base);
        self.result = result;
        self.breakdown = breakdown;
        self.evaluations += 1;
        log::debug!("Evaluation {}: {:?} -> {:?}", self.evaluations, self.input, self.result);
    }
}

impl Default for ScenarioPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project, Runway};

    #[test]
    fn test_initial_state() {
        let planner = ScenarioPlanner::new();
        assert_eq!(planner.evaluation_count(), 1);
        assert_eq!(*planner.input(), ScenarioInput::default());
        assert_eq!(planner.current_result().runway_months, Runway::Finite(15));
        assert_eq!(planner.current_result().break_even_month, 16);
        assert_eq!(planner.breakdown().monthly_net, 130_000.0);
    }

    #[test]
    fn test_setters_recompute_and_count() {
        let mut planner = ScenarioPlanner::new();

        planner.set_marketing_spend(0.0);
        planner.set_price_increase(50.0);
        planner.set_additional_revenue(200_000.0);
        assert_eq!(planner.evaluation_count(), 4);

        let result = planner.current_result();
        assert_eq!(result.total_revenue, 650_000.0);
        assert_eq!(result.projected_profit, 270_000.0);
        assert_eq!(result.runway_months, Runway::Indefinite);
        assert_eq!(result.break_even_month, 0);

        // Setting an unchanged value still counts as an evaluation
        planner.set_additional_revenue(200_000.0);
        assert_eq!(planner.evaluation_count(), 5);
    }

    #[test]
    fn test_setters_clamp() {
        let mut planner = ScenarioPlanner::new();

        planner.set_employees(25);
        assert_eq!(planner.input().employees, 20);
        planner.set_employees(0);
        assert_eq!(planner.input().employees, 1);

        planner.set_marketing_spend(-5_000.0);
        assert_eq!(planner.input().marketing_spend, 0.0);

        planner.set_price_increase(-35.0);
        assert_eq!(planner.input().price_increase_pct, -20.0);

        planner.set_additional_revenue(750_000.0);
        assert_eq!(planner.input().additional_revenue, 500_000.0);

        assert!(planner.input().is_within_bounds());
        assert_eq!(*planner.current_result(), project(planner.input(), planner.base_metrics()));
    }

    #[test]
    fn test_set_input_and_reset() {
        let mut planner = ScenarioPlanner::new();
        planner.set_input(ScenarioInput {
            employees: 30,
            marketing_spend: 10_000.0,
            price_increase_pct: 5.0,
            additional_revenue: 0.0,
        });
        assert_eq!(planner.evaluation_count(), 2);
        assert_eq!(planner.input().employees, 20);

        planner.set_lever(Lever::MarketingSpend, 95_000.0);
        assert_eq!(planner.input().marketing_spend, 95_000.0);

        planner.reset();
        assert_eq!(planner.evaluation_count(), 4);
        assert_eq!(*planner.input(), ScenarioInput::default());
        assert_eq!(planner.current_result().projected_profit, -130_000.0);
    }

    #[test]
    fn test_custom_base_metrics() {
        let base = BaseMetrics {
            current_revenue: 500_000.0,
            ..BaseMetrics::default_pricing()
        };
        let planner = ScenarioPlanner::with_base_metrics(base);
        // 500K revenue vs 430K expenses
        assert_eq!(planner.current_result().projected_profit, 70_000.0);
        assert!(planner.current_result().runway_months.is_indefinite());
        assert_eq!(planner.metric_cards()[1].description, "Profitable");
    }

    #[test]
    fn test_export_snapshot() {
        let mut planner = ScenarioPlanner::new();
        planner.set_employees(8);

        let timestamp = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let bytes = planner.export_snapshot_at(timestamp).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(doc["scenario"]["employees"], 8);
        // 8 * 60K + 80K + 50K = 610K expenses, 300K + 150K = 450K revenue
        assert_eq!(doc["results"]["totalExpenses"], "₹6,10,000.00");
        assert_eq!(doc["results"]["monthlyProfit"], "-₹1,60,000.00");
        assert_eq!(doc["results"]["runwayMonths"], 12);
        assert_eq!(doc["results"]["breakEvenMonth"], 13);
        assert_eq!(doc["timestamp"], "2023-11-14T22:13:20.000Z");

        // Exporting does not trigger a recomputation
        assert_eq!(planner.evaluation_count(), 2);
        assert!(planner.export_snapshot().is_ok());
    }

    #[test]
    fn test_insights_follow_state() {
        let mut planner = ScenarioPlanner::new();
        planner.set_price_increase(-10.0);
        let insights = planner.insights();
        assert!(insights.revenue_growth.starts_with("Price reduction of 10.0%"));
    }
}
