//! Core projection engine for single-month scenario outcomes

use crate::assumptions::{BaseMetrics, BASELINE_HEADCOUNT};
use super::levers::ScenarioInput;
use super::result::{ProjectionBreakdown, Runway, ScenarioResult};

/// Project one scenario against the given base metrics
///
/// Pure and total: the input is clamped on entry and division by the
/// monthly net only happens when it is strictly positive.
pub fn project(input: &ScenarioInput, base: &BaseMetrics) -> ScenarioResult {
    project_detailed(input, base).0
}

/// Project and also return the intermediate figures
pub fn project_detailed(input: &ScenarioInput, base: &BaseMetrics) -> (ScenarioResult, ProjectionBreakdown) {
    let input = input.clamped();

    let (employee_expense, total_expenses) = calculate_expenses(&input, base);
    let (price_adjusted_revenue, employee_revenue_boost, total_revenue) = calculate_revenue(&input, base);

    // Positive = burning cash, negative = accumulating profit
    let monthly_net = total_expenses - total_revenue;
    let (runway_months, break_even_month) = calculate_cash_position(base.current_cash, monthly_net);

    let result = ScenarioResult {
        total_revenue,
        total_expenses,
        projected_profit: total_revenue - total_expenses,
        monthly_burn: monthly_net.abs(),
        runway_months,
        break_even_month,
    };

    let breakdown = ProjectionBreakdown {
        employee_expense,
        price_adjusted_revenue,
        employee_revenue_boost,
        monthly_net,
    };

    (result, breakdown)
}

/// Returns (employee expense, total expenses)
fn calculate_expenses(input: &ScenarioInput, base: &BaseMetrics) -> (f64, f64) {
    let employee_expense = input.employees as f64 * base.employee_cost;
    let total_expenses = employee_expense + base.fixed_costs + input.marketing_spend;
    (employee_expense, total_expenses)
}

/// Returns (price-adjusted revenue, employee revenue boost, total revenue)
fn calculate_revenue(input: &ScenarioInput, base: &BaseMetrics) -> (f64, f64, f64) {
    let price_adjusted_revenue = base.current_revenue * (1.0 + input.price_increase_pct / 100.0);

    // Only headcount above the baseline adds revenue
    let extra_headcount = input.employees.saturating_sub(BASELINE_HEADCOUNT);
    let employee_revenue_boost = extra_headcount as f64 * base.revenue_per_employee;

    let total_revenue = price_adjusted_revenue + employee_revenue_boost + input.additional_revenue;
    (price_adjusted_revenue, employee_revenue_boost, total_revenue)
}

/// Runway and break-even month for a given monthly net
///
/// A net of exactly zero counts as not burning.
fn calculate_cash_position(current_cash: f64, monthly_net: f64) -> (Runway, u64) {
    if monthly_net > 0.0 {
        let months = (current_cash / monthly_net).max(0.0);
        // Float-to-int casts saturate, so a vanishing net cannot overflow
        (Runway::Finite(months.floor() as u64), months.ceil() as u64)
    } else {
        (Runway::Indefinite, 0)
    }
}

/// Engine bound to one set of base metrics
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    base: BaseMetrics,
}

impl ProjectionEngine {
    pub fn new(base: BaseMetrics) -> Self {
        Self { base }
    }

    pub fn project(&self, input: &ScenarioInput) -> ScenarioResult {
        project(input, &self.base)
    }

    pub fn project_detailed(&self, input: &ScenarioInput) -> (ScenarioResult, ProjectionBreakdown) {
        project_detailed(input, &self.base)
    }

    pub fn base_metrics(&self) -> &BaseMetrics {
        &self.base
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(BaseMetrics::default_pricing())
    }
}
