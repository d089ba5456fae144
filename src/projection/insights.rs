//! Metric cards and plain-language insights derived from a projection

use crate::assumptions::{BaseMetrics, BASELINE_HEADCOUNT};
use crate::format::{calculate_growth, format_count, format_inr, format_percentage, FormatOptions};
use super::levers::ScenarioInput;
use super::result::{Runway, ScenarioResult};
use serde::Serialize;

/// Runway above this many months is comfortable
const HEALTHY_RUNWAY_MONTHS: u64 = 12;

/// Runway below this many months is critical
const CRITICAL_RUNWAY_MONTHS: u64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "Growing",
            Trend::Down => "Declining",
            Trend::Stable => "Stable",
        }
    }
}

/// Whether a change against the previous value is good news
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthTone {
    Positive,
    Negative,
    Neutral,
}

pub fn profit_trend(profit: f64) -> Trend {
    if profit > 0.0 {
        Trend::Up
    } else if profit < 0.0 {
        Trend::Down
    } else {
        Trend::Stable
    }
}

pub fn runway_trend(runway: Runway) -> Trend {
    match runway {
        Runway::Indefinite => Trend::Up,
        Runway::Finite(m) if m > HEALTHY_RUNWAY_MONTHS => Trend::Up,
        Runway::Finite(m) if m < CRITICAL_RUNWAY_MONTHS => Trend::Down,
        Runway::Finite(_) => Trend::Stable,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MetricValue {
    Amount(f64),
    Months(Runway),
}

impl MetricValue {
    pub fn display(&self) -> String {
        match self {
            MetricValue::Amount(v) => format_inr(*v, FormatOptions::compact()),
            MetricValue::Months(Runway::Finite(m)) => format_count(*m),
            MetricValue::Months(Runway::Indefinite) => "\u{221E}".to_string(),
        }
    }
}

/// View model for one dashboard card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub description: &'static str,
    pub value: MetricValue,
    pub previous_value: Option<f64>,
    /// Percent change against `previous_value`
    pub growth: Option<f64>,
    pub tone: GrowthTone,
    pub trend: Option<Trend>,
}

impl MetricCard {
    fn new(title: &'static str, description: &'static str, value: MetricValue) -> Self {
        Self {
            title,
            description,
            value,
            previous_value: None,
            growth: None,
            tone: GrowthTone::Neutral,
            trend: None,
        }
    }

    fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    fn compared_to(mut self, previous: f64) -> Self {
        if let MetricValue::Amount(current) = self.value {
            let growth = calculate_growth(current, previous);
            self.previous_value = Some(previous);
            self.growth = Some(growth);
            self.tone = growth_tone(growth, higher_is_better(self.title));
        }
        self
    }

    /// Revenue, profit and cash cards treat increases as good news
    pub fn higher_is_better(&self) -> bool {
        higher_is_better(self.title)
    }
}

fn higher_is_better(title: &str) -> bool {
    let title = title.to_lowercase();
    title.contains("revenue") || title.contains("profit") || title.contains("cash")
}

fn growth_tone(growth: f64, higher_is_better: bool) -> GrowthTone {
    let rising = growth > 0.0;
    let falling = growth < 0.0;
    match (rising, falling, higher_is_better) {
        (true, _, true) | (_, true, false) => GrowthTone::Positive,
        (_, true, true) | (true, _, false) => GrowthTone::Negative,
        _ => GrowthTone::Neutral,
    }
}

/// The four cards shown beside the scenario levers
pub fn metric_cards(result: &ScenarioResult, base: &BaseMetrics) -> Vec<MetricCard> {
    let runway_description = if result.runway_months.is_indefinite() {
        "Profitable"
    } else {
        "Months until cash runs out"
    };

    vec![
        MetricCard::new("Monthly Profit/Loss", "Net monthly cash flow", MetricValue::Amount(result.projected_profit))
            .with_trend(profit_trend(result.projected_profit)),
        MetricCard::new("Runway", runway_description, MetricValue::Months(result.runway_months))
            .with_trend(runway_trend(result.runway_months)),
        MetricCard::new("Total Revenue", "Monthly revenue projection", MetricValue::Amount(result.total_revenue))
            .compared_to(base.current_revenue),
        MetricCard::new("Total Expenses", "Monthly expense projection", MetricValue::Amount(result.total_expenses))
            .compared_to(base.reference_expenses()),
    ]
}

/// Short guidance on hiring, pricing and break-even
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickInsights {
    pub hiring_impact: String,
    pub revenue_growth: String,
    pub break_even: String,
}

pub fn quick_insights(input: &ScenarioInput, result: &ScenarioResult, base: &BaseMetrics) -> QuickInsights {
    QuickInsights {
        hiring_impact: hiring_impact(input, base),
        revenue_growth: revenue_growth(input, base),
        break_even: break_even(result),
    }
}

fn compact(amount: f64) -> String {
    format_inr(amount, FormatOptions::compact_bare())
}

fn hiring_impact(input: &ScenarioInput, base: &BaseMetrics) -> String {
    if input.employees > BASELINE_HEADCOUNT {
        let added = input.employees - BASELINE_HEADCOUNT;
        format!(
            "Adding {} employees will cost \u{20B9}{}/month but could generate \u{20B9}{}/month in additional revenue.",
            added,
            compact(added as f64 * base.employee_cost),
            compact(added as f64 * base.revenue_per_employee),
        )
    } else {
        "Current team size is optimal. Consider scaling when revenue exceeds \u{20B9}5L/month.".to_string()
    }
}

fn revenue_growth(input: &ScenarioInput, base: &BaseMetrics) -> String {
    let pct = input.price_increase_pct;
    let change = base.current_revenue * (pct.abs() / 100.0);
    if pct > 0.0 {
        format!(
            "A {} price increase adds \u{20B9}{}/month revenue.",
            format_percentage(pct, 1),
            compact(change),
        )
    } else if pct < 0.0 {
        format!(
            "Price reduction of {} reduces revenue by \u{20B9}{}/month.",
            format_percentage(pct.abs(), 1),
            compact(change),
        )
    } else {
        "No pricing changes. Consider testing 5-10% increases.".to_string()
    }
}

fn break_even(result: &ScenarioResult) -> String {
    if result.is_profitable() {
        return "This scenario is profitable! You're generating positive cash flow.".to_string();
    }
    match result.runway_months {
        Runway::Finite(m) if m > HEALTHY_RUNWAY_MONTHS => {
            format!("You have {} months to reach profitability.", m)
        }
        Runway::Finite(m) if m < CRITICAL_RUNWAY_MONTHS => {
            "Critical: Less than 6 months runway. Consider reducing costs or increasing revenue.".to_string()
        }
        _ => "Moderate runway. Focus on growth initiatives.".to_string(),
    }
}
