//! Projection output structures

use serde::{Serialize, Serializer};
use std::fmt;

/// How long the cash reserve lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runway {
    /// Whole months until the reserve is depleted
    Finite(u64),
    /// Not burning cash, the reserve never runs out
    Indefinite,
}

impl Runway {
    pub fn months(self) -> Option<u64> {
        match self {
            Runway::Finite(months) => Some(months),
            Runway::Indefinite => None,
        }
    }

    pub fn is_indefinite(self) -> bool {
        matches!(self, Runway::Indefinite)
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Finite(months) => write!(f, "{} months", months),
            Runway::Indefinite => f.write_str("indefinite"),
        }
    }
}

/// Finite runway serialises as a number, indefinite as the string "indefinite"
impl Serialize for Runway {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Runway::Finite(months) => serializer.serialize_u64(*months),
            Runway::Indefinite => serializer.serialize_str("indefinite"),
        }
    }
}

/// Steady-state monthly outcome of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub total_revenue: f64,
    pub total_expenses: f64,

    /// Revenue minus expenses, negative when losing money
    pub projected_profit: f64,

    /// Magnitude of the monthly net, always non-negative
    pub monthly_burn: f64,

    pub runway_months: Runway,

    /// Months until the reserve is exhausted, 0 when not burning
    pub break_even_month: u64,
}

impl ScenarioResult {
    pub fn is_profitable(&self) -> bool {
        self.projected_profit >= 0.0
    }
}

/// Intermediate figures behind a `ScenarioResult`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionBreakdown {
    /// Headcount times cost per employee
    pub employee_expense: f64,

    /// Baseline revenue after the price change
    pub price_adjusted_revenue: f64,

    /// Revenue from headcount above the baseline, never negative
    pub employee_revenue_boost: f64,

    /// Expenses minus revenue, positive when burning cash
    pub monthly_net: f64,
}
