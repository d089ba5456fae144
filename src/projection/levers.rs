//! Scenario levers and their domains

use serde::{Deserialize, Serialize};
use std::fmt;

/// One adjustable scenario input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lever {
    Employees,
    MarketingSpend,
    PriceIncrease,
    AdditionalRevenue,
}

/// Inclusive domain of a lever plus the slider step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeverBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Lever {
    pub const ALL: [Lever; 4] = [
        Lever::Employees,
        Lever::MarketingSpend,
        Lever::PriceIncrease,
        Lever::AdditionalRevenue,
    ];

    pub fn bounds(self) -> LeverBounds {
        match self {
            Lever::Employees => LeverBounds { min: 1.0, max: 20.0, step: 1.0 },
            Lever::MarketingSpend => LeverBounds { min: 0.0, max: 200_000.0, step: 5_000.0 },
            Lever::PriceIncrease => LeverBounds { min: -20.0, max: 50.0, step: 1.0 },
            Lever::AdditionalRevenue => LeverBounds { min: 0.0, max: 500_000.0, step: 10_000.0 },
        }
    }

    /// Clamp a value into this lever's domain
    ///
    /// NaN maps to the minimum. Out-of-range values are logged, not rejected.
    pub fn clamp(self, value: f64) -> f64 {
        let bounds = self.bounds();
        let clamped = if value.is_nan() {
            bounds.min
        } else {
            value.clamp(bounds.min, bounds.max)
        };
        if clamped != value {
            log::warn!("{} value {} outside [{}, {}], clamped to {}", self, value, bounds.min, bounds.max, clamped);
        }
        clamped
    }

    /// Every slider stop from min to max
    pub fn steps(self) -> Vec<f64> {
        let bounds = self.bounds();
        let count = ((bounds.max - bounds.min) / bounds.step).round() as usize;
        (0..=count).map(|i| bounds.min + i as f64 * bounds.step).collect()
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lever::Employees => "employees",
            Lever::MarketingSpend => "marketing_spend",
            Lever::PriceIncrease => "price_increase_pct",
            Lever::AdditionalRevenue => "additional_revenue",
        };
        f.write_str(name)
    }
}

/// Current lever settings for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Headcount, 1-20
    pub employees: u32,

    /// Monthly marketing budget, ₹0-2L
    pub marketing_spend: f64,

    /// Price change in percent, -20 to 50
    pub price_increase_pct: f64,

    /// Extra monthly revenue from new initiatives, ₹0-5L
    pub additional_revenue: f64,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            employees: 5,
            marketing_spend: 50_000.0,
            price_increase_pct: 0.0,
            additional_revenue: 0.0,
        }
    }
}

impl ScenarioInput {
    /// Copy with every lever clamped into its domain
    pub fn clamped(&self) -> Self {
        Self {
            employees: clamp_employees(self.employees as i64),
            marketing_spend: Lever::MarketingSpend.clamp(self.marketing_spend),
            price_increase_pct: Lever::PriceIncrease.clamp(self.price_increase_pct),
            additional_revenue: Lever::AdditionalRevenue.clamp(self.additional_revenue),
        }
    }

    /// Copy with one lever replaced (and clamped)
    pub fn with_lever(&self, lever: Lever, value: f64) -> Self {
        let mut next = *self;
        match lever {
            Lever::Employees => next.employees = Lever::Employees.clamp(value.round()) as u32,
            Lever::MarketingSpend => next.marketing_spend = lever.clamp(value),
            Lever::PriceIncrease => next.price_increase_pct = lever.clamp(value),
            Lever::AdditionalRevenue => next.additional_revenue = lever.clamp(value),
        }
        next
    }

    /// Current value of one lever
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::Employees => self.employees as f64,
            Lever::MarketingSpend => self.marketing_spend,
            Lever::PriceIncrease => self.price_increase_pct,
            Lever::AdditionalRevenue => self.additional_revenue,
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        Lever::ALL.iter().all(|&lever| {
            let bounds = lever.bounds();
            let value = self.get(lever);
            value >= bounds.min && value <= bounds.max
        })
    }
}

/// Clamp a headcount into [1, 20]
pub fn clamp_employees(n: i64) -> u32 {
    Lever::Employees.clamp(n as f64) as u32
}
