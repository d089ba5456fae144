//! Base business metrics the scenario levers are applied against

pub mod loader;

pub use loader::{DEFAULT_BASE_METRICS_PATH, load_base_metrics};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Headcount at and below which employees add no marginal revenue
pub const BASELINE_HEADCOUNT: u32 = 5;

/// Monthly baseline figures for the business, fixed for a planning session
///
/// All amounts are in rupees per month except `current_cash`, which is the
/// reserve on hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseMetrics {
    /// Monthly revenue before any adjustment
    pub current_revenue: f64,

    /// Fully loaded monthly cost per employee
    pub employee_cost: f64,

    /// Overhead independent of headcount and marketing
    pub fixed_costs: f64,

    /// Cash reserve available to fund a monthly shortfall
    pub current_cash: f64,

    /// Marginal monthly revenue per employee above `BASELINE_HEADCOUNT`
    pub revenue_per_employee: f64,
}

impl BaseMetrics {
    /// Built-in figures: ₹3L revenue, ₹60K per employee, ₹80K fixed costs,
    /// ₹20L cash, ₹50K revenue per additional employee
    pub fn default_pricing() -> Self {
        Self {
            current_revenue: 300_000.0,
            employee_cost: 60_000.0,
            fixed_costs: 80_000.0,
            current_cash: 2_000_000.0,
            revenue_per_employee: 50_000.0,
        }
    }

    /// Load from the CSV file in the default location (data/base_metrics.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_BASE_METRICS_PATH))
    }

    /// Load from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        load_base_metrics(path)
    }

    /// Expenses of the default scenario (5 employees, ₹50K marketing),
    /// the reference point the expense card compares against
    pub fn reference_expenses(&self) -> f64 {
        self.fixed_costs + BASELINE_HEADCOUNT as f64 * self.employee_cost + 50_000.0
    }
}

impl Default for BaseMetrics {
    fn default() -> Self {
        Self::default_pricing()
    }
}
