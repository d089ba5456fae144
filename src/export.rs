//! Scenario snapshot export
//!
//! Produces the downloadable report: formatted lever values, formatted
//! results and a UTC timestamp, encoded as pretty-printed JSON.

use crate::error::Result;
use crate::format::{format_money, format_percentage};
use crate::projection::{Runway, ScenarioInput, ScenarioResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Lever values as shown in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSection {
    pub employees: u32,
    pub marketing_spend: String,
    pub price_increase: String,
    pub additional_revenue: String,
}

/// Projection results as shown in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSection {
    pub total_revenue: String,
    pub total_expenses: String,
    pub monthly_profit: String,
    pub runway_months: Runway,
    pub break_even_month: u64,
}

/// Complete exported report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub scenario: ScenarioSection,
    pub results: ResultsSection,
    /// ISO-8601 with millisecond precision and `Z` suffix
    pub timestamp: String,
}

impl ScenarioReport {
    pub fn new(input: &ScenarioInput, result: &ScenarioResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            scenario: ScenarioSection {
                employees: input.employees,
                marketing_spend: format_money(input.marketing_spend),
                price_increase: format_percentage(input.price_increase_pct, 1),
                additional_revenue: format_money(input.additional_revenue),
            },
            results: ResultsSection {
                total_revenue: format_money(result.total_revenue),
                total_expenses: format_money(result.total_expenses),
                monthly_profit: format_money(result.projected_profit),
                runway_months: result.runway_months,
                break_even_month: result.break_even_month,
            },
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Encode as JSON with two-space indentation
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Download name for a report taken at `timestamp`
pub fn export_file_name(timestamp: DateTime<Utc>) -> String {
    format!("financial-scenario-{}.json", timestamp.timestamp_millis())
}
