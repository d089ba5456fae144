//! CSV-based base metric loader
//!
//! Reads a two-column `metric,value` file. Every metric must be present
//! exactly once with a finite, non-negative value.

use super::BaseMetrics;
use crate::error::{PlannerError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the base metrics file
pub const DEFAULT_BASE_METRICS_PATH: &str = "data/base_metrics.csv";

/// Load base metrics from a CSV file
pub fn load_base_metrics(path: &Path) -> Result<BaseMetrics> {
    let file = File::open(path)?;
    let metrics = load_base_metrics_from_reader(file)?;
    log::info!("Loaded base metrics from {}", path.display());
    Ok(metrics)
}

/// Load base metrics from any CSV source
pub fn load_base_metrics_from_reader<R: Read>(source: R) -> Result<BaseMetrics> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut current_revenue = None;
    let mut employee_cost = None;
    let mut fixed_costs = None;
    let mut current_cash = None;
    let mut revenue_per_employee = None;

    for result in reader.records() {
        let record = result?;
        let (metric, raw) = match (record.get(0), record.get(1)) {
            (Some(metric), Some(raw)) => (metric, raw),
            _ => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(PlannerError::MalformedRow { line });
            }
        };
        let value: f64 = raw.parse().map_err(|_| PlannerError::InvalidNumber {
            metric: metric.to_string(),
            value: raw.to_string(),
        })?;

        let slot = match metric {
            "current_revenue" => &mut current_revenue,
            "employee_cost" => &mut employee_cost,
            "fixed_costs" => &mut fixed_costs,
            "current_cash" => &mut current_cash,
            "revenue_per_employee" => &mut revenue_per_employee,
            other => return Err(PlannerError::UnknownMetric(other.to_string())),
        };
        if slot.is_some() {
            return Err(PlannerError::DuplicateMetric(metric.to_string()));
        }
        *slot = Some(value);
    }

    Ok(BaseMetrics {
        current_revenue: require("current_revenue", current_revenue)?,
        employee_cost: require("employee_cost", employee_cost)?,
        fixed_costs: require("fixed_costs", fixed_costs)?,
        current_cash: require("current_cash", current_cash)?,
        revenue_per_employee: require("revenue_per_employee", revenue_per_employee)?,
    })
}

fn require(metric: &'static str, value: Option<f64>) -> Result<f64> {
    let value = value.ok_or(PlannerError::MissingMetric(metric))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidMetric { metric, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_base_metrics() {
        let result = BaseMetrics::from_csv();
        assert!(result.is_ok(), "Failed to load base metrics: {:?}", result.err());

        // Checked-in file mirrors the built-in figures
        assert_eq!(result.unwrap(), BaseMetrics::default_pricing());
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "metric,value\n\
                   current_revenue, 450000\n\
                   employee_cost,70000\n\
                   fixed_costs,90000\n\
                   current_cash,1500000\n\
                   revenue_per_employee,40000\n";
        let base = load_base_metrics_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(base.current_revenue, 450_000.0);
        assert_eq!(base.revenue_per_employee, 40_000.0);
    }

    #[test]
    fn test_missing_metric() {
        let csv = "metric,value\ncurrent_revenue,300000\n";
        let err = load_base_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::MissingMetric("employee_cost")));
    }

    #[test]
    fn test_rejects_bad_values() {
        let csv = "metric,value\ncurrent_revenue,lots\n";
        let err = load_base_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidNumber { .. }));

        let csv = "metric,value\n\
                   current_revenue,300000\n\
                   employee_cost,60000\n\
                   fixed_costs,80000\n\
                   current_cash,-1\n\
                   revenue_per_employee,50000\n";
        let err = load_base_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidMetric { metric: "current_cash", .. }));
    }

    #[test]
    fn test_single_column_file_is_an_error() {
        let csv = "metric\ncurrent_revenue\n";
        let err = load_base_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::MalformedRow { line: 2 }));
    }

    #[test]
    fn test_repeated_metric_is_rejected() {
        let csv = "metric,value\n\
                   current_revenue,300000\n\
                   current_revenue,999999\n";
        let err = load_base_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::DuplicateMetric(ref m) if m == "current_revenue"));
    }

    #[test]
    fn test_unknown_metric() {
        let csv = "metric,value\nheadcount,5\n";
        let err = load_base_metrics_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownMetric(_)));
    }
}
