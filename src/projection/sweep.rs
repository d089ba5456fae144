//! Batch evaluation of one lever across many values

use crate::assumptions::BaseMetrics;
use crate::error::Result;
use super::engine::project;
use super::levers::{Lever, ScenarioInput};
use super::result::{Runway, ScenarioResult};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// One evaluated point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub lever: Lever,
    /// Lever value after clamping
    pub value: f64,
    pub input: ScenarioInput,
    pub result: ScenarioResult,
}

/// Flat CSV record for a sweep point
#[derive(Debug, Serialize)]
struct SweepRow {
    lever: Lever,
    value: f64,
    total_revenue: f64,
    total_expenses: f64,
    projected_profit: f64,
    monthly_burn: f64,
    runway_months: Runway,
    break_even_month: u64,
}

impl From<&SweepPoint> for SweepRow {
    fn from(point: &SweepPoint) -> Self {
        Self {
            lever: point.lever,
            value: point.value,
            total_revenue: point.result.total_revenue,
            total_expenses: point.result.total_expenses,
            projected_profit: point.result.projected_profit,
            monthly_burn: point.result.monthly_burn,
            runway_months: point.result.runway_months,
            break_even_month: point.result.break_even_month,
        }
    }
}

/// Evaluate `input` with `lever` set to each of `values`
///
/// Points are computed in parallel and returned in the order of `values`.
pub fn sweep(base: &BaseMetrics, input: &ScenarioInput, lever: Lever, values: &[f64]) -> Vec<SweepPoint> {
    values
        .par_iter()
        .map(|&value| {
            let input = input.with_lever(lever, value);
            SweepPoint {
                lever,
                value: input.get(lever),
                input,
                result: project(&input, base),
            }
        })
        .collect()
}

/// Sweep every slider stop of a lever
pub fn sweep_all_steps(base: &BaseMetrics, input: &ScenarioInput, lever: Lever) -> Vec<SweepPoint> {
    sweep(base, input, lever, &lever.steps())
}

/// Write sweep points as CSV with a header row
pub fn write_sweep_csv<W: Write>(writer: W, points: &[SweepPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(SweepRow::from(point))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_preserves_order_and_clamps() {
        let base = BaseMetrics::default_pricing();
        let points = sweep(&base, &ScenarioInput::default(), Lever::Employees, &[3.0, 25.0, 8.0]);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].input.employees, 3);
        assert_eq!(points[1].value, 20.0);
        assert_eq!(points[2].input.employees, 8);
        assert_eq!(points[2].input.marketing_spend, 50_000.0);
    }

    #[test]
    fn test_sweep_matches_single_projection() {
        let base = BaseMetrics::default_pricing();
        let input = ScenarioInput::default();
        let points = sweep_all_steps(&base, &input, Lever::PriceIncrease);

        assert_eq!(points.len(), 71);
        for point in &points {
            assert_eq!(point.result, project(&point.input, &base));
        }
        // Revenue rises with price
        assert!(points.windows(2).all(|w| w[1].result.total_revenue > w[0].result.total_revenue));
    }

    #[test]
    fn test_write_sweep_csv() {
        let base = BaseMetrics::default_pricing();
        let input = ScenarioInput::default();
        let points = sweep(&base, &input, Lever::AdditionalRevenue, &[0.0, 200_000.0]);

        let mut buffer = Vec::new();
        write_sweep_csv(&mut buffer, &points).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "lever,value,total_revenue,total_expenses,projected_profit,monthly_burn,runway_months,break_even_month"
        );
        assert_eq!(lines[1], "AdditionalRevenue,0.0,300000.0,430000.0,-130000.0,130000.0,15,16");
        assert_eq!(lines[2], "AdditionalRevenue,200000.0,500000.0,430000.0,70000.0,70000.0,indefinite,0");
    }
}
