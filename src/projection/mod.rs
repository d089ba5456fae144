//! Projection engine for single-month scenario outcomes

mod levers;
mod result;
mod engine;
pub mod insights;
pub mod sweep;

pub use levers::{Lever, LeverBounds, ScenarioInput, clamp_employees};
pub use result::{Runway, ScenarioResult, ProjectionBreakdown};
pub use engine::{ProjectionEngine, project, project_detailed};
pub use insights::{MetricCard, QuickInsights, Trend, metric_cards, quick_insights};
pub use sweep::{SweepPoint, sweep, sweep_all_steps, write_sweep_csv};
