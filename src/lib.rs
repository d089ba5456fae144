//! Scenario Planner - what-if projections for small business cash planning
//!
//! This library provides:
//! - A pure single-month projection of revenue, expenses, burn and runway
//! - A scenario controller that clamps lever changes and recomputes
//! - Rupee and percentage formatting in the Indian numbering system
//! - JSON snapshot export and parallel lever sweeps

pub mod error;
pub mod format;
pub mod assumptions;
pub mod projection;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use error::PlannerError;
pub use assumptions::BaseMetrics;
pub use projection::{ProjectionEngine, ScenarioInput, ScenarioResult, Runway, Lever, project};
pub use export::{ScenarioReport, export_file_name};
pub use scenario::ScenarioPlanner;
