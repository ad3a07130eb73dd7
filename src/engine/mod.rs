//! The computation engine: impact evaluation, scenario bookkeeping and the
//! discounted cost-benefit pipeline.
//!
//! - **impact**: impact results, exceedance curves, the `ImpactCalc` seam
//! - **risk_metric**: scalar risk summaries (aggregate EAI, return-period)
//! - **scenario**: per-scenario measure evaluation
//! - **cost_benefit**: time interpolation, discounting, the orchestrator

mod cost_benefit;
mod impact;
mod risk_metric;
mod scenario;

pub use cost_benefit::*;
pub use impact::*;
pub use risk_metric::*;
pub use scenario::*;
