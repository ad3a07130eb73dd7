#![deny(unreachable_pub)]

//! Economic cost-benefit analysis of risk-reduction measures against
//! natural-hazard impacts, under present and future climate/exposure
//! scenarios.
//!
//! Given a hazard event set, an exposure inventory, vulnerability curves, a
//! catalog of adaptation measures and a discount-rate schedule, the engine
//! produces per measure: the residual risk once the measure is applied, its
//! implementation cost, the discounted benefit (averted damage) and the
//! cost-benefit ratio, plus the aggregate climate risk over the horizon.
//! Everything is a deterministic in-memory computation; same inputs give
//! bit-identical outputs.

// Core modules
mod engine;
mod entity;
mod errors;
mod hazard;
mod interp;

// Re-exports
pub use engine::{
    calc_cost_benefit, calc_impact_measures, norm_values, npv_unaverted_impact, risk_rp_100,
    risk_rp_250, time_dependency_array, CostBenefit, CostBenefitInput, DiscountedBenefits,
    EventImpactCalc, Impact, ImpactCalc, ImpactFreqCurve, MeasureBenefit, MeasureOutcome,
    RiskMetric, Scenario, ScenarioImpactMeasures, DEF_RP, NO_MEASURE,
};
pub use entity::{
    AffineMap, DiscRates, Entity, ExposurePoint, Exposures, ImpactFunc, ImpactFuncSet, Measure,
    MeasureSet,
};
pub use errors::{ComputationError, ConfigError, Error, Result};
pub use hazard::Hazard;
