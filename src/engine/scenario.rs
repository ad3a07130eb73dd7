//! Per-scenario impact evaluation across a measure catalog.
//!
//! `calc_impact_measures` is a pure stage: it evaluates the baseline and
//! every candidate measure against one (hazard, entity-state) pair and
//! returns an insertion-ordered `ScenarioImpactMeasures`, baseline first.
//! Orchestration decides whether the output fills the present or the
//! future slot of an analysis.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{Impact, ImpactCalc, ImpactFreqCurve, RiskMetric, DEF_RP};
use crate::entity::{Exposures, ImpactFuncSet, Measure};
use crate::errors::ConfigError;
use crate::hazard::Hazard;
use crate::Result;

/// Reserved name for the baseline (identity) entry.
pub const NO_MEASURE: &str = "no measure";

/// Which time point of the analysis a scenario evaluation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Present,
    Future,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::Present => f.write_str("present"),
            Scenario::Future => f.write_str("future"),
        }
    }
}

/// Cost, risk and exceedance curve recorded for one measure (or the
/// baseline) in one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureOutcome {
    pub name: String,
    /// Implementation cost; zero for the baseline.
    pub cost: f64,
    /// Scalar risk under the configured metric.
    pub risk: f64,
    /// Exceedance-frequency curve at the default return periods.
    pub efc: ImpactFreqCurve,
    /// Full impact result, retained only when requested.
    pub impact: Option<Impact>,
}

/// Insertion-ordered per-measure outcomes for one scenario, baseline first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioImpactMeasures {
    outcomes: Vec<MeasureOutcome>,
}

impl ScenarioImpactMeasures {
    pub fn get(&self, name: &str) -> Option<&MeasureOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    /// Baseline outcome; present once the scenario has been evaluated.
    pub fn no_measure(&self) -> Option<&MeasureOutcome> {
        self.get(NO_MEASURE)
    }

    /// Outcomes in evaluation order (baseline first, then catalog order).
    pub fn iter(&self) -> impl Iterator<Item = &MeasureOutcome> {
        self.outcomes.iter()
    }

    /// Measure names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().map(|o| o.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn push(&mut self, outcome: MeasureOutcome) -> Result<()> {
        if self.get(&outcome.name).is_some() {
            return Err(ConfigError::DuplicateOutcome(outcome.name).into());
        }
        self.outcomes.push(outcome);
        Ok(())
    }
}

/// Evaluate the baseline and every measure against one scenario state.
///
/// Measures must all target the hazard's type; transforms run on copies,
/// so none of the inputs are mutated. With `save_imp` the full `Impact`
/// is retained per entry, otherwise only cost, risk and the curve.
#[allow(clippy::too_many_arguments)]
pub fn calc_impact_measures<C: ImpactCalc>(
    calc: &C,
    hazard: &Hazard,
    exposures: &Exposures,
    measures: &[&Measure],
    impact_funcs: &ImpactFuncSet,
    when: Scenario,
    risk_metric: RiskMetric,
    save_imp: bool,
) -> Result<ScenarioImpactMeasures> {
    for meas in measures {
        if meas.haz_type != hazard.haz_type {
            return Err(ConfigError::HazardTypeMismatch {
                measure: meas.name.clone(),
                expected: meas.haz_type.clone(),
                found: hazard.haz_type.clone(),
            }
            .into());
        }
    }

    let mut out = ScenarioImpactMeasures::default();

    let imp = calc.impact(exposures, impact_funcs, hazard)?;
    let risk = risk_metric.eval(&imp);
    debug!(%when, measure = NO_MEASURE, risk, "evaluated baseline");
    out.push(MeasureOutcome {
        name: NO_MEASURE.to_string(),
        cost: 0.0,
        risk,
        efc: imp.calc_freq_curve(Some(&DEF_RP)),
        impact: save_imp.then_some(imp),
    })?;

    for meas in measures {
        let (new_exp, new_ifs, new_haz) = meas.apply(calc, exposures, impact_funcs, hazard)?;
        let imp = calc.impact(&new_exp, &new_ifs, &new_haz)?;
        let risk = risk_metric.eval(&imp);
        debug!(%when, measure = %meas.name, cost = meas.cost, risk, "evaluated measure");
        out.push(MeasureOutcome {
            name: meas.name.clone(),
            cost: meas.cost,
            risk,
            efc: imp.calc_freq_curve(Some(&DEF_RP)),
            impact: save_imp.then_some(imp),
        })?;
    }

    Ok(out)
}
