//! Discounted cost-benefit computation across present and future scenarios.
//!
//! The pipeline turns two point-in-time risk estimates into a net-present-
//! value benefit per measure:
//!
//! - `time_dependency_array`: per-year weights blending present risk toward
//!   future risk, concavity controlled by a single exponent
//! - `npv_unaverted_impact`: discounted NPV of one interpolated risk series
//! - `calc_cost_benefit`: per-measure benefit (baseline NPV minus measure
//!   NPV) and cost-benefit ratio, plus the aggregate climate risk
//! - `CostBenefit::calc`: orchestrates scenario evaluation and discounting
//!
//! Every accumulation runs in a fixed order; identical inputs give
//! bit-identical outputs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{
    calc_impact_measures, ImpactCalc, RiskMetric, Scenario, ScenarioImpactMeasures, NO_MEASURE,
};
use crate::entity::{DiscRates, Entity};
use crate::errors::ConfigError;
use crate::hazard::Hazard;
use crate::Result;

/// Per-year weights over `present_year..=future_year` blending present-state
/// risk toward future-state risk.
///
/// Without an exponent the weights are constant one: future risk applies
/// uniformly across the horizon (the single-scenario case). With an
/// exponent, `w[i] = (i / (N-1))^exponent`, the last entry forced to
/// exactly 1.0; exponent 1 is a linear ramp from 0 to 1.
pub fn time_dependency_array(
    present_year: i32,
    future_year: i32,
    imp_time_depen: Option<f64>,
) -> Vec<f64> {
    let n_years = (future_year - present_year + 1).max(1) as usize;
    let Some(exponent) = imp_time_depen else {
        return vec![1.0; n_years];
    };
    if n_years == 1 {
        return vec![1.0];
    }
    let span = (n_years - 1) as f64;
    let mut weights: Vec<f64> = (0..n_years)
        .map(|i| (i as f64 / span).powf(exponent))
        .collect();
    weights[n_years - 1] = 1.0;
    weights
}

/// Discounted NPV of the unaverted impact for one measure (or baseline).
///
/// With a present risk the yearly series is
/// `present + (future - present) * w[i]`; without one it is `w[i] * future`.
pub fn npv_unaverted_impact(
    risk_future: f64,
    risk_present: Option<f64>,
    disc_rates: &DiscRates,
    time_dep: &[f64],
    present_year: i32,
    future_year: i32,
) -> Result<f64> {
    let series: Vec<f64> = match risk_present {
        Some(present) => time_dep
            .iter()
            .map(|&w| present + (risk_future - present) * w)
            .collect(),
        None => time_dep.iter().map(|&w| w * risk_future).collect(),
    };
    disc_rates.net_present_value(present_year, future_year, &series)
}

/// Discounted benefit and cost-benefit ratio for one measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureBenefit {
    pub name: String,
    /// Baseline NPV minus the measure's NPV; currency units. Can be
    /// negative for a counterproductive measure.
    pub benefit: f64,
    /// Implementation cost over benefit; `f64::INFINITY` when the benefit
    /// is not positive.
    pub cost_ben_ratio: f64,
}

/// Output of the discounting stage: aggregate climate risk plus one entry
/// per non-baseline measure, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountedBenefits {
    /// NPV of the no-measure baseline over the horizon.
    pub tot_climate_risk: f64,
    measures: Vec<MeasureBenefit>,
}

impl DiscountedBenefits {
    pub fn get(&self, name: &str) -> Option<&MeasureBenefit> {
        self.measures.iter().find(|m| m.name == name)
    }

    pub fn benefit(&self, name: &str) -> Option<f64> {
        self.get(name).map(|m| m.benefit)
    }

    pub fn cost_ben_ratio(&self, name: &str) -> Option<f64> {
        self.get(name).map(|m| m.cost_ben_ratio)
    }

    /// Entries in catalog order; the baseline never appears here.
    pub fn iter(&self) -> impl Iterator<Item = &MeasureBenefit> {
        self.measures.iter()
    }
}

/// Discount per-measure present/future risks into benefits and ratios.
///
/// The time-dependency exponent is only honored when a present scenario
/// exists; otherwise the constant-ones weighting applies. A present
/// scenario must track exactly the future scenario's measure names, in the
/// same order.
pub fn calc_cost_benefit(
    disc_rates: &DiscRates,
    imp_meas_present: Option<&ScenarioImpactMeasures>,
    imp_meas_future: &ScenarioImpactMeasures,
    present_year: i32,
    future_year: i32,
    imp_time_depen: Option<f64>,
) -> Result<DiscountedBenefits> {
    if let Some(present) = imp_meas_present {
        let p: Vec<&str> = present.names().collect();
        let f: Vec<&str> = imp_meas_future.names().collect();
        if p != f {
            return Err(ConfigError::ScenarioMeasureMismatch(format!(
                "present [{}] vs future [{}]",
                p.join(", "),
                f.join(", ")
            ))
            .into());
        }
    }

    let time_dep = match imp_meas_present {
        Some(_) => time_dependency_array(present_year, future_year, imp_time_depen),
        None => time_dependency_array(present_year, future_year, None),
    };

    let baseline = imp_meas_future
        .no_measure()
        .ok_or(ConfigError::MissingBaseline)?;
    let present_risk =
        |name: &str| imp_meas_present.and_then(|p| p.get(name)).map(|o| o.risk);

    let tot_climate_risk = npv_unaverted_impact(
        baseline.risk,
        present_risk(NO_MEASURE),
        disc_rates,
        &time_dep,
        present_year,
        future_year,
    )?;

    let mut measures = Vec::new();
    for outcome in imp_meas_future.iter().filter(|o| o.name != NO_MEASURE) {
        let npv_meas = npv_unaverted_impact(
            outcome.risk,
            present_risk(&outcome.name),
            disc_rates,
            &time_dep,
            present_year,
            future_year,
        )?;
        let benefit = tot_climate_risk - npv_meas;
        let cost_ben_ratio = if benefit > 0.0 {
            outcome.cost / benefit
        } else {
            warn!(
                measure = %outcome.name,
                benefit,
                "non-positive discounted benefit; cost-benefit ratio set to infinity"
            );
            f64::INFINITY
        };
        measures.push(MeasureBenefit {
            name: outcome.name.clone(),
            benefit,
            cost_ben_ratio,
        });
    }

    Ok(DiscountedBenefits {
        tot_climate_risk,
        measures,
    })
}

/// Display scale for a monetary magnitude: `(factor, suffix)` out of
/// units, thousands, millions, billions.
pub fn norm_values(value: f64) -> (f64, &'static str) {
    if value > 1e9 {
        (1e9, "bn")
    } else if value > 1e6 {
        (1e6, "m")
    } else if value > 1e3 {
        (1e3, "k")
    } else {
        (1.0, "")
    }
}

/// Inputs of a full cost-benefit analysis.
///
/// `hazard`/`entity` describe today; a distinct future state is optional.
/// The future year resolves from the future entity's exposure reference
/// year, falling back to `future_year`.
#[derive(Debug, Clone, Copy)]
pub struct CostBenefitInput<'a> {
    pub hazard: &'a Hazard,
    pub entity: &'a Entity,
    pub haz_future: Option<&'a Hazard>,
    pub ent_future: Option<&'a Entity>,
    pub future_year: Option<i32>,
    pub risk_metric: RiskMetric,
    /// Concavity exponent for the present-to-future risk interpolation.
    /// Unset, a two-scenario analysis uses the linear ramp (exponent 1).
    pub imp_time_depen: Option<f64>,
    /// Retain the full impact result per measure and scenario.
    pub save_imp: bool,
}

impl<'a> CostBenefitInput<'a> {
    pub fn new(hazard: &'a Hazard, entity: &'a Entity) -> Self {
        Self {
            hazard,
            entity,
            haz_future: None,
            ent_future: None,
            future_year: None,
            risk_metric: RiskMetric::AaiAgg,
            imp_time_depen: None,
            save_imp: false,
        }
    }
}

/// Final result of a cost-benefit analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBenefit {
    pub present_year: i32,
    pub future_year: i32,
    /// Present-scenario outcomes; `None` for a single-scenario analysis.
    pub imp_meas_present: Option<ScenarioImpactMeasures>,
    pub imp_meas_future: ScenarioImpactMeasures,
    pub benefits: DiscountedBenefits,
}

impl CostBenefit {
    /// Run the full analysis: scenario evaluation, then discounting.
    ///
    /// With no future hazard/entity the present data fills the future slot
    /// (the only available state is the terminal state of the horizon) and
    /// the present mapping stays empty. With a future state, the present
    /// scenario is evaluated first, then the future one, then both are
    /// discounted against the present entity's rates.
    pub fn calc<C: ImpactCalc>(calc: &C, input: CostBenefitInput<'_>) -> Result<Self> {
        let present_year = input.entity.exposures.ref_year;
        let future_year = input
            .ent_future
            .map(|ent| ent.exposures.ref_year)
            .or(input.future_year)
            .ok_or(ConfigError::UnresolvedFutureYear)?;
        if future_year < present_year {
            return Err(ConfigError::InvertedHorizon {
                present: present_year,
                future: future_year,
            }
            .into());
        }

        let has_future_state = input.haz_future.is_some() || input.ent_future.is_some();
        // A two-scenario analysis interpolates linearly unless told otherwise.
        let imp_time_depen = if has_future_state {
            input.imp_time_depen.or(Some(1.0))
        } else {
            input.imp_time_depen
        };
        let (imp_meas_present, imp_meas_future) = if has_future_state {
            let present = evaluate_scenario(
                calc,
                input.hazard,
                input.entity,
                Scenario::Present,
                input.risk_metric,
                input.save_imp,
            )?;
            let fut_haz = input.haz_future.unwrap_or(input.hazard);
            let fut_ent = input.ent_future.unwrap_or(input.entity);
            let future = evaluate_scenario(
                calc,
                fut_haz,
                fut_ent,
                Scenario::Future,
                input.risk_metric,
                input.save_imp,
            )?;
            (Some(present), future)
        } else {
            let future = evaluate_scenario(
                calc,
                input.hazard,
                input.entity,
                Scenario::Future,
                input.risk_metric,
                input.save_imp,
            )?;
            (None, future)
        };

        let benefits = calc_cost_benefit(
            &input.entity.disc_rates,
            imp_meas_present.as_ref(),
            &imp_meas_future,
            present_year,
            future_year,
            imp_time_depen,
        )?;

        info!(
            present_year,
            future_year,
            tot_climate_risk = benefits.tot_climate_risk,
            measures = imp_meas_future.len().saturating_sub(1),
            "cost-benefit analysis complete"
        );

        Ok(Self {
            present_year,
            future_year,
            imp_meas_present,
            imp_meas_future,
            benefits,
        })
    }

    pub fn tot_climate_risk(&self) -> f64 {
        self.benefits.tot_climate_risk
    }

    pub fn benefit(&self, measure: &str) -> Option<f64> {
        self.benefits.benefit(measure)
    }

    pub fn cost_ben_ratio(&self, measure: &str) -> Option<f64> {
        self.benefits.cost_ben_ratio(measure)
    }
}

fn evaluate_scenario<C: ImpactCalc>(
    calc: &C,
    hazard: &Hazard,
    entity: &Entity,
    when: Scenario,
    risk_metric: RiskMetric,
    save_imp: bool,
) -> Result<ScenarioImpactMeasures> {
    let measures = entity.measures.get_measure(&hazard.haz_type);
    calc_impact_measures(
        calc,
        hazard,
        &entity.exposures,
        &measures,
        &entity.impact_funcs,
        when,
        risk_metric,
        save_imp,
    )
}
