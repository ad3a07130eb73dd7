//! Impact results and the impact-evaluation seam.
//!
//! - `Impact`: per-event damage, expected annual impact, exceedance curve
//! - `ImpactCalc`: the trait the cost-benefit engine evaluates through
//! - `EventImpactCalc`: reference evaluator (value x mdr at the centroid)

use serde::{Deserialize, Serialize};

use crate::entity::{Exposures, ImpactFuncSet};
use crate::errors::ComputationError;
use crate::hazard::Hazard;
use crate::interp;
use crate::Result;

/// Default return periods (years) for exceedance-frequency curves.
pub const DEF_RP: [f64; 4] = [25.0, 50.0, 100.0, 250.0];

/// Exceedance-frequency curve: impact not exceeded more often than once in
/// `return_per` years. Monotonic in return period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactFreqCurve {
    pub return_per: Vec<f64>,
    pub impact: Vec<f64>,
}

/// Result of one impact evaluation over a hazard event set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    /// Damage per event, aligned to the hazard's event ordering.
    pub at_event: Vec<f64>,
    /// Expected annual impact per exposure point.
    pub eai_exp: Vec<f64>,
    /// Aggregate expected annual impact.
    pub aai_agg: f64,
    /// Total exposed value.
    pub tot_value: f64,
    /// Annual frequency per event, copied from the hazard so the curve can
    /// be derived without holding the hazard.
    pub frequency: Vec<f64>,
}

impl Impact {
    /// Exceedance-frequency curve, optionally interpolated onto explicit
    /// return periods (ascending). With `None` the curve carries one point
    /// per event.
    ///
    /// Events are ranked by damage descending; cumulative frequency down
    /// that ranking is the exceedance frequency, its reciprocal the return
    /// period.
    pub fn calc_freq_curve(&self, return_per: Option<&[f64]>) -> ImpactFreqCurve {
        let mut order: Vec<usize> = (0..self.at_event.len()).collect();
        order.sort_by(|&a, &b| self.at_event[b].total_cmp(&self.at_event[a]));

        let mut exceed_freq = Vec::with_capacity(order.len());
        let mut acc = 0.0;
        for &event in &order {
            acc += self.frequency[event];
            exceed_freq.push(acc);
        }

        // Ascending return periods with their impacts.
        let return_periods: Vec<f64> = exceed_freq.iter().rev().map(|f| 1.0 / f).collect();
        let impacts: Vec<f64> = order.iter().rev().map(|&e| self.at_event[e]).collect();

        match return_per {
            None => ImpactFreqCurve {
                return_per: return_periods,
                impact: impacts,
            },
            Some(rps) => ImpactFreqCurve {
                return_per: rps.to_vec(),
                impact: rps
                    .iter()
                    .map(|&rp| interp::linear(rp, &return_periods, &impacts))
                    .collect(),
            },
        }
    }
}

/// The impact-evaluation seam: anything that can turn (exposures,
/// vulnerability, hazard) into an `Impact`.
pub trait ImpactCalc {
    fn impact(
        &self,
        exposures: &Exposures,
        impact_funcs: &ImpactFuncSet,
        hazard: &Hazard,
    ) -> Result<Impact>;
}

/// Reference event-by-event evaluator.
///
/// Damage of event `e` at exposure point `x` is
/// `value(x) * mdr(intensity(e, centroid(x)))`; expected annual impact per
/// point is the frequency-weighted sum over events. All accumulation runs
/// in fixed point/event order, so outputs are bit-reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventImpactCalc;

impl ImpactCalc for EventImpactCalc {
    fn impact(
        &self,
        exposures: &Exposures,
        impact_funcs: &ImpactFuncSet,
        hazard: &Hazard,
    ) -> Result<Impact> {
        hazard.check()?;
        let n_events = hazard.event_count();
        let mut at_event = vec![0.0; n_events];
        let mut eai_exp = vec![0.0; exposures.len()];

        for (idx, point) in exposures.points().iter().enumerate() {
            let func = impact_funcs
                .get(&hazard.haz_type, point.impf_id)
                .ok_or_else(|| ComputationError::MissingImpactFunc {
                    haz_type: hazard.haz_type.clone(),
                    impf_id: point.impf_id,
                })?;
            if point.centroid_id >= hazard.n_centroids {
                return Err(ComputationError::CentroidOutOfRange {
                    point: idx,
                    centroid: point.centroid_id,
                    centroids: hazard.n_centroids,
                }
                .into());
            }
            for event in 0..n_events {
                let inten = hazard.intensity_at(event, point.centroid_id);
                let damage = point.value * func.calc_mdr(inten);
                at_event[event] += damage;
                eai_exp[idx] += hazard.frequency[event] * damage;
            }
        }

        let aai_agg = eai_exp.iter().sum();
        Ok(Impact {
            at_event,
            eai_exp,
            aai_agg,
            tot_value: exposures.total_value(),
            frequency: hazard.frequency.clone(),
        })
    }
}
