//! Adaptation measures: interventions that reshape hazard, exposure or
//! vulnerability inputs before impact is computed, at a known cost.
//!
//! A measure never mutates the inputs it is applied to; `apply` hands back
//! independent copies so that scenario evaluation stays side-effect free.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::ImpactCalc;
use crate::entity::{Exposures, ImpactFuncSet};
use crate::errors::ConfigError;
use crate::hazard::Hazard;
use crate::Result;

/// Affine map `x -> a*x + b`, the identity by default.
pub type AffineMap = (f64, f64);

const IDENTITY: AffineMap = (1.0, 0.0);

/// One candidate adaptation measure for a single hazard type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Unique name within the hazard type; `"no measure"` is reserved for
    /// the baseline.
    pub name: String,
    /// Hazard type this measure targets.
    pub haz_type: String,
    /// Implementation cost in currency units, non-negative.
    pub cost: f64,
    /// Affine map applied to positive hazard intensities (e.g. mangroves
    /// shaving surge height: `(1.0, -4.0)`). Results floor at zero.
    pub hazard_inten_imp: AffineMap,
    /// Affine map applied to the mean-damage-degree ordinates.
    pub mdd_impact: AffineMap,
    /// Affine map applied to the percentage-of-affected-assets ordinates.
    pub paa_impact: AffineMap,
    /// Annual exceedance-frequency cutoff: events beyond this cumulative
    /// frequency (walking down from the largest impacts) are silenced,
    /// modelling protection against the frequent small events (e.g. a
    /// seawall). Zero disables the cutoff.
    pub hazard_freq_cutoff: f64,
}

impl Default for Measure {
    fn default() -> Self {
        Self {
            name: String::new(),
            haz_type: String::new(),
            cost: 0.0,
            hazard_inten_imp: IDENTITY,
            mdd_impact: IDENTITY,
            paa_impact: IDENTITY,
            hazard_freq_cutoff: 0.0,
        }
    }
}

impl Measure {
    /// Apply the measure, returning transformed copies of the inputs.
    ///
    /// The frequency cutoff needs one impact evaluation on the untouched
    /// inputs to rank events by damage, hence the evaluator parameter.
    pub fn apply<C: ImpactCalc>(
        &self,
        calc: &C,
        exposures: &Exposures,
        impact_funcs: &ImpactFuncSet,
        hazard: &Hazard,
    ) -> Result<(Exposures, ImpactFuncSet, Hazard)> {
        let mut new_haz = if self.hazard_freq_cutoff > 0.0 {
            self.cutoff_hazard_damage(calc, exposures, impact_funcs, hazard)?
        } else {
            hazard.clone()
        };

        let (a, b) = self.hazard_inten_imp;
        if (a, b) != IDENTITY {
            for inten in new_haz.intensity.iter_mut() {
                if *inten > 0.0 {
                    *inten = (a * *inten + b).max(0.0);
                }
            }
        }

        let mut new_ifs = impact_funcs.clone();
        if self.mdd_impact != IDENTITY || self.paa_impact != IDENTITY {
            let (ma, mb) = self.mdd_impact;
            let (pa, pb) = self.paa_impact;
            for func in new_ifs.iter_mut() {
                if func.haz_type != self.haz_type {
                    continue;
                }
                for mdd in func.mdd.iter_mut() {
                    *mdd = ma * *mdd + mb;
                }
                for paa in func.paa.iter_mut() {
                    *paa = pa * *paa + pb;
                }
            }
        }

        Ok((exposures.clone(), new_ifs, new_haz))
    }

    /// Zero the intensity of events whose cumulative annual frequency,
    /// accumulated from the most damaging event downwards, exceeds the
    /// cutoff. The retained events are the rare, damaging ones.
    fn cutoff_hazard_damage<C: ImpactCalc>(
        &self,
        calc: &C,
        exposures: &Exposures,
        impact_funcs: &ImpactFuncSet,
        hazard: &Hazard,
    ) -> Result<Hazard> {
        let imp = calc.impact(exposures, impact_funcs, hazard)?;
        let mut order: Vec<usize> = (0..imp.at_event.len()).collect();
        order.sort_by(|&a, &b| imp.at_event[b].total_cmp(&imp.at_event[a]));

        let mut new_haz = hazard.clone();
        let mut cum_freq = 0.0;
        let mut silenced = 0usize;
        for &event in &order {
            cum_freq += hazard.frequency[event];
            if cum_freq > self.hazard_freq_cutoff {
                let row = event * new_haz.n_centroids;
                new_haz.intensity[row..row + new_haz.n_centroids].fill(0.0);
                silenced += 1;
            }
        }
        debug!(
            measure = %self.name,
            cutoff = self.hazard_freq_cutoff,
            silenced,
            "applied hazard frequency cutoff"
        );
        Ok(new_haz)
    }
}

/// Measures grouped per hazard type, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureSet {
    measures: Vec<Measure>,
}

impl MeasureSet {
    pub fn new(measures: Vec<Measure>) -> Result<Self> {
        let mut set = Self::default();
        for meas in measures {
            set.push(meas)?;
        }
        Ok(set)
    }

    /// Append a measure; names are unique per hazard type.
    pub fn push(&mut self, measure: Measure) -> Result<()> {
        if self
            .measures
            .iter()
            .any(|m| m.name == measure.name && m.haz_type == measure.haz_type)
        {
            return Err(ConfigError::DuplicateMeasure {
                name: measure.name,
                haz_type: measure.haz_type,
            }
            .into());
        }
        self.measures.push(measure);
        Ok(())
    }

    /// Measures targeting `haz_type`, in insertion order.
    pub fn get_measure(&self, haz_type: &str) -> Vec<&Measure> {
        self.measures
            .iter()
            .filter(|m| m.haz_type == haz_type)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Measure> {
        self.measures.iter()
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}
