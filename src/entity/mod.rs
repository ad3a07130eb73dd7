//! The entity side of an analysis: exposures, vulnerability curves,
//! candidate measures and discount rates, bundled per socio-economic state
//! (one entity for today, optionally one for the future).

mod disc_rates;
mod exposures;
mod impact_funcs;
mod measures;

pub use disc_rates::*;
pub use exposures::*;
pub use impact_funcs::*;
pub use measures::*;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::Result;

/// Everything the economics of one scenario needs, minus the hazard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub exposures: Exposures,
    pub impact_funcs: ImpactFuncSet,
    pub measures: MeasureSet,
    pub disc_rates: DiscRates,
}

impl Entity {
    /// Cross-field consistency: every exposure point must resolve a
    /// vulnerability curve for every hazard type the measures target, and
    /// the inventory must not be empty.
    pub fn check(&self) -> Result<()> {
        if self.exposures.is_empty() {
            return Err(ConfigError::EntityCheck("exposures are empty".into()).into());
        }
        let mut haz_types: Vec<&str> = self.measures.iter().map(|m| m.haz_type.as_str()).collect();
        haz_types.dedup();
        for haz_type in haz_types {
            for (idx, point) in self.exposures.points().iter().enumerate() {
                if self.impact_funcs.get(haz_type, point.impf_id).is_none() {
                    return Err(ConfigError::UnresolvedImpactFunc {
                        point: idx,
                        impf_id: point.impf_id,
                        haz_type: haz_type.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_entity() -> Entity {
        Entity {
            exposures: Exposures::new(
                2018,
                vec![ExposurePoint {
                    value: 1.0,
                    impf_id: 1,
                    centroid_id: 0,
                }],
            ),
            impact_funcs: ImpactFuncSet::new(vec![ImpactFunc {
                id: 1,
                haz_type: "TC".into(),
                intensity: vec![0.0, 1.0],
                mdd: vec![0.0, 1.0],
                paa: vec![1.0, 1.0],
            }]),
            measures: MeasureSet::new(vec![Measure {
                name: "Seawall".into(),
                haz_type: "TC".into(),
                ..Default::default()
            }])
            .unwrap(),
            disc_rates: DiscRates::flat(2018, 2040, 0.02).unwrap(),
        }
    }

    #[test]
    fn test_check_passes_for_consistent_entity() {
        assert!(tiny_entity().check().is_ok());
    }

    #[test]
    fn test_check_flags_unresolved_impact_func() {
        let mut ent = tiny_entity();
        ent.exposures = Exposures::new(
            2018,
            vec![ExposurePoint {
                value: 1.0,
                impf_id: 9,
                centroid_id: 0,
            }],
        );
        assert!(ent.check().is_err());
    }

    #[test]
    fn test_check_flags_empty_exposures() {
        let mut ent = tiny_entity();
        ent.exposures = Exposures::new(2018, vec![]);
        assert!(ent.check().is_err());
    }
}
