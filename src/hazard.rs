//! Hazard event set: discrete occurrences with an intensity field and an
//! annual frequency, fully materialized in memory.

use serde::{Deserialize, Serialize};

use crate::errors::ComputationError;
use crate::Result;

/// A set of hazard events of one type (e.g. `"TC"` for tropical cyclone).
///
/// Intensity is a dense row-major matrix, one row per event, one column per
/// centroid. Exposure points reference centroids by column index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Hazard type tag, matched against measures and impact functions.
    pub haz_type: String,
    /// Event identifiers, one per row of `intensity`.
    pub event_id: Vec<u64>,
    /// Annual occurrence frequency per event.
    pub frequency: Vec<f64>,
    /// Number of centroids (columns of `intensity`).
    pub n_centroids: usize,
    /// Row-major intensity matrix, `event_id.len() * n_centroids` entries.
    pub intensity: Vec<f64>,
}

impl Hazard {
    pub fn new(
        haz_type: impl Into<String>,
        event_id: Vec<u64>,
        frequency: Vec<f64>,
        n_centroids: usize,
        intensity: Vec<f64>,
    ) -> Result<Self> {
        let hazard = Self {
            haz_type: haz_type.into(),
            event_id,
            frequency,
            n_centroids,
            intensity,
        };
        hazard.check()?;
        Ok(hazard)
    }

    /// Number of events in the set.
    pub fn event_count(&self) -> usize {
        self.event_id.len()
    }

    /// Intensity of `event` at `centroid`. Bounds are the caller's problem;
    /// the impact evaluator validates centroids against exposure points.
    pub fn intensity_at(&self, event: usize, centroid: usize) -> f64 {
        self.intensity[event * self.n_centroids + centroid]
    }

    /// Validate internal shape consistency.
    pub fn check(&self) -> Result<()> {
        if self.frequency.len() != self.event_id.len() {
            return Err(ComputationError::FrequencyShape {
                events: self.event_id.len(),
                frequencies: self.frequency.len(),
            }
            .into());
        }
        let expected = self.event_id.len() * self.n_centroids;
        if self.intensity.len() != expected {
            return Err(ComputationError::IntensityShape {
                len: self.intensity.len(),
                events: self.event_id.len(),
                centroids: self.n_centroids,
            }
            .into());
        }
        Ok(())
    }
}
