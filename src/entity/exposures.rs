//! Exposure inventory: value-bearing points with a vulnerability assignment.

use serde::{Deserialize, Serialize};

/// One exposed asset/location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposurePoint {
    /// Monetary value at risk.
    pub value: f64,
    /// Impact-function id resolving the vulnerability curve.
    pub impf_id: u32,
    /// Hazard centroid this point is assigned to.
    pub centroid_id: usize,
}

/// Exposure inventory with its reference year.
///
/// The reference year drives the analysis horizon: the present year of a
/// cost-benefit run is the present entity's `ref_year`, the future year the
/// future entity's (when one is supplied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exposures {
    pub ref_year: i32,
    points: Vec<ExposurePoint>,
}

impl Exposures {
    pub fn new(ref_year: i32, points: Vec<ExposurePoint>) -> Self {
        Self { ref_year, points }
    }

    pub fn points(&self) -> &[ExposurePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total exposed value, summed in point order.
    pub fn total_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value_sums_points() {
        let exp = Exposures::new(
            2018,
            vec![
                ExposurePoint {
                    value: 100.0,
                    impf_id: 1,
                    centroid_id: 0,
                },
                ExposurePoint {
                    value: 250.0,
                    impf_id: 1,
                    centroid_id: 1,
                },
            ],
        );
        assert_eq!(exp.total_value(), 350.0);
        assert_eq!(exp.len(), 2);
    }
}
