//! Vulnerability (impact) functions: hazard intensity to fractional damage.
//!
//! Each function is a piecewise-linear curve over intensity with two
//! ordinates: mean damage degree (`mdd`) and the percentage of affected
//! assets (`paa`). The mean damage ratio applied to an exposed value is
//! their product, interpolated at the local intensity.

use serde::{Deserialize, Serialize};

use crate::interp;

/// One vulnerability curve, keyed by `(haz_type, id)` within a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactFunc {
    pub id: u32,
    pub haz_type: String,
    /// Ascending intensity knots.
    pub intensity: Vec<f64>,
    /// Mean damage degree at each knot, typically in [0, 1].
    pub mdd: Vec<f64>,
    /// Percentage of affected assets at each knot, typically in [0, 1].
    pub paa: Vec<f64>,
}

impl ImpactFunc {
    /// Mean damage ratio at `inten`: interpolated `mdd * paa`, clamped to
    /// the boundary knots outside the covered intensity range.
    pub fn calc_mdr(&self, inten: f64) -> f64 {
        let mdr: Vec<f64> = self
            .mdd
            .iter()
            .zip(&self.paa)
            .map(|(m, p)| m * p)
            .collect();
        interp::linear(inten, &self.intensity, &mdr)
    }
}

/// Ordered collection of impact functions across hazard types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactFuncSet {
    funcs: Vec<ImpactFunc>,
}

impl ImpactFuncSet {
    pub fn new(funcs: Vec<ImpactFunc>) -> Self {
        Self { funcs }
    }

    pub fn push(&mut self, func: ImpactFunc) {
        self.funcs.push(func);
    }

    pub fn get(&self, haz_type: &str, id: u32) -> Option<&ImpactFunc> {
        self.funcs
            .iter()
            .find(|f| f.haz_type == haz_type && f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImpactFunc> {
        self.funcs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ImpactFunc> {
        self.funcs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}
