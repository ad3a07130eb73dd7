//! Discount-rate schedule and net-present-value computation.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::Result;

/// Year-ordered, contiguous discount rates.
///
/// `net_present_value` discounts a yearly value series back to its first
/// year with a right-to-left fold, so the first year is undiscounted and
/// each later value is compounded through the rates of the years before it.
/// The fold is a single fixed-order accumulation: identical inputs always
/// produce bit-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscRates {
    years: Vec<i32>,
    rates: Vec<f64>,
}

impl DiscRates {
    pub fn new(years: Vec<i32>, rates: Vec<f64>) -> Result<Self> {
        if years.len() != rates.len() {
            return Err(ConfigError::SeriesLength {
                values: rates.len(),
                years: years.len(),
            }
            .into());
        }
        for pair in years.windows(2) {
            if pair[1] != pair[0] + 1 {
                return Err(ConfigError::NonContiguousYears { year: pair[1] }.into());
            }
        }
        Ok(Self { years, rates })
    }

    /// Flat rate over an inclusive year range. Convenience for tests and
    /// simple schedules.
    pub fn flat(start_year: i32, end_year: i32, rate: f64) -> Result<Self> {
        let years: Vec<i32> = (start_year..=end_year).collect();
        let rates = vec![rate; years.len()];
        Self::new(years, rates)
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Discounted sum of `values` (aligned to `start_year..=end_year`) back
    /// to `start_year`: fold from the last year, `npv = v + npv / (1 + r)`.
    pub fn net_present_value(&self, start_year: i32, end_year: i32, values: &[f64]) -> Result<f64> {
        if end_year < start_year {
            return Err(ConfigError::InvertedHorizon {
                present: start_year,
                future: end_year,
            }
            .into());
        }
        let (first, last) = match (self.years.first(), self.years.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => (0, -1),
        };
        if first > start_year || last < end_year {
            return Err(ConfigError::DiscountCoverage {
                first,
                last,
                start: start_year,
                end: end_year,
            }
            .into());
        }
        let n_years = (end_year - start_year + 1) as usize;
        if values.len() != n_years {
            return Err(ConfigError::SeriesLength {
                values: values.len(),
                years: n_years,
            }
            .into());
        }
        let offset = (start_year - first) as usize;
        let rates = &self.rates[offset..offset + n_years];
        let mut npv = 0.0;
        for (val, rate) in values.iter().zip(rates).rev() {
            npv = val + npv / (1.0 + rate);
        }
        Ok(npv)
    }
}
