//! Age across the solar system.
//!
//! An Earth age in years becomes Earth days (365.25 per year), then
//! each body's age is those days over its orbital period, rounded to
//! two decimals. Results follow catalog order.

use crate::{
    catalog::{Catalog, CelestialBody},
    error::{OrreryError, OrreryResult},
};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_EARTH_YEAR: f64 = 365.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedAgeResult {
    pub body:              CelestialBody,
    pub age_in_body_years: f64,
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accept only a finite number strictly above zero.
pub fn parse_earth_age(input: &str) -> OrreryResult<f64> {
    let rejected = || OrreryError::InvalidAgeInput { input: input.to_string() };
    let years: f64 = input.trim().parse().map_err(|_| rejected())?;
    if !years.is_finite() || years <= 0.0 {
        return Err(rejected());
    }
    Ok(years)
}

/// Age on every body, in catalog order. Inputs so large that any age
/// stops being a finite number are rejected like any other bad input.
pub fn ages_across(catalog: &Catalog, earth_age_years: f64) -> OrreryResult<Vec<DerivedAgeResult>> {
    let rejected = || OrreryError::InvalidAgeInput { input: earth_age_years.to_string() };
    if !earth_age_years.is_finite() || earth_age_years <= 0.0 {
        return Err(rejected());
    }
    let earth_age_days = earth_age_years * DAYS_PER_EARTH_YEAR;
    if !earth_age_days.is_finite() {
        return Err(rejected());
    }
    catalog
        .bodies()
        .iter()
        .map(|body| {
            let age_in_body_years = round2(earth_age_days / body.orbit_period_days);
            if !age_in_body_years.is_finite() {
                return Err(rejected());
            }
            Ok(DerivedAgeResult { body: body.clone(), age_in_body_years })
        })
        .collect()
}

/// Holds the last accepted calculation. A rejected submission leaves
/// the previous results in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgePanel {
    pub earth_age_years: Option<f64>,
    results:             Vec<DerivedAgeResult>,
}

impl AgePanel {
    pub fn new() -> Self { Self::default() }

    pub fn results(&self) -> &[DerivedAgeResult] { &self.results }

    /// Parse `input` and recompute. Returns the accepted Earth age with
    /// the new results. On error nothing is touched.
    pub fn submit(&mut self, catalog: &Catalog, input: &str) -> OrreryResult<(f64, &[DerivedAgeResult])> {
        let years = parse_earth_age(input)?;
        let results = ages_across(catalog, years)
            .map_err(|_| OrreryError::InvalidAgeInput { input: input.to_string() })?;
        self.earth_age_years = Some(years);
        self.results = results;
        Ok((years, &self.results))
    }
}
