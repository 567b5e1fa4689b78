//! Light travel time between bodies.
//!
//! Each body carries one number: the one-way light time from the Sun.
//! The time between two bodies is the difference of those numbers.
//! This ignores orbital phase entirely and is only an illustration;
//! for bodies on opposite sides of the Sun it is badly wrong. Kept as-is.

use crate::{
    catalog::Catalog,
    error::{OrreryError, OrreryResult},
    types::BodyId,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a sent light signal keeps the panel in "transmitting" state.
pub const SIGNAL_DURATION: Duration = Duration::from_secs(5);

/// Pulse animations play this many times faster than the light minutes.
pub const PULSE_SPEEDUP: f64 = 3.0;

pub const NO_SELECTION_PLACEHOLDER: &str = "Select a planet to see light travel times";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightTimeEntry {
    pub id:      BodyId,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightTimeTable {
    entries: Vec<LightTimeEntry>,
}

impl LightTimeTable {
    pub fn new(entries: Vec<LightTimeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LightTimeEntry] { &self.entries }

    pub fn minutes_from_sun(&self, id: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.minutes)
    }

    fn lookup(&self, id: &str) -> OrreryResult<f64> {
        self.minutes_from_sun(id)
            .ok_or_else(|| OrreryError::MissingLightTime { id: id.to_string() })
    }

    /// `|lookup(a) - lookup(b)|` in minutes.
    pub fn time_between(&self, a: &str, b: &str) -> OrreryResult<f64> {
        Ok((self.lookup(a)? - self.lookup(b)?).abs())
    }

    /// Every body in the catalog must have an entry.
    pub fn ensure_covers(&self, catalog: &Catalog) -> OrreryResult<()> {
        for body in catalog.bodies() {
            self.lookup(&body.id)?;
        }
        Ok(())
    }
}

/// Seconds below one minute, minutes otherwise, one decimal either way.
pub fn format_travel_time(minutes: f64) -> String {
    if minutes < 1.0 {
        format!("{:.1} seconds", minutes * 60.0)
    } else {
        format!("{minutes:.1} minutes")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRoute {
    pub to:         BodyId,
    pub name:       String,
    pub minutes:    f64,
    pub label:      String,
    /// Duration of the signal pulse animation, in seconds.
    pub pulse_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LightReport {
    NoSelection { placeholder: String },
    From {
        origin:      BodyId,
        origin_name: String,
        routes:      Vec<LightRoute>,
    },
}

impl LightReport {
    pub fn routes(&self) -> &[LightRoute] {
        match self {
            LightReport::NoSelection { .. } => &[],
            LightReport::From { routes, .. } => routes,
        }
    }
}

/// Travel times from `selected` to every other body, in catalog order.
pub fn light_report(
    catalog:  &Catalog,
    table:    &LightTimeTable,
    selected: Option<&str>,
) -> OrreryResult<LightReport> {
    let Some(origin_id) = selected else {
        return Ok(LightReport::NoSelection {
            placeholder: NO_SELECTION_PLACEHOLDER.to_string(),
        });
    };
    let origin = catalog.require_body(origin_id)?;

    let routes = catalog
        .bodies()
        .iter()
        .filter(|b| b.id != origin.id)
        .map(|b| {
            let minutes = table.time_between(&origin.id, &b.id)?;
            Ok(LightRoute {
                to:         b.id.clone(),
                name:       b.name.clone(),
                minutes,
                label:      format_travel_time(minutes),
                pulse_secs: minutes / PULSE_SPEEDUP,
            })
        })
        .collect::<OrreryResult<Vec<_>>>()?;

    Ok(LightReport::From {
        origin:      origin.id.clone(),
        origin_name: origin.name.clone(),
        routes,
    })
}
