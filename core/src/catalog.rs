//! Static reference data: planets and city time-zone markers.
//!
//! RULE: Catalogs are built once and never mutated.
//! Every catalog passes validate() before the engine sees it, so the
//! derivation functions can divide by periods without checking.

use crate::{
    error::{OrreryError, OrreryResult},
    types::BodyId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A CSS-style color string, e.g. `rgb(30, 144, 255)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Bare `r, g, b` components of an `rgb(...)` token, used for glow
    /// variables. Tokens in any other notation are returned unchanged.
    pub fn glow_components(&self) -> &str {
        self.0
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id:                   BodyId,
    pub name:                 String,
    pub diameter_km:          f64,
    /// Earth days per rotation. May be below 1.
    pub rotation_period_days: f64,
    /// Earth days per orbit.
    pub orbit_period_days:    f64,
    pub description:          String,
    #[serde(default)]
    pub fun_fact:             Option<String>,
    pub color:                ColorToken,
    #[serde(default)]
    pub texture:              Option<String>,
}

impl CelestialBody {
    /// What the expanded planet card shows.
    pub fn blurb(&self) -> CardBlurb {
        match &self.fun_fact {
            Some(fact) => CardBlurb::FunFact(fact.clone()),
            None       => CardBlurb::Description(self.description.clone()),
        }
    }

    fn validate(&self) -> OrreryResult<()> {
        for (field, value) in [
            ("rotation_period_days", self.rotation_period_days),
            ("orbit_period_days",    self.orbit_period_days),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OrreryError::InvalidPeriod {
                    body: self.id.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Expanded-card text. A fun fact wins over the plain description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum CardBlurb {
    FunFact(String),
    Description(String),
}

impl CardBlurb {
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            CardBlurb::FunFact(_)     => Some("FUN FACT"),
            CardBlurb::Description(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            CardBlurb::FunFact(text) | CardBlurb::Description(text) => text,
        }
    }

    /// Plain-text rendering for terminal output.
    pub fn render(&self) -> String {
        match self {
            CardBlurb::FunFact(fact)    => format!("FUN FACT: {fact}"),
            CardBlurb::Description(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZoneMarker {
    pub city:             String,
    pub country:          String,
    pub utc_offset_hours: i32,
    pub latitude:         f64,
    pub longitude:        f64,
    pub color:            ColorToken,
}

impl TimeZoneMarker {
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    fn validate(&self) -> OrreryResult<()> {
        let lat_ok  = (-90.0..=90.0).contains(&self.latitude);
        let long_ok = (-180.0..=180.0).contains(&self.longitude);
        if !lat_ok || !long_ok {
            return Err(OrreryError::InvalidCoordinate {
                city:      self.city.clone(),
                latitude:  self.latitude,
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}

/// Both static catalogs, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    bodies:     Vec<CelestialBody>,
    time_zones: Vec<TimeZoneMarker>,
}

impl Catalog {
    /// Build and validate a catalog. Insertion order is preserved.
    pub fn new(bodies: Vec<CelestialBody>, time_zones: Vec<TimeZoneMarker>) -> OrreryResult<Self> {
        let mut seen = HashSet::new();
        for body in &bodies {
            body.validate()?;
            if !seen.insert(body.id.as_str()) {
                return Err(OrreryError::DuplicateBody { id: body.id.clone() });
            }
        }
        for marker in &time_zones {
            marker.validate()?;
        }
        Ok(Self { bodies, time_zones })
    }

    pub fn bodies(&self) -> &[CelestialBody] { &self.bodies }
    pub fn time_zones(&self) -> &[TimeZoneMarker] { &self.time_zones }

    pub fn body(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn require_body(&self, id: &str) -> OrreryResult<&CelestialBody> {
        self.body(id).ok_or_else(|| OrreryError::UnknownBody { id: id.to_string() })
    }

    pub fn marker(&self, city: &str) -> Option<&TimeZoneMarker> {
        self.time_zones.iter().find(|m| m.city == city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str, rotation: f64, orbit: f64) -> CelestialBody {
        CelestialBody {
            id:                   id.into(),
            name:                 id.to_uppercase(),
            diameter_km:          1000.0,
            rotation_period_days: rotation,
            orbit_period_days:    orbit,
            description:          format!("{id} description"),
            fun_fact:             None,
            color:                ColorToken::new("rgb(1, 2, 3)"),
            texture:              None,
        }
    }

    #[test]
    fn zero_rotation_period_is_rejected() {
        let err = Catalog::new(vec![body("x", 0.0, 10.0)], vec![]).unwrap_err();
        assert!(matches!(
            err,
            OrreryError::InvalidPeriod { field: "rotation_period_days", .. }
        ));
    }

    #[test]
    fn negative_orbit_period_is_rejected() {
        let err = Catalog::new(vec![body("x", 1.0, -3.0)], vec![]).unwrap_err();
        assert!(matches!(
            err,
            OrreryError::InvalidPeriod { field: "orbit_period_days", .. }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(
            vec![body("x", 1.0, 1.0), body("x", 2.0, 2.0)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::DuplicateBody { .. }));
    }

    #[test]
    fn fun_fact_takes_precedence_over_description() {
        let mut b = body("x", 1.0, 1.0);
        assert_eq!(b.blurb(), CardBlurb::Description("x description".into()));
        assert_eq!(b.blurb().heading(), None);

        b.fun_fact = Some("spins fast".into());
        assert_eq!(b.blurb(), CardBlurb::FunFact("spins fast".into()));
        assert_eq!(b.blurb().heading(), Some("FUN FACT"));
        assert_eq!(b.blurb().text(), "spins fast");
    }

    #[test]
    fn glow_components_strip_rgb_wrapper() {
        assert_eq!(ColorToken::new("rgb(30, 144, 255)").glow_components(), "30, 144, 255");
        assert_eq!(ColorToken::new("#ff0000").glow_components(), "#ff0000");
    }
}
