//! Snapshot serialization: the full derived display state as JSON.
//!
//! A snapshot is everything a display surface needs to draw one frame.
//! It is derived from (instant, catalogs, view flags) and never stored.

use crate::{
    age::DerivedAgeResult,
    catalog::{CardBlurb, Catalog, ColorToken},
    clock::ObservationInstant,
    light_time::LightReport,
    local_time::{globe_rotation, local_time, utc_clock},
    projection::{project, ScreenPoint},
    rotation::{body_clock, body_rotation_degrees},
    types::{BodyId, Degrees, Tick},
};
use serde::{Deserialize, Serialize};

/// Size hint for a globe marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerEmphasis {
    pub scale:   f64,
    pub size_px: u32,
    pub opacity: f64,
}

impl MarkerEmphasis {
    pub const RESTING: MarkerEmphasis = MarkerEmphasis { scale: 0.8, size_px: 4, opacity: 0.6 };
    pub const HOVERED: MarkerEmphasis = MarkerEmphasis { scale: 1.2, size_px: 8, opacity: 1.0 };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerFrame {
    pub city:       String,
    pub label:      String,
    pub color:      ColorToken,
    /// Normalized position on the globe face.
    pub position:   ScreenPoint,
    pub local_time: String,
    pub hovered:    bool,
    pub emphasis:   MarkerEmphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobeFrame {
    pub rotation:               Degrees,
    /// Horizontal texture offset, in percent. Negative of the rotation.
    pub texture_offset_percent: f64,
    pub utc_time:               String,
    pub markers:                Vec<MarkerFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetCardFrame {
    pub id:                   BodyId,
    pub name:                 String,
    pub color:                ColorToken,
    pub glow:                 String,
    pub rotation_degrees:     Degrees,
    pub local_time:           String,
    pub rotation_period_days: f64,
    pub orbit_period_days:    f64,
    pub selected:             bool,
    /// Present only on the selected card.
    pub blurb:                Option<CardBlurb>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrrerySnapshot {
    pub tick:         Tick,
    pub instant:      ObservationInstant,
    pub globe:        GlobeFrame,
    pub planets:      Vec<PlanetCardFrame>,
    pub ages:         Vec<DerivedAgeResult>,
    pub light:        LightReport,
    pub transmitting: bool,
}

pub fn render_globe(
    catalog: &Catalog,
    instant: ObservationInstant,
    hovered: Option<&str>,
) -> GlobeFrame {
    let rotation = globe_rotation(instant);
    let markers = catalog
        .time_zones()
        .iter()
        .map(|zone| {
            let is_hovered = hovered == Some(zone.city.as_str());
            MarkerFrame {
                city:       zone.city.clone(),
                label:      zone.label(),
                color:      zone.color.clone(),
                position:   project(zone.latitude, zone.longitude),
                local_time: local_time(instant, zone.utc_offset_hours),
                hovered:    is_hovered,
                emphasis:   if is_hovered { MarkerEmphasis::HOVERED } else { MarkerEmphasis::RESTING },
            }
        })
        .collect();

    GlobeFrame {
        rotation,
        texture_offset_percent: -rotation,
        utc_time: utc_clock(instant),
        markers,
    }
}

pub fn render_planets(
    catalog:      &Catalog,
    reference_id: &str,
    instant:      ObservationInstant,
    selected:     Option<&str>,
) -> Vec<PlanetCardFrame> {
    catalog
        .bodies()
        .iter()
        .map(|body| {
            let is_selected = selected == Some(body.id.as_str());
            PlanetCardFrame {
                id:                   body.id.clone(),
                name:                 body.name.clone(),
                color:                body.color.clone(),
                glow:                 body.color.glow_components().to_string(),
                rotation_degrees:     body_rotation_degrees(instant, body, reference_id),
                local_time:           body_clock(instant, body.rotation_period_days).to_string(),
                rotation_period_days: body.rotation_period_days,
                orbit_period_days:    body.orbit_period_days,
                selected:             is_selected,
                blurb:                is_selected.then(|| body.blurb()),
            }
        })
        .collect()
}
