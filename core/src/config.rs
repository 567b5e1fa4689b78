//! Engine configuration: the static catalogs plus a few display knobs.
//!
//! Production loads JSON files from a data directory. Tests and the
//! runner's fallback path use OrreryConfig::builtin().

use crate::{
    catalog::{Catalog, CelestialBody, ColorToken, TimeZoneMarker},
    clock::DEFAULT_TICK_INTERVAL,
    error::OrreryResult,
    light_time::{LightTimeEntry, LightTimeTable},
    types::BodyId,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REFERENCE_BODY: &str = "earth";

#[derive(Debug, Clone, Deserialize)]
struct BodiesFile {
    bodies: Vec<CelestialBody>,
}

#[derive(Debug, Clone, Deserialize)]
struct TimeZonesFile {
    time_zones: Vec<TimeZoneMarker>,
}

#[derive(Debug, Clone, Deserialize)]
struct LightTimesFile {
    #[serde(default)]
    reference_body: Option<BodyId>,
    light_minutes:  Vec<LightTimeEntry>,
}

/// Optional `orrery.json`. A reference body named in light_times.json wins.
#[derive(Debug, Clone, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    reference_body:   Option<BodyId>,
    #[serde(default = "default_tick_interval_ms")]
    tick_interval_ms: u64,
}

fn default_reference_body() -> BodyId { DEFAULT_REFERENCE_BODY.to_string() }
fn default_tick_interval_ms() -> u64 { DEFAULT_TICK_INTERVAL.as_millis() as u64 }

#[derive(Debug, Clone)]
pub struct OrreryConfig {
    pub catalog:        Catalog,
    pub light_times:    LightTimeTable,
    /// Body whose card turns at factor 1 regardless of its period.
    pub reference_body: BodyId,
    pub tick_interval:  Duration,
}

impl OrreryConfig {
    /// Validate the pieces against each other and assemble.
    pub fn new(
        catalog:        Catalog,
        light_times:    LightTimeTable,
        reference_body: BodyId,
        tick_interval:  Duration,
    ) -> OrreryResult<Self> {
        catalog.require_body(&reference_body)?;
        light_times.ensure_covers(&catalog)?;
        Ok(Self { catalog, light_times, reference_body, tick_interval })
    }

    /// Load from the data/ directory.
    /// In tests, use OrreryConfig::builtin().
    pub fn load(data_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.as_ref();

        let bodies: BodiesFile = read_json(&data_dir.join("bodies.json"))?;
        let zones: TimeZonesFile = read_json(&data_dir.join("time_zones.json"))?;
        let light: LightTimesFile = read_json(&data_dir.join("light_times.json"))?;

        let settings_path = data_dir.join("orrery.json");
        let settings: SettingsFile = if settings_path.exists() {
            read_json(&settings_path)?
        } else {
            SettingsFile {
                reference_body:   None,
                tick_interval_ms: default_tick_interval_ms(),
            }
        };
        let reference_body = light
            .reference_body
            .or(settings.reference_body)
            .unwrap_or_else(default_reference_body);

        let catalog = Catalog::new(bodies.bodies, zones.time_zones)?;
        let config = Self::new(
            catalog,
            LightTimeTable::new(light.light_minutes),
            reference_body,
            Duration::from_millis(settings.tick_interval_ms),
        )?;
        log::info!(
            "loaded {} bodies and {} markers from {} (reference body {}, tick {:?})",
            config.catalog.bodies().len(),
            config.catalog.time_zones().len(),
            data_dir.display(),
            config.reference_body,
            config.tick_interval
        );
        Ok(config)
    }

    /// The eight planets and eight city markers of the stock display.
    pub fn builtin() -> OrreryResult<Self> {
        let catalog = Catalog::new(builtin_bodies(), builtin_time_zones())?;
        Self::new(
            catalog,
            builtin_light_times(),
            default_reference_body(),
            DEFAULT_TICK_INTERVAL,
        )
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Cannot parse {}: {e}", path.display()))
}

#[allow(clippy::too_many_arguments)]
fn planet(
    id:          &str,
    name:        &str,
    diameter_km: f64,
    rotation:    f64,
    orbit:       f64,
    color:       &str,
    description: &str,
    fun_fact:    Option<&str>,
) -> CelestialBody {
    CelestialBody {
        id:                   id.into(),
        name:                 name.into(),
        diameter_km,
        rotation_period_days: rotation,
        orbit_period_days:    orbit,
        description:          description.into(),
        fun_fact:             fun_fact.map(Into::into),
        color:                ColorToken::new(color),
        texture:              Some(format!("textures/{id}.jpg")),
    }
}

fn builtin_bodies() -> Vec<CelestialBody> {
    vec![
        planet("mercury", "Mercury", 4879.0, 58.6, 88.0, "rgb(180, 180, 180)",
            "The smallest and innermost planet, Mercury experiences extreme temperature \
             variations and has virtually no atmosphere.",
            None),
        planet("venus", "Venus", 12104.0, 243.0, 225.0, "rgb(255, 198, 73)",
            "Venus has a thick atmosphere that traps heat, making it the hottest planet \
             in our solar system despite not being the closest to the Sun.",
            Some("A day on Venus lasts longer than its year.")),
        planet("earth", "Earth", 12756.0, 1.0, 365.25, "rgb(30, 144, 255)",
            "Our home planet is the only known world that supports life, with liquid \
             water on its surface and an oxygen-rich atmosphere.",
            None),
        planet("mars", "Mars", 6792.0, 1.03, 687.0, "rgb(255, 69, 0)",
            "The \"Red Planet\" has polar ice caps, seasons, and evidence of ancient \
             rivers and lakes, making it a prime target for the search for life.",
            None),
        planet("jupiter", "Jupiter", 142984.0, 0.41, 4333.0, "rgb(255, 165, 0)",
            "The largest planet in our solar system, Jupiter is a gas giant with a \
             distinctive Great Red Spot and dozens of moons.",
            None),
        planet("saturn", "Saturn", 120536.0, 0.45, 10759.0, "rgb(218, 165, 32)",
            "Famous for its stunning ring system, Saturn is a gas giant composed \
             primarily of hydrogen and helium.",
            None),
        planet("uranus", "Uranus", 51118.0, 0.72, 30687.0, "rgb(0, 255, 255)",
            "Uranus is an ice giant that rotates on its side, giving it extreme \
             seasonal variations and unusual magnetic field behavior.",
            None),
        planet("neptune", "Neptune", 49528.0, 0.67, 60190.0, "rgb(0, 0, 255)",
            "The windiest planet in our solar system, Neptune is a distant ice giant \
             with a dynamic atmosphere featuring visible weather patterns.",
            None),
    ]
}

fn marker(city: &str, country: &str, offset: i32, lat: f64, long: f64, color: &str) -> TimeZoneMarker {
    TimeZoneMarker {
        city:             city.into(),
        country:          country.into(),
        utc_offset_hours: offset,
        latitude:         lat,
        longitude:        long,
        color:            ColorToken::new(color),
    }
}

fn builtin_time_zones() -> Vec<TimeZoneMarker> {
    vec![
        marker("New York",       "USA",       -4,  40.7128,  -74.0060, "rgb(0, 229, 255)"),
        marker("London",         "UK",         1,  51.5074,   -0.1278, "rgb(255, 215, 0)"),
        marker("Tokyo",          "Japan",      9,  35.6762,  139.6503, "rgb(255, 0, 255)"),
        marker("Sydney",         "Australia", 10, -33.8688,  151.2093, "rgb(30, 144, 255)"),
        marker("Rio de Janeiro", "Brazil",    -3, -22.9068,  -43.1729, "rgb(50, 205, 50)"),
        marker("Cairo",          "Egypt",      2,  30.0444,   31.2357, "rgb(255, 165, 0)"),
        marker("Los Angeles",    "USA",       -7,  34.0522, -118.2437, "rgb(255, 69, 0)"),
        marker("Moscow",         "Russia",     3,  55.7558,   37.6173, "rgb(220, 20, 60)"),
    ]
}

fn builtin_light_times() -> LightTimeTable {
    // Average one-way light minutes from the Sun.
    let entries = [
        ("mercury", 3.2),
        ("venus",   6.0),
        ("earth",   8.3),
        ("mars",    12.7),
        ("jupiter", 43.3),
        ("saturn",  79.3),
        ("uranus",  159.6),
        ("neptune", 249.6),
    ];
    LightTimeTable::new(
        entries
            .into_iter()
            .map(|(id, minutes)| LightTimeEntry { id: id.into(), minutes })
            .collect(),
    )
}
