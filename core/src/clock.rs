//! Clock driver. Owns the current observation instant and the tick timer.
//!
//! RULE: Nothing in the engine reads the wall clock directly.
//! Every instant flows through a TimeSource owned by the ClockDriver,
//! so tests can inject a ManualTimeSource and never sleep.

use crate::{
    error::OrreryResult,
    types::Tick,
};
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The current UTC instant. Replaced wholesale on each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ObservationInstant(DateTime<Utc>);

impl ObservationInstant {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parse an RFC 3339 timestamp; any offset is converted to UTC.
    pub fn parse(text: &str) -> OrreryResult<Self> {
        let parsed = DateTime::parse_from_rfc3339(text.trim())?;
        Ok(Self(parsed.with_timezone(&Utc)))
    }

    pub fn at(&self) -> DateTime<Utc> { self.0 }

    pub fn hour(&self)   -> u32 { self.0.hour()   }
    pub fn minute(&self) -> u32 { self.0.minute() }
    pub fn second(&self) -> u32 { self.0.second() }

    /// UTC hour of day with the minute as a fraction. Seconds are ignored.
    pub fn earth_hours(&self) -> f64 {
        self.hour() as f64 + self.minute() as f64 / 60.0
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    pub fn after(&self, elapsed: Duration) -> Self {
        Self(self.0 + chrono::Duration::milliseconds(elapsed.as_millis() as i64))
    }
}

impl std::fmt::Display for ObservationInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

/// Where the driver reads time from, and how it waits between ticks.
pub trait TimeSource: Send {
    fn now(&self) -> DateTime<Utc>;

    /// Block until `interval` has elapsed on this source.
    fn wait(&mut self, interval: Duration);
}

/// Real wall clock. Waiting sleeps the current thread.
#[derive(Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> { Utc::now() }

    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Fixed, hand-advanced clock. Waiting moves time forward without sleeping.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    now: DateTime<Utc>,
}

impl ManualTimeSource {
    pub fn starting_at(instant: ObservationInstant) -> Self {
        Self { now: instant.at() }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.now = ObservationInstant(self.now).after(elapsed).at();
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> { self.now }

    fn wait(&mut self, interval: Duration) {
        self.advance(interval);
    }
}

pub struct ClockDriver {
    pub current_tick: Tick,
    source:           Box<dyn TimeSource>,
    current:          ObservationInstant,
    interval:         Duration,
    running:          bool,
    timers_released:  u64,
}

impl ClockDriver {
    pub fn new(source: Box<dyn TimeSource>, interval: Duration) -> Self {
        let current = ObservationInstant::new(source.now());
        Self {
            current_tick: 0,
            source,
            current,
            interval,
            running: false,
            timers_released: 0,
        }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemTimeSource), DEFAULT_TICK_INTERVAL)
    }

    pub fn manual(start: ObservationInstant) -> Self {
        Self::new(Box::new(ManualTimeSource::starting_at(start)), DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn current(&self) -> ObservationInstant { self.current }
    pub fn interval(&self) -> Duration { self.interval }
    pub fn is_running(&self) -> bool { self.running }

    /// How many timers have been released over the driver's lifetime.
    pub fn timers_released(&self) -> u64 { self.timers_released }

    /// Read the source once and replace the current instant.
    /// Returns the new tick number.
    pub fn tick(&mut self) -> Tick {
        self.current = ObservationInstant::new(self.source.now());
        self.current_tick += 1;
        self.current_tick
    }

    /// Acquire the periodic timer. The timer is released when the
    /// returned guard is dropped, however the owner tears down.
    pub fn start(&mut self) -> TickTimer<'_> {
        self.running = true;
        log::debug!("clock timer started (interval {:?})", self.interval);
        TickTimer { driver: self }
    }
}

/// Scoped hold on the driver's periodic timer.
pub struct TickTimer<'a> {
    driver: &'a mut ClockDriver,
}

impl TickTimer<'_> {
    /// Wait one interval on the time source, then tick.
    pub fn next_tick(&mut self) -> (Tick, ObservationInstant) {
        let interval = self.driver.interval;
        self.driver.source.wait(interval);
        let tick = self.driver.tick();
        (tick, self.driver.current)
    }

    pub fn driver(&self) -> &ClockDriver { &*self.driver }
}

impl Drop for TickTimer<'_> {
    fn drop(&mut self) {
        self.driver.running = false;
        self.driver.timers_released += 1;
        log::debug!(
            "clock timer released at tick {}",
            self.driver.current_tick
        );
    }
}
