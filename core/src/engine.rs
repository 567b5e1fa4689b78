//! The orrery engine: the one stateful holder in the crate.
//!
//! ORDER OF WORK PER TICK (fixed):
//!   1. Clock driver replaces the current instant.
//!   2. Expired light signals are cleared.
//!   3. Tick completes.
//!
//! RULES:
//!   - Every displayed value is derived from (instant, catalogs, view flags)
//!     at snapshot time. Nothing derived is cached between ticks.
//!   - Commands never fail. Bad input degrades to an event and no change.
//!   - The clock timer is held only inside run_ticks() and released on exit.

use crate::{
    age::{AgePanel, DerivedAgeResult},
    clock::{ClockDriver, ObservationInstant},
    command::ViewCommand,
    config::OrreryConfig,
    error::OrreryResult,
    event::OrreryEvent,
    light_time::{light_report, SIGNAL_DURATION},
    snapshot::{render_globe, render_planets, OrrerySnapshot},
    types::{BodyId, Tick},
};

#[derive(Debug, Clone, PartialEq)]
struct ActiveSignal {
    from:  BodyId,
    until: ObservationInstant,
}

/// Hover, selection, age results and the in-flight light signal.
#[derive(Debug, Clone, Default)]
struct ViewState {
    selected: Option<BodyId>,
    hovered:  Option<String>,
    ages:     AgePanel,
    signal:   Option<ActiveSignal>,
}

impl ViewState {
    fn on_tick(&mut self, tick: Tick, instant: ObservationInstant) -> Vec<OrreryEvent> {
        let mut events = vec![OrreryEvent::TickStarted { tick, instant }];

        let expired = self.signal.as_ref().is_some_and(|s| instant >= s.until);
        if expired {
            if let Some(signal) = self.signal.take() {
                log::debug!("tick={tick} light signal from {} completed", signal.from);
                events.push(OrreryEvent::SignalCompleted { tick, from: signal.from });
            }
        }

        events.push(OrreryEvent::TickCompleted { tick });
        events
    }
}

pub struct Orrery {
    pub clock: ClockDriver,
    config:    OrreryConfig,
    view:      ViewState,
}

impl Orrery {
    pub fn new(config: OrreryConfig, clock: ClockDriver) -> Self {
        Self {
            clock,
            config,
            view: ViewState::default(),
        }
    }

    /// Engine on the real wall clock at the configured cadence.
    pub fn build(config: OrreryConfig) -> Self {
        let clock = ClockDriver::system().with_interval(config.tick_interval);
        Self::new(config, clock)
    }

    /// Built-in catalogs on a manual clock starting at `start` (RFC 3339).
    pub fn build_test(start: &str) -> OrreryResult<Self> {
        let config = OrreryConfig::builtin()?;
        let clock = ClockDriver::manual(ObservationInstant::parse(start)?)
            .with_interval(config.tick_interval);
        Ok(Self::new(config, clock))
    }

    pub fn config(&self) -> &OrreryConfig { &self.config }
    pub fn instant(&self) -> ObservationInstant { self.clock.current() }
    pub fn selected(&self) -> Option<&str> { self.view.selected.as_deref() }
    pub fn hovered(&self) -> Option<&str> { self.view.hovered.as_deref() }
    pub fn age_results(&self) -> &[DerivedAgeResult] { self.view.ages.results() }
    pub fn is_transmitting(&self) -> bool { self.view.signal.is_some() }

    /// Re-read the clock once, without waiting out an interval.
    pub fn tick(&mut self) -> Vec<OrreryEvent> {
        let tick = self.clock.tick();
        self.view.on_tick(tick, self.clock.current())
    }

    /// Hold the clock timer for `n` intervals. The timer is released
    /// when this returns.
    pub fn run_ticks(&mut self, n: u64) -> Vec<OrreryEvent> {
        let Orrery { clock, view, .. } = self;
        let mut timer = clock.start();
        let mut events = Vec::new();
        for _ in 0..n {
            let (tick, instant) = timer.next_tick();
            events.extend(view.on_tick(tick, instant));
        }
        events
    }

    /// Apply one command from the display surface.
    pub fn apply(&mut self, command: ViewCommand) -> Vec<OrreryEvent> {
        let tick = self.clock.current_tick;
        let kind = command.kind();
        log::debug!("tick={tick} command: {kind}");

        let events = match command {
            ViewCommand::SelectBody { id } => self.select_body(tick, id),
            ViewCommand::ClearSelection => match self.view.selected.take() {
                Some(_) => vec![OrreryEvent::SelectionCleared { tick }],
                None    => vec![ignored(tick, kind, "nothing selected")],
            },
            ViewCommand::HoverMarker { city } => {
                if self.config.catalog.marker(&city).is_none() {
                    log::warn!("hover on unknown marker {city:?} ignored");
                    vec![ignored(tick, kind, &format!("unknown marker '{city}'"))]
                } else {
                    self.view.hovered = Some(city.clone());
                    vec![OrreryEvent::MarkerHovered { tick, city }]
                }
            }
            ViewCommand::ClearHover => match self.view.hovered.take() {
                Some(_) => vec![OrreryEvent::HoverCleared { tick }],
                None    => vec![ignored(tick, kind, "nothing hovered")],
            },
            ViewCommand::SubmitAge { input } => self.submit_age(tick, input),
            ViewCommand::SendSignal => self.send_signal(tick),
        };

        for event in &events {
            log::debug!("tick={tick} event: {}", event.type_name());
        }
        events
    }

    pub fn snapshot(&self) -> OrreryResult<OrrerySnapshot> {
        let instant = self.clock.current();
        let catalog = &self.config.catalog;
        Ok(OrrerySnapshot {
            tick: self.clock.current_tick,
            instant,
            globe: render_globe(catalog, instant, self.hovered()),
            planets: render_planets(catalog, &self.config.reference_body, instant, self.selected()),
            ages: self.view.ages.results().to_vec(),
            light: light_report(catalog, &self.config.light_times, self.selected())?,
            transmitting: self.is_transmitting(),
        })
    }

    fn select_body(&mut self, tick: Tick, id: BodyId) -> Vec<OrreryEvent> {
        if self.config.catalog.body(&id).is_none() {
            log::warn!("selection of unknown body {id:?} ignored");
            return vec![ignored(tick, "select_body", &format!("unknown body '{id}'"))];
        }
        if self.view.selected.as_deref() == Some(id.as_str()) {
            self.view.selected = None;
            return vec![OrreryEvent::SelectionCleared { tick }];
        }
        self.view.selected = Some(id.clone());
        vec![OrreryEvent::BodySelected { tick, id }]
    }

    fn submit_age(&mut self, tick: Tick, input: String) -> Vec<OrreryEvent> {
        match self.view.ages.submit(&self.config.catalog, &input) {
            Ok((earth_age_years, results)) => {
                let result_count = results.len();
                vec![OrreryEvent::AgesCalculated { tick, earth_age_years, result_count }]
            }
            Err(e) => {
                log::warn!("{e}");
                vec![OrreryEvent::AgeInputRejected { tick, input }]
            }
        }
    }

    fn send_signal(&mut self, tick: Tick) -> Vec<OrreryEvent> {
        let Some(from) = self.view.selected.clone() else {
            return vec![ignored(tick, "send_signal", "no body selected")];
        };
        if self.view.signal.is_some() {
            return vec![ignored(tick, "send_signal", "signal already in flight")];
        }
        let until = self.clock.current().after(SIGNAL_DURATION);
        self.view.signal = Some(ActiveSignal { from: from.clone(), until });
        vec![OrreryEvent::SignalSent { tick, from, until }]
    }
}

fn ignored(tick: Tick, command_type: &str, reason: &str) -> OrreryEvent {
    OrreryEvent::CommandIgnored {
        tick,
        command_type: command_type.to_string(),
        reason:       reason.to_string(),
    }
}
